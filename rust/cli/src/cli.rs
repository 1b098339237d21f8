//! Command-line argument definitions for the `felt` binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "felt",
    version,
    about = "Texas hold'em at the terminal: one human seat, computer opponents"
)]
pub struct FeltCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Play hands against computer opponents until you quit or bust
    Play {
        /// Number of computer opponents (1-8)
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=8))]
        bots: Option<u8>,
        /// Stop after this many hands (default: play until the game ends)
        #[arg(long)]
        hands: Option<u32>,
        /// Deck seed for reproducible sessions
        #[arg(long)]
        seed: Option<u64>,
        /// Starting stack for every seat
        #[arg(long)]
        stack: Option<u32>,
        /// Append hand-history records (JSONL) to this file
        #[arg(long)]
        log: Option<PathBuf>,
        /// Per-decision time limit for computer opponents, in milliseconds
        #[arg(long)]
        timeout_ms: Option<u64>,
    },
    /// Deal one hand face up for inspection
    Deal {
        /// Deck seed for deterministic dealing
        #[arg(long)]
        seed: Option<u64>,
        /// Number of seats to deal to (2-9)
        #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(2..=9))]
        seats: u8,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}
