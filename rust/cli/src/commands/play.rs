//! Play command handler: an interactive session at a multi-seat table.
//!
//! Seat 0 is the human; the remaining seats are baseline opponents wrapped
//! so that a slow or failing opponent degrades to a call instead of hanging
//! the hand. Hands run until the requested count, the human quits, or the
//! game ends (the human busts or fewer than two seats survive).

use std::io::{BufRead, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use felt_ai::{BaselineProvider, Deadline, Guarded};
use felt_engine::logger::HandLogger;
use felt_engine::orchestrator::HandOrchestrator;
use felt_engine::provider::DecisionProvider;
use felt_engine::seat::Seat;
use felt_engine::table::TableView;
use tracing::info;

use crate::config;
use crate::error::CliError;
use crate::formatters::format_table;
use crate::human::HumanProvider;
use crate::ui;

/// Options for one play session. `None` fields fall back to configuration.
#[derive(Debug, Default)]
pub struct PlayOpts {
    pub bots: Option<u8>,
    pub hands: Option<u32>,
    pub seed: Option<u64>,
    pub stack: Option<u32>,
    pub log: Option<std::path::PathBuf>,
    pub timeout_ms: Option<u64>,
}

/// Handle the play command: interactive hands at the table.
///
/// The output stream is cloneable because the session loop, the table
/// observer, and the human prompt all write to it; every clone goes through
/// one lock (see [`crate::io_utils::SharedWriter`]).
pub fn handle_play_command<R, W>(
    opts: PlayOpts,
    input: R,
    out: W,
    err: &mut dyn Write,
) -> Result<(), CliError>
where
    R: BufRead + Send + Sync + 'static,
    W: Write + Send + Sync + Clone + 'static,
{
    if opts.hands == Some(0) {
        ui::write_error(err, "hands must be >= 1")?;
        return Err(CliError::InvalidInput("hands must be >= 1".to_string()));
    }

    let cfg = config::load().map_err(|e| CliError::Config(e.to_string()))?;
    let bots = opts.bots.unwrap_or(cfg.bots);
    let stack = opts.stack.unwrap_or(cfg.starting_stack);
    let seed = opts.seed.or(cfg.seed).unwrap_or_else(rand::random);
    let timeout = Duration::from_millis(opts.timeout_ms.unwrap_or(cfg.decision_timeout_ms));
    info!(bots, stack, seed, timeout_ms = timeout.as_millis() as u64, "session starting");

    let mut session_out = out.clone();
    writeln!(
        session_out,
        "play: bots={} stack={} blinds={}/{} seed={}",
        bots, stack, cfg.small_blind, cfg.big_blind, seed,
    )?;

    let quit = Arc::new(AtomicBool::new(false));
    let mut seats = vec![Seat::new("You", stack, true)];
    let mut providers: Vec<Box<dyn DecisionProvider>> = vec![Box::new(HumanProvider::new(
        input,
        out.clone(),
        Arc::clone(&quit),
    ))];
    for i in 1..=bots {
        seats.push(Seat::new(format!("Bot {}", i), stack, false));
        providers.push(Box::new(Guarded::new(Deadline::new(
            BaselineProvider::new(),
            timeout,
        ))));
    }

    let mut orch = HandOrchestrator::new(seats, providers, cfg.small_blind, cfg.big_blind, seed)?;
    if let Some(path) = &opts.log {
        orch.set_logger(HandLogger::create(path)?);
    }

    // Between-action snapshots are rendered by the human provider when it is
    // asked to act; the observer covers the moments nobody is acting (deals,
    // round ends, showdown).
    let mut obs_out = out.clone();
    orch.set_observer(Box::new(move |view: &TableView| {
        if view.acting.is_none() {
            let _ = writeln!(obs_out, "\n{}", format_table(view));
        }
    }));

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;
    let mut played = 0u32;
    runtime.block_on(async {
        let mut hand_no = 1u32;
        loop {
            if quit.load(Ordering::SeqCst) || orch.is_game_over() {
                break;
            }
            if let Some(limit) = opts.hands {
                if hand_no > limit {
                    break;
                }
            }

            writeln!(session_out, "\n=== Hand {} ===", hand_no)?;
            let summary = orch.play_hand().await?;
            for &(seat, amount) in &summary.payouts {
                writeln!(
                    session_out,
                    "{} wins {} chips",
                    orch.table().seat(seat).name(),
                    amount,
                )?;
            }
            played += 1;
            hand_no += 1;
        }
        Ok::<(), CliError>(())
    })?;

    if quit.load(Ordering::SeqCst) {
        writeln!(session_out, "\nLeaving the table.")?;
    } else if let Some(human) = orch.human_seat() {
        if orch.table().seat(human).busted() {
            writeln!(session_out, "\nYou are out of chips.")?;
        } else if orch.is_game_over() {
            writeln!(session_out, "\nYou cleaned out the table.")?;
        }
    }
    writeln!(session_out, "Hands played: {}", played)?;
    info!(played, "session over");
    Ok(())
}
