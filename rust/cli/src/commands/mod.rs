//! Command handler modules for the felt CLI.
//!
//! One module per subcommand, each exposing a single
//! `handle_COMMAND_command` function. Output streams are injected as
//! parameters so every handler is testable without a terminal, and all
//! errors propagate through [`crate::error::CliError`].

mod cfg;
mod deal;
mod play;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use play::{handle_play_command, PlayOpts};
