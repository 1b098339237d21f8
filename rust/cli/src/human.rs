//! The human seat: a [`DecisionProvider`] over an input stream and a shared
//! output stream. Renders the acting view, prompts, and re-prompts until the
//! input parses. Quitting (or EOF) folds the current hand and raises a flag
//! the session loop checks between hands.

use std::io::{BufRead, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use felt_engine::action::Decision;
use felt_engine::cards::Card;
use felt_engine::provider::{DecisionProvider, ProviderError};
use felt_engine::table::TableView;

use crate::formatters::{format_card, format_table};
use crate::io_utils::read_stdin_line;
use crate::validation::{parse_player_action, ParseResult};

pub struct HumanProvider<R, W> {
    input: R,
    output: W,
    quit: Arc<AtomicBool>,
}

impl<R, W> HumanProvider<R, W> {
    pub fn new(input: R, output: W, quit: Arc<AtomicBool>) -> Self {
        Self {
            input,
            output,
            quit,
        }
    }
}

#[async_trait]
impl<R, W> DecisionProvider for HumanProvider<R, W>
where
    R: BufRead + Send + Sync,
    W: Write + Send + Sync,
{
    async fn decide(
        &mut self,
        view: &TableView,
        seat: usize,
        hole: [Card; 2],
    ) -> Result<Decision, ProviderError> {
        let io_err = |e: std::io::Error| ProviderError::Transport(e.to_string());

        writeln!(self.output, "\n{}", format_table(view)).map_err(io_err)?;
        writeln!(
            self.output,
            "Your cards: {} {}",
            format_card(&hole[0]),
            format_card(&hole[1]),
        )
        .map_err(io_err)?;

        let to_call = view
            .current_bet
            .saturating_sub(view.seats[seat].round_bet);
        loop {
            write!(
                self.output,
                "Enter action (check/call/raise <amount>/fold/q) [to call: {}]: ",
                to_call,
            )
            .map_err(io_err)?;
            self.output.flush().map_err(io_err)?;

            let Some(line) = read_stdin_line(&mut self.input) else {
                // EOF quits the session; fold out of the current hand.
                self.quit.store(true, Ordering::SeqCst);
                return Ok(Decision::fold());
            };
            match parse_player_action(&line) {
                ParseResult::Action(decision) => return Ok(decision),
                ParseResult::Quit => {
                    self.quit.store(true, Ordering::SeqCst);
                    return Ok(Decision::fold());
                }
                ParseResult::Invalid(msg) => {
                    writeln!(self.output, "Error: {}", msg).map_err(io_err)?;
                }
            }
        }
    }

    fn name(&self) -> &str {
        "Human"
    }
}
