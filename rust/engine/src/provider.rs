use async_trait::async_trait;
use thiserror::Error;

use crate::action::Decision;
use crate::cards::Card;
use crate::table::TableView;

/// Failure modes of an external decision source. The betting state machine
/// never sees these: the orchestrator substitutes a plain call instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProviderError {
    #[error("decision transport failed: {0}")]
    Transport(String),
    #[error("malformed decision payload: {0}")]
    Malformed(String),
    #[error("decision timed out")]
    Timeout,
}

/// Source of one seat's actions: a human at a prompt, a scripted bot, or a
/// remote model behind a network call. The table suspends exactly one turn
/// at a time on this future, so implementations need no internal locking.
///
/// The view hides every other seat's hole cards; the acting seat's own
/// cards arrive separately in `hole`.
#[async_trait]
pub trait DecisionProvider: Send + Sync {
    async fn decide(
        &mut self,
        view: &TableView,
        seat: usize,
        hole: [Card; 2],
    ) -> Result<Decision, ProviderError>;

    fn name(&self) -> &str;
}
