use thiserror::Error;

/// Errors surfaced by table operations.
///
/// Betting arithmetic never errors: under-sized raises and short stacks
/// degrade to calls per the table rules. What remains is resource
/// exhaustion and orchestration misuse.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// The deck ran out of cards mid-deal. Recoverable; does not occur
    /// under correct dealing counts.
    #[error("deck is out of cards")]
    DeckEmpty,
    /// A seat was dealt a third hole card.
    #[error("seat {0} already holds two cards")]
    HoleCardsFull(usize),
    /// Fewer than two live seats (or the human is busted): no hand can run.
    #[error("not enough live seats to start a hand")]
    NotEnoughPlayers,
    /// A table needs one decision provider per seat.
    #[error("expected {seats} providers, got {providers}")]
    ProviderCountMismatch { seats: usize, providers: usize },
}
