//! Error types for round operations.

use thiserror::Error;

/// Errors that can occur when dealing a new round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// The supplied deck cannot cover the opening deal.
    #[error("not enough cards in the deck for the opening deal")]
    NotEnoughCards,
}

/// Errors that can occur during player actions.
///
/// An action that fails leaves the round exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The round is not waiting on the player.
    #[error("invalid round state for this action")]
    InvalidState,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    NoCards,
}
