//! The narrow interface between the engine and whatever draws the table.

use crate::card::Card;
use crate::engine::RoundState;
use crate::result::Outcome;

/// Something that can show the table after each transition.
pub trait Presenter {
    /// Shows both hands and the status line.
    fn render(&mut self, player: &[Card], dealer: &[Card], status: &str);
}

/// Which controls are enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Controls {
    /// Deal a new round.
    pub start: bool,
    /// Draw a card.
    pub hit: bool,
    /// Stop drawing.
    pub stand: bool,
}

impl Controls {
    /// Derives control availability from the round state.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::{Controls, RoundState};
    ///
    /// let controls = Controls::for_state(RoundState::PlayerTurn);
    /// assert!(!controls.start);
    /// assert!(controls.hit && controls.stand);
    /// ```
    #[must_use]
    pub const fn for_state(state: RoundState) -> Self {
        let turn = state.is_player_turn();
        Self {
            start: state.can_deal(),
            hit: turn,
            stand: turn,
        }
    }
}

/// Status line for the table.
///
/// `outcome` is only consulted once the round is resolved.
#[must_use]
pub const fn status_text(state: RoundState, outcome: Option<Outcome>) -> &'static str {
    match (state, outcome) {
        (RoundState::NotStarted, _) => "Press \"Start\" to begin.",
        (RoundState::PlayerTurn, _) => "Your turn",
        (RoundState::Resolved, Some(outcome)) => outcome_text(outcome),
        (RoundState::Resolved, None) => "",
    }
}

const fn outcome_text(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::PlayerBlackjack => "Blackjack! You win! :)",
        Outcome::PlayerBust => "Over 21, you lose. :(",
        Outcome::DealerBust | Outcome::PlayerWins => "You win!",
        Outcome::Draw => "Draw.",
        Outcome::DealerWins => "Dealer wins.",
    }
}
