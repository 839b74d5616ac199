use crate::card::Card;
use crate::error::ActionError;
use crate::hand::BLACKJACK;
use crate::result::Outcome;

use super::{RoundEngine, RoundState};

impl RoundEngine {
    pub(super) fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if self.state.is_player_turn() {
            Ok(())
        } else {
            Err(ActionError::InvalidState)
        }
    }

    /// Player action: Hit (draw a card).
    ///
    /// Reaching exactly 21 wins the round on the spot; going over 21 loses it.
    /// Returns the card drawn.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InvalidState`] outside the player's turn and
    /// [`ActionError::NoCards`] if the deck is empty. Neither mutates the
    /// round.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        self.ensure_player_turn()?;

        let card = self.draw().ok_or(ActionError::NoCards)?;
        self.player.add_card(card);

        let value = self.player.value();
        if value == BLACKJACK {
            self.resolve(Outcome::PlayerBlackjack);
        } else if value > BLACKJACK {
            self.resolve(Outcome::PlayerBust);
        }

        debug_assert!(self.state != RoundState::PlayerTurn || value < BLACKJACK);
        Ok(card)
    }
}
