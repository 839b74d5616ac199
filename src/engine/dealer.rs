use crate::error::ActionError;
use crate::hand::BLACKJACK;
use crate::result::{Outcome, RoundResult};

use super::RoundEngine;

/// Compares final totals once the dealer has finished drawing.
const fn settle(player: u16, dealer: u16) -> Outcome {
    if dealer > BLACKJACK {
        Outcome::DealerBust
    } else if player > dealer {
        Outcome::PlayerWins
    } else if player == dealer {
        Outcome::Draw
    } else {
        Outcome::DealerWins
    }
}

impl RoundEngine {
    /// Player action: Stand, then play out the dealer's hand.
    ///
    /// The dealer draws while their total is below
    /// [`RoundOptions::dealer_stands_on`](crate::RoundOptions::dealer_stands_on),
    /// with no soft-17 distinction. The round is then settled and resolved.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InvalidState`] outside the player's turn, leaving
    /// the round untouched, and [`ActionError::NoCards`] if the deck runs out
    /// while the dealer must draw.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::{Card, Deck, Outcome, Rank, RoundEngine, RoundOptions, Suit};
    ///
    /// let mut engine = RoundEngine::new(RoundOptions::default(), 1);
    /// let deck = Deck::stacked(&[
    ///     Card::new(Rank::Ten, Suit::Hearts),  // player
    ///     Card::new(Rank::Nine, Suit::Clubs),  // player
    ///     Card::new(Rank::Ten, Suit::Spades),  // dealer
    ///     Card::new(Rank::Seven, Suit::Clubs), // dealer draw
    /// ]);
    /// engine.start_round_with(deck).unwrap();
    ///
    /// let result = engine.stand().unwrap();
    /// assert_eq!(result.outcome, Outcome::PlayerWins);
    /// assert_eq!(result.dealer_value, 17);
    /// ```
    pub fn stand(&mut self) -> Result<RoundResult, ActionError> {
        self.ensure_player_turn()?;

        // Draw into copies so a dry deck leaves the round as it was.
        let stands_on = u16::from(self.options.dealer_stands_on);
        let mut deck = self.deck.clone();
        let mut dealer = self.dealer.clone();
        while dealer.value() < stands_on {
            let card = deck.draw().ok_or(ActionError::NoCards)?;
            log::trace!("dealer drew {card}, {} left", deck.len());
            dealer.add_card(card);
        }
        self.deck = deck;
        self.dealer = dealer;

        let outcome = settle(self.player.value(), self.dealer.value());
        Ok(self.resolve(outcome))
    }
}
