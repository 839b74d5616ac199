//! Round outcome types.

use core::fmt;

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The player reached exactly 21.
    PlayerBlackjack,
    /// The player went over 21.
    PlayerBust,
    /// The dealer went over 21 after the player stood.
    DealerBust,
    /// The player stood on a higher total than the dealer.
    PlayerWins,
    /// Both totals are equal.
    Draw,
    /// The dealer finished on a higher total.
    DealerWins,
}

impl Outcome {
    /// Returns whether the player won the round.
    #[must_use]
    pub const fn player_won(self) -> bool {
        matches!(
            self,
            Self::PlayerBlackjack | Self::DealerBust | Self::PlayerWins
        )
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::PlayerBlackjack => "player blackjack",
            Self::PlayerBust => "player bust, dealer wins",
            Self::DealerBust | Self::PlayerWins => "player wins",
            Self::Draw => "draw",
            Self::DealerWins => "dealer wins",
        })
    }
}

/// Result of a resolved round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// How the round ended.
    pub outcome: Outcome,
    /// The player's final hand value.
    pub player_value: u16,
    /// The dealer's final hand value.
    pub dealer_value: u16,
}

impl RoundResult {
    /// Returns whether the dealer busted.
    #[must_use]
    pub const fn dealer_bust(&self) -> bool {
        matches!(self.outcome, Outcome::DealerBust)
    }
}
