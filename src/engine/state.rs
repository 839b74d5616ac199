//! Round state types.

/// Where the current round stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RoundState {
    /// No round has been dealt yet.
    #[default]
    NotStarted,
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// The round is over; only a new deal is possible.
    Resolved,
}

impl RoundState {
    /// Returns whether a new round may be dealt.
    #[must_use]
    pub const fn can_deal(self) -> bool {
        matches!(self, Self::NotStarted | Self::Resolved)
    }

    /// Returns whether the player may hit or stand.
    #[must_use]
    pub const fn is_player_turn(self) -> bool {
        matches!(self, Self::PlayerTurn)
    }
}
