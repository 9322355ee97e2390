//! Round result types.

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// The player went over 21.
    PlayerBust,
    /// The player reached exactly 21.
    PlayerTwentyOne,
    /// The dealer went over 21 while drawing.
    DealerBust,
    /// The dealer caught up with or passed the player.
    DealerWins,
    /// Equal totals under [`TieRule::Push`](crate::TieRule::Push).
    Push,
}

impl RoundOutcome {
    /// Returns whether the player takes the pot.
    #[must_use]
    pub const fn player_wins(self) -> bool {
        matches!(self, Self::PlayerTwentyOne | Self::DealerBust)
    }
}

/// Result of a settled round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// How the round ended.
    pub outcome: RoundOutcome,
    /// Pot at settlement time.
    pub pot: usize,
    /// Chips credited to the player.
    pub payout: usize,
    /// The player's final hand value.
    pub player_value: u8,
    /// The dealer's final hand value.
    pub dealer_value: u8,
    /// The player's chips after the payout.
    pub chips: usize,
}
