//! Game state types.

/// Round state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Waiting for the player's bet.
    AwaitingBet,
    /// Bet placed, initial cards not dealt yet.
    Dealing,
    /// Waiting for the player to hit or stay.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// The outcome is known and the pot is waiting to be paid.
    Settled,
    /// The pot has been paid out.
    RoundOver,
    /// The player has left the table.
    Terminated,
}

/// Whose turn it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Turn {
    /// The player acts.
    #[default]
    Player,
    /// The dealer acts.
    Dealer,
}
