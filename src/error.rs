//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur during betting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Invalid game state for betting.
    #[error("invalid game state for betting")]
    InvalidState,
    /// Bet amount is zero.
    #[error("bet amount is zero")]
    ZeroBet,
    /// Bet exceeds the player's chips.
    #[error("insufficient chips: bet {bet}, balance {chips}")]
    InsufficientFunds {
        /// Amount requested.
        bet: usize,
        /// Chips available.
        chips: usize,
    },
    /// The pot could not hold the bet.
    #[error("bet is over the table limit")]
    OverTableLimit,
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// Dealt from an empty deck.
    #[error("no cards left in the deck")]
    EmptyDeck,
    /// Not enough cards for the initial deal.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    NoCards,
}

/// Errors that can occur during the dealer's turn and settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShowdownError {
    /// Invalid game state for showdown.
    #[error("invalid game state for showdown")]
    InvalidState,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    NoCards,
}

/// Errors that can occur when starting a new round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// The current round has not been paid out yet.
    #[error("invalid game state for starting a new round")]
    InvalidState,
}

/// Errors from parsing option values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseOptionError {
    /// Unknown ace rule.
    #[error("unknown ace rule `{0}` (expected `greedy` or `soft`)")]
    AceRule(String),
    /// Unknown tie rule.
    #[error("unknown tie rule `{0}` (expected `dealer` or `push`)")]
    TieRule(String),
}

/// Errors that end a console session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Reading from or writing to the console failed.
    #[error("console i/o failed: {0}")]
    Io(#[from] std::io::Error),
    /// Input ended while waiting for an answer.
    #[error("input closed while waiting for an answer")]
    InputClosed,
    /// Betting failed.
    #[error(transparent)]
    Bet(#[from] BetError),
    /// Dealing failed.
    #[error(transparent)]
    Deal(#[from] DealError),
    /// A player action failed.
    #[error(transparent)]
    Action(#[from] ActionError),
    /// The dealer's turn or settlement failed.
    #[error(transparent)]
    Showdown(#[from] ShowdownError),
    /// Starting the next round failed.
    #[error(transparent)]
    Round(#[from] RoundError),
}
