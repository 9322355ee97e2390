//! A single-player console blackjack game against a scripted dealer.
//!
//! The crate provides a [`Game`] type that runs one round at a time through
//! betting, dealing, the player's turn, the dealer's turn, and payout, and a
//! [`Session`] that drives a game over any text input and output.
//!
//! # Example
//!
//! ```
//! use blackjack_table::{Game, GameOptions, GameState};
//!
//! let mut game = Game::new(GameOptions::default(), "Avery", 42);
//! game.place_bet(10).unwrap();
//! game.deal().unwrap();
//! assert_eq!(game.pot(), 20);
//! assert!(matches!(game.state(), GameState::PlayerTurn));
//! ```

pub mod card;
pub mod console;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod participant;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use console::{PlayerMove, Session};
pub use deck::Deck;
pub use error::{
    ActionError, BetError, DealError, ParseOptionError, RoundError, SessionError, ShowdownError,
};
pub use game::{Game, GameState, Turn};
pub use hand::{BLACKJACK, Hand};
pub use options::{AceRule, GameOptions, TieRule};
pub use participant::{Dealer, HandHolder, Player};
pub use result::{RoundOutcome, RoundResult};
