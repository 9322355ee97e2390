use log::{debug, info};

use crate::error::{BetError, DealError};
use crate::participant::HandHolder;

use super::{Game, GameState, Turn};

/// Cards needed for the initial deal.
const INITIAL_CARDS: usize = 4;

impl Game {
    /// Places the player's bet.
    ///
    /// The bet is taken from the player's chips and the dealer matches it,
    /// so the pot grows by twice the amount.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not waiting for a bet, the bet is
    /// zero, the player lacks the chips, or the matched bet overflows the pot.
    pub fn place_bet(&mut self, amount: usize) -> Result<(), BetError> {
        if self.state != GameState::AwaitingBet {
            return Err(BetError::InvalidState);
        }

        let pot = amount
            .checked_mul(2)
            .and_then(|matched| self.pot.checked_add(matched))
            .ok_or(BetError::OverTableLimit)?;

        self.player.stake(amount)?;
        self.pot = pot;
        self.state = GameState::Dealing;
        info!(
            "{} bet {amount}, pot {}, {} chips left",
            self.player.name(),
            self.pot,
            self.player.chips()
        );

        Ok(())
    }

    /// Deals two cards each, alternating dealer then player.
    ///
    /// # Errors
    ///
    /// Returns an error if no bet has been placed or there are not enough
    /// cards in the deck.
    pub fn deal(&mut self) -> Result<(), DealError> {
        if self.state != GameState::Dealing {
            return Err(DealError::InvalidState);
        }

        if self.deck.len() < INITIAL_CARDS {
            return Err(DealError::NotEnoughCards);
        }

        for _ in 0..2 {
            let card = self.draw()?;
            self.dealer.take_card(card);
            let card = self.draw()?;
            self.player.take_card(card);
        }

        self.turn = Turn::Player;
        self.state = GameState::PlayerTurn;
        debug!(
            "initial deal done: player {}, dealer {}",
            self.player.hand().value(),
            self.dealer.hand().value()
        );

        Ok(())
    }
}
