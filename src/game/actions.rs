use log::debug;

use crate::card::Card;
use crate::error::ActionError;
use crate::participant::HandHolder;
use crate::result::RoundOutcome;

use super::{Game, GameState, Turn};

impl Game {
    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if self.state != GameState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }
        Ok(())
    }

    /// Ends the round if the player's hand is bust or exactly 21.
    ///
    /// Returns whether the round was decided.
    fn check_player_hand(&mut self) -> bool {
        if self.check_hand_for_bust(self.player.hand()) {
            self.finish(RoundOutcome::PlayerBust);
            true
        } else if self.player.hand().is_twenty_one() {
            self.finish(RoundOutcome::PlayerTwentyOne);
            true
        } else {
            false
        }
    }

    /// Player action: Hit (draw a card).
    ///
    /// If the new card busts the hand the dealer wins; if it brings the hand
    /// to exactly 21 the player wins. Either way the game moves to
    /// [`GameState::Settled`].
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the deck is empty.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        self.ensure_player_turn()?;

        let card = self.draw().map_err(|_| ActionError::NoCards)?;
        self.player.take_card(card);
        debug!(
            "{} hit {card}, total {}",
            self.player.name(),
            self.player.hand().value()
        );

        self.check_player_hand();

        Ok(card)
    }

    /// Player action: Stay (keep the current hand).
    ///
    /// A hand of exactly 21 wins immediately. Otherwise the turn passes to
    /// the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn stay(&mut self) -> Result<(), ActionError> {
        self.ensure_player_turn()?;

        debug!(
            "{} stays on {}",
            self.player.name(),
            self.player.hand().value()
        );

        if !self.check_player_hand() {
            self.turn = Turn::Dealer;
            self.state = GameState::DealerTurn;
        }

        Ok(())
    }
}
