use log::{debug, info};

use crate::card::Card;
use crate::error::ShowdownError;
use crate::options::TieRule;
use crate::participant::HandHolder;
use crate::result::{RoundOutcome, RoundResult};

use super::{Game, GameState};

impl Game {
    /// Dealer plays their hand.
    ///
    /// The dealer draws while behind the player and not bust. A dealer bust
    /// wins the round for the player; otherwise the dealer has caught up and
    /// wins, with equal totals decided by the [`TieRule`].
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the dealer's turn or the deck runs out
    /// while the dealer must draw.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, ShowdownError> {
        if self.state != GameState::DealerTurn {
            return Err(ShowdownError::InvalidState);
        }

        let target = self.player.hand().value();
        let mut drawn = Vec::new();

        while self.dealer.hand().value() < target && !self.dealer.hand().is_bust() {
            let card = self.draw().map_err(|_| ShowdownError::NoCards)?;
            self.dealer.take_card(card);
            debug!(
                "dealer draws {card}, total {}",
                self.dealer.hand().value()
            );
            drawn.push(card);
        }

        let dealer_value = self.dealer.hand().value();
        let outcome = if self.check_hand_for_bust(self.dealer.hand()) {
            RoundOutcome::DealerBust
        } else if dealer_value == target && self.options.tie_rule == TieRule::Push {
            RoundOutcome::Push
        } else {
            RoundOutcome::DealerWins
        };
        self.finish(outcome);

        Ok(drawn)
    }

    /// Pays out a decided round.
    ///
    /// # Errors
    ///
    /// Returns an error if the round outcome is not known yet.
    pub fn settle(&mut self) -> Result<RoundResult, ShowdownError> {
        if self.state != GameState::Settled {
            return Err(ShowdownError::InvalidState);
        }
        let outcome = self.outcome.ok_or(ShowdownError::InvalidState)?;

        let pot = self.pot;
        let payout = self.payout();
        self.state = GameState::RoundOver;

        let result = RoundResult {
            outcome,
            pot,
            payout,
            player_value: self.player.hand().value(),
            dealer_value: self.dealer.hand().value(),
            chips: self.player.chips(),
        };
        info!(
            "settled {outcome:?}: pot {pot}, paid {payout}, {} chips",
            result.chips
        );

        Ok(result)
    }
}
