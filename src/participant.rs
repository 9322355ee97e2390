//! The dealer and the player.

use crate::card::Card;
use crate::error::BetError;
use crate::hand::Hand;
use crate::options::AceRule;

/// Anything seated at the table holding a hand.
pub trait HandHolder {
    /// Returns the display name.
    fn name(&self) -> &str;

    /// Returns the current hand.
    fn hand(&self) -> &Hand;

    /// Returns the current hand mutably.
    fn hand_mut(&mut self) -> &mut Hand;

    /// Adds a card to the hand.
    fn take_card(&mut self, card: Card) {
        self.hand_mut().hit(card);
    }

    /// Replaces the hand with an empty one.
    fn reset_hand(&mut self, rule: AceRule) {
        *self.hand_mut() = Hand::new(rule);
    }
}

/// The scripted dealer.
#[derive(Debug, Clone)]
pub struct Dealer {
    name: String,
    hand: Hand,
}

impl Dealer {
    /// Creates a dealer with an empty hand.
    #[must_use]
    pub fn new(name: impl Into<String>, rule: AceRule) -> Self {
        Self {
            name: name.into(),
            hand: Hand::new(rule),
        }
    }

    /// Cards shown to the player: everything but the first card.
    #[must_use]
    pub fn visible_cards(&self) -> &[Card] {
        self.hand.cards().get(1..).unwrap_or_default()
    }
}

impl HandHolder for Dealer {
    fn name(&self) -> &str {
        &self.name
    }

    fn hand(&self) -> &Hand {
        &self.hand
    }

    fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }
}

/// The player, holding a hand and a chip balance.
#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    hand: Hand,
    chips: usize,
}

impl Player {
    /// Creates a player with an empty hand.
    #[must_use]
    pub fn new(name: impl Into<String>, chips: usize, rule: AceRule) -> Self {
        Self {
            name: name.into(),
            hand: Hand::new(rule),
            chips,
        }
    }

    /// Returns the chip balance.
    #[must_use]
    pub const fn chips(&self) -> usize {
        self.chips
    }

    /// Removes `amount` chips for a bet.
    ///
    /// # Errors
    ///
    /// Returns an error if the amount is zero or above the balance.
    pub const fn stake(&mut self, amount: usize) -> Result<(), BetError> {
        if amount == 0 {
            return Err(BetError::ZeroBet);
        }
        if amount > self.chips {
            return Err(BetError::InsufficientFunds {
                bet: amount,
                chips: self.chips,
            });
        }
        self.chips -= amount;
        Ok(())
    }

    /// Adds winnings to the balance, saturating at `usize::MAX`.
    pub const fn collect_winnings(&mut self, amount: usize) {
        self.chips = self.chips.saturating_add(amount);
    }
}

impl HandHolder for Player {
    fn name(&self) -> &str {
        &self.name
    }

    fn hand(&self) -> &Hand {
        &self.hand
    }

    fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }
}
