//! Hand representation and ace bookkeeping.

use crate::card::Card;
use crate::options::AceRule;

/// Value above which a hand is bust.
pub const BLACKJACK: u8 = 21;

/// Cards held by the dealer or the player during a round.
///
/// The hand owns the ace bookkeeping: when an ace has to drop from 11 to 1,
/// the hand adjusts the arriving card before storing it, so the stored card
/// values always add up to [`Hand::value`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
    /// Running total.
    value: u8,
    /// Number of aces held.
    aces: u8,
    /// How aces are demoted.
    rule: AceRule,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new(rule: AceRule) -> Self {
        Self {
            cards: Vec::new(),
            value: 0,
            aces: 0,
            rule,
        }
    }

    /// Adds a card to the hand.
    ///
    /// Under [`AceRule::Greedy`] the only correction happens when an ace
    /// arrives and the total goes over 21: that ace counts as 1. Under
    /// [`AceRule::Soft`] any ace still counted as 11 is demoted, one at a
    /// time, while the total is over 21.
    pub fn hit(&mut self, mut card: Card) {
        self.value = self.value.saturating_add(card.value());

        if card.is_ace() {
            self.aces += 1;
            if self.value > BLACKJACK && card.value() == 11 {
                card.ace_adjustment();
                self.value -= 10;
            }
        }

        self.cards.push(card);

        if self.rule == AceRule::Soft {
            self.demote_soft_aces();
        }
    }

    fn demote_soft_aces(&mut self) {
        while self.value > BLACKJACK {
            let Some(ace) = self
                .cards
                .iter_mut()
                .find(|c| c.is_ace() && c.value() == 11)
            else {
                break;
            };
            ace.ace_adjustment();
            self.value -= 10;
        }
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the running total of the hand.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.value
    }

    /// Returns the number of aces held.
    #[must_use]
    pub const fn aces(&self) -> u8 {
        self.aces
    }

    /// Returns the number of aces still counted as 11.
    #[must_use]
    pub fn soft_aces(&self) -> usize {
        self.cards
            .iter()
            .filter(|c| c.is_ace() && c.value() == 11)
            .count()
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        self.soft_aces() > 0
    }

    /// Returns the ace rule this hand was created with.
    #[must_use]
    pub const fn rule(&self) -> AceRule {
        self.rule
    }

    /// Returns whether the hand is bust (over 21).
    #[must_use]
    pub const fn is_bust(&self) -> bool {
        self.value > BLACKJACK
    }

    /// Returns whether the hand totals exactly 21.
    #[must_use]
    pub const fn is_twenty_one(&self) -> bool {
        self.value == BLACKJACK
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Hand {
    fn default() -> Self {
        Self::new(AceRule::default())
    }
}
