//! The 52-card deck dealt from during a round.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DealError;

/// An ordered deck of cards. Cards are dealt from the end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a full, unshuffled deck: one card per (suit, rank), suit-major.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }

        Self { cards }
    }

    /// Creates a deck holding exactly the given cards.
    ///
    /// The last card of `cards` is dealt first.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Shuffles the deck in place.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Removes and returns the last card.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::EmptyDeck`] if no cards are left.
    pub fn deal(&mut self) -> Result<Card, DealError> {
        self.cards.pop().ok_or(DealError::EmptyDeck)
    }

    /// Returns the cards still in the deck, in dealing order reversed.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns whether a card with the same suit and rank is still in the deck.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards
            .iter()
            .any(|c| c.suit() == card.suit() && c.rank() == card.rank())
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
