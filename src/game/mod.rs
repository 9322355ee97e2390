//! Game engine and round state management.

use log::{debug, info};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::{DealError, RoundError};
use crate::hand::Hand;
use crate::options::{GameOptions, TieRule};
use crate::participant::{Dealer, HandHolder, Player};
use crate::result::RoundOutcome;

mod actions;
mod bet;
mod dealer;
pub mod state;

pub use state::{GameState, Turn};

/// A single-player blackjack game against a scripted dealer.
///
/// The game owns the deck, the dealer, the player, and the pot. One value is
/// created per session and driven through the round with `&mut self` calls:
/// [`place_bet`](Self::place_bet), [`deal`](Self::deal),
/// [`hit`](Self::hit) / [`stay`](Self::stay),
/// [`dealer_play`](Self::dealer_play), [`settle`](Self::settle), and then
/// either [`reset_round`](Self::reset_round) or [`cash_out`](Self::cash_out).
#[derive(Debug, Clone)]
pub struct Game {
    /// Game options.
    options: GameOptions,
    /// Deck for the current round.
    deck: Deck,
    /// The dealer.
    dealer: Dealer,
    /// The player.
    player: Player,
    /// Chips at stake this round.
    pot: usize,
    /// Whether the player won the current round.
    winner: bool,
    /// Whether the session is still running.
    playing: bool,
    /// Whose turn it is.
    turn: Turn,
    /// Current round state.
    state: GameState,
    /// How the current round ended, once known.
    outcome: Option<RoundOutcome>,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with the given player name and seed.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_table::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default(), "Avery", 42);
    /// assert_eq!(game.state(), GameState::AwaitingBet);
    /// assert_eq!(game.player().chips(), 100);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, player_name: impl Into<String>, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Self::create_deck(&mut rng);
        let dealer = Dealer::new(options.dealer_name.clone(), options.ace_rule);
        let player = Player::new(player_name, options.starting_chips, options.ace_rule);

        Self {
            options,
            deck,
            dealer,
            player,
            pot: 0,
            winner: false,
            playing: true,
            turn: Turn::Player,
            state: GameState::AwaitingBet,
            outcome: None,
            rng,
        }
    }

    /// Creates and shuffles a fresh deck.
    fn create_deck(rng: &mut ChaCha8Rng) -> Deck {
        let mut deck = Deck::new();
        deck.shuffle(rng);
        deck
    }

    /// Deals one card from the deck.
    fn draw(&mut self) -> Result<Card, DealError> {
        let card = self.deck.deal()?;
        debug!("dealt {card}, {} cards left", self.deck.len());
        Ok(card)
    }

    /// Records the round outcome and moves to [`GameState::Settled`].
    fn finish(&mut self, outcome: RoundOutcome) {
        info!(
            "round decided: {outcome:?} (player {}, dealer {})",
            self.player.hand().value(),
            self.dealer.hand().value()
        );
        self.winner = outcome.player_wins();
        self.outcome = Some(outcome);
        self.state = GameState::Settled;
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub const fn check_hand_for_bust(&self, hand: &Hand) -> bool {
        hand.is_bust()
    }

    /// Pays out the pot.
    ///
    /// If the player won, the whole pot is credited to the player. A push
    /// returns the player's half. The pot is zero afterwards in every case.
    /// Returns the amount credited.
    pub fn payout(&mut self) -> usize {
        let credited = if self.winner {
            self.pot
        } else if self.outcome == Some(RoundOutcome::Push) {
            self.pot / 2
        } else {
            0
        };

        self.player.collect_winnings(credited);
        self.pot = 0;
        credited
    }

    /// Clears both hands and the winner flag, returns the turn to the
    /// player, and brings a freshly shuffled deck for the next round.
    ///
    /// # Errors
    ///
    /// Returns an error if the current round has not been paid out.
    pub fn reset_round(&mut self) -> Result<(), RoundError> {
        if self.state != GameState::RoundOver {
            return Err(RoundError::InvalidState);
        }

        let rule = self.options.ace_rule;
        self.dealer.reset_hand(rule);
        self.player.reset_hand(rule);
        self.winner = false;
        self.outcome = None;
        self.turn = Turn::Player;
        self.deck = Self::create_deck(&mut self.rng);
        self.state = GameState::AwaitingBet;
        debug!("round reset");

        Ok(())
    }

    /// Ends the session.
    pub fn cash_out(&mut self) {
        info!(
            "{} cashed out with {} chips",
            self.player.name(),
            self.player.chips()
        );
        self.playing = false;
        self.state = GameState::Terminated;
    }

    /// Returns whether the player has chips left for another round.
    #[must_use]
    pub const fn can_play_again(&self) -> bool {
        self.player.chips() > 0
    }

    /// Returns the options the game was created with.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns whose turn it is.
    #[must_use]
    pub const fn turn(&self) -> Turn {
        self.turn
    }

    /// Returns the chips at stake this round.
    #[must_use]
    pub const fn pot(&self) -> usize {
        self.pot
    }

    /// Returns whether the player won the current round.
    #[must_use]
    pub const fn winner(&self) -> bool {
        self.winner
    }

    /// Returns whether the session is still running.
    #[must_use]
    pub const fn playing(&self) -> bool {
        self.playing
    }

    /// Returns how the current round ended, once known.
    #[must_use]
    pub const fn outcome(&self) -> Option<RoundOutcome> {
        self.outcome
    }

    /// Returns the tie rule in effect.
    #[must_use]
    pub const fn tie_rule(&self) -> TieRule {
        self.options.tie_rule
    }

    /// Returns the dealer.
    #[must_use]
    pub const fn dealer(&self) -> &Dealer {
        &self.dealer
    }

    /// Returns the player.
    #[must_use]
    pub const fn player(&self) -> &Player {
        &self.player
    }

    /// Returns the deck for the current round.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Replaces the deck for the current round.
    pub fn set_deck(&mut self, deck: Deck) {
        self.deck = deck;
    }
}
