//! Text console front end.
//!
//! [`Session`] drives a [`Game`] through prompt, validate and retry loops over
//! any [`BufRead`] input and [`Write`] output. Invalid answers are reported
//! and asked again; only I/O failures and closed input end the session
//! early.

use std::io::{BufRead, Write};
use std::thread;
use std::time::Duration;

use log::debug;

use crate::card::Card;
use crate::error::{BetError, SessionError};
use crate::game::{Game, GameState};
use crate::options::GameOptions;
use crate::participant::HandHolder;
use crate::result::{RoundOutcome, RoundResult};

/// A move during the player's turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerMove {
    /// Take another card.
    Hit,
    /// Keep the current hand.
    Stay,
}

impl PlayerMove {
    /// Parses `hit` or `stay`, ignoring case and surrounding whitespace.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "hit" => Some(Self::Hit),
            "stay" => Some(Self::Stay),
            _ => None,
        }
    }
}

/// A console session at the table.
pub struct Session<R, W> {
    input: R,
    output: W,
    delay: Duration,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session reading answers from `input` and writing to `output`.
    pub const fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            delay: Duration::ZERO,
        }
    }

    /// Sets the pause between phases of a round.
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Consumes the session and returns the output.
    pub fn into_output(self) -> W {
        self.output
    }

    fn pause(&self) {
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
    }

    fn prompt_line(&mut self, prompt: &str) -> Result<String, SessionError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(SessionError::InputClosed);
        }
        Ok(line.trim().to_owned())
    }

    /// Greets the player, asks for their name and seats them at a new game.
    ///
    /// # Errors
    ///
    /// Returns an error if the console fails or input ends.
    pub fn seat(&mut self, options: GameOptions, seed: u64) -> Result<Game, SessionError> {
        writeln!(self.output, "Welcome to the Blackjack Table!")?;
        writeln!(
            self.output,
            "My name is {} and I will be your dealer for today!",
            options.dealer_name
        )?;
        self.pause();

        let name = self.prompt_line("May I get your name? ")?;
        let game = Game::new(options, name, seed);
        writeln!(
            self.output,
            "Thank you, {}. I will start you off with {} chips. Let's get started!",
            game.player().name(),
            game.player().chips()
        )?;

        Ok(game)
    }

    /// Plays rounds until the player cashes out or runs out of chips.
    ///
    /// # Errors
    ///
    /// Returns an error if the console fails, input ends, or the game
    /// reaches an invalid state.
    pub fn play(&mut self, game: &mut Game) -> Result<(), SessionError> {
        loop {
            if !game.can_play_again() {
                writeln!(
                    self.output,
                    "\nI am sorry, you do not have enough chips to play again."
                )?;
                break;
            }

            self.play_round(game)?;

            if game.can_play_again() && !self.ask_play_again()? {
                break;
            }
            game.reset_round()?;
        }

        game.cash_out();
        writeln!(
            self.output,
            "{} has cashed out with {} chips! Have a great day!",
            game.player().name(),
            game.player().chips()
        )?;

        Ok(())
    }

    /// Plays a single round from the bet to the payout.
    ///
    /// # Errors
    ///
    /// Returns an error if the console fails, input ends, or the game is not
    /// waiting for a bet.
    pub fn play_round(&mut self, game: &mut Game) -> Result<RoundResult, SessionError> {
        writeln!(self.output, "Shuffling cards...")?;
        self.pause();
        writeln!(self.output, "Cards have been shuffled")?;

        self.take_bet(game)?;

        writeln!(self.output, "Dealing Cards...")?;
        self.pause();
        game.deal()?;
        self.show_table(game)?;
        self.pause();

        while game.state() == GameState::PlayerTurn {
            writeln!(
                self.output,
                "\nYour current hand has a value of {}",
                game.player().hand().value()
            )?;
            match self.ask_move()? {
                PlayerMove::Hit => {
                    let card = game.hit()?;
                    writeln!(
                        self.output,
                        "\n{}, has been dealt {card} bringing their total to {}.",
                        game.player().name(),
                        game.player().hand().value()
                    )?;
                }
                PlayerMove::Stay => {
                    game.stay()?;
                    writeln!(
                        self.output,
                        "\n{}, has decided to stay with a hand value of {}.",
                        game.player().name(),
                        game.player().hand().value()
                    )?;
                }
            }
        }

        if game.state() == GameState::DealerTurn {
            let drawn = game.dealer_play()?;
            self.show_dealer_turn(game, &drawn)?;
        }

        let result = game.settle()?;
        self.announce(game, &result)?;

        Ok(result)
    }

    fn take_bet(&mut self, game: &mut Game) -> Result<(), SessionError> {
        writeln!(
            self.output,
            "{}, you currently have {} chips.",
            game.player().name(),
            game.player().chips()
        )?;

        loop {
            let answer = self.prompt_line("How much would you like to bet? ")?;
            let Ok(amount) = answer.parse::<usize>() else {
                debug!("rejected bet input {answer:?}");
                writeln!(self.output, "That is not a valid amount. Please try again.")?;
                continue;
            };

            match game.place_bet(amount) {
                Ok(()) => {
                    writeln!(self.output, "You have placed a bet of {amount}. Good Luck!")?;
                    return Ok(());
                }
                Err(BetError::ZeroBet) => {
                    writeln!(self.output, "You must bet at least 1 chip. Please try again.")?;
                }
                Err(BetError::InsufficientFunds { .. }) => {
                    writeln!(
                        self.output,
                        "You do not have enough chips for that wager. Please try again."
                    )?;
                }
                Err(BetError::OverTableLimit) => {
                    writeln!(
                        self.output,
                        "That bet is over the table limit. Please try again."
                    )?;
                }
                Err(err @ BetError::InvalidState) => return Err(err.into()),
            }
        }
    }

    fn ask_move(&mut self) -> Result<PlayerMove, SessionError> {
        loop {
            let answer = self.prompt_line("\nWould you like to hit or stay? ")?;
            if let Some(player_move) = PlayerMove::parse(&answer) {
                return Ok(player_move);
            }
            debug!("rejected move input {answer:?}");
            writeln!(self.output, "That is not a valid option. Please try again.")?;
        }
    }

    fn ask_play_again(&mut self) -> Result<bool, SessionError> {
        loop {
            let answer = self.prompt_line("Would you like to play again? (y/n): ")?;
            match answer.to_lowercase().as_str() {
                "y" => return Ok(true),
                "n" => return Ok(false),
                _ => {
                    debug!("rejected replay input {answer:?}");
                    writeln!(self.output, "That is not a valid choice. Please try again.")?;
                }
            }
        }
    }

    fn write_cards(&mut self, title: &str, cards: &[Card]) -> Result<(), SessionError> {
        writeln!(self.output, "\n{title}:")?;
        for card in cards {
            writeln!(self.output, "{card} with a value of {}", card.value())?;
        }
        Ok(())
    }

    fn show_table(&mut self, game: &Game) -> Result<(), SessionError> {
        let player_title = format!("{} HAND", game.player().name().to_uppercase());
        self.write_cards(&player_title, game.player().hand().cards())?;
        self.write_cards("DEALER HAND", game.dealer().visible_cards())
    }

    fn show_dealer_turn(&mut self, game: &Game, drawn: &[Card]) -> Result<(), SessionError> {
        for card in drawn {
            writeln!(self.output, "I draw the {card}.")?;
        }
        self.write_cards("DEALER HAND", game.dealer().hand().cards())?;
        writeln!(
            self.output,
            "My hand has a value of {}.",
            game.dealer().hand().value()
        )?;
        Ok(())
    }

    fn announce(&mut self, game: &Game, result: &RoundResult) -> Result<(), SessionError> {
        let name = game.player().name();
        match result.outcome {
            RoundOutcome::PlayerBust => {
                writeln!(self.output, "OH NO! {name} has busted!")?;
                writeln!(self.output, "I have won the pot of {}", result.pot)?;
            }
            RoundOutcome::PlayerTwentyOne => {
                writeln!(self.output, "{name} has hit 21!")?;
                writeln!(self.output, "{name} has won the pot of {}", result.pot)?;
            }
            RoundOutcome::DealerBust => {
                writeln!(self.output, "OH NO! I have busted!")?;
                writeln!(self.output, "{name} has won the pot of {}", result.pot)?;
            }
            RoundOutcome::DealerWins => {
                if game.dealer().hand().is_twenty_one() {
                    writeln!(self.output, "I have hit 21!")?;
                }
                writeln!(
                    self.output,
                    "I have won with a score of {}",
                    result.dealer_value
                )?;
                writeln!(self.output, "I have won the pot of {}", result.pot)?;
            }
            RoundOutcome::Push => {
                writeln!(
                    self.output,
                    "We have tied at {}. Your stake of {} is returned.",
                    result.dealer_value, result.payout
                )?;
            }
        }
        writeln!(self.output, "{name}, you now have {} chips.", result.chips)?;
        Ok(())
    }
}
