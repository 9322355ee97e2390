//! Game configuration options.

use core::fmt;
use core::str::FromStr;

use crate::error::ParseOptionError;

/// How a hand demotes aces from 11 to 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AceRule {
    /// Only the ace being dealt is demoted, and only if it would bust the hand.
    #[default]
    Greedy,
    /// Any ace counted as 11 is demoted whenever the hand would bust.
    Soft,
}

impl FromStr for AceRule {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "greedy" => Ok(Self::Greedy),
            "soft" => Ok(Self::Soft),
            _ => Err(ParseOptionError::AceRule(s.to_owned())),
        }
    }
}

impl fmt::Display for AceRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Greedy => f.write_str("greedy"),
            Self::Soft => f.write_str("soft"),
        }
    }
}

/// How a finished round is decided when dealer and player totals are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TieRule {
    /// The dealer wins ties.
    #[default]
    DealerWins,
    /// A tie returns the player's stake.
    Push,
}

impl FromStr for TieRule {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dealer" | "dealer-wins" => Ok(Self::DealerWins),
            "push" => Ok(Self::Push),
            _ => Err(ParseOptionError::TieRule(s.to_owned())),
        }
    }
}

impl fmt::Display for TieRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DealerWins => f.write_str("dealer"),
            Self::Push => f.write_str("push"),
        }
    }
}

/// Configuration options for a game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use blackjack_table::{AceRule, GameOptions};
///
/// let options = GameOptions::default()
///     .with_starting_chips(250)
///     .with_ace_rule(AceRule::Soft);
/// assert_eq!(options.starting_chips, 250);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Chips the player starts the session with.
    pub starting_chips: usize,
    /// Name the dealer introduces itself with.
    pub dealer_name: String,
    /// Ace demotion rule for every hand.
    pub ace_rule: AceRule,
    /// Tie resolution after the dealer's turn.
    pub tie_rule: TieRule,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            starting_chips: 100,
            dealer_name: String::from("Morgan"),
            ace_rule: AceRule::Greedy,
            tie_rule: TieRule::DealerWins,
        }
    }
}

impl GameOptions {
    /// Sets the starting chip balance.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_table::GameOptions;
    ///
    /// let options = GameOptions::default().with_starting_chips(500);
    /// assert_eq!(options.starting_chips, 500);
    /// ```
    #[must_use]
    pub const fn with_starting_chips(mut self, chips: usize) -> Self {
        self.starting_chips = chips;
        self
    }

    /// Sets the dealer's name.
    #[must_use]
    pub fn with_dealer_name(mut self, name: impl Into<String>) -> Self {
        self.dealer_name = name.into();
        self
    }

    /// Sets the ace demotion rule.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_table::{AceRule, GameOptions};
    ///
    /// let options = GameOptions::default().with_ace_rule(AceRule::Soft);
    /// assert_eq!(options.ace_rule, AceRule::Soft);
    /// ```
    #[must_use]
    pub const fn with_ace_rule(mut self, rule: AceRule) -> Self {
        self.ace_rule = rule;
        self
    }

    /// Sets the tie rule.
    #[must_use]
    pub const fn with_tie_rule(mut self, rule: TieRule) -> Self {
        self.tie_rule = rule;
        self
    }
}
