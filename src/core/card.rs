//! Card values.
//!
//! A card is nothing but a positive face value. Two cards with the same
//! value are interchangeable for game logic; ownership (which hand or deck
//! holds a card) is tracked by the container, not the card.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ZeroValue;

/// A single card with a positive face value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32")]
pub struct Card(u32);

impl Card {
    /// Create a card with the given face value.
    ///
    /// Panics if `value` is zero.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        assert!(value > 0, "Card value must be positive");
        Self(value)
    }

    /// Create a card, returning `None` for a zero value.
    #[must_use]
    pub const fn try_new(value: u32) -> Option<Self> {
        if value == 0 {
            None
        } else {
            Some(Self(value))
        }
    }

    /// Face value of the card.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u32> for Card {
    type Error = ZeroValue;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::try_new(value).ok_or(ZeroValue("card value"))
    }
}

/// Parses one pack line: a positive decimal integer, surrounding whitespace ignored.
impl FromStr for Card {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u32 = s
            .trim()
            .parse()
            .map_err(|_| format!("not a card value: {:?}", s))?;
        Self::try_new(value).ok_or_else(|| "card value must be positive".to_string())
    }
}

/// Space-separated card values, as written to the game logs.
pub fn format_cards<'a>(cards: impl IntoIterator<Item = &'a Card>) -> String {
    cards
        .into_iter()
        .map(Card::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
