//! Pack loading, validation, and generation.
//!
//! A pack file is plain text with one positive decimal card value per
//! line. A valid pack for `N` players holds exactly `8N` cards.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::card::Card;
use crate::core::config::{CARDS_PER_PLAYER, HAND_SIZE};
use crate::core::error::GameError;
use crate::core::rng::GameRng;

use super::dealer::{deal, Deal};

/// A validated pack: `8N` cards for `N` players.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPack")]
pub struct Pack {
    cards: Vec<Card>,
    player_count: usize,
}

/// Unvalidated serialized form of a `Pack`.
#[derive(Deserialize)]
struct RawPack {
    cards: Vec<Card>,
    player_count: usize,
}

impl TryFrom<RawPack> for Pack {
    type Error = GameError;

    fn try_from(raw: RawPack) -> Result<Self, Self::Error> {
        Self::from_cards(raw.cards, raw.player_count)
    }
}

impl Pack {
    /// Validate `cards` as a pack for `player_count` players.
    pub fn from_cards(cards: Vec<Card>, player_count: usize) -> Result<Self, GameError> {
        let expected = player_count * CARDS_PER_PLAYER;
        if cards.is_empty() || cards.len() != expected {
            return Err(GameError::InvalidPackSize {
                actual: cards.len(),
                expected,
            });
        }
        Ok(Self {
            cards,
            player_count,
        })
    }

    /// Parse pack text for `player_count` players.
    ///
    /// Every line must hold one positive integer. Contents are checked
    /// before size, so a short pack with a bad line reports the bad line.
    pub fn parse(text: &str, player_count: usize) -> Result<Self, GameError> {
        let cards = text
            .lines()
            .enumerate()
            .map(|(i, line)| {
                line.parse::<Card>()
                    .map_err(|_| GameError::InvalidPackContents {
                        line: i + 1,
                        content: line.to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_cards(cards, player_count)
    }

    /// Load and validate a pack file.
    pub fn load(path: impl AsRef<Path>, player_count: usize) -> Result<Self, GameError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| GameError::PackNotFound {
            path: path.to_path_buf(),
            source,
        })?;
        let pack = Self::parse(&text, player_count)?;
        log::debug!("loaded {} cards from {}", pack.len(), path.display());
        Ok(pack)
    }

    /// Generate a shuffled pack in which every player can win.
    ///
    /// Holds four cards of each denomination `1..=N`; the other `4N`
    /// cards are uniform over the same range. Deterministic for a seed.
    pub fn generate(player_count: usize, seed: u64) -> Result<Self, GameError> {
        let top = u32::try_from(player_count)
            .ok()
            .filter(|&n| n > 0)
            .ok_or(GameError::InvalidPlayerCount(player_count as i64))?;

        let mut rng = GameRng::new(seed);
        let mut cards = Vec::with_capacity(player_count * CARDS_PER_PLAYER);
        for value in 1..=top {
            cards.extend(std::iter::repeat(Card::new(value)).take(HAND_SIZE));
        }
        for _ in 0..player_count * HAND_SIZE {
            cards.push(Card::new(rng.gen_range_u32(1..top + 1)));
        }
        rng.shuffle(&mut cards);
        log::debug!(
            "generated {} cards for {} players from seed {}",
            cards.len(),
            player_count,
            rng.seed()
        );

        Self::from_cards(cards, player_count)
    }

    /// Cards in pack order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Number of players this pack was validated for.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.player_count
    }

    /// Number of cards in the pack.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Always false for a validated pack.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Deal the pack into hands and decks.
    pub fn deal(&self) -> Result<Deal, GameError> {
        deal(&self.cards, self.player_count)
    }

    /// The pack in file format, one value per line.
    #[must_use]
    pub fn to_text(&self) -> String {
        self.cards.iter().map(|c| format!("{c}\n")).collect()
    }
}
