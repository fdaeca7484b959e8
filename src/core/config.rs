//! Game configuration.
//!
//! The only game rule is fixed (collect four cards of your own number),
//! so configuration covers the table size and where output goes.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::error::GameError;

/// Cards dealt to each hand, and the winning set size.
pub const HAND_SIZE: usize = 4;

/// Pack length per player: four for the hand, four for the deck.
pub const CARDS_PER_PLAYER: usize = 2 * HAND_SIZE;

/// Default per-player turn cap.
pub const DEFAULT_MAX_TURNS: u64 = 100_000;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of players, and of decks.
    pub player_count: usize,

    /// Directory the player and deck log files are written to.
    pub output_dir: PathBuf,

    /// Maximum draw/discard turns per player (`None` = unlimited).
    ///
    /// Guarantees termination for packs where nobody can win and no
    /// deck ever runs dry.
    pub max_turns: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_count: 4,
            output_dir: PathBuf::from("."),
            max_turns: Some(DEFAULT_MAX_TURNS),
        }
    }
}

impl GameConfig {
    /// Create a new game configuration for `player_count` players.
    pub fn new(player_count: usize) -> Self {
        Self {
            player_count,
            ..Self::default()
        }
    }

    /// Create a configuration from a user-supplied player count.
    ///
    /// Rejects zero and negative counts with `InvalidPlayerCount`.
    pub fn from_player_count(count: i64) -> Result<Self, GameError> {
        if count <= 0 {
            return Err(GameError::InvalidPlayerCount(count));
        }
        let player_count =
            usize::try_from(count).map_err(|_| GameError::InvalidPlayerCount(count))?;
        Ok(Self::new(player_count))
    }

    /// Create a configuration from a player count typed by the user.
    ///
    /// Text that is not an integer is rejected with `UnparsablePlayerCount`
    /// carrying the trimmed input.
    pub fn parse_player_count(text: &str) -> Result<Self, GameError> {
        let text = text.trim();
        let count = text
            .parse::<i64>()
            .map_err(|_| GameError::UnparsablePlayerCount(text.to_string()))?;
        Self::from_player_count(count)
    }

    /// Set the output directory.
    #[must_use]
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Set the per-player turn cap.
    #[must_use]
    pub fn with_max_turns(mut self, max_turns: Option<u64>) -> Self {
        self.max_turns = max_turns;
        self
    }

    /// Pack length this configuration expects (`8N`).
    #[must_use]
    pub fn pack_size(&self) -> usize {
        self.player_count * CARDS_PER_PLAYER
    }

    /// Check the configuration is playable.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.player_count == 0 || u32::try_from(self.player_count).is_err() {
            return Err(GameError::InvalidPlayerCount(
                i64::try_from(self.player_count).unwrap_or(i64::MAX),
            ));
        }
        Ok(())
    }
}
