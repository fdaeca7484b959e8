//! Error types.
//!
//! Startup failures (`InvalidPackSize`, `InvalidPackContents`,
//! `PackNotFound`, `InvalidPlayerCount`) are raised before any player
//! thread exists. `EmptyDeck` is the one error the turn engine sees at
//! runtime, and it is an ordinary exit signal rather than a failure.

use std::path::PathBuf;

use thiserror::Error;

use super::player::{DeckId, PlayerId};

/// A draw was attempted against a deck with no cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("{0} is empty")]
pub struct EmptyDeck(pub DeckId);

/// A card value, player number, or deck number of zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("{0} must be positive")]
pub struct ZeroValue(pub &'static str);

/// Errors raised by the game setup and engine.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("invalid pack size: got {actual} cards, expected {expected}")]
    InvalidPackSize { actual: usize, expected: usize },

    #[error("invalid pack contents at line {line}: {content:?}")]
    InvalidPackContents { line: usize, content: String },

    #[error("pack file {} not found", .path.display())]
    PackNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid number of players: {0} (must be a positive integer)")]
    InvalidPlayerCount(i64),

    #[error("invalid number of players: {0:?} is not an integer")]
    UnparsablePlayerCount(String),

    #[error(transparent)]
    EmptyDeck(#[from] EmptyDeck),

    #[error("{0} thread panicked")]
    PlayerPanicked(PlayerId),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl GameError {
    /// Whether this error aborts the run before any thread starts.
    #[must_use]
    pub fn is_startup_error(&self) -> bool {
        matches!(
            self,
            GameError::InvalidPackSize { .. }
                | GameError::InvalidPackContents { .. }
                | GameError::PackNotFound { .. }
                | GameError::InvalidPlayerCount(_)
                | GameError::UnparsablePlayerCount(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_deck_message() {
        let err = EmptyDeck(DeckId::new(3));
        assert_eq!(err.to_string(), "deck 3 is empty");

        let wrapped: GameError = err.into();
        assert_eq!(wrapped.to_string(), "deck 3 is empty");
        assert!(!wrapped.is_startup_error());
    }

    #[test]
    fn test_startup_errors() {
        let size = GameError::InvalidPackSize { actual: 30, expected: 32 };
        assert!(size.is_startup_error());
        assert_eq!(size.to_string(), "invalid pack size: got 30 cards, expected 32");

        let contents = GameError::InvalidPackContents { line: 2, content: "x".into() };
        assert!(contents.is_startup_error());
        assert_eq!(contents.to_string(), "invalid pack contents at line 2: \"x\"");

        assert!(GameError::InvalidPlayerCount(0).is_startup_error());
        assert!(GameError::UnparsablePlayerCount("four".into()).is_startup_error());
        assert!(!GameError::PlayerPanicked(PlayerId::new(2)).is_startup_error());
    }

    #[test]
    fn test_pack_not_found_has_source() {
        use std::error::Error as _;

        let err = GameError::PackNotFound {
            path: PathBuf::from("missing.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.source().is_some());
        assert!(err.to_string().contains("missing.txt"));
    }
}
