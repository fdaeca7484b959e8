//! Core types: cards, player and deck identity, configuration, errors, RNG.

pub mod card;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use card::{format_cards, Card};
pub use config::{GameConfig, CARDS_PER_PLAYER, DEFAULT_MAX_TURNS, HAND_SIZE};
pub use error::{EmptyDeck, GameError, ZeroValue};
pub use player::{DeckId, PlayerId, PlayerMap};
pub use rng::GameRng;
