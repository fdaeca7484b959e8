//! # card-ring
//!
//! A concurrent card game simulation. `N` players sit in a ring, each on
//! its own thread, drawing from the deck on their left and discarding to
//! the deck on their right until one of them holds four cards of its own
//! number.
//!
//! ## Design Principles
//!
//! 1. **One lock per deck**: each deck is shared by exactly two threads
//!    and guarded by its own mutex. No thread ever holds two deck locks,
//!    so the ring cannot deadlock.
//!
//! 2. **Empty is not an error**: drawing from an empty deck returns
//!    `EmptyDeck`, which ends that player's play normally.
//!
//! 3. **Write-once winner**: the first player to complete its set claims
//!    the `WinnerSlot`; every other player polls it once per turn.
//!
//! ## Modules
//!
//! - `core`: cards, player/deck IDs, configuration, errors, RNG
//! - `zones`: the shared `Deck` and the private `Hand`
//! - `rules`: win check, discard choice, winner slot
//! - `setup`: pack loading/generation and dealing
//! - `output`: game log lines and log destinations
//! - `engine`: the player turn loop and the coordinator
//!
//! ## Example
//!
//! ```
//! use card_ring::core::{Card, GameConfig, PlayerId};
//! use card_ring::engine::Game;
//! use card_ring::output::MemoryLogs;
//! use card_ring::setup::Pack;
//!
//! // Hands are dealt round-robin: player 1 gets four 1s, player 2 gets 2 2 2 3.
//! let values = [1, 2, 1, 2, 1, 2, 1, 3, 3, 3, 3, 3, 3, 3, 3, 3];
//! let pack = Pack::from_cards(values.iter().map(|&v| Card::new(v)).collect(), 2).unwrap();
//!
//! let report = Game::with_logs(GameConfig::new(2), &pack, MemoryLogs::new())
//!     .unwrap()
//!     .run()
//!     .unwrap();
//! assert_eq!(report.winner(), Some(PlayerId::new(1)));
//! ```

pub mod core;
pub mod engine;
pub mod output;
pub mod rules;
pub mod setup;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    Card, DeckId, EmptyDeck, GameConfig, GameError, GameRng, PlayerId, PlayerMap,
};

pub use crate::zones::{Deck, Hand};

pub use crate::rules::{GameResult, WinnerSlot};

pub use crate::setup::{Deal, Pack};

pub use crate::output::{EventLog, FileLogs, LogFactory, MemoryLogs, PlayerEvent};

pub use crate::engine::{
    play, DeckReport, ExitReason, Game, GameReport, Player, PlayerOutcome, PlayerState,
};
