//! The concurrent turn engine.
//!
//! - `player`: one thread per player running draw, discard, check win
//! - `coordinator`: ring wiring, thread start/join, final report

pub mod coordinator;
pub mod player;

pub use coordinator::{play, DeckReport, Game, GameReport};
pub use player::{ExitReason, Player, PlayerOutcome, PlayerState};
