//! Win detection, discard choice, and the shared winner slot.

pub mod engine;

pub use engine::{choose_discard, is_winning_hand, GameResult, WinnerSlot};
