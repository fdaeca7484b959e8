//! Card containers.
//!
//! ## Key Types
//!
//! - `Deck`: shared FIFO queue guarded by its own mutex
//! - `Hand`: privately owned ordered hand
//!
//! Every card is held by exactly one container at a time; moving a card
//! means removing it from one container and inserting it into another.

pub mod deck;
pub mod hand;

pub use deck::Deck;
pub use hand::Hand;
