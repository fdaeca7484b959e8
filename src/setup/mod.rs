//! Pre-game setup: pack loading and dealing.
//!
//! Everything here completes before any player thread starts, so none of
//! it needs synchronization.

pub mod dealer;
pub mod pack;

pub use dealer::{deal, Deal};
pub use pack::Pack;
