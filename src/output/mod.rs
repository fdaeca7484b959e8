//! Game logs: line vocabulary and destinations.
//!
//! These are the game's own per-player and per-deck logs. Diagnostic
//! logging goes through the `log` facade instead.

pub mod event;
pub mod sink;

pub use event::{deck_contents_line, PlayerEvent};
pub use sink::{EventLog, FileLog, FileLogs, LogFactory, MemoryLogs};
