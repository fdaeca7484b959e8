//! Game log destinations.
//!
//! Each player writes to its own `EventLog` from its own thread; each deck
//! log is written once by the coordinator after every player has
//! finished. A `LogFactory` decides where those logs live:
//!
//! - `FileLogs`: `player{i}_output.txt` / `deck{i}_output.txt` in a directory
//! - `MemoryLogs`: shared in-memory buffers, for tests and benchmarks

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use crate::core::player::{DeckId, PlayerId};

/// An append-only line destination.
pub trait EventLog: Send {
    /// Append one line.
    fn write_line(&mut self, line: &str) -> io::Result<()>;

    /// Flush and release the destination. No writes follow.
    fn finish(&mut self) -> io::Result<()>;
}

/// Creates the per-player and per-deck logs for a game.
pub trait LogFactory {
    /// Open the log for `player`.
    fn player_log(&self, player: PlayerId) -> io::Result<Box<dyn EventLog>>;

    /// Open the log for `deck`.
    fn deck_log(&self, deck: DeckId) -> io::Result<Box<dyn EventLog>>;
}

/// Buffered log file.
pub struct FileLog {
    writer: BufWriter<File>,
}

impl FileLog {
    /// Create (or truncate) the file at `path`.
    pub fn create(path: impl AsRef<Path>) -> io::Result<Self> {
        Ok(Self {
            writer: BufWriter::new(File::create(path)?),
        })
    }
}

impl EventLog for FileLog {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")
    }

    fn finish(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

/// Log files in one output directory.
#[derive(Clone, Debug)]
pub struct FileLogs {
    dir: PathBuf,
}

impl FileLogs {
    /// Write logs into `dir`, creating it on first use.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of a player's log file.
    #[must_use]
    pub fn player_path(&self, player: PlayerId) -> PathBuf {
        self.dir.join(format!("player{}_output.txt", player.number()))
    }

    /// Path of a deck's log file.
    #[must_use]
    pub fn deck_path(&self, deck: DeckId) -> PathBuf {
        self.dir.join(format!("deck{}_output.txt", deck.number()))
    }

    fn open(&self, path: PathBuf) -> io::Result<Box<dyn EventLog>> {
        std::fs::create_dir_all(&self.dir)?;
        Ok(Box::new(FileLog::create(path)?))
    }
}

impl LogFactory for FileLogs {
    fn player_log(&self, player: PlayerId) -> io::Result<Box<dyn EventLog>> {
        self.open(self.player_path(player))
    }

    fn deck_log(&self, deck: DeckId) -> io::Result<Box<dyn EventLog>> {
        self.open(self.deck_path(deck))
    }
}

type Buffers = Arc<Mutex<BTreeMap<String, Vec<String>>>>;

/// In-memory logs shared between the game and whoever inspects them.
///
/// Cloning shares the underlying buffers.
///
/// ```
/// use card_ring::core::PlayerId;
/// use card_ring::output::{LogFactory, MemoryLogs};
///
/// let logs = MemoryLogs::new();
/// let mut log = logs.player_log(PlayerId::new(1)).unwrap();
/// log.write_line("player 1 exits").unwrap();
///
/// assert_eq!(logs.player_lines(PlayerId::new(1)), vec!["player 1 exits"]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct MemoryLogs {
    buffers: Buffers,
}

impl MemoryLogs {
    /// Create an empty set of logs.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines written to a player's log so far.
    #[must_use]
    pub fn player_lines(&self, player: PlayerId) -> Vec<String> {
        self.lines(&player_key(player))
    }

    /// Lines written to a deck's log so far.
    #[must_use]
    pub fn deck_lines(&self, deck: DeckId) -> Vec<String> {
        self.lines(&deck_key(deck))
    }

    /// Number of logs opened so far.
    #[must_use]
    pub fn log_count(&self) -> usize {
        self.buffers.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    fn lines(&self, key: &str) -> Vec<String> {
        self.buffers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
            .unwrap_or_default()
    }

    fn open(&self, key: String) -> Box<dyn EventLog> {
        self.buffers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.clone(), Vec::new());
        Box::new(MemoryLog {
            key,
            buffers: Arc::clone(&self.buffers),
        })
    }
}

impl LogFactory for MemoryLogs {
    fn player_log(&self, player: PlayerId) -> io::Result<Box<dyn EventLog>> {
        Ok(self.open(player_key(player)))
    }

    fn deck_log(&self, deck: DeckId) -> io::Result<Box<dyn EventLog>> {
        Ok(self.open(deck_key(deck)))
    }
}

struct MemoryLog {
    key: String,
    buffers: Buffers,
}

impl EventLog for MemoryLog {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.buffers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(self.key.clone())
            .or_default()
            .push(line.to_string());
        Ok(())
    }

    fn finish(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn player_key(player: PlayerId) -> String {
    format!("player{}", player.number())
}

fn deck_key(deck: DeckId) -> String {
    format!("deck{}", deck.number())
}
