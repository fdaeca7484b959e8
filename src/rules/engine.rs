//! Game rules and the shared winner slot.
//!
//! Two rules:
//! - A player wins holding exactly four cards, all equal to its own number
//! - A player discards the first card that is not its own number
//!
//! `WinnerSlot` is the only state shared by every player. It is written
//! at most once (first writer wins) and read by every player on every
//! turn, which replaces any explicit win broadcast.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::core::config::HAND_SIZE;
use crate::core::player::PlayerId;
use crate::zones::Hand;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// A single player collected four of its own number.
    Winner(PlayerId),
    /// Every player stopped without a win (decks ran dry or turn cap hit).
    NoWinner,
}

impl GameResult {
    /// The winning player, if any.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            GameResult::Winner(p) => Some(*p),
            GameResult::NoWinner => None,
        }
    }
}

impl From<Option<PlayerId>> for GameResult {
    fn from(winner: Option<PlayerId>) -> Self {
        winner.map_or(GameResult::NoWinner, GameResult::Winner)
    }
}

/// Write-once, read-many cell holding the game's winner.
///
/// ```
/// use card_ring::core::PlayerId;
/// use card_ring::rules::WinnerSlot;
///
/// let slot = WinnerSlot::new();
/// assert_eq!(slot.claim(PlayerId::new(2)), PlayerId::new(2));
/// // Later claims are no-ops and report the recorded winner.
/// assert_eq!(slot.claim(PlayerId::new(3)), PlayerId::new(2));
/// assert_eq!(slot.get(), Some(PlayerId::new(2)));
/// ```
#[derive(Debug, Default)]
pub struct WinnerSlot {
    winner: OnceLock<PlayerId>,
}

impl WinnerSlot {
    /// Create an empty slot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `player` as winner if no winner is recorded yet.
    ///
    /// Returns the winner actually recorded, which differs from `player`
    /// when another player got there first.
    pub fn claim(&self, player: PlayerId) -> PlayerId {
        *self.winner.get_or_init(|| player)
    }

    /// The recorded winner, if any.
    #[must_use]
    pub fn get(&self) -> Option<PlayerId> {
        self.winner.get().copied()
    }

    /// The final result.
    #[must_use]
    pub fn result(&self) -> GameResult {
        self.get().into()
    }
}

/// Check whether `hand` is a winning hand for `player`.
#[must_use]
pub fn is_winning_hand(hand: &Hand, player: PlayerId) -> bool {
    hand.len() == HAND_SIZE && hand.all_equal_to(player.denomination())
}

/// Index of the card `player` should discard from `hand`.
///
/// The first card that is not the player's denomination. If every card
/// matches, falls back to the first card; with the win checked before
/// every draw that hand cannot occur, so the fallback never decides play.
///
/// Returns `None` for an empty hand.
#[must_use]
pub fn choose_discard(hand: &Hand, player: PlayerId) -> Option<usize> {
    if hand.is_empty() {
        return None;
    }
    Some(hand.position_not(player.denomination()).unwrap_or(0))
}
