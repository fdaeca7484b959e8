//! Player and deck identification, ring wiring, and per-player storage.
//!
//! ## PlayerId / DeckId
//!
//! Both are one-based: the first player is `PlayerId(1)` and owns
//! `DeckId(1)`. A player's number doubles as its denomination, the face
//! value it collects.
//!
//! ## Ring
//!
//! Player `i` draws from deck `i` and discards to deck `(i mod N) + 1`,
//! so every deck is shared by exactly two players: its owner and the
//! owner's left neighbour.
//!
//! ## PlayerMap
//!
//! Per-player data storage backed by `Vec` for O(1) access.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::card::Card;
use super::error::ZeroValue;

/// One-based player identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32")]
pub struct PlayerId(u32);

impl PlayerId {
    /// Create a new player ID.
    ///
    /// Panics if `number` is zero.
    #[must_use]
    pub const fn new(number: u32) -> Self {
        assert!(number > 0, "Player numbers start at 1");
        Self(number)
    }

    /// The one-based player number.
    #[must_use]
    pub const fn number(self) -> u32 {
        self.0
    }

    /// Zero-based index into per-player storage.
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    /// The face value this player collects.
    #[must_use]
    pub const fn denomination(self) -> Card {
        Card::new(self.0)
    }

    /// The deck this player draws from.
    #[must_use]
    pub const fn source_deck(self) -> DeckId {
        DeckId(self.0)
    }

    /// The deck this player discards to, in a ring of `player_count` players.
    #[must_use]
    pub const fn sink_deck(self, player_count: usize) -> DeckId {
        DeckId((self.0 % player_count as u32) + 1)
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use card_ring::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[0], PlayerId::new(1));
    /// assert_eq!(players[3], PlayerId::new(4));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (1..=player_count as u32).map(PlayerId)
    }
}

impl TryFrom<u32> for PlayerId {
    type Error = ZeroValue;

    fn try_from(number: u32) -> Result<Self, Self::Error> {
        if number == 0 {
            Err(ZeroValue("player number"))
        } else {
            Ok(Self(number))
        }
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "player {}", self.0)
    }
}

/// One-based deck identifier. Used for wiring and logging only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32")]
pub struct DeckId(u32);

impl DeckId {
    /// Create a new deck ID.
    ///
    /// Panics if `number` is zero.
    #[must_use]
    pub const fn new(number: u32) -> Self {
        assert!(number > 0, "Deck numbers start at 1");
        Self(number)
    }

    /// The one-based deck number.
    #[must_use]
    pub const fn number(self) -> u32 {
        self.0
    }

    /// Zero-based index into deck storage.
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    /// Iterate over all deck IDs for a game with `deck_count` decks.
    pub fn all(deck_count: usize) -> impl Iterator<Item = DeckId> {
        (1..=deck_count as u32).map(DeckId)
    }
}

impl TryFrom<u32> for DeckId {
    type Error = ZeroValue;

    fn try_from(number: u32) -> Result<Self, Self::Error> {
        if number == 0 {
            Err(ZeroValue("deck number"))
        } else {
            Ok(Self(number))
        }
    }
}

impl std::fmt::Display for DeckId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "deck {}", self.0)
    }
}

/// Per-player data storage with O(1) access.
///
/// Backed by a `Vec<T>` with one entry per player.
///
/// ## Example
///
/// ```
/// use card_ring::core::{PlayerId, PlayerMap};
///
/// let mut turns: PlayerMap<u64> = PlayerMap::new(4, |_| 0);
/// turns[PlayerId::new(2)] += 1;
/// assert_eq!(turns[PlayerId::new(2)], 1);
/// assert_eq!(turns[PlayerId::new(1)], 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    ///
    /// The factory receives the `PlayerId` for each player.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");

        let data = PlayerId::all(player_count).map(factory).collect();

        Self { data }
    }

    /// Create a new PlayerMap with default values.
    pub fn with_default(player_count: usize) -> Self
    where
        T: Default,
    {
        Self::new(player_count, |_| T::default())
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u32 + 1), v))
    }

    /// Consume the map, yielding (PlayerId, T) pairs in player order.
    pub fn into_iter_players(self) -> impl Iterator<Item = (PlayerId, T)> {
        self.data
            .into_iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u32 + 1), v))
    }

    /// Iterate over the values in player order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}
