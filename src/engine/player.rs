//! The per-player turn engine.
//!
//! Each player runs on its own thread:
//!
//! ```text
//! Setup ──► Playing ──► Won ──► Done
//!              │
//!              └──────► Lost ─► Done
//! ```
//!
//! A turn draws the top card of the source deck, discards the first card
//! that is not the player's number to the sink deck, then checks for a
//! win. Draw and discard each take one deck lock and release it before
//! the next, so no thread ever holds two deck locks and the ring cannot
//! deadlock.
//!
//! Play stops when the player wins, when the shared `WinnerSlot` shows
//! another player won, when the source deck is empty at draw time, or when
//! the turn cap is reached. An empty source deck is a normal exit.

use std::io;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::core::card::Card;
use crate::core::error::EmptyDeck;
use crate::core::player::PlayerId;
use crate::output::{EventLog, PlayerEvent};
use crate::rules::{choose_discard, is_winning_hand, WinnerSlot};
use crate::zones::{Deck, Hand};

/// Lifecycle of a player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerState {
    /// Hand dealt, not yet playing.
    Setup,
    /// Taking turns.
    Playing,
    /// Collected four of its own number.
    Won,
    /// Stopped without winning.
    Lost(ExitReason),
    /// Final hand logged, log released.
    Done,
}

/// Why a player stopped without winning.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExitReason {
    /// Another player's win was observed.
    OtherPlayerWon(PlayerId),
    /// The source deck was empty at draw time.
    SourceEmpty,
    /// The per-player turn cap was reached.
    TurnLimit,
}

/// How a player's run ended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerOutcome {
    /// The player.
    pub player: PlayerId,

    /// `None` for the winner, otherwise why the player stopped.
    pub exit: Option<ExitReason>,

    /// Completed draw/discard turns.
    pub turns: u64,

    /// Hand when the player stopped.
    pub final_hand: Hand,

    /// First write failure on the player's log, if any.
    pub log_error: Option<String>,
}

impl PlayerOutcome {
    /// Check whether this player won.
    #[must_use]
    pub fn won(&self) -> bool {
        self.exit.is_none()
    }
}

/// A player's log, tolerant of write failures.
///
/// A failing write is reported through `log::warn!` and remembered, and
/// play continues: the game must not stall on a broken log.
struct PlayerLog {
    player: PlayerId,
    inner: Box<dyn EventLog>,
    error: Option<io::Error>,
}

impl PlayerLog {
    fn new(player: PlayerId, inner: Box<dyn EventLog>) -> Self {
        Self {
            player,
            inner,
            error: None,
        }
    }

    fn record(&mut self, event: PlayerEvent<'_>) {
        let line = event.render(self.player);
        if let Err(err) = self.inner.write_line(&line) {
            self.fail(err);
        }
    }

    fn finish(&mut self) {
        if let Err(err) = self.inner.finish() {
            self.fail(err);
        }
    }

    fn fail(&mut self, err: io::Error) {
        log::warn!("{} log write failed: {}", self.player, err);
        self.error.get_or_insert(err);
    }
}

/// One seat in the ring: a private hand plus the two decks it touches.
pub struct Player {
    id: PlayerId,
    hand: Hand,
    source: Arc<Deck>,
    sink: Arc<Deck>,
    winner: Arc<WinnerSlot>,
    log: PlayerLog,
    max_turns: Option<u64>,
    turns: u64,
    state: PlayerState,
}

impl Player {
    /// Create a player holding its dealt `hand`.
    ///
    /// `source` is the deck the player draws from, `sink` the deck it
    /// discards to. With a single player they are the same deck.
    pub fn new(
        id: PlayerId,
        hand: Hand,
        source: Arc<Deck>,
        sink: Arc<Deck>,
        winner: Arc<WinnerSlot>,
        log: Box<dyn EventLog>,
    ) -> Self {
        Self {
            id,
            hand,
            source,
            sink,
            winner,
            log: PlayerLog::new(id, log),
            max_turns: None,
            turns: 0,
            state: PlayerState::Setup,
        }
    }

    /// Cap the number of turns this player takes.
    #[must_use]
    pub fn with_max_turns(mut self, max_turns: Option<u64>) -> Self {
        self.max_turns = max_turns;
        self
    }

    /// The player's ID.
    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// The player's current hand.
    #[must_use]
    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> PlayerState {
        self.state
    }

    /// Run the player to completion.
    pub fn run(mut self) -> PlayerOutcome {
        self.log.record(PlayerEvent::InitialHand(&self.hand));

        self.transition(PlayerState::Playing);
        let ended = if self.check_win() {
            PlayerState::Won
        } else {
            self.play()
        };
        self.transition(ended);

        let won = ended == PlayerState::Won;
        if won {
            self.log.record(PlayerEvent::Wins);
        }
        self.log.record(PlayerEvent::Exits);
        self.log.record(PlayerEvent::FinalHand {
            hand: &self.hand,
            won,
        });
        self.log.finish();
        self.transition(PlayerState::Done);

        let exit = match ended {
            PlayerState::Lost(reason) => Some(reason),
            _ => None,
        };
        PlayerOutcome {
            player: self.id,
            exit,
            turns: self.turns,
            final_hand: self.hand,
            log_error: self.log.error.map(|e| e.to_string()),
        }
    }

    /// Take turns until the player wins or has to stop.
    fn play(&mut self) -> PlayerState {
        loop {
            if let Some(other) = self.winner.get() {
                return PlayerState::Lost(ExitReason::OtherPlayerWon(other));
            }
            if self.max_turns.is_some_and(|max| self.turns >= max) {
                return PlayerState::Lost(ExitReason::TurnLimit);
            }
            if let Err(EmptyDeck(deck)) = self.take_turn() {
                log::debug!("{} stops: {} is empty", self.id, deck);
                return PlayerState::Lost(ExitReason::SourceEmpty);
            }
            if self.check_win() {
                return PlayerState::Won;
            }
        }
    }

    /// Draw one card and discard one card.
    ///
    /// An empty source deck ends the turn before anything moves.
    fn take_turn(&mut self) -> Result<(), EmptyDeck> {
        let drawn = self.source.draw_from_top()?;
        self.hand.push(drawn);
        self.log.record(PlayerEvent::Draws {
            card: drawn,
            deck: self.source.id(),
        });

        let discarded = self.remove_discard();
        self.sink.insert_at_bottom(discarded);
        self.turns += 1;

        log::trace!(
            "{} drew {} from {}, discarded {} to {}",
            self.id,
            drawn,
            self.source.id(),
            discarded,
            self.sink.id()
        );
        self.log.record(PlayerEvent::Discards {
            card: discarded,
            deck: self.sink.id(),
        });
        self.log.record(PlayerEvent::CurrentHand(&self.hand));
        Ok(())
    }

    fn remove_discard(&mut self) -> Card {
        match choose_discard(&self.hand, self.id).and_then(|i| self.hand.remove(i)) {
            Some(card) => card,
            None => unreachable!("hand holds at least the card just drawn"),
        }
    }

    /// Check for a winning hand and, if found, try to claim the win.
    ///
    /// Returns true only if this player is the recorded winner; a player
    /// that completes its set after someone else claimed the slot loses.
    fn check_win(&mut self) -> bool {
        if !is_winning_hand(&self.hand, self.id) {
            return false;
        }
        let recorded = self.winner.claim(self.id);
        if recorded == self.id {
            log::info!("{} wins after {} turns", self.id, self.turns);
            true
        } else {
            log::debug!("{} completed a set but {} already won", self.id, recorded);
            false
        }
    }

    fn transition(&mut self, next: PlayerState) {
        log::trace!("{}: {:?} -> {:?}", self.id, self.state, next);
        self.state = next;
    }
}
