//! Game coordinator: wires the ring, runs the players, reports the result.
//!
//! ## Lifecycle
//!
//! 1. Deal the pack (single-threaded)
//! 2. Build decks `1..=N` and players `1..=N`; player `i` draws from deck
//!    `i` and discards to deck `(i mod N) + 1`
//! 3. Start one thread per player, join them all
//! 4. Read the winner slot and write each deck's final contents to its log
//!
//! The coordinator never inspects deck state while players run; it only
//! observes thread completion.

use std::path::Path;
use std::sync::Arc;
use std::thread::JoinHandle;

use serde::{Deserialize, Serialize};

use crate::core::card::Card;
use crate::core::config::GameConfig;
use crate::core::error::GameError;
use crate::core::player::{DeckId, PlayerId};
use crate::output::{deck_contents_line, FileLogs, LogFactory};
use crate::rules::{GameResult, WinnerSlot};
use crate::setup::{Deal, Pack};
use crate::zones::Deck;

use super::player::{Player, PlayerOutcome};

/// Final contents of one deck.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckReport {
    pub deck: DeckId,
    /// Top card first.
    pub cards: Vec<Card>,
}

/// Everything a finished game produced.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameReport {
    pub result: GameResult,
    /// One entry per player, in player order.
    pub players: Vec<PlayerOutcome>,
    /// One entry per deck, in deck order.
    pub decks: Vec<DeckReport>,
    /// Log write failures, reported after the fact.
    pub log_errors: Vec<String>,
}

impl GameReport {
    /// The winning player, if any.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.result.winner()
    }

    /// Total cards across final hands and decks.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.players.iter().map(|p| p.final_hand.len()).sum::<usize>()
            + self.decks.iter().map(|d| d.cards.len()).sum::<usize>()
    }
}

/// A dealt game, ready to run.
pub struct Game<L: LogFactory = FileLogs> {
    config: GameConfig,
    deal: Deal,
    logs: L,
}

impl Game<FileLogs> {
    /// Set up a game that writes its logs to `config.output_dir`.
    pub fn new(config: GameConfig, pack: &Pack) -> Result<Self, GameError> {
        let logs = FileLogs::new(&config.output_dir);
        Self::with_logs(config, pack, logs)
    }
}

impl<L: LogFactory> Game<L> {
    /// Set up a game with a custom log destination.
    ///
    /// Fails if the configuration is invalid or the pack was not built
    /// for `config.player_count` players. Nothing is written yet.
    pub fn with_logs(config: GameConfig, pack: &Pack, logs: L) -> Result<Self, GameError> {
        config.validate()?;
        if pack.player_count() != config.player_count {
            return Err(GameError::InvalidPackSize {
                actual: pack.len(),
                expected: config.pack_size(),
            });
        }
        let deal = pack.deal()?;
        Ok(Self { config, deal, logs })
    }

    /// The dealt hands and decks.
    #[must_use]
    pub fn deal(&self) -> &Deal {
        &self.deal
    }

    /// The log destination.
    #[must_use]
    pub fn logs(&self) -> &L {
        &self.logs
    }

    /// Play the game to completion.
    ///
    /// Returns an error only if a player log cannot be opened or a player
    /// thread cannot be started or panics; write failures during play end
    /// up in `GameReport::log_errors`.
    pub fn run(self) -> Result<GameReport, GameError> {
        let n = self.config.player_count;
        let decks: Vec<Arc<Deck>> = self.deal.build_decks().into_iter().map(Arc::new).collect();
        let winner = Arc::new(WinnerSlot::new());

        let mut players = Vec::with_capacity(n);
        for (id, hand) in self.deal.hands.clone().into_iter_players() {
            let log = self.logs.player_log(id)?;
            let player = Player::new(
                id,
                hand,
                Arc::clone(&decks[id.source_deck().index()]),
                Arc::clone(&decks[id.sink_deck(n).index()]),
                Arc::clone(&winner),
                log,
            )
            .with_max_turns(self.config.max_turns);
            players.push(player);
        }

        log::info!("starting {} player threads", n);
        let handles = spawn_all(players)?;
        let outcomes = join_all(handles)?;

        let result = winner.result();
        match result {
            GameResult::Winner(p) => log::info!("{} wins", p),
            GameResult::NoWinner => log::info!("game over with no winner"),
        }

        let mut log_errors: Vec<String> = outcomes
            .iter()
            .filter_map(|o| o.log_error.as_ref().map(|e| format!("{}: {}", o.player, e)))
            .collect();

        let mut deck_reports = Vec::with_capacity(n);
        for deck in &decks {
            let cards = deck.contents();
            if let Err(err) = self.write_deck_log(deck.id(), &cards) {
                log::warn!("{} log write failed: {}", deck.id(), err);
                log_errors.push(format!("{}: {}", deck.id(), err));
            }
            deck_reports.push(DeckReport {
                deck: deck.id(),
                cards,
            });
        }

        Ok(GameReport {
            result,
            players: outcomes,
            decks: deck_reports,
            log_errors,
        })
    }

    fn write_deck_log(&self, deck: DeckId, cards: &[Card]) -> std::io::Result<()> {
        let mut log = self.logs.deck_log(deck)?;
        log.write_line(&deck_contents_line(deck, cards))?;
        log.finish()
    }
}

/// Load a pack from `path` and play it with file logs.
///
/// All validation happens before any file is created or thread started.
pub fn play(config: GameConfig, path: impl AsRef<Path>) -> Result<GameReport, GameError> {
    config.validate()?;
    let pack = Pack::load(path, config.player_count)?;
    Game::new(config, &pack)?.run()
}

fn spawn_all(players: Vec<Player>) -> Result<Vec<(PlayerId, JoinHandle<PlayerOutcome>)>, GameError> {
    let mut handles = Vec::with_capacity(players.len());
    for player in players {
        let id = player.id();
        let spawned = std::thread::Builder::new()
            .name(format!("player-{}", id.number()))
            .spawn(move || player.run());
        match spawned {
            Ok(handle) => handles.push((id, handle)),
            Err(err) => {
                // Threads already running stop on their own (empty deck or
                // turn cap); wait for them before reporting.
                let _ = join_all(handles);
                return Err(GameError::Io(err));
            }
        }
    }
    Ok(handles)
}

fn join_all(
    handles: Vec<(PlayerId, JoinHandle<PlayerOutcome>)>,
) -> Result<Vec<PlayerOutcome>, GameError> {
    let mut outcomes = Vec::with_capacity(handles.len());
    let mut panicked = None;
    for (id, handle) in handles {
        match handle.join() {
            Ok(outcome) => outcomes.push(outcome),
            Err(_) => {
                log::error!("{} thread panicked", id);
                panicked.get_or_insert(id);
            }
        }
    }
    match panicked {
        Some(id) => Err(GameError::PlayerPanicked(id)),
        None => Ok(outcomes),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::MemoryLogs;

    fn pack(values: &[u32], player_count: usize) -> Pack {
        Pack::from_cards(values.iter().map(|&v| Card::new(v)).collect(), player_count).unwrap()
    }

    #[test]
    fn test_pack_player_count_mismatch() {
        let p = pack(&[1; 16], 2);
        let err = Game::with_logs(GameConfig::new(4), &p, MemoryLogs::new()).err().unwrap();
        assert!(matches!(err, GameError::InvalidPackSize { actual: 16, expected: 32 }));
    }

    #[test]
    fn test_deserialized_pack_is_validated_before_play() {
        let err = serde_json::from_str::<Pack>(r#"{"cards":[1,2],"player_count":1}"#).unwrap_err();
        assert!(err.to_string().contains("expected 8"));

        let json = serde_json::to_string(&pack(&[1, 1, 1, 1, 2, 3, 4, 5], 1)).unwrap();
        let p: Pack = serde_json::from_str(&json).unwrap();
        let report = Game::with_logs(GameConfig::new(1), &p, MemoryLogs::new())
            .unwrap()
            .run()
            .unwrap();
        assert_eq!(report.winner(), Some(PlayerId::new(1)));
    }

    #[test]
    fn test_single_player_immediate_win() {
        let p = pack(&[1, 1, 1, 1, 2, 3, 4, 5], 1);
        let logs = MemoryLogs::new();
        let report = Game::with_logs(GameConfig::new(1), &p, logs.clone())
            .unwrap()
            .run()
            .unwrap();

        assert_eq!(report.winner(), Some(PlayerId::new(1)));
        assert_eq!(report.players[0].turns, 0);
        assert_eq!(
            logs.deck_lines(DeckId::new(1)),
            vec!["deck1 contents: 2 3 4 5"]
        );
    }

    #[test]
    fn test_report_serialization() {
        let p = pack(&[1, 1, 1, 1, 2, 3, 4, 5], 1);
        let report = Game::with_logs(GameConfig::new(1), &p, MemoryLogs::new())
            .unwrap()
            .run()
            .unwrap();

        let json = serde_json::to_string(&report).unwrap();
        let deserialized: GameReport = serde_json::from_str(&json).unwrap();
        assert_eq!(report, deserialized);
    }
}
