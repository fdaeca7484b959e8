//! One-time dealing of a pack into hands and decks.
//!
//! Runs single-threaded before any player starts:
//! 1. Four rounds of one card per player, player 1 first, into the hands
//! 2. The remaining `4N` cards round-robin into the decks, deck 1 first

use crate::core::card::Card;
use crate::core::config::{CARDS_PER_PLAYER, HAND_SIZE};
use crate::core::error::GameError;
use crate::core::player::{DeckId, PlayerId, PlayerMap};
use crate::zones::{Deck, Hand};

/// Dealt hands and deck contents, ready to be handed to the players.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deal {
    /// Four-card starting hand per player.
    pub hands: PlayerMap<Hand>,

    /// Deck contents, indexed by `DeckId::index`, top card first.
    pub decks: Vec<Vec<Card>>,
}

impl Deal {
    /// Number of players dealt to.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.hands.player_count()
    }

    /// Total cards across all hands and decks.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.hands.values().map(Hand::len).sum::<usize>()
            + self.decks.iter().map(Vec::len).sum::<usize>()
    }

    /// Build the shared decks from the dealt contents.
    #[must_use]
    pub fn build_decks(&self) -> Vec<Deck> {
        DeckId::all(self.decks.len())
            .zip(&self.decks)
            .map(|(id, cards)| Deck::with_cards(id, cards.iter().copied()))
            .collect()
    }
}

/// Deal `cards` to `player_count` players.
///
/// Fails with `InvalidPackSize` unless there are exactly `8N` cards.
pub fn deal(cards: &[Card], player_count: usize) -> Result<Deal, GameError> {
    let expected = player_count * CARDS_PER_PLAYER;
    if player_count == 0 || cards.len() != expected {
        return Err(GameError::InvalidPackSize {
            actual: cards.len(),
            expected,
        });
    }

    let (hand_cards, deck_cards) = cards.split_at(player_count * HAND_SIZE);

    let mut hands: PlayerMap<Hand> = PlayerMap::with_default(player_count);
    for (i, &card) in hand_cards.iter().enumerate() {
        hands[PlayerId::new((i % player_count) as u32 + 1)].push(card);
    }

    let mut decks = vec![Vec::with_capacity(HAND_SIZE); player_count];
    for (i, &card) in deck_cards.iter().enumerate() {
        decks[i % player_count].push(card);
    }

    Ok(Deal { hands, decks })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(values: impl IntoIterator<Item = u32>) -> Vec<Card> {
        values.into_iter().map(Card::new).collect()
    }

    #[test]
    fn test_round_robin_hands_and_decks() {
        // 2 players: values 1..=16
        let deal = deal(&cards(1..=16), 2).unwrap();

        assert_eq!(deal.hands[PlayerId::new(1)].cards(), cards([1, 3, 5, 7]).as_slice());
        assert_eq!(deal.hands[PlayerId::new(2)].cards(), cards([2, 4, 6, 8]).as_slice());
        assert_eq!(deal.decks[0], cards([9, 11, 13, 15]));
        assert_eq!(deal.decks[1], cards([10, 12, 14, 16]));
        assert_eq!(deal.total_cards(), 16);
    }

    #[test]
    fn test_single_player() {
        let deal = deal(&cards(1..=8), 1).unwrap();
        assert_eq!(deal.hands[PlayerId::new(1)].cards(), cards(1..=4).as_slice());
        assert_eq!(deal.decks, vec![cards(5..=8)]);
    }

    #[test]
    fn test_wrong_size() {
        assert!(matches!(
            deal(&cards(1..=30), 4),
            Err(GameError::InvalidPackSize { actual: 30, expected: 32 })
        ));
        assert!(matches!(
            deal(&[], 0),
            Err(GameError::InvalidPackSize { actual: 0, expected: 0 })
        ));
    }

    #[test]
    fn test_build_decks() {
        let deal = deal(&cards(1..=24), 3).unwrap();
        let decks = deal.build_decks();

        assert_eq!(decks.len(), 3);
        for (i, deck) in decks.iter().enumerate() {
            assert_eq!(deck.id().index(), i);
            assert_eq!(deck.contents(), deal.decks[i]);
        }
    }
}
