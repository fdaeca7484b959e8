//! Shared, lock-guarded decks.
//!
//! A `Deck` is a FIFO queue of cards: discards go in at the bottom,
//! draws come off the top. In the ring each deck is touched by exactly two
//! threads (its owner draws, the owner's left neighbour discards), and
//! every operation takes the deck's own mutex, so all operations on one
//! deck are linearizable. No operation ever holds two deck locks.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::core::card::Card;
use crate::core::error::EmptyDeck;
use crate::core::player::DeckId;

/// Thread-safe FIFO deck of cards.
///
/// ```
/// use card_ring::core::{Card, DeckId};
/// use card_ring::zones::Deck;
///
/// let deck = Deck::new(DeckId::new(1));
/// deck.insert_at_bottom(Card::new(3));
/// deck.insert_at_bottom(Card::new(5));
///
/// assert_eq!(deck.draw_from_top(), Ok(Card::new(3)));
/// assert_eq!(deck.size(), 1);
/// ```
#[derive(Debug)]
pub struct Deck {
    id: DeckId,
    cards: Mutex<VecDeque<Card>>,
}

impl Deck {
    /// Create an empty deck.
    #[must_use]
    pub fn new(id: DeckId) -> Self {
        Self {
            id,
            cards: Mutex::new(VecDeque::new()),
        }
    }

    /// Create a deck holding `cards`, first card on top.
    #[must_use]
    pub fn with_cards(id: DeckId, cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            id,
            cards: Mutex::new(cards.into_iter().collect()),
        }
    }

    /// The deck's identifier.
    #[must_use]
    pub fn id(&self) -> DeckId {
        self.id
    }

    /// Append a card to the bottom of the deck.
    pub fn insert_at_bottom(&self, card: Card) {
        self.lock().push_back(card);
    }

    /// Remove and return the top card.
    ///
    /// The emptiness check and the removal happen under one lock, so a
    /// concurrent discard can never make this observe a half-updated deck.
    pub fn draw_from_top(&self) -> Result<Card, EmptyDeck> {
        self.lock().pop_front().ok_or(EmptyDeck(self.id))
    }

    /// Check whether the deck has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Number of cards in the deck.
    #[must_use]
    pub fn size(&self) -> usize {
        self.lock().len()
    }

    /// Snapshot of the deck, top card first.
    #[must_use]
    pub fn contents(&self) -> Vec<Card> {
        self.lock().iter().copied().collect()
    }

    // A panicking holder leaves the queue in a consistent state (every
    // mutation is a single push or pop), so poisoning is ignored.
    fn lock(&self) -> MutexGuard<'_, VecDeque<Card>> {
        self.cards.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(values: &[u32]) -> Vec<Card> {
        values.iter().map(|&v| Card::new(v)).collect()
    }

    #[test]
    fn test_fifo_order() {
        let deck = Deck::new(DeckId::new(1));
        for card in cards(&[1, 2, 3]) {
            deck.insert_at_bottom(card);
        }

        assert_eq!(deck.draw_from_top(), Ok(Card::new(1)));
        assert_eq!(deck.draw_from_top(), Ok(Card::new(2)));
        deck.insert_at_bottom(Card::new(9));
        assert_eq!(deck.contents(), cards(&[3, 9]));
    }

    #[test]
    fn test_draw_from_empty() {
        let deck = Deck::new(DeckId::new(4));
        assert!(deck.is_empty());
        assert_eq!(deck.draw_from_top(), Err(EmptyDeck(DeckId::new(4))));
        assert_eq!(deck.size(), 0);
    }

    #[test]
    fn test_with_cards() {
        let deck = Deck::with_cards(DeckId::new(2), cards(&[4, 5]));
        assert_eq!(deck.id(), DeckId::new(2));
        assert_eq!(deck.size(), 2);
        assert!(!deck.is_empty());
        assert_eq!(deck.draw_from_top(), Ok(Card::new(4)));
    }

    #[test]
    fn test_contents_is_snapshot() {
        let deck = Deck::with_cards(DeckId::new(1), cards(&[1, 2]));
        let snapshot = deck.contents();
        deck.insert_at_bottom(Card::new(3));

        assert_eq!(snapshot, cards(&[1, 2]));
        assert_eq!(deck.size(), 3);
    }

    #[test]
    fn test_poisoned_lock_still_usable() {
        use std::sync::Arc;

        let deck = Arc::new(Deck::with_cards(DeckId::new(1), cards(&[1])));
        let d = Arc::clone(&deck);
        let _ = std::thread::spawn(move || {
            let _guard = d.cards.lock().unwrap();
            panic!("holder dies");
        })
        .join();

        assert_eq!(deck.size(), 1);
        assert_eq!(deck.draw_from_top(), Ok(Card::new(1)));
    }
}
