//! A player's private hand.
//!
//! Hands are owned by a single player thread and need no locking. During
//! play a hand holds four cards, or five between a draw and its discard,
//! so the backing `SmallVec` never spills to the heap.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::card::{format_cards, Card};
use crate::core::config::HAND_SIZE;

/// Ordered hand of cards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: SmallVec<[Card; HAND_SIZE + 1]>,
}

impl Hand {
    /// Create an empty hand.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a card at the end of the hand.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Remove the card at `index`, shifting later cards left.
    ///
    /// Returns `None` if `index` is out of range.
    pub fn remove(&mut self, index: usize) -> Option<Card> {
        if index < self.cards.len() {
            Some(self.cards.remove(index))
        } else {
            None
        }
    }

    /// Number of cards held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards in hand order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Index of the first card whose value differs from `keep`.
    #[must_use]
    pub fn position_not(&self, keep: Card) -> Option<usize> {
        self.cards.iter().position(|&c| c != keep)
    }

    /// Check whether every card in the hand equals `card`.
    #[must_use]
    pub fn all_equal_to(&self, card: Card) -> bool {
        self.cards.iter().all(|&c| c == card)
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&format_cards(&self.cards))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand(values: &[u32]) -> Hand {
        values.iter().map(|&v| Card::new(v)).collect()
    }

    #[test]
    fn test_push_remove() {
        let mut h = hand(&[1, 2, 3]);
        h.push(Card::new(4));
        assert_eq!(h.len(), 4);

        assert_eq!(h.remove(1), Some(Card::new(2)));
        assert_eq!(h, hand(&[1, 3, 4]));
        assert_eq!(h.remove(10), None);
    }

    #[test]
    fn test_position_not() {
        let h = hand(&[2, 2, 5, 2]);
        assert_eq!(h.position_not(Card::new(2)), Some(2));
        assert_eq!(h.position_not(Card::new(5)), Some(0));
        assert_eq!(hand(&[3, 3]).position_not(Card::new(3)), None);
    }

    #[test]
    fn test_all_equal_to() {
        assert!(hand(&[1, 1, 1, 1]).all_equal_to(Card::new(1)));
        assert!(!hand(&[1, 1, 2, 1]).all_equal_to(Card::new(1)));
    }

    #[test]
    fn test_display() {
        assert_eq!(hand(&[4, 1, 12, 3]).to_string(), "4 1 12 3");
        assert_eq!(Hand::new().to_string(), "");
        assert!(Hand::new().is_empty());
    }
}
