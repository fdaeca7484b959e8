//! Game log line vocabulary.
//!
//! Every line a player or deck log receives is rendered here, one event
//! per line. The winner's closing line reads `final hand`, everyone
//! else's reads `hand`.

use crate::core::card::{format_cards, Card};
use crate::core::player::{DeckId, PlayerId};
use crate::zones::Hand;

/// One event in a player's log.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerEvent<'a> {
    /// Hand as dealt, before the first turn.
    InitialHand(&'a Hand),
    /// A card drawn from the player's source deck.
    Draws { card: Card, deck: DeckId },
    /// A card discarded to the player's sink deck.
    Discards { card: Card, deck: DeckId },
    /// Hand after a discard.
    CurrentHand(&'a Hand),
    /// The player collected four of its own number.
    Wins,
    /// The player left play.
    Exits,
    /// Closing hand; `won` selects the winner's phrasing.
    FinalHand { hand: &'a Hand, won: bool },
}

impl PlayerEvent<'_> {
    /// Render the event as a log line (without newline).
    #[must_use]
    pub fn render(&self, player: PlayerId) -> String {
        let n = player.number();
        match self {
            PlayerEvent::InitialHand(hand) => format!("player {n} initial hand: {hand}"),
            PlayerEvent::Draws { card, deck } => {
                format!("player {n} draws a {card} from deck {}", deck.number())
            }
            PlayerEvent::Discards { card, deck } => {
                format!("player {n} discards a {card} to deck {}", deck.number())
            }
            PlayerEvent::CurrentHand(hand) => format!("player {n} current hand is {hand}"),
            PlayerEvent::Wins => format!("player {n} wins"),
            PlayerEvent::Exits => format!("player {n} exits"),
            PlayerEvent::FinalHand { hand, won: true } => format!("player {n} final hand: {hand}"),
            PlayerEvent::FinalHand { hand, won: false } => format!("player {n} hand: {hand}"),
        }
    }
}

/// The single line written to a deck's log after the game.
#[must_use]
pub fn deck_contents_line(deck: DeckId, contents: &[Card]) -> String {
    format!("deck{} contents: {}", deck.number(), format_cards(contents))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand(values: &[u32]) -> Hand {
        values.iter().map(|&v| Card::new(v)).collect()
    }

    #[test]
    fn test_player_lines() {
        let p = PlayerId::new(2);
        let h = hand(&[2, 2, 3, 2]);
        let deck = DeckId::new(3);

        assert_eq!(PlayerEvent::InitialHand(&h).render(p), "player 2 initial hand: 2 2 3 2");
        assert_eq!(
            PlayerEvent::Draws { card: Card::new(5), deck: DeckId::new(2) }.render(p),
            "player 2 draws a 5 from deck 2"
        );
        assert_eq!(
            PlayerEvent::Discards { card: Card::new(3), deck }.render(p),
            "player 2 discards a 3 to deck 3"
        );
        assert_eq!(PlayerEvent::CurrentHand(&h).render(p), "player 2 current hand is 2 2 3 2");
        assert_eq!(PlayerEvent::Wins.render(p), "player 2 wins");
        assert_eq!(PlayerEvent::Exits.render(p), "player 2 exits");
    }

    #[test]
    fn test_final_hand_phrasing() {
        let p = PlayerId::new(1);
        let h = hand(&[1, 1, 1, 1]);
        assert_eq!(
            PlayerEvent::FinalHand { hand: &h, won: true }.render(p),
            "player 1 final hand: 1 1 1 1"
        );
        assert_eq!(
            PlayerEvent::FinalHand { hand: &h, won: false }.render(p),
            "player 1 hand: 1 1 1 1"
        );
    }

    #[test]
    fn test_deck_line() {
        let contents = [Card::new(4), Card::new(1)];
        assert_eq!(deck_contents_line(DeckId::new(2), &contents), "deck2 contents: 4 1");
        assert_eq!(deck_contents_line(DeckId::new(1), &[]), "deck1 contents: ");
    }
}
