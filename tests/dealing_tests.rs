//! Pack and dealing tests.
//!
//! Property tests check that dealing is round-robin and conserves cards
//! for any player count and pack contents.

use proptest::prelude::*;

use card_ring::core::{Card, GameError, PlayerId, CARDS_PER_PLAYER, HAND_SIZE};
use card_ring::setup::{deal, Pack};

fn pack_strategy() -> impl Strategy<Value = (usize, Vec<u32>)> {
    (1usize..=8).prop_flat_map(|n| (Just(n), prop::collection::vec(1u32..=12, n * CARDS_PER_PLAYER)))
}

proptest! {
    #[test]
    fn prop_deal_conserves_cards((n, values) in pack_strategy()) {
        let cards: Vec<Card> = values.iter().map(|&v| Card::new(v)).collect();
        let dealt = deal(&cards, n).unwrap();

        prop_assert_eq!(dealt.player_count(), n);
        prop_assert_eq!(dealt.total_cards(), n * CARDS_PER_PLAYER);
        for (_, hand) in dealt.hands.iter() {
            prop_assert_eq!(hand.len(), HAND_SIZE);
        }
        for deck in &dealt.decks {
            prop_assert_eq!(deck.len(), HAND_SIZE);
        }

        let mut before = values.clone();
        let mut after: Vec<u32> = dealt
            .hands
            .values()
            .flat_map(|h| h.cards().iter().map(|c| c.value()))
            .chain(dealt.decks.iter().flatten().map(|c| c.value()))
            .collect();
        before.sort_unstable();
        after.sort_unstable();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn prop_deal_is_round_robin((n, values) in pack_strategy()) {
        let cards: Vec<Card> = values.iter().map(|&v| Card::new(v)).collect();
        let dealt = deal(&cards, n).unwrap();

        for player in PlayerId::all(n) {
            let i = player.index();
            let expected: Vec<Card> = (0..HAND_SIZE).map(|k| cards[i + k * n]).collect();
            prop_assert_eq!(dealt.hands[player].cards(), expected.as_slice());

            let offset = n * HAND_SIZE;
            let expected_deck: Vec<Card> = (0..HAND_SIZE).map(|k| cards[offset + i + k * n]).collect();
            prop_assert_eq!(&dealt.decks[i], &expected_deck);
        }
    }

    #[test]
    fn prop_wrong_length_is_rejected(n in 1usize..=8, extra in 1usize..8) {
        let cards = vec![Card::new(1); n * CARDS_PER_PLAYER + extra];
        let is_size_error = matches!(deal(&cards, n), Err(GameError::InvalidPackSize { .. }));
        prop_assert!(is_size_error);
    }

    #[test]
    fn prop_generated_pack_round_trips(n in 1usize..=8, seed in any::<u64>()) {
        let pack = Pack::generate(n, seed).unwrap();
        prop_assert_eq!(pack.len(), n * CARDS_PER_PLAYER);
        let parsed = Pack::parse(&pack.to_text(), n).unwrap();
        prop_assert_eq!(parsed, pack);
    }
}

/// A 30-card pack for 4 players fails on size.
#[test]
fn test_thirty_card_pack_for_four_players() {
    let text: String = (0..30).map(|i| format!("{}\n", i % 4 + 1)).collect();
    let err = Pack::parse(&text, 4).unwrap_err();
    assert!(matches!(err, GameError::InvalidPackSize { actual: 30, expected: 32 }));
    assert!(err.is_startup_error());
}

/// A bad line is reported with its position, even in an otherwise valid pack.
#[test]
fn test_bad_line_reported() {
    let mut lines: Vec<String> = (0..8).map(|_| "1".to_string()).collect();
    lines[5] = "five".to_string();
    let err = Pack::parse(&lines.join("\n"), 1).unwrap_err();
    assert!(matches!(err, GameError::InvalidPackContents { line: 6, .. }));
}
