use std::collections::HashSet;

use headsup_engine::cards::{Card, Rank, Suit};
use headsup_engine::deck::{new_deck, Deck};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

#[test]
fn new_deck_has_52_unique_cards_in_canonical_order() {
    let cards = new_deck();
    assert_eq!(cards.len(), 52);
    let set: HashSet<Card> = cards.iter().copied().collect();
    assert_eq!(set.len(), 52, "no (suit, rank) pair may repeat");

    assert_eq!(cards[0], Card::new(Rank::Two, Suit::Hearts));
    assert_eq!(cards[12], Card::new(Rank::Ace, Suit::Hearts));
    assert_eq!(cards[13], Card::new(Rank::Two, Suit::Diamonds));
    assert_eq!(cards[51], Card::new(Rank::Ace, Suit::Spades));
    assert_eq!(cards[51].value(), 14);
}

#[test]
fn shuffle_is_a_permutation_and_leaves_input_alone() {
    let original = Deck::new();
    let mut rng = ChaCha20Rng::seed_from_u64(99);
    let shuffled = original.shuffled(&mut rng);

    assert_eq!(original, Deck::new(), "input deck must not be mutated");
    assert_eq!(shuffled.remaining(), 52);
    let a: HashSet<Card> = original.cards().iter().copied().collect();
    let b: HashSet<Card> = shuffled.cards().iter().copied().collect();
    assert_eq!(a, b);
    assert_ne!(original.cards(), shuffled.cards());
}

#[test]
fn shuffle_is_deterministic_with_same_seed() {
    let d1 = Deck::new().shuffled(&mut ChaCha20Rng::seed_from_u64(12345));
    let d2 = Deck::new().shuffled(&mut ChaCha20Rng::seed_from_u64(12345));
    assert_eq!(d1, d2, "same seed must yield identical order");
}

#[test]
fn shuffle_differs_with_different_seed() {
    let d1 = Deck::new().shuffled(&mut ChaCha20Rng::seed_from_u64(1));
    let d2 = Deck::new().shuffled(&mut ChaCha20Rng::seed_from_u64(2));
    assert_ne!(
        d1, d2,
        "different seeds should produce different orders (high probability)"
    );
}

#[test]
fn full_deal_schedule_fits_in_one_deck() {
    let mut deck = Deck::new().shuffled(&mut ChaCha20Rng::seed_from_u64(777));
    let p1 = deck.deal(2).unwrap();
    let p2 = deck.deal(2).unwrap();
    let flop = deck.deal(3).unwrap();
    let turn = deck.deal(1).unwrap();
    let river = deck.deal(1).unwrap();
    assert_eq!(deck.remaining(), 52 - 9);

    let mut set = HashSet::new();
    for c in p1.iter().chain(&p2).chain(&flop).chain(&turn).chain(&river) {
        assert!(set.insert(*c), "card {} dealt twice", c);
    }
}
