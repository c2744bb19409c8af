//! Тесты RNG-реализаций:
//! - детерминированность DeterministicRng (shuffle и pick)
//! - различие seed → различие перемешиваний
//! - перемешивание без потерь и дублей

use highcard_engine::domain::{Card, Deck};
use highcard_engine::engine::RandomSource;
use highcard_engine::infra::{DeterministicRng, SystemRng};

#[test]
fn deterministic_rng_same_seed_same_shuffle() {
    let mut r1 = DeterministicRng::from_seed(123);
    let mut r2 = DeterministicRng::from_seed(123);

    let mut a: Vec<u32> = (0..52).collect();
    let mut b: Vec<u32> = (0..52).collect();

    r1.shuffle(&mut a);
    r2.shuffle(&mut b);

    assert_eq!(a, b, "same seed must produce identical shuffle");
}

#[test]
fn deterministic_rng_different_seeds_different_shuffle() {
    let mut r1 = DeterministicRng::from_seed(111);
    let mut r2 = DeterministicRng::from_seed(222);

    let mut a: Vec<u32> = (0..52).collect();
    let mut b: Vec<u32> = (0..52).collect();

    r1.shuffle(&mut a);
    r2.shuffle(&mut b);

    assert_ne!(a, b, "different seeds must produce different shuffle");
}

#[test]
fn shuffle_is_a_permutation() {
    let mut rng = DeterministicRng::from_seed(7);
    let mut values: Vec<u32> = (0..52).collect();
    rng.shuffle(&mut values);

    let mut sorted = values.clone();
    sorted.sort_unstable();
    assert_eq!(sorted, (0..52).collect::<Vec<u32>>());
}

#[test]
fn shuffled_deck_keeps_all_52_cards() {
    let mut deck = Deck::standard();
    let mut rng = SystemRng::default();
    rng.shuffle(&mut deck.cards);

    assert_eq!(deck.len(), 52);
    let unique: std::collections::HashSet<Card> = deck.iter().copied().collect();
    assert_eq!(unique.len(), 52);
}

#[test]
fn deterministic_pick_is_reproducible() {
    let mut r1 = DeterministicRng::from_seed(42);
    let mut r2 = DeterministicRng::from_seed(42);

    let picks_1: Vec<usize> = (0..20).map(|_| r1.pick(5)).collect();
    let picks_2: Vec<usize> = (0..20).map(|_| r2.pick(5)).collect();
    assert_eq!(picks_1, picks_2);
    assert!(picks_1.iter().all(|&i| i < 5));
}

#[test]
fn pick_on_degenerate_lengths() {
    let mut rng = DeterministicRng::from_seed(1);
    assert_eq!(rng.pick(0), 0);
    assert_eq!(rng.pick(1), 0);

    let mut rng = SystemRng::default();
    assert_eq!(rng.pick(0), 0);
    assert_eq!(rng.pick(1), 0);
    assert!(rng.pick(3) < 3);
}
