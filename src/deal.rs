use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_pcg::Pcg64;

use crate::board::{Gameboard, FIELD_SLOT_COUNT};
use crate::cards::{Card, Suit};
use crate::slots::{FieldSlot, WildcardSlot};

/// The full 36-card Nacbrac deck: per suit, four face cards plus one numeric
/// card of each value in 6..=10. Satisfies the composition invariant by
/// construction.
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(36);
    for suit in Suit::all() {
        for _ in 0..4 {
            deck.push(Card::new(0, suit));
        }
        for value in 6u8..=10 {
            deck.push(Card::new(value, suit));
        }
    }
    deck
}

/// Deterministic seeded deal: the shuffled deck lands in nine slots of four
/// with an empty wildcard slot. Equal seeds produce identical boards across
/// runs, which makes randomized tests reproducible.
pub fn deal(seed: u64) -> Gameboard {
    let mut deck = full_deck();
    let mut rng = Pcg64::seed_from_u64(seed);
    deck.shuffle(&mut rng);

    let mut field_slots: [FieldSlot; FIELD_SLOT_COUNT] = Default::default();
    for (i, chunk) in deck.chunks(4).enumerate() {
        field_slots[i] = FieldSlot::from_cards(chunk.to_vec());
    }
    Gameboard::new(WildcardSlot::new(), field_slots)
}
