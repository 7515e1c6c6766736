//! Uniform shuffling of the card sequence

use rand::Rng;

use crate::game::cards::Card;

/// Shuffle cards in place with a Fisher-Yates permutation: iterate from
/// the last index down to 1, swapping with a uniformly random
/// earlier-or-equal index. Card identity and face values are untouched;
/// only the order changes.
pub fn shuffle_cards<R: Rng + ?Sized>(cards: &mut [Card], rng: &mut R) {
    for i in (1..cards.len()).rev() {
        let j = rng.gen_range(0..=i);
        cards.swap(i, j);
    }
}
