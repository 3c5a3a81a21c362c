//! Random traversal order of rules.

use rand::Rng;

/// Permute `items` uniformly at random.
///
/// This is the Fisher-Yates shuffle:
/// every one of the `n!` orders is equally likely.
pub fn permute<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}
