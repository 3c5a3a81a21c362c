//! Pattern matching.
//!
//! Patterns match literally: there are no wildcards,
//! and matching is case-sensitive.

use core::ops::Range;
use rand::{seq::SliceRandom, Rng};

/// Return all positions in `state` where `pattern` starts.
///
/// Occurrences may overlap, so `"aa"` occurs twice in `"aaa"`.
/// Positions are byte offsets at character boundaries.
///
/// ~~~
/// # use thue::matching::occurrences;
/// assert_eq!(occurrences("abab", "ab"), vec![0, 2]);
/// assert_eq!(occurrences("aaa", "aa"), vec![0, 1]);
/// assert!(occurrences("a", "ab").is_empty());
/// ~~~
pub fn occurrences(state: &str, pattern: &str) -> Vec<usize> {
    if state.len() < pattern.len() {
        return Vec::new();
    }
    let last = state.len() - pattern.len();
    state
        .char_indices()
        .map(|(i, _)| i)
        .take_while(|i| *i <= last)
        .filter(|i| state[*i..].starts_with(pattern))
        .collect()
}

/// Pick one of the given positions uniformly at random.
pub fn choose<R: Rng + ?Sized>(positions: &[usize], rng: &mut R) -> Option<usize> {
    positions.choose(rng).copied()
}

/// Return `state` with the given range replaced by `output`.
pub fn splice(state: &str, range: Range<usize>, output: &str) -> String {
    let mut new = String::with_capacity(state.len() - range.len() + output.len());
    new.push_str(&state[..range.start]);
    new.push_str(output);
    new.push_str(&state[range.end..]);
    new
}
