//! Pluggable string-hash strategies.
//!
//! The table hashes the *display form* of whatever selects a bucket (key or
//! alternate selector), so a strategy is just `&str -> u64`. Strategies are
//! injected values rather than free functions, which lets tests substitute
//! deterministic or deliberately colliding hashes.

/// A deterministic, total hash over string slices. Returning `u64` makes a
/// negative hash unrepresentable; the table reduces any magnitude modulo its
/// capacity.
pub trait HashStrategy {
    fn hash_str(&self, s: &str) -> u64;
}

/// Any `Fn(&str) -> u64` is a strategy. Handy in tests: `|_: &str| 0` forces
/// every selector into one bucket.
impl<F> HashStrategy for F
where
    F: Fn(&str) -> u64,
{
    fn hash_str(&self, s: &str) -> u64 {
        self(s)
    }
}

/// Sum of Unicode scalar values of the characters.
#[derive(Debug, Clone, Copy, Default)]
pub struct CharSum;

impl HashStrategy for CharSum {
    fn hash_str(&self, s: &str) -> u64 {
        // wrapping: the table reduces modulo capacity anyway
        s.chars().fold(0u64, |acc, c| acc.wrapping_add(c as u64))
    }
}

/// Position-weighted sum: `Σ (i + 1) * code(c)` over character index `i`.
/// Distinguishes anagrams, unlike [`CharSum`]. The crate default.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeightedCharSum;

impl HashStrategy for WeightedCharSum {
    fn hash_str(&self, s: &str) -> u64 {
        s.chars().enumerate().fold(0u64, |acc, (i, c)| {
            acc.wrapping_add((i as u64 + 1).wrapping_mul(c as u64))
        })
    }
}
