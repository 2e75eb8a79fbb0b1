//! Random sampling protocols for the DE engine.
//!
//! All stochastic operations in this crate take a generic `R: Rng`,
//! so any generator plugs in: a seeded [`StdRng`] from [`create_rng`]
//! for reproducible runs, or a thread-local source for production use.
//!
//! Population indices are always drawn from the half-open range
//! `[0, n)`. The two rejection-loop protocols below drive donor and
//! partner selection in the generational loop.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Creates a deterministic RNG from a seed.
///
/// Two generators built from the same seed produce identical draw
/// sequences, which makes whole optimization runs reproducible.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Draws three donor indices from `[0, n)`.
///
/// Redraws only while all three indices collapse to a single value.
/// Triples with exactly two equal members are accepted: the difference
/// vector then degenerates to zero on one donor pair, which merely
/// yields a weaker perturbation, not an invalid one.
///
/// # Panics
/// Panics if `n < 2` (the rejection loop could not terminate).
pub fn choose_donors<R: Rng>(n: usize, rng: &mut R) -> (usize, usize, usize) {
    assert!(n >= 2, "donor sampling requires at least 2 individuals");

    loop {
        let r1 = rng.random_range(0..n);
        let r2 = rng.random_range(0..n);
        let r3 = rng.random_range(0..n);
        if !(r1 == r2 && r2 == r3) {
            return (r1, r2, r3);
        }
    }
}

/// Draws a single index from `[0, n)` that differs from `excluded`.
///
/// If `excluded >= n` it can never be drawn and the first sample is
/// returned as-is.
///
/// # Panics
/// Panics if `n == 0`, or if `n == 1` and `excluded == 0` (every draw
/// would be rejected).
pub fn choose_excluding<R: Rng>(n: usize, excluded: usize, rng: &mut R) -> usize {
    assert!(n > 0, "cannot sample from an empty range");
    assert!(
        n > 1 || excluded != 0,
        "cannot exclude the only available index"
    );

    loop {
        let r = rng.random_range(0..n);
        if r != excluded {
            return r;
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
