//! Differential mutation and crossover operators.
//!
//! The DE/rand/1 scheme: a trial point is built from three donor
//! candidates as `a + F·(b − c)`, then probabilistically blended with an
//! incumbent per axis. Both operators are free functions over plain
//! values, generic in the RNG, and leave all index selection to the
//! caller.

use crate::types::{Bounds, Candidate};
use rand::Rng;

/// Builds a trial candidate from three donors: `a + factor · (b − c)`,
/// computed independently per axis, then clamped into `bounds`.
pub fn differential_mutation(
    a: &Candidate,
    b: &Candidate,
    c: &Candidate,
    factor: f64,
    bounds: &Bounds,
) -> Candidate {
    let trial = Candidate {
        x: a.x + factor * (b.x - c.x),
        y: a.y + factor * (b.y - c.y),
    };
    bounds.clamp(trial)
}

/// Which axes the crossover takes from the mutated candidate.
///
/// A three-way tagged choice rather than two independent per-axis coin
/// flips: [`Both`](CrossoverAxis::Both) is a distinct full-replacement
/// branch with the same ⅓ weight as each single-axis swap, so a
/// crossover event accepts the whole mutated candidate with probability
/// CR/3.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrossoverAxis {
    /// Take x from the mutated candidate, keep the incumbent's y.
    X,
    /// Keep the incumbent's x, take y from the mutated candidate.
    Y,
    /// Take the mutated candidate whole.
    Both,
}

impl CrossoverAxis {
    /// Draws one of the three branches uniformly.
    pub fn sample<R: Rng>(rng: &mut R) -> Self {
        match rng.random_range(0..3) {
            0 => CrossoverAxis::X,
            1 => CrossoverAxis::Y,
            _ => CrossoverAxis::Both,
        }
    }
}

/// Blends a mutated trial candidate with an incumbent.
///
/// With probability `1 − crossover_rate` the incumbent is returned
/// unchanged (no crossover event). Otherwise a [`CrossoverAxis`] is
/// drawn uniformly and the corresponding axes are taken from the
/// mutated candidate.
pub fn binomial_crossover<R: Rng>(
    mutated: &Candidate,
    incumbent: &Candidate,
    crossover_rate: f64,
    rng: &mut R,
) -> Candidate {
    if rng.random_range(0.0..1.0) >= crossover_rate {
        return *incumbent;
    }

    match CrossoverAxis::sample(rng) {
        CrossoverAxis::X => Candidate {
            x: mutated.x,
            y: incumbent.y,
        },
        CrossoverAxis::Y => Candidate {
            x: incumbent.x,
            y: mutated.y,
        },
        CrossoverAxis::Both => *mutated,
    }
}

// ============================================================================
// Tests
// ============================================================================
