//! Core value types and the objective trait.
//!
//! [`Candidate`] and [`Bounds`] are plain-value types with no identity
//! beyond their coordinates; the DE engine copies them freely. The
//! [`Objective`] trait is the seam between the generic engine and a
//! concrete optimization problem.

use rand::Rng;

/// A point in the 2D search space.
///
/// Candidates are compared only through their fitness; the engine never
/// inspects coordinates except to clamp them into [`Bounds`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Candidate {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Candidate {
    /// Creates a candidate at `(x, y)`.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another candidate.
    pub fn distance(&self, other: &Candidate) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// Axis-aligned rectangular search bounds.
///
/// Every candidate the engine stores satisfies
/// `x_min <= x <= x_max` and `y_min <= y <= y_max`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    /// Lower x limit.
    pub x_min: f64,
    /// Upper x limit.
    pub x_max: f64,
    /// Lower y limit.
    pub y_min: f64,
    /// Upper y limit.
    pub y_max: f64,
}

impl Bounds {
    /// Creates bounds from per-axis limits.
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// Returns whether the candidate lies within the bounds (inclusive).
    pub fn contains(&self, c: &Candidate) -> bool {
        c.x >= self.x_min && c.x <= self.x_max && c.y >= self.y_min && c.y <= self.y_max
    }

    /// Clamps a candidate into the bounds, independently per axis.
    ///
    /// Pure and total; clamping an already-bounded candidate is a no-op,
    /// so the operation is idempotent.
    pub fn clamp(&self, c: Candidate) -> Candidate {
        Candidate {
            x: c.x.clamp(self.x_min, self.x_max),
            y: c.y.clamp(self.y_min, self.y_max),
        }
    }

    /// Draws a candidate uniformly from the bounded rectangle.
    ///
    /// Each coordinate is sampled independently over its axis range
    /// (inclusive, so degenerate single-point axes remain total).
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Candidate {
        Candidate {
            x: rng.random_range(self.x_min..=self.x_max),
            y: rng.random_range(self.y_min..=self.y_max),
        }
    }
}

/// Maps a candidate to a scalar fitness. Lower is better (minimization).
///
/// Implementations must be pure with respect to a run: the engine may
/// evaluate the same candidate repeatedly and expects the same value.
/// `Send + Sync` is required so batch evaluation can fan out across
/// threads when the `parallel` feature is enabled.
///
/// # Implementing
///
/// ```
/// use diffevo2d::{Candidate, Objective};
///
/// struct SumAbs;
///
/// impl Objective for SumAbs {
///     fn evaluate(&self, c: &Candidate) -> f64 {
///         c.x.abs() + c.y.abs()
///     }
/// }
/// ```
pub trait Objective: Send + Sync {
    /// Evaluates a candidate. Lower values are better.
    fn evaluate(&self, candidate: &Candidate) -> f64;
}

// ============================================================================
// Tests
// ============================================================================
