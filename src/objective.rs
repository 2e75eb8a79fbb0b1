//! Built-in objective functions.
//!
//! Two interchangeable minimization objectives:
//!
//! - [`Product`]: the algebraic benchmark `f(p) = x · y`.
//! - [`PotentialField`]: obstacle repulsion plus goal attraction for
//!   path-planning candidate selection.
//!
//! Both are pure and total; the potential field's singularity at the
//! obstacle center is mapped to `f64::INFINITY` (worse than any finite
//! fitness) rather than left to raw float division.

use crate::types::{Candidate, Objective};

/// The product benchmark objective: `f(p) = x · y`.
///
/// Over a symmetric box `[-a, a] × [-a, a]` the minimum `-a²` sits at
/// the two corners where the coordinates have opposite signs.
#[derive(Debug, Clone, Copy, Default)]
pub struct Product;

impl Objective for Product {
    fn evaluate(&self, candidate: &Candidate) -> f64 {
        candidate.x * candidate.y
    }
}

/// Potential-field objective for path-planning candidate selection.
///
/// ```text
/// f(p) = repulsion_weight / distance(p, obstacle)
///      + attraction_weight · distance(p, goal)
/// ```
///
/// Low fitness means far from the obstacle (small repulsion) and close
/// to the goal (small attraction). Minimizing the sum biases candidates
/// away from the obstacle and toward the goal.
///
/// # Weighting
///
/// [`reference()`](Self::reference) carries a dominant repulsion weight
/// and a vanishingly small attraction weight, so in practice it ranks
/// candidates almost purely by obstacle clearance. That imbalance is
/// deliberate; raise `attraction_weight` to pull candidates toward the
/// goal as well.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PotentialField {
    /// Obstacle center.
    pub obstacle: Candidate,
    /// Obstacle radius. Carried for rendering consumers (the reference
    /// circle around the obstacle); the fitness itself only uses the
    /// center point.
    pub obstacle_radius: f64,
    /// Goal point.
    pub goal: Candidate,
    /// Repulsion weight (K1): scales the inverse obstacle distance.
    pub repulsion_weight: f64,
    /// Attraction weight (K2): scales the goal distance.
    pub attraction_weight: f64,
}

impl PotentialField {
    /// Creates a potential field from its parts.
    pub fn new(
        obstacle: Candidate,
        obstacle_radius: f64,
        goal: Candidate,
        repulsion_weight: f64,
        attraction_weight: f64,
    ) -> Self {
        Self {
            obstacle,
            obstacle_radius,
            goal,
            repulsion_weight,
            attraction_weight,
        }
    }

    /// The 50×50 planner scenario: obstacle at (25, 25) with radius 3,
    /// goal at (45, 45), repulsion-dominated weighting.
    pub fn reference() -> Self {
        Self {
            obstacle: Candidate::new(25.0, 25.0),
            obstacle_radius: 3.0,
            goal: Candidate::new(45.0, 45.0),
            repulsion_weight: 0.1,
            attraction_weight: 1e-20,
        }
    }
}

impl Objective for PotentialField {
    fn evaluate(&self, candidate: &Candidate) -> f64 {
        let obstacle_dist = candidate.distance(&self.obstacle);
        if obstacle_dist == 0.0 {
            // Candidate sits exactly on the obstacle center. Infinite
            // fitness loses every greedy comparison against a finite
            // candidate, which is exactly the behavior wanted here.
            return f64::INFINITY;
        }
        self.repulsion_weight / obstacle_dist
            + self.attraction_weight * candidate.distance(&self.goal)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_values() {
        assert_eq!(Product.evaluate(&Candidate::new(3.0, -4.0)), -12.0);
        assert_eq!(Product.evaluate(&Candidate::new(0.0, 17.0)), 0.0);
        assert_eq!(Product.evaluate(&Candidate::new(-5.0, -5.0)), 25.0);
    }

    #[test]
    fn test_potential_field_singularity() {
        let field = PotentialField::reference();
        let on_center = field.obstacle;
        assert_eq!(field.evaluate(&on_center), f64::INFINITY);
    }

    #[test]
    fn test_singularity_loses_greedy_comparison() {
        let field = PotentialField::reference();
        let singular = field.evaluate(&field.obstacle);
        let finite = field.evaluate(&Candidate::new(1.0, 1.0));
        assert!(finite < singular);
    }

    #[test]
    fn test_repulsion_decreases_with_distance() {
        let field = PotentialField::reference();
        let near = field.evaluate(&Candidate::new(26.0, 25.0));
        let far = field.evaluate(&Candidate::new(45.0, 45.0));
        assert!(far < near, "clearance should lower fitness: {far} vs {near}");
    }

    #[test]
    fn test_attraction_breaks_ties() {
        // Equal obstacle clearance, different goal distance: only the
        // attraction term distinguishes the two candidates.
        let field = PotentialField::new(
            Candidate::new(25.0, 25.0),
            3.0,
            Candidate::new(45.0, 45.0),
            0.1,
            0.5,
        );
        let toward_goal = field.evaluate(&Candidate::new(35.0, 35.0));
        let away_from_goal = field.evaluate(&Candidate::new(15.0, 15.0));
        assert!(toward_goal < away_from_goal);
    }

    #[test]
    fn test_reference_weighting_is_repulsion_dominated() {
        let field = PotentialField::reference();
        let a = Candidate::new(10.0, 10.0);
        let repulsion = field.repulsion_weight / a.distance(&field.obstacle);
        let attraction = field.attraction_weight * a.distance(&field.goal);
        assert!(attraction < repulsion * 1e-10);
    }

    #[test]
    fn test_known_value() {
        // Obstacle distance 5, goal distance ignored by a zero weight.
        let field = PotentialField::new(
            Candidate::new(0.0, 0.0),
            1.0,
            Candidate::new(10.0, 0.0),
            1.0,
            0.0,
        );
        let f = field.evaluate(&Candidate::new(3.0, 4.0));
        assert!((f - 0.2).abs() < 1e-12);
    }
}
