//! DE run configuration.
//!
//! [`DeConfig`] holds every parameter of a run. It is immutable once
//! handed to the runner: there is no hidden state shared between runs.

use crate::error::DeError;
use crate::types::Bounds;

/// Configuration for a Differential Evolution run.
///
/// # Defaults
///
/// ```
/// use diffevo2d::DeConfig;
///
/// let config = DeConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.max_generations, 500);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use diffevo2d::{Bounds, DeConfig};
///
/// let config = DeConfig::default()
///     .with_bounds(Bounds::new(0.0, 50.0, 0.0, 50.0))
///     .with_population_size(80)
///     .with_mutation_factor(0.3)
///     .with_crossover_rate(0.6)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeConfig {
    /// Axis-aligned search bounds. Every stored candidate stays inside.
    pub bounds: Bounds,

    /// Number of individuals in the population.
    ///
    /// Must be at least 4: each update draws three donors plus a
    /// crossover partner distinct from the excluded index.
    pub population_size: usize,

    /// Number of generations to run. The loop always runs exactly this
    /// many generations; there is no convergence-based early stop.
    pub max_generations: usize,

    /// Mutation scale factor F applied to the donor difference vector.
    ///
    /// Typical range: 0.3–1.0.
    pub mutation_factor: f64,

    /// Probability of a crossover event per individual update (0.0–1.0).
    ///
    /// When no event fires, the incumbent partner survives unchanged.
    pub crossover_rate: f64,

    /// Whether to evaluate batches in parallel using rayon.
    ///
    /// Only batch evaluation fans out; the generational loop itself is
    /// sequential because individuals updated earlier in a generation
    /// may serve as donors for later ones. Ignored unless the crate is
    /// built with the `parallel` feature.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for DeConfig {
    fn default() -> Self {
        Self {
            bounds: Bounds::new(-5.0, 5.0, -5.0, 5.0),
            population_size: 100,
            max_generations: 500,
            mutation_factor: 0.3,
            crossover_rate: 0.6,
            parallel: false,
            seed: None,
        }
    }
}

impl DeConfig {
    /// Sets the search bounds.
    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = bounds;
        self
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the mutation scale factor.
    pub fn with_mutation_factor(mut self, factor: f64) -> Self {
        self.mutation_factor = factor;
        self
    }

    /// Sets the crossover rate, clamped to `[0, 1]`.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Enables or disables parallel batch evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// The runner calls this before touching the population, so a
    /// degenerate configuration fails fast instead of looping forever
    /// in donor sampling or indexing out of range.
    pub fn validate(&self) -> Result<(), DeError> {
        if self.population_size < 4 {
            return Err(DeError::InvalidConfiguration(
                "population_size must be at least 4".into(),
            ));
        }
        if self.max_generations == 0 {
            return Err(DeError::InvalidConfiguration(
                "max_generations must be at least 1".into(),
            ));
        }
        if self.bounds.x_min > self.bounds.x_max {
            return Err(DeError::InvalidConfiguration(
                "bounds: x_min must not exceed x_max".into(),
            ));
        }
        if self.bounds.y_min > self.bounds.y_max {
            return Err(DeError::InvalidConfiguration(
                "bounds: y_min must not exceed y_max".into(),
            ));
        }
        if !self.mutation_factor.is_finite() || self.mutation_factor < 0.0 {
            return Err(DeError::InvalidConfiguration(
                "mutation_factor must be finite and non-negative".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.crossover_rate) {
            return Err(DeError::InvalidConfiguration(
                "crossover_rate must be within [0, 1]".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DeConfig::default();
        assert_eq!(config.bounds, Bounds::new(-5.0, 5.0, -5.0, 5.0));
        assert_eq!(config.population_size, 100);
        assert_eq!(config.max_generations, 500);
        assert!((config.mutation_factor - 0.3).abs() < 1e-12);
        assert!((config.crossover_rate - 0.6).abs() < 1e-12);
        assert!(!config.parallel);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_builder_pattern() {
        let config = DeConfig::default()
            .with_bounds(Bounds::new(0.0, 50.0, 0.0, 50.0))
            .with_population_size(80)
            .with_max_generations(1)
            .with_mutation_factor(0.5)
            .with_crossover_rate(0.9)
            .with_parallel(true)
            .with_seed(42);

        assert_eq!(config.bounds, Bounds::new(0.0, 50.0, 0.0, 50.0));
        assert_eq!(config.population_size, 80);
        assert_eq!(config.max_generations, 1);
        assert!((config.mutation_factor - 0.5).abs() < 1e-12);
        assert!((config.crossover_rate - 0.9).abs() < 1e-12);
        assert!(config.parallel);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_validate_ok() {
        assert!(DeConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_population_too_small() {
        for n in 0..4 {
            let config = DeConfig::default().with_population_size(n);
            assert!(config.validate().is_err(), "N={n} must be rejected");
        }
        assert!(DeConfig::default()
            .with_population_size(4)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_validate_zero_generations() {
        let config = DeConfig::default().with_max_generations(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_inverted_bounds() {
        let config = DeConfig::default().with_bounds(Bounds::new(5.0, -5.0, 0.0, 1.0));
        assert!(config.validate().is_err());

        let config = DeConfig::default().with_bounds(Bounds::new(0.0, 1.0, 5.0, -5.0));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_bad_mutation_factor() {
        let config = DeConfig::default().with_mutation_factor(f64::NAN);
        assert!(config.validate().is_err());

        let config = DeConfig::default().with_mutation_factor(-0.1);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_crossover_rate_clamped() {
        let config = DeConfig::default().with_crossover_rate(2.0);
        assert!((config.crossover_rate - 1.0).abs() < 1e-12);

        let config = DeConfig::default().with_crossover_rate(-0.5);
        assert!((config.crossover_rate - 0.0).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_point_bounds_allowed() {
        // A single-point search space is pointless but not invalid.
        let config = DeConfig::default().with_bounds(Bounds::new(1.0, 1.0, 2.0, 2.0));
        assert!(config.validate().is_ok());
    }
}
