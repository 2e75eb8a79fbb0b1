//! DE generational loop execution.
//!
//! [`DeRunner`] orchestrates the complete run: initialization →
//! evaluation → (mutation → crossover → greedy replacement) per
//! individual per generation.

use crate::config::DeConfig;
use crate::error::DeError;
use crate::operators::{binomial_crossover, differential_mutation};
use crate::random::{self, create_rng};
use crate::types::{Candidate, Objective};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Result of a DE optimization run.
///
/// `population` and `fitness` are index-aligned: `fitness[i]` is the
/// objective value of `population[i]` as of its last accepted update.
#[derive(Debug, Clone)]
pub struct DeResult {
    /// Final population, one candidate per slot.
    pub population: Vec<Candidate>,

    /// Final fitness vector, index-aligned with `population`.
    pub fitness: Vec<f64>,

    /// The best candidate in the final population.
    pub best: Candidate,

    /// Fitness of the best candidate.
    pub best_fitness: f64,

    /// Number of generations actually executed.
    pub generations: usize,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Best fitness after initialization and after each generation.
    pub fitness_history: Vec<f64>,
}

/// Executes the DE generational loop.
///
/// # Usage
///
/// ```
/// use diffevo2d::{DeConfig, DeRunner, PotentialField};
///
/// let objective = PotentialField::reference();
/// let config = DeConfig::default()
///     .with_bounds(diffevo2d::Bounds::new(0.0, 50.0, 0.0, 50.0))
///     .with_population_size(80)
///     .with_max_generations(1)
///     .with_seed(42);
///
/// let result = DeRunner::run(&objective, &config).unwrap();
/// assert_eq!(result.population.len(), 80);
/// ```
pub struct DeRunner;

impl DeRunner {
    /// Runs the DE optimization.
    ///
    /// Fails fast with [`DeError::InvalidConfiguration`] before any
    /// population state exists; afterwards the loop is total and always
    /// runs exactly `max_generations` generations.
    pub fn run<O: Objective>(objective: &O, config: &DeConfig) -> Result<DeResult, DeError> {
        Self::run_with_cancel(objective, config, None)
    }

    /// Runs the DE optimization with an optional cancellation token.
    ///
    /// The flag is checked only at generation boundaries — the sole
    /// points where the population and fitness vector are mutually
    /// consistent and safe to hand back.
    pub fn run_with_cancel<O: Objective>(
        objective: &O,
        config: &DeConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<DeResult, DeError> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };

        let n = config.population_size;

        // Initialize
        let mut population: Vec<Candidate> =
            (0..n).map(|_| config.bounds.sample(&mut rng)).collect();
        let mut fitness = evaluate_all(objective, &population, config.parallel);

        let mut fitness_history = Vec::with_capacity(config.max_generations + 1);
        fitness_history.push(best_of(&fitness));

        let mut completed = 0usize;
        let mut cancelled = false;

        // Generational loop
        for generation in 0..config.max_generations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            for i in 0..n {
                let (d1, d2, d3) = random::choose_donors(n, &mut rng);
                let trial = differential_mutation(
                    &population[d1],
                    &population[d2],
                    &population[d3],
                    config.mutation_factor,
                    &config.bounds,
                );

                // The crossover partner excludes the generation counter
                // rather than the slot under update, decorrelating
                // partner choice from the slot being replaced.
                let partner = random::choose_excluding(n, generation, &mut rng);
                let candidate =
                    binomial_crossover(&trial, &population[partner], config.crossover_rate, &mut rng);

                // Greedy one-to-one replacement: a slot only ever improves.
                let value = objective.evaluate(&candidate);
                if value < fitness[i] {
                    population[i] = candidate;
                    fitness[i] = value;
                }
            }

            completed = generation + 1;
            fitness_history.push(best_of(&fitness));
        }

        let best_idx = best_index(&fitness);
        Ok(DeResult {
            best: population[best_idx],
            best_fitness: fitness[best_idx],
            population,
            fitness,
            generations: completed,
            cancelled,
            fitness_history,
        })
    }
}

/// Evaluates every candidate, preserving order.
///
/// With the `parallel` feature enabled and `parallel == true`, fans the
/// evaluations out across the rayon thread pool; otherwise evaluates
/// sequentially.
pub fn evaluate_all<O: Objective>(
    objective: &O,
    population: &[Candidate],
    parallel: bool,
) -> Vec<f64> {
    #[cfg(feature = "parallel")]
    {
        if parallel {
            return population
                .par_iter()
                .map(|c| objective.evaluate(c))
                .collect();
        }
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    population.iter().map(|c| objective.evaluate(c)).collect()
}

/// Lowest fitness value in the vector.
fn best_of(fitness: &[f64]) -> f64 {
    fitness[best_index(fitness)]
}

/// Index of the lowest fitness value.
fn best_index(fitness: &[f64]) -> usize {
    fitness
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(idx, _)| idx)
        .expect("population must not be empty")
}

// ============================================================================
// Tests
// ============================================================================
