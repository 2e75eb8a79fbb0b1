//! Differential Evolution over bounded 2D search spaces.
//!
//! Implements the classic DE/rand/1 scheme — population initialization,
//! difference-vector mutation, per-axis binomial crossover, and greedy
//! one-to-one selection — specialized to two-dimensional box-bounded
//! domains. Two objectives ship with the crate:
//!
//! - **Product**: the algebraic benchmark `f(p) = x · y`.
//! - **Potential field**: obstacle repulsion plus goal attraction,
//!   used to bias a path-planning candidate away from a circular
//!   obstacle and toward a goal point.
//!
//! Any other objective plugs in by implementing [`Objective`].
//!
//! # Quick start
//!
//! ```
//! use diffevo2d::{Bounds, DeConfig, DeRunner, Product};
//!
//! let config = DeConfig::default()
//!     .with_bounds(Bounds::new(-5.0, 5.0, -5.0, 5.0))
//!     .with_population_size(20)
//!     .with_max_generations(10)
//!     .with_seed(42);
//!
//! let result = DeRunner::run(&Product, &config).unwrap();
//! assert!(result.best_fitness <= result.fitness_history[0]);
//! ```
//!
//! # Key types
//!
//! - [`DeConfig`]: run parameters (bounds, population size, generations,
//!   mutation factor, crossover rate)
//! - [`DeRunner`]: executes the generational loop
//! - [`DeResult`]: final population, fitness vector, and statistics
//! - [`Objective`]: the problem seam — maps a [`Candidate`] to a scalar
//!   fitness (lower is better)
//!
//! # Features
//!
//! - `parallel`: batch fitness evaluation via rayon
//! - `serde`: `Serialize`/`Deserialize` on configuration and value types

mod config;
mod error;
mod operators;
mod runner;
mod types;

pub mod objective;
pub mod random;

pub use config::DeConfig;
pub use error::DeError;
pub use objective::{PotentialField, Product};
pub use operators::{binomial_crossover, differential_mutation, CrossoverAxis};
pub use runner::{evaluate_all, DeResult, DeRunner};
pub use types::{Bounds, Candidate, Objective};
