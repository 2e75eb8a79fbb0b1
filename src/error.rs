//! Error types for the DE engine.

use thiserror::Error;

/// Errors reported by the DE engine.
///
/// All variants are detected before the optimization loop starts; the
/// loop itself is total (numeric singularities surface as infinite
/// fitness values, not errors).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DeError {
    /// The run configuration cannot support a valid optimization run.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}
