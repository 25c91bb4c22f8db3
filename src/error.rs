//! Error type shared by every optimizer in the crate.
//!
//! All variants are fatal to a run: the optimizers never retry and never use
//! errors for normal control flow.

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised when a precondition is violated or an evaluation fails.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("EmptyGenotype: genotype dimension must be at least 1")]
    EmptyGenotype,

    #[error("InvalidGeneRange: min must be finite and smaller than max. min={min}, max={max}")]
    InvalidGeneRange { min: f64, max: f64 },

    #[error("InvalidConfig: {0}")]
    InvalidConfig(String),

    #[error("EmptyWeights: cannot build a sampler from an empty weight vector")]
    EmptyWeights,

    #[error("NegativeWeight: weight at index {index} is {value}")]
    NegativeWeight { index: usize, value: f64 },

    #[error("ZeroWeightMass: weights must have positive, finite total mass")]
    ZeroWeightMass,

    #[error("NanFitness: evaluator returned NaN")]
    NanFitness,
}

impl Error {
    pub(crate) fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }
}
