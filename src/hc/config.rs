//! Hill climber configuration.

use crate::error::{Error, Result};
use crate::individual::GeneRange;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for the hill climber.
///
/// # Examples
///
/// ```
/// use u_neuroevo::hc::HcConfig;
///
/// let config = HcConfig::new(8).with_mutation_rate(0.25).with_seed(1);
/// assert_eq!(config.max_evaluations, 20_000);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HcConfig {
    /// Genotype length.
    pub dim: usize,

    /// Number of mutated candidates to try.
    pub max_evaluations: usize,

    /// Range for the initial genes.
    pub gene_range: GeneRange,

    /// Per-gene mutation probability (0.0–1.0).
    pub mutation_rate: f64,

    /// Step size of a single gene perturbation.
    pub mutation_change: f64,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl HcConfig {
    pub fn new(dim: usize) -> Self {
        Self {
            dim,
            max_evaluations: 20_000,
            gene_range: GeneRange::default(),
            mutation_rate: 0.04,
            mutation_change: 0.1,
            seed: None,
        }
    }

    pub fn with_max_evaluations(mut self, n: usize) -> Self {
        self.max_evaluations = n;
        self
    }

    pub fn with_gene_range(mut self, range: GeneRange) -> Self {
        self.gene_range = range;
        self
    }

    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    pub fn with_mutation_change(mut self, change: f64) -> Self {
        self.mutation_change = change;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.dim == 0 {
            return Err(Error::EmptyGenotype);
        }
        self.gene_range.validate()?;
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(Error::invalid_config(format!(
                "mutation_rate must be in [0, 1], got {}",
                self.mutation_rate
            )));
        }
        if !(self.mutation_change.is_finite() && self.mutation_change >= 0.0) {
            return Err(Error::invalid_config(format!(
                "mutation_change must be finite and non-negative, got {}",
                self.mutation_change
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HcConfig::new(3);
        assert!((config.mutation_rate - 0.04).abs() < 1e-12);
        assert!((config.mutation_change - 0.1).abs() < 1e-12);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate() {
        assert_eq!(HcConfig::new(0).validate(), Err(Error::EmptyGenotype));
        assert!(HcConfig::new(2).with_mutation_change(f64::NAN).validate().is_err());
        assert!(HcConfig::new(2)
            .with_gene_range(GeneRange { min: 2.0, max: 2.0 })
            .validate()
            .is_err());
    }
}
