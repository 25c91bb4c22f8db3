//! SA configuration.

use crate::error::{Error, Result};
use crate::individual::GeneRange;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for the Simulated Annealing optimizer.
///
/// # Examples
///
/// ```
/// use u_neuroevo::sa::SaConfig;
///
/// let config = SaConfig::new(10)
///     .with_initial_temperature(100.0)
///     .with_cooling_rate(0.01)
///     .with_max_evaluations(5_000)
///     .with_seed(3);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SaConfig {
    /// Genotype length.
    pub dim: usize,

    /// Number of proposals. One evaluation each, plus one for the start.
    pub max_evaluations: usize,

    /// Range for the initial genes.
    pub gene_range: GeneRange,

    /// Initial temperature. Higher values allow more uphill moves.
    pub initial_temperature: f64,

    /// Geometric cooling rate: `T *= 1 - cooling_rate` after every proposal.
    pub cooling_rate: f64,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl SaConfig {
    /// Creates a configuration for genotypes of length `dim`.
    pub fn new(dim: usize) -> Self {
        Self {
            dim,
            max_evaluations: 20_000,
            gene_range: GeneRange::default(),
            initial_temperature: 100_000.0,
            cooling_rate: 0.0011,
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

    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
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
        if !(self.initial_temperature > 0.0 && self.initial_temperature.is_finite()) {
            return Err(Error::invalid_config(format!(
                "initial_temperature must be positive, got {}",
                self.initial_temperature
            )));
        }
        if !(0.0..1.0).contains(&self.cooling_rate) {
            return Err(Error::invalid_config(format!(
                "cooling_rate must be in [0, 1), got {}",
                self.cooling_rate
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
        let config = SaConfig::new(4);
        assert_eq!(config.max_evaluations, 20_000);
        assert!((config.initial_temperature - 100_000.0).abs() < 1e-10);
        assert!((config.cooling_rate - 0.0011).abs() < 1e-12);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_empty_genotype() {
        assert_eq!(SaConfig::new(0).validate(), Err(Error::EmptyGenotype));
    }

    #[test]
    fn test_validate_bad_temperature() {
        let config = SaConfig::new(2).with_initial_temperature(-1.0);
        assert!(config.validate().is_err());
        let config = SaConfig::new(2).with_initial_temperature(f64::INFINITY);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_bad_cooling_rate() {
        assert!(SaConfig::new(2).with_cooling_rate(1.0).validate().is_err());
        assert!(SaConfig::new(2).with_cooling_rate(-0.5).validate().is_err());
    }

    #[test]
    fn test_zero_budget_is_valid() {
        assert!(SaConfig::new(2).with_max_evaluations(0).validate().is_ok());
    }
}
