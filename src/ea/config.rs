//! Evolutionary algorithm configuration.
//!
//! [`EaConfig`] holds every parameter of the generational loop, including
//! the strategy chosen for each step. Strategies are picked once here and
//! dispatched per generation without re-reading any other state.

use super::crossover::Crossover;
use super::init::{InitParams, Initialization};
use super::mutation::{Mutation, MutationParams};
use super::replacement::Replacement;
use super::selection::Selection;
use crate::error::{Error, Result};
use crate::individual::GeneRange;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for the evolutionary algorithm.
///
/// # Defaults
///
/// ```
/// use u_neuroevo::ea::EaConfig;
///
/// let config = EaConfig::new(30);
/// assert_eq!(config.population_size, 40);
/// assert_eq!(config.max_evaluations, 20_000);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_neuroevo::ea::{Crossover, EaConfig, Mutation, Replacement, Selection};
///
/// let config = EaConfig::new(30)
///     .with_population_size(60)
///     .with_selection(Selection::Tournament)
///     .with_tournament_size(5)
///     .with_crossover(Crossover::Uniform)
///     .with_mutation(Mutation::Standard)
///     .with_replacement(Replacement::Worst)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EaConfig {
    /// Genotype length (number of network weights).
    pub dim: usize,

    /// Number of individuals kept between generations.
    pub population_size: usize,

    /// Total fitness evaluations allowed, initialization included.
    ///
    /// The loop stops once this many evaluations have been consumed; the
    /// generation in progress may overshoot it.
    pub max_evaluations: usize,

    /// Range for freshly drawn genes.
    pub gene_range: GeneRange,

    /// Per-gene mutation probability (0.0–1.0).
    pub mutation_rate: f64,

    /// Step size of a single gene perturbation.
    pub mutation_change: f64,

    /// Sample size for tournament selection and tournament replacement.
    pub tournament_size: usize,

    /// Starting temperature for annealing mutation.
    pub initial_temperature: f64,

    /// Geometric cooling rate: `T *= 1 - cooling_rate` once per generation.
    pub cooling_rate: f64,

    /// Extra individuals drawn by augmented initialization.
    pub augmented_oversample: usize,

    pub initialization: Initialization,
    pub selection: Selection,
    pub crossover: Crossover,
    pub mutation: Mutation,
    pub replacement: Replacement,

    /// Random seed for reproducibility. `None` uses a random seed.
    pub seed: Option<u64>,
}

impl EaConfig {
    /// Creates a configuration for genotypes of length `dim`.
    pub fn new(dim: usize) -> Self {
        Self {
            dim,
            population_size: 40,
            max_evaluations: 20_000,
            gene_range: GeneRange::default(),
            mutation_rate: 0.04,
            mutation_change: 0.1,
            tournament_size: 10,
            initial_temperature: 10_000.0,
            cooling_rate: 0.003,
            augmented_oversample: 5_000,
            initialization: Initialization::default(),
            selection: Selection::default(),
            crossover: Crossover::default(),
            mutation: Mutation::default(),
            replacement: Replacement::default(),
            seed: None,
        }
    }

    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
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

    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
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

    pub fn with_augmented_oversample(mut self, n: usize) -> Self {
        self.augmented_oversample = n;
        self
    }

    pub fn with_initialization(mut self, init: Initialization) -> Self {
        self.initialization = init;
        self
    }

    pub fn with_selection(mut self, sel: Selection) -> Self {
        self.selection = sel;
        self
    }

    pub fn with_crossover(mut self, crossover: Crossover) -> Self {
        self.crossover = crossover;
        self
    }

    pub fn with_mutation(mut self, mutation: Mutation) -> Self {
        self.mutation = mutation;
        self
    }

    pub fn with_replacement(mut self, replacement: Replacement) -> Self {
        self.replacement = replacement;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub(crate) fn init_params(&self) -> InitParams {
        InitParams {
            dim: self.dim,
            population_size: self.population_size,
            gene_range: self.gene_range,
            oversample: self.augmented_oversample,
        }
    }

    pub(crate) fn mutation_params(&self) -> MutationParams {
        MutationParams {
            rate: self.mutation_rate,
            change: self.mutation_change,
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.dim == 0 {
            return Err(Error::EmptyGenotype);
        }
        self.gene_range.validate()?;
        if self.population_size == 0 {
            return Err(Error::invalid_config("population_size must be at least 1"));
        }
        if self.max_evaluations == 0 {
            return Err(Error::invalid_config("max_evaluations must be at least 1"));
        }
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
        if self.tournament_size == 0 {
            return Err(Error::invalid_config("tournament_size must be at least 1"));
        }
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
