//! Neuroevolution optimizers for fixed-length real-valued weight vectors.
//!
//! The crate searches for network weights that minimize a fitness score
//! supplied by an external [`Evaluator`]. Three optimizers share the same
//! evaluator contract and evaluation-budget accounting:
//!
//! - **Evolutionary Algorithm (EA)**: steady-state population loop with
//!   pluggable initialization, selection, crossover, mutation and
//!   replacement strategies.
//! - **Simulated Annealing (SA)**: single trajectory of gene-swap proposals
//!   accepted by the Metropolis criterion under geometric cooling.
//! - **Hill Climbing (HC)**: greedy standard-mutation baseline.
//!
//! Supporting modules provide the alias-method [`sampler`], the shared
//! [`metropolis`] rule and seeded [`random`] generators.
//!
//! # Architecture
//!
//! The crate knows nothing about networks or simulations. The genotype is a
//! plain `Vec<f64>` and lower fitness is always better. Logging goes through
//! `tracing`; no subscriber is installed here.
//!
//! # Example
//!
//! ```
//! use u_neuroevo::ea::{EaConfig, EaRunner, Initialization};
//!
//! let sphere = |w: &[f64]| w.iter().map(|x| x * x).sum::<f64>();
//! let config = EaConfig::new(4)
//!     .with_max_evaluations(400)
//!     .with_initialization(Initialization::Random)
//!     .with_seed(1);
//! let result = EaRunner::run(&sphere, &config).unwrap();
//! assert!(result.best_fitness.is_finite());
//! ```

pub mod ea;
pub mod error;
pub mod evaluator;
pub mod hc;
pub mod individual;
pub mod metropolis;
pub mod random;
pub mod sa;
pub mod sampler;

pub use error::{Error, Result};
pub use evaluator::{CountingEvaluator, Evaluator, GenerationStats};
pub use individual::{GeneRange, Individual};
