//! Steady-state evolutionary algorithm over real-valued weight vectors.
//!
//! Each generation selects two parents, recombines them into one or two
//! children, mutates and evaluates the children, and merges them back into a
//! fixed-size population. Every step is a closed strategy enum chosen once in
//! [`EaConfig`].
//!
//! # Key Types
//!
//! - [`EaConfig`]: population size, evaluation budget, strategy choices
//! - [`EaRunner`]: executes the generational loop
//! - [`EaResult`]: best individual, history and final population
//! - [`Population`]: ordered collection of evaluated individuals
//!
//! # Submodules
//!
//! - [`crossover`]: real-vector recombination operators
//! - [`mutation`]: gene perturbation, constrained descent and annealing swaps
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Eiben & Smith (2015), *Introduction to Evolutionary Computing*

mod config;
pub mod crossover;
mod init;
pub mod mutation;
mod population;
mod replacement;
mod runner;
mod selection;

pub use config::EaConfig;
pub use crossover::Crossover;
pub use init::{InitParams, Initialization};
pub use mutation::{Mutation, MutationParams};
pub use population::Population;
pub use replacement::Replacement;
pub use runner::{EaResult, EaRunner};
pub use selection::{RankBasis, Selection};
