//! Simulated Annealing (SA) over a single weight vector.
//!
//! An alternative to the population-based loop: one individual follows a
//! long trajectory of gene-swap proposals, each accepted by the Metropolis
//! criterion at a temperature that cools geometrically after every step.
//! There is no population and no crossover.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Metropolis et al. (1953), "Equation of State Calculations by Fast
//!   Computing Machines"

mod config;
mod runner;

pub use config::SaConfig;
pub use runner::{SaResult, SaRunner};
