//! Stochastic hill climbing over a single weight vector.
//!
//! The simplest baseline of the crate: perturb a copy of the best individual
//! with standard mutation and keep it only if it is strictly better.

mod config;
mod runner;

pub use config::HcConfig;
pub use runner::{HcResult, HcRunner};
