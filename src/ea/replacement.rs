//! Replacement strategies: merging evaluated children into the population.
//!
//! Both strategies remove exactly one member per inserted child, so the
//! population size is unchanged for any number of children.

use super::population::{worst_position, Population};
use crate::individual::Individual;
use rand::Rng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Replacement strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Replacement {
    /// Overwrite the population's worst member (first occurrence on ties).
    Worst,

    /// Shuffle the population, remove the worst of the first
    /// `tournament_size` members by position, append the child.
    #[default]
    Tournament,
}

impl Replacement {
    /// Inserts every child, preserving `population.len()`.
    ///
    /// # Panics
    /// Panics if `population` is empty and `children` is not.
    pub fn apply<R: Rng>(
        &self,
        population: &mut Population,
        children: Vec<Individual>,
        tournament_size: usize,
        rng: &mut R,
    ) {
        for child in children {
            match self {
                Replacement::Worst => worst(population, child),
                Replacement::Tournament => tournament(population, child, tournament_size, rng),
            }
        }
    }
}

fn worst(population: &mut Population, child: Individual) {
    let idx = population
        .worst_index()
        .expect("cannot replace into an empty population");
    trace!(index = idx, removed = population.as_slice()[idx].fitness(), "worst replacement");
    population.replace(idx, child);
}

fn tournament<R: Rng>(population: &mut Population, child: Individual, k: usize, rng: &mut R) {
    assert!(
        !population.is_empty(),
        "cannot replace into an empty population"
    );
    population.shuffle(rng);
    let k = k.clamp(1, population.len());
    let idx = worst_position(population.as_slice()[..k].iter()).unwrap_or(0);
    let removed = population.remove(idx);
    trace!(index = idx, removed = removed.fitness(), "tournament replacement");
    population.push(child);
}
