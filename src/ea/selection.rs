//! Parent selection strategies.
//!
//! Every strategy returns an owned copy of the chosen individual, so the
//! caller may recombine and mutate it without touching the population.
//! All strategies assume **minimization**.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"
//! - Baker (1985), "Adaptive Selection Methods for Genetic Algorithms"

use super::population::Population;
use crate::error::Result;
use crate::individual::Individual;
use crate::sampler::AliasTable;
use rand::Rng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::trace;

/// How rank weights are assigned in [`Selection::Rank`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RankBasis {
    /// Weight `i + 1` for the individual at position `i` of the population,
    /// regardless of fitness. Later positions are drawn more often.
    #[default]
    InsertionOrder,

    /// Weight `N` for the best individual down to `1` for the worst
    /// (ties keep population order).
    Fitness,
}

/// Selection strategy for choosing parents.
///
/// # Examples
///
/// ```
/// use u_neuroevo::ea::{RankBasis, Selection};
///
/// let sel = Selection::Tournament;
/// let sel = Selection::Rank(RankBasis::Fitness);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Selection {
    /// Uniformly random member.
    #[default]
    Random,

    /// Shuffle the whole population, return the lowest-fitness member among
    /// the first `tournament_size`.
    ///
    /// The shuffle reorders the live population and consumes `N - 1` draws.
    Tournament,

    /// Fitness-proportionate selection with weight `1 - fitness`.
    ///
    /// **Precondition**: fitness roughly in `[0, 1]`; outside that range the
    /// weights stop being meaningful. If rounding prevents the running value
    /// from going negative the last member is returned.
    Roulette,

    /// Linear rank weights sampled through an [`AliasTable`].
    Rank(RankBasis),
}

impl Selection {
    /// Selects one parent and returns a copy of it.
    ///
    /// # Panics
    /// Panics if `population` is empty.
    pub fn select<R: Rng>(
        &self,
        population: &mut Population,
        tournament_size: usize,
        rng: &mut R,
    ) -> Result<Individual> {
        assert!(
            !population.is_empty(),
            "cannot select from empty population"
        );

        let idx = match self {
            Selection::Random => rng.random_range(0..population.len()),
            Selection::Tournament => tournament(population, tournament_size, rng),
            Selection::Roulette => roulette(population, rng),
            Selection::Rank(basis) => rank(population, *basis, rng)?,
        };
        trace!(strategy = ?self, index = idx, "selected parent");
        Ok(population.as_slice()[idx].clone())
    }
}

/// Shuffle, then the best of the first `k` (first occurrence wins ties).
fn tournament<R: Rng>(population: &mut Population, k: usize, rng: &mut R) -> usize {
    population.shuffle(rng);
    let k = k.clamp(1, population.len());

    let contestants = &population.as_slice()[..k];
    let mut best = 0;
    for (i, ind) in contestants.iter().enumerate().skip(1) {
        if ind.fitness() < contestants[best].fitness() {
            best = i;
        }
    }
    best
}

/// Roulette wheel over weights `1 - fitness`.
fn roulette<R: Rng>(population: &Population, rng: &mut R) -> usize {
    let sum: f64 = population.iter().map(|ind| 1.0 - ind.fitness()).sum();
    let mut r = sum * rng.random::<f64>();

    for (i, ind) in population.iter().enumerate() {
        r -= 1.0 - ind.fitness();
        if r < 0.0 {
            return i;
        }
    }

    population.len() - 1 // floating-point fallback
}

/// Rank selection through the alias method.
fn rank<R: Rng>(population: &Population, basis: RankBasis, rng: &mut R) -> Result<usize> {
    let n = population.len();
    let weights: Vec<f64> = (1..=n).map(|w| w as f64).collect();
    let table = AliasTable::new(&weights)?;
    let drawn = table.sample(rng);

    Ok(match basis {
        RankBasis::InsertionOrder => drawn,
        RankBasis::Fitness => {
            // worst first, so the best individual holds weight n
            let members = population.as_slice();
            let mut order: Vec<usize> = (0..n).collect();
            order.sort_by(|&a, &b| members[b].fitness().total_cmp(&members[a].fitness()));
            order[drawn]
        }
    })
}
