//! Population initialization strategies.
//!
//! Every strategy returns exactly `population_size` evaluated individuals.

use super::population::Population;
use crate::error::Result;
use crate::evaluator::{CountingEvaluator, Evaluator};
use crate::individual::{GeneRange, Individual};
use rand::Rng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Initialization strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Initialization {
    /// `N` fresh random individuals.
    Random,

    /// `N + oversample` fresh individuals, evaluated, trimmed to the best `N`.
    #[default]
    Augmented,

    /// Per slot: one random individual and its gene-wise negation; the
    /// lower-fitness one is kept (the negation on ties).
    PositiveNegative,
}

/// Parameters needed to build the first population.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InitParams {
    pub dim: usize,
    pub population_size: usize,
    pub gene_range: GeneRange,
    /// Extra individuals drawn by [`Initialization::Augmented`].
    pub oversample: usize,
}

impl Initialization {
    /// Builds and evaluates the initial population.
    pub fn initialize<E, R>(
        &self,
        params: &InitParams,
        evaluator: &mut CountingEvaluator<'_, E>,
        rng: &mut R,
    ) -> Result<Population>
    where
        E: Evaluator + ?Sized,
        R: Rng,
    {
        let population = match self {
            Initialization::Random => {
                let mut individuals = fresh(params.population_size, params, rng);
                evaluator.evaluate_all(&mut individuals)?;
                Population::new(individuals)
            }
            Initialization::Augmented => {
                let mut individuals = fresh(params.population_size + params.oversample, params, rng);
                evaluator.evaluate_all(&mut individuals)?;
                let mut population = Population::new(individuals);
                population.keep_best(params.population_size);
                population
            }
            Initialization::PositiveNegative => {
                let mut population = Population::with_capacity(params.population_size);
                for _ in 0..params.population_size {
                    let mut positive = Individual::random(params.dim, &params.gene_range, rng);
                    let mut negative = positive.negated();
                    evaluator.evaluate(&mut positive)?;
                    evaluator.evaluate(&mut negative)?;
                    if positive.fitness() < negative.fitness() {
                        population.push(positive);
                    } else {
                        population.push(negative);
                    }
                }
                population
            }
        };

        debug!(
            strategy = ?self,
            size = population.len(),
            evaluations = evaluator.evaluations(),
            "initialized population"
        );
        Ok(population)
    }
}

fn fresh<R: Rng>(count: usize, params: &InitParams, rng: &mut R) -> Vec<Individual> {
    (0..count)
        .map(|_| Individual::random(params.dim, &params.gene_range, rng))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    fn sphere(genes: &[f64]) -> f64 {
        genes.iter().map(|g| g * g).sum()
    }

    /// Favors positive first genes, so negation matters.
    fn prefers_positive(genes: &[f64]) -> f64 {
        -genes[0]
    }

    fn params() -> InitParams {
        InitParams {
            dim: 4,
            population_size: 10,
            gene_range: GeneRange::default(),
            oversample: 50,
        }
    }

    #[test]
    fn test_random_size_and_budget() {
        let mut rng = create_rng(42);
        let mut eval = CountingEvaluator::new(&sphere);
        let pop = Initialization::Random
            .initialize(&params(), &mut eval, &mut rng)
            .unwrap();
        assert_eq!(pop.len(), 10);
        assert_eq!(eval.evaluations(), 10);
        assert!(pop.iter().all(|i| i.is_evaluated() && i.dim() == 4));
    }

    #[test]
    fn test_augmented_keeps_best_sorted() {
        let mut rng = create_rng(42);
        let mut eval = CountingEvaluator::new(&sphere);
        let pop = Initialization::Augmented
            .initialize(&params(), &mut eval, &mut rng)
            .unwrap();
        assert_eq!(pop.len(), 10);
        assert_eq!(eval.evaluations(), 60);
        for w in pop.as_slice().windows(2) {
            assert!(w[0].fitness() <= w[1].fitness());
        }
    }

    #[test]
    fn test_augmented_beats_random_with_same_seed() {
        let mut eval = CountingEvaluator::new(&sphere);
        let random = Initialization::Random
            .initialize(&params(), &mut eval, &mut create_rng(5))
            .unwrap();
        let augmented = Initialization::Augmented
            .initialize(&params(), &mut eval, &mut create_rng(5))
            .unwrap();
        assert!(augmented.best().unwrap().fitness() <= random.best().unwrap().fitness());
    }

    #[test]
    fn test_positive_negative_picks_better_sign() {
        let mut rng = create_rng(42);
        let mut eval = CountingEvaluator::new(&prefers_positive);
        let pop = Initialization::PositiveNegative
            .initialize(&params(), &mut eval, &mut rng)
            .unwrap();
        assert_eq!(pop.len(), 10);
        assert_eq!(eval.evaluations(), 20);
        assert!(pop.iter().all(|i| i.genes()[0] >= 0.0));
    }

    #[test]
    fn test_positive_negative_tie_keeps_negation() {
        let flat = |_: &[f64]| 0.5;
        let mut eval = CountingEvaluator::new(&flat);
        let pop = Initialization::PositiveNegative
            .initialize(&params(), &mut eval, &mut create_rng(42))
            .unwrap();

        // negation draws nothing, so slot i holds the i-th draw, negated
        let mut rng = create_rng(42);
        for kept in pop.iter() {
            let drawn = Individual::random(4, &GeneRange::default(), &mut rng);
            assert_eq!(kept.genes(), drawn.negated().genes());
            assert_eq!(kept.fitness(), 0.5);
        }
    }
}
