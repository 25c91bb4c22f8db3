//! Contract with the external fitness collaborator.
//!
//! The optimizers only need a function from a weight vector to a scalar
//! fitness (lower is better). [`CountingEvaluator`] wraps it to enforce the
//! evaluation budget and to reject NaN scores.

use crate::error::{Error, Result};
use crate::individual::Individual;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Progress snapshot emitted after each generation (or iteration).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationStats {
    /// 1-based generation or iteration number.
    pub generation: usize,
    /// Fitness evaluations consumed so far, including initialization.
    pub evaluations: usize,
    /// Best fitness found so far.
    pub best_fitness: f64,
    /// Mean fitness of the current population (or current individual).
    pub mean_fitness: f64,
    /// Current temperature, for optimizers that anneal.
    pub temperature: Option<f64>,
}

/// Scores a weight vector. Lower fitness is better.
///
/// Implementations must be deterministic for a given gene vector: the
/// constrained and annealing mutations re-evaluate and compare results.
///
/// Any `Fn(&[f64]) -> f64 + Sync` closure is an evaluator.
///
/// # Examples
///
/// ```
/// use u_neuroevo::Evaluator;
///
/// let sphere = |genes: &[f64]| genes.iter().map(|g| g * g).sum::<f64>();
/// assert_eq!(sphere.evaluate(&[1.0, 2.0]), 5.0);
/// ```
pub trait Evaluator: Sync {
    /// Computes the fitness of `genes`.
    fn evaluate(&self, genes: &[f64]) -> f64;

    /// Called after each generation with the current best individual.
    ///
    /// Useful for logging or statistics output. The default is a no-op.
    fn on_generation(&self, _stats: &GenerationStats, _best: &Individual) {}
}

impl<F> Evaluator for F
where
    F: Fn(&[f64]) -> f64 + Sync,
{
    fn evaluate(&self, genes: &[f64]) -> f64 {
        self(genes)
    }
}

/// Evaluator wrapper that counts every call.
///
/// The count is the global budget counter of a run: initialization, mutation
/// probes and child evaluation all go through it.
pub struct CountingEvaluator<'a, E: Evaluator + ?Sized> {
    inner: &'a E,
    evaluations: usize,
}

impl<'a, E: Evaluator + ?Sized> CountingEvaluator<'a, E> {
    pub fn new(inner: &'a E) -> Self {
        Self {
            inner,
            evaluations: 0,
        }
    }

    /// Evaluations performed so far.
    pub fn evaluations(&self) -> usize {
        self.evaluations
    }

    /// Evaluates `individual`, stores and returns its fitness.
    ///
    /// # Errors
    ///
    /// [`Error::NanFitness`] if the evaluator returns NaN.
    pub fn evaluate(&mut self, individual: &mut Individual) -> Result<f64> {
        let fitness = self.inner.evaluate(individual.genes());
        self.evaluations += 1;
        if fitness.is_nan() {
            return Err(Error::NanFitness);
        }
        individual.set_fitness(fitness);
        Ok(fitness)
    }

    /// Evaluates a batch. With the `parallel` feature the batch is scored
    /// on the rayon pool; no randomness is consumed either way.
    pub fn evaluate_all(&mut self, individuals: &mut [Individual]) -> Result<()> {
        let inner = self.inner;

        #[cfg(feature = "parallel")]
        let scores: Vec<f64> = individuals
            .par_iter()
            .map(|ind| inner.evaluate(ind.genes()))
            .collect();

        #[cfg(not(feature = "parallel"))]
        let scores: Vec<f64> = individuals
            .iter()
            .map(|ind| inner.evaluate(ind.genes()))
            .collect();

        self.evaluations += scores.len();
        for (ind, fitness) in individuals.iter_mut().zip(scores) {
            if fitness.is_nan() {
                return Err(Error::NanFitness);
            }
            ind.set_fitness(fitness);
        }
        Ok(())
    }

    /// Evaluates only the individuals whose fitness is not yet cached.
    pub fn evaluate_pending(&mut self, individuals: &mut [Individual]) -> Result<()> {
        for ind in individuals.iter_mut().filter(|ind| !ind.is_evaluated()) {
            self.evaluate(ind)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sphere(genes: &[f64]) -> f64 {
        genes.iter().map(|g| g * g).sum()
    }

    #[test]
    fn test_counts_every_call() {
        let mut eval = CountingEvaluator::new(&sphere);
        let mut ind = Individual::new(vec![1.0, 2.0]);
        assert_eq!(eval.evaluate(&mut ind).unwrap(), 5.0);
        assert_eq!(ind.fitness(), 5.0);
        eval.evaluate(&mut ind).unwrap();
        assert_eq!(eval.evaluations(), 2);
    }

    #[test]
    fn test_evaluate_all() {
        let mut eval = CountingEvaluator::new(&sphere);
        let mut batch = vec![
            Individual::new(vec![1.0]),
            Individual::new(vec![2.0]),
            Individual::new(vec![3.0]),
        ];
        eval.evaluate_all(&mut batch).unwrap();
        assert_eq!(eval.evaluations(), 3);
        let fits: Vec<f64> = batch.iter().map(|i| i.fitness()).collect();
        assert_eq!(fits, vec![1.0, 4.0, 9.0]);
    }

    #[test]
    fn test_evaluate_pending_skips_cached() {
        let mut eval = CountingEvaluator::new(&sphere);
        let mut cached = Individual::new(vec![3.0]);
        cached.set_fitness(-1.0);
        let mut batch = vec![cached, Individual::new(vec![2.0])];
        eval.evaluate_pending(&mut batch).unwrap();
        assert_eq!(eval.evaluations(), 1);
        assert_eq!(batch[0].fitness(), -1.0);
        assert_eq!(batch[1].fitness(), 4.0);
    }

    #[test]
    fn test_nan_is_fatal() {
        let broken = |_: &[f64]| f64::NAN;
        let mut eval = CountingEvaluator::new(&broken);
        let mut ind = Individual::new(vec![0.0]);
        assert_eq!(eval.evaluate(&mut ind), Err(Error::NanFitness));
        assert!(!ind.is_evaluated());

        let mut batch = vec![Individual::new(vec![0.0])];
        assert_eq!(eval.evaluate_all(&mut batch), Err(Error::NanFitness));
    }
}
