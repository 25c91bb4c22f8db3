//! Hill climber execution loop.

use super::config::HcConfig;
use crate::ea::mutation;
use crate::error::Result;
use crate::evaluator::{CountingEvaluator, Evaluator, GenerationStats};
use crate::individual::Individual;
use crate::random::rng_from;
use tracing::{debug, info, instrument};

/// Result of a hill-climbing run.
#[derive(Debug, Clone)]
pub struct HcResult {
    pub best: Individual,
    pub best_fitness: f64,
    /// Candidates tried.
    pub iterations: usize,
    /// Fitness evaluations consumed (`iterations + 1`).
    pub evaluations: usize,
    /// Number of candidates that replaced the best.
    pub improvements: usize,
    /// Best fitness after the start and after every improvement.
    pub fitness_history: Vec<f64>,
}

/// Executes the hill climber.
pub struct HcRunner;

impl HcRunner {
    /// Runs hill climbing.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the evaluator
    /// produces NaN.
    #[instrument(
        level = "info",
        skip_all,
        fields(dim = config.dim, max_evaluations = config.max_evaluations)
    )]
    pub fn run<E: Evaluator + ?Sized>(evaluator: &E, config: &HcConfig) -> Result<HcResult> {
        config.validate()?;
        let mut rng = rng_from(config.seed);
        let mut counter = CountingEvaluator::new(evaluator);

        let mut best = Individual::random(config.dim, &config.gene_range, &mut rng);
        counter.evaluate(&mut best)?;
        info!(initial_fitness = best.fitness(), "starting hill climb");

        let mut improvements = 0usize;
        let mut fitness_history = vec![best.fitness()];

        for iteration in 1..=config.max_evaluations {
            let mut candidate = best.clone();
            mutation::standard(
                &mut candidate,
                config.mutation_rate,
                config.mutation_change,
                &mut rng,
            );
            counter.evaluate(&mut candidate)?;

            if candidate.fitness() < best.fitness() {
                debug!(iteration, from = best.fitness(), to = candidate.fitness(), "improved");
                best = candidate;
                improvements += 1;
                fitness_history.push(best.fitness());
            }

            let stats = GenerationStats {
                generation: iteration,
                evaluations: counter.evaluations(),
                best_fitness: best.fitness(),
                mean_fitness: best.fitness(),
                temperature: None,
            };
            evaluator.on_generation(&stats, &best);
        }

        info!(best = best.fitness(), improvements, "hill climb finished");

        Ok(HcResult {
            best_fitness: best.fitness(),
            best,
            iterations: config.max_evaluations,
            evaluations: counter.evaluations(),
            improvements,
            fitness_history,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sphere(genes: &[f64]) -> f64 {
        genes.iter().map(|g| g * g).sum()
    }

    #[test]
    fn test_hc_improves_sphere() {
        let config = HcConfig::new(5)
            .with_max_evaluations(3_000)
            .with_mutation_rate(0.5)
            .with_mutation_change(0.05)
            .with_seed(42);
        let result = HcRunner::run(&sphere, &config).unwrap();
        assert!(result.improvements > 0);
        assert!(result.best_fitness < result.fitness_history[0]);
        assert_eq!(result.evaluations, 3_001);
    }

    #[test]
    fn test_hc_history_strictly_decreasing() {
        let config = HcConfig::new(4)
            .with_max_evaluations(1_000)
            .with_mutation_rate(0.3)
            .with_seed(3);
        let result = HcRunner::run(&sphere, &config).unwrap();
        assert_eq!(result.fitness_history.len(), result.improvements + 1);
        for w in result.fitness_history.windows(2) {
            assert!(w[1] < w[0]);
        }
        assert_eq!(*result.fitness_history.last().unwrap(), result.best_fitness);
    }

    #[test]
    fn test_hc_zero_rate_never_moves() {
        let config = HcConfig::new(4)
            .with_max_evaluations(200)
            .with_mutation_rate(0.0)
            .with_seed(3);
        let result = HcRunner::run(&sphere, &config).unwrap();
        assert_eq!(result.improvements, 0);
        assert_eq!(result.fitness_history.len(), 1);
    }

    #[test]
    fn test_hc_nan_fitness_aborts() {
        let nan = |_: &[f64]| f64::NAN;
        let config = HcConfig::new(2).with_seed(1);
        assert!(HcRunner::run(&nan, &config).is_err());
    }
}
