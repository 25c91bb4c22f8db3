//! SA execution loop.

use super::config::SaConfig;
use crate::error::Result;
use crate::evaluator::{CountingEvaluator, Evaluator, GenerationStats};
use crate::individual::Individual;
use crate::metropolis;
use crate::random::rng_from;
use rand::Rng;
use tracing::{debug, info, instrument};

/// Proposals between two history samples and progress logs.
const HISTORY_INTERVAL: usize = 100;

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone)]
pub struct SaResult {
    /// The best individual found.
    pub best: Individual,

    /// Fitness of the best individual.
    pub best_fitness: f64,

    /// Number of proposals made.
    pub iterations: usize,

    /// Fitness evaluations consumed (`iterations + 1`).
    pub evaluations: usize,

    /// Temperature when the algorithm stopped.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of strictly improving moves.
    pub improving_moves: usize,

    /// Best fitness sampled at regular intervals for history tracking.
    pub fitness_history: Vec<f64>,
}

/// Executes the Simulated Annealing optimizer.
pub struct SaRunner;

impl SaRunner {
    /// Runs SA optimization.
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
    pub fn run<E: Evaluator + ?Sized>(evaluator: &E, config: &SaConfig) -> Result<SaResult> {
        config.validate()?;
        let mut rng = rng_from(config.seed);
        let mut counter = CountingEvaluator::new(evaluator);

        let mut current = Individual::random(config.dim, &config.gene_range, &mut rng);
        counter.evaluate(&mut current)?;
        let mut best = current.clone();

        info!(
            initial_fitness = current.fitness(),
            temperature = config.initial_temperature,
            "starting annealing run"
        );

        let mut temperature = config.initial_temperature;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut fitness_history = vec![best.fitness()];
        let n = config.dim;

        for iteration in 1..=config.max_evaluations {
            let mut candidate = current.clone();
            let i = rng.random_range(0..n);
            let j = rng.random_range(0..n);
            candidate.swap_genes(i, j);
            counter.evaluate(&mut candidate)?;

            if candidate.fitness() < current.fitness() {
                improving_moves += 1;
            }
            if metropolis::accept(current.fitness(), candidate.fitness(), temperature, &mut rng) {
                current = candidate;
                accepted_moves += 1;
            }
            if current.fitness() < best.fitness() {
                best = current.clone();
            }

            temperature = metropolis::cool(temperature, config.cooling_rate);

            let stats = GenerationStats {
                generation: iteration,
                evaluations: counter.evaluations(),
                best_fitness: best.fitness(),
                mean_fitness: current.fitness(),
                temperature: Some(temperature),
            };
            if iteration % HISTORY_INTERVAL == 0 {
                fitness_history.push(best.fitness());
                debug!(
                    iteration,
                    best = best.fitness(),
                    current = current.fitness(),
                    temperature,
                    accepted_moves,
                    "annealing progress"
                );
            }
            evaluator.on_generation(&stats, &best);
        }

        if fitness_history
            .last()
            .is_none_or(|&last| last != best.fitness())
        {
            fitness_history.push(best.fitness());
        }

        info!(
            best = best.fitness(),
            accepted_moves,
            improving_moves,
            final_temperature = temperature,
            "annealing run finished"
        );

        Ok(SaResult {
            best_fitness: best.fitness(),
            best,
            iterations: config.max_evaluations,
            evaluations: counter.evaluations(),
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
            fitness_history,
        })
    }
}
