//! Generational loop of the evolutionary algorithm.
//!
//! [`EaRunner`] drives: initialization → (selection → crossover → mutation →
//! child evaluation → replacement) repeated until the evaluation budget is
//! consumed. Each generation draws two parents and produces one or two
//! children, so the population evolves in a steady-state fashion.

use super::config::EaConfig;
use super::mutation::Mutation;
use super::population::Population;
use super::selection::Selection;
use crate::error::Result;
use crate::evaluator::{CountingEvaluator, Evaluator, GenerationStats};
use crate::individual::Individual;
use crate::metropolis;
use crate::random::rng_from;
use rand::Rng;
use tracing::{debug, info, instrument, warn};

/// Result of an evolutionary run.
#[derive(Debug, Clone)]
pub struct EaResult {
    /// Best individual seen during the run (an independent copy).
    pub best: Individual,

    /// Same as `best.fitness()`.
    pub best_fitness: f64,

    /// Generations executed after initialization.
    pub generations: usize,

    /// Fitness evaluations consumed, initialization included.
    pub evaluations: usize,

    /// Temperature after the last generation.
    pub final_temperature: f64,

    /// Best fitness after initialization, then after each generation.
    pub fitness_history: Vec<f64>,

    /// Population at termination.
    pub population: Population,
}

/// Executes the evolutionary algorithm.
///
/// # Usage
///
/// ```
/// use u_neuroevo::ea::{EaConfig, EaRunner, Initialization};
///
/// let sphere = |genes: &[f64]| genes.iter().map(|g| g * g).sum::<f64>();
/// let config = EaConfig::new(5)
///     .with_population_size(20)
///     .with_max_evaluations(500)
///     .with_initialization(Initialization::Random)
///     .with_seed(42);
///
/// let result = EaRunner::run(&sphere, &config).unwrap();
/// assert!(result.evaluations >= 500);
/// ```
pub struct EaRunner;

impl EaRunner {
    /// Runs the algorithm with a generator seeded from `config.seed`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the evaluator
    /// produces NaN.
    pub fn run<E: Evaluator + ?Sized>(evaluator: &E, config: &EaConfig) -> Result<EaResult> {
        let mut rng = rng_from(config.seed);
        Self::run_with_rng(evaluator, config, &mut rng)
    }

    /// Runs the algorithm drawing all randomness from `rng`.
    #[instrument(
        level = "info",
        skip_all,
        fields(
            dim = config.dim,
            population_size = config.population_size,
            max_evaluations = config.max_evaluations
        )
    )]
    pub fn run_with_rng<E, R>(evaluator: &E, config: &EaConfig, rng: &mut R) -> Result<EaResult>
    where
        E: Evaluator + ?Sized,
        R: Rng,
    {
        config.validate()?;
        info!(
            initialization = ?config.initialization,
            selection = ?config.selection,
            crossover = ?config.crossover,
            mutation = ?config.mutation,
            replacement = ?config.replacement,
            "starting evolutionary run"
        );

        let mut counter = CountingEvaluator::new(evaluator);
        let mut population = config
            .initialization
            .initialize(&config.init_params(), &mut counter, rng)?;

        if config.selection == Selection::Roulette
            && population.iter().any(|ind| !(0.0..=1.0).contains(&ind.fitness()))
        {
            warn!("roulette selection expects fitness in [0, 1]; weights may be meaningless");
        }

        let mut best = population
            .best()
            .cloned()
            .expect("validated population_size >= 1");
        let mut fitness_history = vec![best.fitness()];
        let mut temperature = config.initial_temperature;
        let mut generations = 0usize;

        while counter.evaluations() < config.max_evaluations {
            let parent1 = config
                .selection
                .select(&mut population, config.tournament_size, rng)?;
            let parent2 = config
                .selection
                .select(&mut population, config.tournament_size, rng)?;

            let mut children = config.crossover.apply(&parent1, &parent2, rng);

            config.mutation.apply(
                &mut children,
                config.mutation_params(),
                temperature,
                &mut counter,
                rng,
            )?;
            if config.mutation == Mutation::Annealing {
                temperature = metropolis::cool(temperature, config.cooling_rate);
            }

            counter.evaluate_pending(&mut children)?;
            config
                .replacement
                .apply(&mut population, children, config.tournament_size, rng);

            generations += 1;
            best = next_best(&population, best);
            fitness_history.push(best.fitness());

            let stats = GenerationStats {
                generation: generations,
                evaluations: counter.evaluations(),
                best_fitness: best.fitness(),
                mean_fitness: population.mean_fitness(),
                temperature: Some(temperature),
            };
            debug!(
                generation = stats.generation,
                evaluations = stats.evaluations,
                best = stats.best_fitness,
                mean = stats.mean_fitness,
                temperature,
                "generation complete"
            );
            evaluator.on_generation(&stats, &best);
        }

        info!(
            generations,
            evaluations = counter.evaluations(),
            best = best.fitness(),
            "evolutionary run finished"
        );

        Ok(EaResult {
            best_fitness: best.fitness(),
            best,
            generations,
            evaluations: counter.evaluations(),
            final_temperature: temperature,
            fitness_history,
            population,
        })
    }
}

/// Full scan of the population; keeps `current` unless strictly beaten.
fn next_best(population: &Population, current: Individual) -> Individual {
    match population.best() {
        Some(candidate) if candidate.fitness() < current.fitness() => candidate.clone(),
        _ => current,
    }
}
