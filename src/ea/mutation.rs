//! Mutation strategies applied to freshly produced children.
//!
//! [`Mutation::Standard`] only perturbs genes. [`Mutation::Constrained`] and
//! [`Mutation::Annealing`] consult the evaluator themselves, so the children
//! they return already carry a fitness and are not re-evaluated by the loop.
//! Every variant writes its result back into the slice it was given.

use crate::error::Result;
use crate::evaluator::{CountingEvaluator, Evaluator};
use crate::individual::Individual;
use crate::metropolis;
use rand::Rng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Mutation strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Mutation {
    /// Each gene, with probability `rate`, moves by `±change`.
    Standard,

    /// Greedy per-gene hill climb: each tentative `±change` is kept only if
    /// fitness does not increase. One evaluation per tried gene.
    Constrained,

    /// Swap two random genes and keep the swap if the Metropolis test passes
    /// at the loop's current temperature.
    #[default]
    Annealing,
}

/// Rate and step size shared by the perturbing mutations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MutationParams {
    /// Per-gene probability of a perturbation.
    pub rate: f64,
    /// Magnitude of one perturbation.
    pub change: f64,
}

impl Mutation {
    /// Mutates every child in place.
    pub fn apply<E, R>(
        &self,
        children: &mut [Individual],
        params: MutationParams,
        temperature: f64,
        evaluator: &mut CountingEvaluator<'_, E>,
        rng: &mut R,
    ) -> Result<()>
    where
        E: Evaluator + ?Sized,
        R: Rng,
    {
        for child in children.iter_mut() {
            match self {
                Mutation::Standard => standard(child, params.rate, params.change, rng),
                Mutation::Constrained => {
                    constrained(child, params.rate, params.change, evaluator, rng)?
                }
                Mutation::Annealing => {
                    annealing(child, temperature, evaluator, rng)?;
                }
            }
        }
        Ok(())
    }
}

/// Moves each gene by `±change` with probability `rate` (fair coin for sign).
pub fn standard<R: Rng>(individual: &mut Individual, rate: f64, change: f64, rng: &mut R) {
    for i in 0..individual.dim() {
        if rng.random::<f64>() < rate {
            let delta = if rng.random_bool(0.5) { change } else { -change };
            individual.genes_mut()[i] += delta;
        }
    }
}

/// Accept-if-not-worse perturbation of each gene.
///
/// An unevaluated individual is evaluated first. A rejected change restores
/// both the gene and the previous fitness.
pub fn constrained<E, R>(
    individual: &mut Individual,
    rate: f64,
    change: f64,
    evaluator: &mut CountingEvaluator<'_, E>,
    rng: &mut R,
) -> Result<()>
where
    E: Evaluator + ?Sized,
    R: Rng,
{
    if !individual.is_evaluated() {
        evaluator.evaluate(individual)?;
    }

    for i in 0..individual.dim() {
        if rng.random::<f64>() >= rate {
            continue;
        }
        let delta = if rng.random_bool(0.5) { change } else { -change };
        let prior = individual.fitness();
        let old_gene = individual.genes()[i];

        individual.genes_mut()[i] = old_gene + delta;
        let fitness = evaluator.evaluate(individual)?;

        if fitness > prior {
            individual.genes_mut()[i] = old_gene;
            individual.set_fitness(prior);
            trace!(gene = i, prior, rejected = fitness, "reverted constrained step");
        }
    }
    Ok(())
}

/// Gene-swap proposal accepted by the Metropolis criterion.
///
/// An unevaluated individual is evaluated first. Returns whether the swap
/// was accepted.
///
/// # Panics
/// Panics if `individual` has no genes.
pub fn annealing<E, R>(
    individual: &mut Individual,
    temperature: f64,
    evaluator: &mut CountingEvaluator<'_, E>,
    rng: &mut R,
) -> Result<bool>
where
    E: Evaluator + ?Sized,
    R: Rng,
{
    if !individual.is_evaluated() {
        evaluator.evaluate(individual)?;
    }

    let n = individual.dim();
    assert!(n > 0, "cannot swap genes of an empty individual");
    let pos1 = ((n as f64 * rng.random::<f64>()) as usize).min(n - 1);
    let pos2 = ((n as f64 * rng.random::<f64>()) as usize).min(n - 1);

    let mut candidate = individual.clone();
    candidate.swap_genes(pos1, pos2);
    evaluator.evaluate(&mut candidate)?;

    let accepted = metropolis::accept(individual.fitness(), candidate.fitness(), temperature, rng);
    if accepted {
        *individual = candidate;
    }
    Ok(accepted)
}
