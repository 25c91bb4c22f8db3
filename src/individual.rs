//! Genotype container shared by every optimizer.
//!
//! An [`Individual`] is a fixed-length real vector (the network weights) with
//! a cached fitness. Fitness is minimized. Copies are independent values.

use crate::error::{Error, Result};
use rand::Rng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Closed range `[min, max]` from which fresh genes are drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeneRange {
    pub min: f64,
    pub max: f64,
}

impl Default for GeneRange {
    fn default() -> Self {
        Self {
            min: -3.0,
            max: 3.0,
        }
    }
}

impl GeneRange {
    /// Creates a validated range.
    pub fn new(min: f64, max: f64) -> Result<Self> {
        let range = Self { min, max };
        range.validate()?;
        Ok(range)
    }

    /// Checks that both bounds are finite and `min < max`.
    pub fn validate(&self) -> Result<()> {
        if self.min.is_finite() && self.max.is_finite() && self.min < self.max {
            Ok(())
        } else {
            Err(Error::InvalidGeneRange {
                min: self.min,
                max: self.max,
            })
        }
    }

    /// Draws one gene uniformly from the range.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> f64 {
        rng.random_range(self.min..self.max)
    }
}

/// A candidate weight vector and its cached fitness.
///
/// The fitness is unset until an evaluator computes it. Any mutable access
/// to the genes clears the cached value, so a stale fitness can never be
/// observed after a change.
///
/// # Examples
///
/// ```
/// use u_neuroevo::Individual;
///
/// let mut a = Individual::new(vec![0.5, -1.0]);
/// a.set_fitness(0.25);
///
/// let mut b = a.clone();
/// b.genes_mut()[0] = 9.0;
///
/// assert_eq!(a.genes(), &[0.5, -1.0]);
/// assert_eq!(a.fitness(), 0.25);
/// assert!(!b.is_evaluated());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Individual {
    genes: Vec<f64>,
    fitness: Option<f64>,
}

impl Individual {
    /// Wraps an existing gene vector. The fitness starts unevaluated.
    pub fn new(genes: Vec<f64>) -> Self {
        Self {
            genes,
            fitness: None,
        }
    }

    /// Creates an individual with `dim` genes drawn uniformly from `range`.
    pub fn random<R: Rng>(dim: usize, range: &GeneRange, rng: &mut R) -> Self {
        let genes = (0..dim).map(|_| range.sample(rng)).collect();
        Self::new(genes)
    }

    /// Genotype length.
    pub fn dim(&self) -> usize {
        self.genes.len()
    }

    pub fn genes(&self) -> &[f64] {
        &self.genes
    }

    /// Mutable gene access. Clears the cached fitness.
    pub fn genes_mut(&mut self) -> &mut [f64] {
        self.fitness = None;
        &mut self.genes
    }

    pub fn into_genes(self) -> Vec<f64> {
        self.genes
    }

    /// Fitness, or `f64::INFINITY` (the worst value) when unevaluated.
    pub fn fitness(&self) -> f64 {
        self.fitness.unwrap_or(f64::INFINITY)
    }

    /// Fitness if it has been computed.
    pub fn evaluated_fitness(&self) -> Option<f64> {
        self.fitness
    }

    pub fn is_evaluated(&self) -> bool {
        self.fitness.is_some()
    }

    pub fn set_fitness(&mut self, fitness: f64) {
        self.fitness = Some(fitness);
    }

    /// Exchanges two genes. Clears the cached fitness.
    pub fn swap_genes(&mut self, i: usize, j: usize) {
        self.genes_mut().swap(i, j);
    }

    /// Copy with every gene negated and no fitness.
    pub fn negated(&self) -> Self {
        Self::new(self.genes.iter().map(|g| -g).collect())
    }

    /// Orders two individuals by fitness only (ascending, best first).
    pub fn cmp_fitness(&self, other: &Self) -> Ordering {
        self.fitness().total_cmp(&other.fitness())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_random_genes_within_range() {
        let mut rng = create_rng(42);
        let range = GeneRange::new(-0.5, 2.0).unwrap();
        let ind = Individual::random(100, &range, &mut rng);
        assert_eq!(ind.dim(), 100);
        assert!(ind.genes().iter().all(|&g| (-0.5..2.0).contains(&g)));
        assert!(!ind.is_evaluated());
        assert_eq!(ind.fitness(), f64::INFINITY);
    }

    #[test]
    fn test_copy_is_independent() {
        let mut original = Individual::new(vec![1.0, 2.0, 3.0]);
        original.set_fitness(4.0);

        let mut copy = original.clone();
        copy.genes_mut()[1] = -7.0;
        copy.set_fitness(0.0);

        assert_eq!(original.genes(), &[1.0, 2.0, 3.0]);
        assert_eq!(original.fitness(), 4.0);
        assert_eq!(copy.genes(), &[1.0, -7.0, 3.0]);
    }

    #[test]
    fn test_mutable_access_clears_fitness() {
        let mut ind = Individual::new(vec![1.0, 2.0]);
        ind.set_fitness(1.0);
        ind.swap_genes(0, 1);
        assert_eq!(ind.genes(), &[2.0, 1.0]);
        assert_eq!(ind.evaluated_fitness(), None);
    }

    #[test]
    fn test_negated() {
        let mut ind = Individual::new(vec![1.5, -2.0, 0.0]);
        ind.set_fitness(3.0);
        let neg = ind.negated();
        assert_eq!(neg.genes(), &[-1.5, 2.0, -0.0]);
        assert!(!neg.is_evaluated());
    }

    #[test]
    fn test_cmp_fitness_allows_ties() {
        let mut a = Individual::new(vec![0.0]);
        let mut b = Individual::new(vec![1.0]);
        a.set_fitness(0.5);
        b.set_fitness(0.5);
        assert_eq!(a.cmp_fitness(&b), Ordering::Equal);
        b.set_fitness(0.1);
        assert_eq!(a.cmp_fitness(&b), Ordering::Greater);
    }

    #[test]
    fn test_unevaluated_sorts_last() {
        let mut a = Individual::new(vec![0.0]);
        a.set_fitness(1e9);
        let b = Individual::new(vec![0.0]);
        assert_eq!(a.cmp_fitness(&b), Ordering::Less);
    }

    #[test]
    fn test_invalid_gene_range() {
        assert!(GeneRange::new(1.0, 1.0).is_err());
        assert!(GeneRange::new(2.0, -2.0).is_err());
        assert!(GeneRange::new(f64::NEG_INFINITY, 0.0).is_err());
        assert!(GeneRange::default().validate().is_ok());
    }
}
