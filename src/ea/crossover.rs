//! Real-vector crossover operators.
//!
//! Each operator takes two parents of equal length and returns fresh,
//! unevaluated children. Parents are never modified.
//!
//! # Operators
//!
//! - [`Crossover::Uniform`]: per-gene coin flip, two children
//! - [`Crossover::OnePoint`]: swap the tail after one cut, two children
//! - [`Crossover::TwoPoint`]: swap the segment between two cuts, two children
//! - [`Crossover::Arithmetic`]: gene-wise mean, one child

use crate::individual::Individual;
use rand::Rng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Crossover strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Crossover {
    Uniform,
    #[default]
    OnePoint,
    TwoPoint,
    Arithmetic,
}

impl Crossover {
    /// Recombines two parents into one or two children.
    ///
    /// # Panics
    /// Panics if the parents have different lengths or are empty.
    pub fn apply<R: Rng>(
        &self,
        parent1: &Individual,
        parent2: &Individual,
        rng: &mut R,
    ) -> Vec<Individual> {
        let n = parent1.dim();
        assert_eq!(n, parent2.dim(), "parents must have equal length");
        assert!(n > 0, "parents must not be empty");

        match self {
            Crossover::Uniform => {
                let (c1, c2) = uniform(parent1.genes(), parent2.genes(), rng);
                vec![c1, c2]
            }
            Crossover::OnePoint => {
                let cut = rng.random_range(0..n);
                let (c1, c2) = one_point(parent1.genes(), parent2.genes(), cut);
                vec![c1, c2]
            }
            Crossover::TwoPoint => {
                let a = rng.random_range(0..n);
                let b = rng.random_range(0..n);
                let (c1, c2) = two_point(parent1.genes(), parent2.genes(), a, b);
                vec![c1, c2]
            }
            Crossover::Arithmetic => vec![arithmetic(parent1.genes(), parent2.genes())],
        }
    }
}

/// Uniform crossover: one fair coin per gene decides whether to swap.
pub fn uniform<R: Rng>(p1: &[f64], p2: &[f64], rng: &mut R) -> (Individual, Individual) {
    let mut c1 = Vec::with_capacity(p1.len());
    let mut c2 = Vec::with_capacity(p1.len());
    for (&a, &b) in p1.iter().zip(p2) {
        if rng.random_bool(0.5) {
            c1.push(a);
            c2.push(b);
        } else {
            c1.push(b);
            c2.push(a);
        }
    }
    (Individual::new(c1), Individual::new(c2))
}

/// One-point crossover at `cut`: genes `[0, cut)` straight, `[cut, n)` swapped.
///
/// A cut of 0 swaps the parents wholesale.
pub fn one_point(p1: &[f64], p2: &[f64], cut: usize) -> (Individual, Individual) {
    let cut = cut.min(p1.len());
    let mut c1 = p1[..cut].to_vec();
    let mut c2 = p2[..cut].to_vec();
    c1.extend_from_slice(&p2[cut..]);
    c2.extend_from_slice(&p1[cut..]);
    (Individual::new(c1), Individual::new(c2))
}

/// Two-point crossover: genes inside `[min(a, b), max(a, b))` are swapped.
///
/// Equal cut points leave both children identical to their parents.
pub fn two_point(p1: &[f64], p2: &[f64], a: usize, b: usize) -> (Individual, Individual) {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    let hi = hi.min(p1.len());
    let mut c1 = p1.to_vec();
    let mut c2 = p2.to_vec();
    c1[lo..hi].copy_from_slice(&p2[lo..hi]);
    c2[lo..hi].copy_from_slice(&p1[lo..hi]);
    (Individual::new(c1), Individual::new(c2))
}

/// Arithmetic crossover: the single child is the gene-wise mean.
pub fn arithmetic(p1: &[f64], p2: &[f64]) -> Individual {
    Individual::new(p1.iter().zip(p2).map(|(a, b)| (a + b) / 2.0).collect())
}
