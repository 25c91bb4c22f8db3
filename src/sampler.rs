//! Weighted discrete sampling with Walker's alias method.
//!
//! [`AliasTable`] preprocesses a weight vector in O(n) and then draws an
//! index in O(1) with probability proportional to its weight. Rank-based
//! selection rebuilds a table on every call; the table is not cached.
//!
//! # References
//!
//! - Walker (1977), "An Efficient Method for Generating Discrete Random
//!   Variables with General Distributions"
//! - Vose (1991), "A Linear Algorithm for Generating Random Numbers with a
//!   Given Distribution"

use crate::error::{Error, Result};
use rand::Rng;

/// Preprocessed alias table for O(1) weighted sampling.
///
/// # Examples
///
/// ```
/// use u_neuroevo::random::create_rng;
/// use u_neuroevo::sampler::AliasTable;
///
/// let table = AliasTable::new(&[1.0, 2.0, 3.0, 4.0]).unwrap();
/// let mut rng = create_rng(42);
/// let idx = table.sample(&mut rng);
/// assert!(idx < 4);
/// ```
#[derive(Debug, Clone)]
pub struct AliasTable {
    /// Scaled probabilities `q[i]`, each the acceptance threshold of column `i`.
    prob: Vec<f64>,
    /// Alias index returned when column `i` rejects.
    alias: Vec<usize>,
}

impl AliasTable {
    /// Builds the table from non-negative weights.
    ///
    /// The weights need not sum to 1; they are L1-normalized first.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyWeights`] if `weights` is empty
    /// - [`Error::NegativeWeight`] if any weight is negative or NaN
    /// - [`Error::ZeroWeightMass`] if the total mass is zero or not finite
    pub fn new(weights: &[f64]) -> Result<Self> {
        let n = weights.len();
        if n == 0 {
            return Err(Error::EmptyWeights);
        }
        if let Some((index, &value)) = weights
            .iter()
            .enumerate()
            .find(|(_, &w)| w.is_nan() || w < 0.0)
        {
            return Err(Error::NegativeWeight { index, value });
        }

        let norm: f64 = weights.iter().map(|w| w.abs()).sum();
        if !(norm > 0.0 && norm.is_finite()) {
            return Err(Error::ZeroWeightMass);
        }

        let mut prob: Vec<f64> = weights.iter().map(|w| w / norm * n as f64).collect();
        let mut alias: Vec<usize> = (0..n).collect();

        // Heavy indices fill `work` from the front, light ones from the back.
        let mut work = vec![0usize; n];
        let mut head = 0usize;
        let mut tail = n;
        for (i, &q) in prob.iter().enumerate() {
            if q >= 1.0 {
                work[head] = i;
                head += 1;
            } else {
                tail -= 1;
                work[tail] = i;
            }
        }

        while head != 0 && tail != n {
            let light = work[tail];
            let heavy = work[head - 1];
            alias[light] = heavy;
            prob[heavy] += prob[light] - 1.0;
            tail += 1;
            if prob[heavy] < 1.0 {
                tail -= 1;
                work[tail] = heavy;
                head -= 1;
            }
        }

        Ok(Self { prob, alias })
    }

    /// Number of outcomes.
    pub fn len(&self) -> usize {
        self.prob.len()
    }

    /// Always false: construction rejects empty weight vectors.
    pub fn is_empty(&self) -> bool {
        self.prob.is_empty()
    }

    /// Draws one index. Consumes exactly one uniform `f64`.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        let n = self.prob.len();
        let u = rng.random::<f64>() * n as f64;
        let k = (u as usize).min(n - 1);
        let frac = u - k as f64;
        if frac < self.prob[k] {
            k
        } else {
            self.alias[k]
        }
    }
}
