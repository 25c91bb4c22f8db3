//! Population container for the evolutionary loop.

use crate::individual::Individual;
use rand::seq::SliceRandom;
use rand::Rng;

/// Ordered collection of individuals.
///
/// Between generations the length equals the configured population size;
/// it may exceed it only transiently while an oversampling initialization
/// trims its buffer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Population {
    individuals: Vec<Individual>,
}

impl Population {
    pub fn new(individuals: Vec<Individual>) -> Self {
        Self { individuals }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            individuals: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Individual> {
        self.individuals.iter()
    }

    pub fn as_slice(&self) -> &[Individual] {
        &self.individuals
    }

    pub fn get(&self, index: usize) -> Option<&Individual> {
        self.individuals.get(index)
    }

    pub fn push(&mut self, individual: Individual) {
        self.individuals.push(individual);
    }

    /// Removes the individual at `index`, shifting later ones left.
    pub fn remove(&mut self, index: usize) -> Individual {
        self.individuals.remove(index)
    }

    /// Overwrites the individual at `index`, returning the old one.
    pub fn replace(&mut self, index: usize, individual: Individual) -> Individual {
        std::mem::replace(&mut self.individuals[index], individual)
    }

    /// Shuffles in place. Consumes `len - 1` random draws.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.individuals.shuffle(rng);
    }

    /// Index of the lowest-fitness individual; the first one wins ties.
    pub fn best_index(&self) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (i, ind) in self.individuals.iter().enumerate() {
            match best {
                Some(b) if ind.fitness() >= self.individuals[b].fitness() => {}
                _ => best = Some(i),
            }
        }
        best
    }

    /// Index of the highest-fitness individual; the first one wins ties.
    pub fn worst_index(&self) -> Option<usize> {
        worst_position(self.individuals.iter())
    }

    pub fn best(&self) -> Option<&Individual> {
        self.best_index().map(|i| &self.individuals[i])
    }

    pub fn worst(&self) -> Option<&Individual> {
        self.worst_index().map(|i| &self.individuals[i])
    }

    /// Arithmetic mean of all fitness values (NaN when empty).
    pub fn mean_fitness(&self) -> f64 {
        let sum: f64 = self.individuals.iter().map(|i| i.fitness()).sum();
        sum / self.individuals.len() as f64
    }

    /// Stable sort by fitness ascending, then keep the first `n`.
    pub fn keep_best(&mut self, n: usize) {
        self.individuals.sort_by(Individual::cmp_fitness);
        self.individuals.truncate(n);
    }
}

/// Position (within the iterator) of the first highest-fitness item.
pub(crate) fn worst_position<'a>(iter: impl Iterator<Item = &'a Individual>) -> Option<usize> {
    let mut worst: Option<(usize, f64)> = None;
    for (i, ind) in iter.enumerate() {
        match worst {
            Some((_, w)) if ind.fitness() <= w => {}
            _ => worst = Some((i, ind.fitness())),
        }
    }
    worst.map(|(i, _)| i)
}

impl From<Vec<Individual>> for Population {
    fn from(individuals: Vec<Individual>) -> Self {
        Self::new(individuals)
    }
}

impl FromIterator<Individual> for Population {
    fn from_iter<T: IntoIterator<Item = Individual>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Population {
    type Item = &'a Individual;
    type IntoIter = std::slice::Iter<'a, Individual>;

    fn into_iter(self) -> Self::IntoIter {
        self.individuals.iter()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Population whose individual `i` has genes `[i]` and the given fitness.
    pub(crate) fn with_fitness(fitnesses: &[f64]) -> Population {
        fitnesses
            .iter()
            .enumerate()
            .map(|(i, &f)| {
                let mut ind = Individual::new(vec![i as f64]);
                ind.set_fitness(f);
                ind
            })
            .collect()
    }

    pub(crate) fn fitnesses(population: &Population) -> Vec<f64> {
        population.iter().map(|i| i.fitness()).collect()
    }

    #[test]
    fn test_best_and_worst_first_occurrence() {
        let pop = with_fitness(&[3.0, 1.0, 4.0, 1.0, 5.0, 5.0]);
        assert_eq!(pop.best_index(), Some(1));
        assert_eq!(pop.worst_index(), Some(4));
        assert_eq!(pop.best().unwrap().genes(), &[1.0]);
    }

    #[test]
    fn test_empty_population() {
        let pop = Population::default();
        assert!(pop.is_empty());
        assert_eq!(pop.best_index(), None);
        assert_eq!(pop.worst_index(), None);
    }

    #[test]
    fn test_keep_best_is_stable() {
        let mut pop = with_fitness(&[2.0, 1.0, 2.0, 0.5, 1.0]);
        pop.keep_best(3);
        assert_eq!(fitnesses(&pop), vec![0.5, 1.0, 1.0]);
        // ties keep insertion order: gene 1 before gene 4
        assert_eq!(pop.get(1).unwrap().genes(), &[1.0]);
        assert_eq!(pop.get(2).unwrap().genes(), &[4.0]);
    }

    #[test]
    fn test_mean_fitness() {
        let pop = with_fitness(&[1.0, 2.0, 3.0]);
        assert!((pop.mean_fitness() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_replace_and_remove() {
        let mut pop = with_fitness(&[1.0, 2.0]);
        let old = pop.replace(0, Individual::new(vec![9.0]));
        assert_eq!(old.genes(), &[0.0]);
        let removed = pop.remove(1);
        assert_eq!(removed.fitness(), 2.0);
        assert_eq!(pop.len(), 1);
    }
}
