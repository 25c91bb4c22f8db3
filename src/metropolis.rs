//! Metropolis acceptance criterion.
//!
//! Shared by the standalone annealing optimizer and the annealing-flavored
//! mutation of the evolutionary loop. Fitness is minimized.

use rand::Rng;

/// Probability of moving from fitness `current` to `candidate` at `temperature`.
///
/// Returns 1.0 for a strict improvement, `exp((current - candidate) / T)`
/// otherwise. A non-positive temperature rejects every non-improving move.
///
/// ```
/// use u_neuroevo::metropolis::acceptance;
///
/// assert_eq!(acceptance(1.0, 0.5, 3.0), 1.0);
/// assert_eq!(acceptance(1.0, 1.0, 1.0), 1.0);
/// assert!(acceptance(1.0, 2.0, 1.0) < 1.0);
/// ```
pub fn acceptance(current: f64, candidate: f64, temperature: f64) -> f64 {
    if candidate < current {
        1.0
    } else if temperature > 0.0 {
        ((current - candidate) / temperature).exp()
    } else {
        0.0
    }
}

/// Decides whether to accept `candidate` using one fresh uniform draw in `[0, 1)`.
pub fn accept<R: Rng>(current: f64, candidate: f64, temperature: f64, rng: &mut R) -> bool {
    let p = acceptance(current, candidate, temperature);
    rng.random::<f64>() < p
}

/// Geometric cooling step: `T * (1 - cooling_rate)`.
pub fn cool(temperature: f64, cooling_rate: f64) -> f64 {
    temperature * (1.0 - cooling_rate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_improvement_always_accepted() {
        for t in [1e-9, 1.0, 1e6] {
            assert_eq!(acceptance(1.0, 0.5, t), 1.0);
        }
        assert_eq!(acceptance(1.0, 0.5, 0.0), 1.0);
    }

    #[test]
    fn test_equal_fitness_accepted_at_positive_temperature() {
        assert_eq!(acceptance(1.0, 1.0, 1.0), 1.0);
    }

    #[test]
    fn test_worse_fitness_probability() {
        let p = acceptance(1.0, 2.0, 1.0);
        assert!((p - (-1.0f64).exp()).abs() < 1e-12);
    }

    #[test]
    fn test_higher_temperature_accepts_more() {
        assert!(acceptance(0.0, 1.0, 10.0) > acceptance(0.0, 1.0, 0.1));
    }

    #[test]
    fn test_zero_temperature_rejects_worse() {
        assert_eq!(acceptance(1.0, 1.0, 0.0), 0.0);
        assert_eq!(acceptance(1.0, 5.0, 0.0), 0.0);
    }

    #[test]
    fn test_accept_improvement_is_certain() {
        let mut rng = create_rng(42);
        for _ in 0..1000 {
            assert!(accept(1.0, 0.0, 1e-3, &mut rng));
        }
    }

    #[test]
    fn test_accept_rate_tracks_probability() {
        let mut rng = create_rng(42);
        let trials = 20_000;
        let accepted = (0..trials)
            .filter(|_| accept(0.0, 1.0, 1.0, &mut rng))
            .count();
        let rate = accepted as f64 / trials as f64;
        assert!((rate - (-1.0f64).exp()).abs() < 0.02, "rate {rate}");
    }

    #[test]
    fn test_geometric_cooling() {
        let t = cool(100.0, 0.1);
        assert!((t - 90.0).abs() < 1e-12);
        assert_eq!(cool(5.0, 0.0), 5.0);
    }
}
