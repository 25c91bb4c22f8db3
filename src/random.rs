//! Seeded random number generation.
//!
//! Every optimizer draws all of its randomness from a single generator
//! created here, so a fixed seed reproduces a run draw for draw.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates the generator used by a run.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Resolves an optional configured seed, drawing a fresh one when absent.
pub(crate) fn rng_from(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => create_rng(seed),
        None => create_rng(rand::random()),
    }
}
