use rand::{prelude::*, rngs::SmallRng, SeedableRng};

mod anomalies;
mod epochs;
mod orbits;

/// Seeded generator: sweeps are reproducible
pub fn test_rng(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}

/// Draws a random value within [min, max)
pub fn random_within<R: Rng>(rng: &mut R, min: f64, max: f64) -> f64 {
    rng.random_range(min..max)
}
