// seed.rs - Random starting generations

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::grid::{Cell, Grid};

/// Grid where each cell is alive with probability `density`.
///
/// The density is clamped to `0..=1`; NaN and infinities give an empty grid.
pub fn random_grid(side: usize, density: f64, rng: &mut impl Rng) -> Grid {
    let density = if density.is_finite() { density.clamp(0.0, 1.0) } else { 0.0 };
    Grid::from_fn(side, |_, _| Cell::from(rng.gen_bool(density)))
}

/// Reproducible [`random_grid`] for a given `seed`.
pub fn seeded_grid(side: usize, density: f64, seed: u64) -> Grid {
    random_grid(side, density, &mut ChaCha8Rng::seed_from_u64(seed))
}
