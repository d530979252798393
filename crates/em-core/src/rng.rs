//! The simulation's single random stream.
//!
//! Every draw in a run comes from one `SimRng`, in a strictly sequential
//! order.  The wrapper is `Clone` so that a snapshot of the simulation
//! captures the exact stream position: resuming from a clone produces the
//! same continuation as never having stopped.

use std::f64::consts::PI;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Seeded, cloneable random source for one simulation instance.
#[derive(Clone, Debug)]
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Uniform draw in `[0, 1)`.
    #[inline]
    pub fn uniform(&mut self) -> f64 {
        self.0.r#gen::<f64>()
    }

    /// Uniform draw in `[lo, hi)`.
    #[inline]
    pub fn uniform_range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.uniform()
    }

    /// Normal draw via Box–Muller.  Consumes exactly two uniforms per call
    /// so the stream position never depends on the value drawn.
    pub fn normal(&mut self, mean: f64, sd: f64) -> f64 {
        let u1 = (1.0 - self.uniform()).max(f64::MIN_POSITIVE);
        let u2 = self.uniform();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos();
        mean + sd * z
    }

    /// Index drawn from a categorical distribution given by `weights`.
    ///
    /// Weights are expected to sum to 1; any rounding shortfall falls on
    /// the last category.  Returns `0` for an empty slice.
    pub fn categorical(&mut self, weights: &[f64]) -> usize {
        let r = self.uniform();
        let mut cumulative = 0.0;
        for (i, w) in weights.iter().enumerate() {
            cumulative += w;
            if r < cumulative {
                return i;
            }
        }
        weights.len().saturating_sub(1)
    }

    /// Uniform index in `0..len`.
    ///
    /// # Panics
    /// Panics if `len == 0`.
    #[inline]
    pub fn index(&mut self, len: usize) -> usize {
        self.0.gen_range(0..len)
    }
}
