//! Random source used by the fishing core.
//!
//! Every random draw in the minigame (cursor jitter, species draw, payout
//! bonus) goes through [`FishingRng`]. Any [`rand::Rng`] works out of the box;
//! tests can plug in a fixed source to make a session fully deterministic.

use rand::Rng;

pub trait FishingRng {
    /// Uniform value in `[0, 1)`.
    fn uniform(&mut self) -> f64;

    /// Picks an index with probability proportional to its weight.
    ///
    /// Draws `r` in `[0, total)` and walks the weights in order, subtracting
    /// each one until `r <= 0`. The last index is the fallback when float
    /// rounding runs the loop out without a pick. An empty slice yields 0.
    fn weighted_pick(&mut self, weights: &[f64]) -> usize {
        let total: f64 = weights.iter().sum();
        let mut r = self.uniform() * total;
        for (i, w) in weights.iter().enumerate() {
            r -= w;
            if r <= 0.0 {
                return i;
            }
        }
        weights.len().saturating_sub(1)
    }
}

impl<R: Rng> FishingRng for R {
    fn uniform(&mut self) -> f64 {
        self.gen::<f64>()
    }
}
