//! Metropolis sampling over pixel transpositions.

use crate::color::Color;
use crate::energy::swap_delta;
use rand::Rng;

/// Source of the two kinds of draws the sampler needs.
///
/// Implemented for every [`rand::Rng`]. Tests can implement it directly to
/// script the exact sequence of index pairs and acceptance draws.
pub trait RandomSource {
    /// Uniform index in `[0, n)`. `n` is always positive.
    fn index(&mut self, n: usize) -> usize;

    /// Uniform value in `[0, 1)`.
    fn unit(&mut self) -> f64;
}

impl<R: Rng> RandomSource for R {
    #[inline]
    fn index(&mut self, n: usize) -> usize {
        self.random_range(0..n)
    }

    #[inline]
    fn unit(&mut self) -> f64 {
        self.random::<f64>()
    }
}

/// Result of a single swap attempt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwapOutcome {
    /// Whether the swap was applied to the working buffer.
    pub accepted: bool,
    /// Energy change of the proposed swap, whether applied or not.
    pub delta: f64,
    /// First proposed position.
    pub p1: usize,
    /// Second proposed position, possibly equal to `p1`.
    pub p2: usize,
}

/// Draws two positions independently and uniformly, with replacement.
#[inline]
pub fn propose_indices<S: RandomSource>(rng: &mut S, n: usize) -> (usize, usize) {
    let p1 = rng.index(n);
    let p2 = rng.index(n);
    (p1, p2)
}

/// Metropolis criterion: always accept downhill, otherwise accept with
/// probability `exp(-delta / temperature)`.
///
/// The acceptance draw is only consumed for non-negative deltas.
#[inline]
pub fn metropolis_accept<S: RandomSource>(delta: f64, temperature: f64, rng: &mut S) -> bool {
    delta < 0.0 || rng.unit() < (-delta / temperature).exp()
}

/// Proposes a random transposition of `working` and applies it if the
/// Metropolis criterion accepts it.
///
/// `temperature` must be positive. Swaps only permute `working`, so the
/// multiset of its colors never changes.
///
/// # Panics
///
/// Panics if `working` is empty or shorter than `target`.
pub fn attempt_swap<S: RandomSource>(
    target: &[Color],
    working: &mut [Color],
    temperature: f64,
    rng: &mut S,
) -> SwapOutcome {
    let (p1, p2) = propose_indices(rng, working.len());
    let delta = swap_delta(target, working, p1, p2);

    let accepted = metropolis_accept(delta, temperature, rng);
    if accepted {
        working.swap(p1, p2);
    }

    SwapOutcome {
        accepted,
        delta,
        p1,
        p2,
    }
}
