//! Injectable randomness.
//!
//! Drawing never touches a global RNG; callers hand in a `RandomSource`.
//! Any `FnMut() -> f64` closure qualifies, which is how tests pin a draw.

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// A stream of floats in `[0, 1)`.
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;
}

impl<F: FnMut() -> f64> RandomSource for F {
    fn next_f64(&mut self) -> f64 {
        self()
    }
}

/// Uniform source backed by the thread-local RNG.
#[derive(Debug, Clone, Default)]
pub struct ThreadSource(ThreadRng);

impl ThreadSource {
    pub fn new() -> Self {
        Self(rand::thread_rng())
    }
}

impl RandomSource for ThreadSource {
    fn next_f64(&mut self) -> f64 {
        self.0.r#gen::<f64>()
    }
}

/// Reproducible source seeded from a `u64`.
#[derive(Debug, Clone)]
pub struct SeededSource(StdRng);

impl SeededSource {
    pub fn new(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl RandomSource for SeededSource {
    fn next_f64(&mut self) -> f64 {
        self.0.r#gen::<f64>()
    }
}
