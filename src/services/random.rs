use rand::rngs::ThreadRng;
use rand::Rng;

/// Pluggable randomness for the generation engines. Production code uses
/// [`ThreadRngSource`]; tests supply a deterministic implementation.
pub trait RandomSource {
    /// Next float in `[0, 1)`.
    fn next_f64(&mut self) -> f64;
}

#[derive(Debug, Default)]
pub struct ThreadRngSource {
    rng: ThreadRng,
}

impl ThreadRngSource {
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl RandomSource for ThreadRngSource {
    fn next_f64(&mut self) -> f64 {
        self.rng.gen()
    }
}
