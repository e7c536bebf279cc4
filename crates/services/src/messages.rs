use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use mate_core::model::MessageSet;

/// Uniform index source used to pick display lines.
pub trait IndexSource: Send {
    /// Returns an index in `[0, len)`. `len` is never zero.
    fn next_index(&mut self, len: usize) -> usize;
}

/// Draws from the thread-local RNG on every call.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngSource;

impl IndexSource for ThreadRngSource {
    fn next_index(&mut self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }
}

/// Reproducible source for tests and demos.
#[derive(Debug, Clone)]
pub struct SeededSource(StdRng);

impl SeededSource {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl IndexSource for SeededSource {
    fn next_index(&mut self, len: usize) -> usize {
        self.0.random_range(0..len)
    }
}

/// Pick one line uniformly from the set.
///
/// Out-of-range indices from a misbehaving source wrap, so the result is
/// always a member of `set`.
pub fn pick_line<'a>(set: &'a MessageSet, source: &mut dyn IndexSource) -> &'a str {
    set.get_wrapped(source.next_index(set.len()))
}
