//! Lazy, finite stimulus sources.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A source of per-step stimulus vectors.
///
/// Sources are lazy, finite, and not restartable: once
/// [`next_stimulus`](StimulusSource::next_stimulus) returns `None`, the
/// source stays dry.
pub trait StimulusSource {
    /// The stimulus vector type produced each step.
    type Item;

    /// Draws the next stimulus vector, or `None` when the source is dry.
    fn next_stimulus(&mut self) -> Option<Self::Item>;
}

/// A stimulus source backed by a pre-built sequence of input vectors.
#[derive(Debug)]
pub struct SliceStimulus<I> {
    items: std::vec::IntoIter<I>,
}

impl<I> SliceStimulus<I> {
    /// Creates a source that yields `items` in order, then runs dry.
    pub fn new(items: Vec<I>) -> Self {
        Self {
            items: items.into_iter(),
        }
    }
}

impl<I> StimulusSource for SliceStimulus<I> {
    type Item = I;

    fn next_stimulus(&mut self) -> Option<I> {
        self.items.next()
    }
}

/// A seeded random sample source, uniform in `[-magnitude, magnitude]`.
///
/// The generator is a [`StdRng`] seeded explicitly, so a scenario's stimulus
/// is reproducible from its seed alone.
#[derive(Debug)]
pub struct RandomStimulus {
    rng: StdRng,
    remaining: usize,
    magnitude: i64,
}

impl RandomStimulus {
    /// Creates a source yielding `count` samples in
    /// `[-magnitude, magnitude]` from the given seed.
    pub fn new(count: usize, seed: u64, magnitude: i64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            remaining: count,
            magnitude,
        }
    }
}

impl StimulusSource for RandomStimulus {
    type Item = i64;

    fn next_stimulus(&mut self) -> Option<i64> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(self.rng.gen_range(-self.magnitude..=self.magnitude))
    }
}
