//! Injectable randomness for joke selection.

use rand::{rngs::StdRng, Rng, RngCore, SeedableRng};

pub trait RandomSource: Send {
    /// Returns an index in `0..len`. Callers never pass `len == 0`.
    fn pick_index(&mut self, len: usize) -> usize;
}

impl<R: RngCore + Send> RandomSource for R {
    fn pick_index(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }
}

pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

pub fn from_entropy() -> StdRng {
    StdRng::from_entropy()
}

/// Boxed source built from an optional seed, as configured by front ends.
pub fn boxed(seed: Option<u64>) -> Box<dyn RandomSource> {
    match seed {
        Some(seed) => Box::new(seeded(seed)),
        None => Box::new(from_entropy()),
    }
}

/// Replays a fixed list of indices, wrapping each into the requested range and
/// cycling once the list is exhausted. Lets tests pin exact selections.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    picks: Vec<usize>,
    cursor: usize,
}

impl ScriptedRandom {
    pub fn new(picks: impl Into<Vec<usize>>) -> Self {
        Self {
            picks: picks.into(),
            cursor: 0,
        }
    }

    pub fn calls(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedRandom {
    fn pick_index(&mut self, len: usize) -> usize {
        let raw = if self.picks.is_empty() {
            0
        } else {
            self.picks[self.cursor % self.picks.len()]
        };
        self.cursor += 1;
        raw % len
    }
}
