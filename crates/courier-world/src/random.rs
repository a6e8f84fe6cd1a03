//! Random selection as an injected capability.
//!
//! Parcel generation and the random robot never touch a global RNG. They
//! take a [`RandomPick`] implementation, so tests can substitute the
//! deterministic [`ScriptedPicker`] while real runs use a seeded
//! [`RngPicker`].

use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;

/// A source of "pick one of these items" decisions.
pub trait RandomPick {
    /// Pick one element of `items`, or `None` if `items` is empty.
    fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T>;
}

/// [`RandomPick`] backed by any [`rand::Rng`], picking uniformly.
#[derive(Debug, Clone)]
pub struct RngPicker<R> {
    rng: R,
}

impl<R: rand::Rng> RngPicker<R> {
    /// Wrap an existing random number generator.
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngPicker<SmallRng> {
    /// A reproducible picker seeded from `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

impl<R: rand::Rng> RandomPick for RngPicker<R> {
    fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.rng)
    }
}

/// Deterministic [`RandomPick`] that replays a fixed cycle of indices.
///
/// Each call takes the next index from the script (wrapping around) and
/// reduces it modulo the number of items.
#[derive(Debug, Clone)]
pub struct ScriptedPicker {
    script: Vec<usize>,
    cursor: usize,
}

impl ScriptedPicker {
    /// Create a picker replaying `script`. An empty script always picks
    /// the first item.
    pub const fn new(script: Vec<usize>) -> Self {
        Self { script, cursor: 0 }
    }
}

impl RandomPick for ScriptedPicker {
    fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        let raw = self
            .script
            .get(self.cursor.checked_rem(self.script.len()).unwrap_or(0))
            .copied()
            .unwrap_or(0);
        self.cursor = self.cursor.wrapping_add(1);
        items.get(raw.checked_rem(items.len())?)
    }
}
