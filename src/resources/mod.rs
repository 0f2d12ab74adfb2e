//! Shared app resources outside the engine itself

use bevy::prelude::*;
use rand_chacha::{ChaCha8Rng, rand_core::SeedableRng};

/// Random source for scenario generation.
///
/// A configured seed makes every spawned population, including those built
/// by a restart, reproducible. Without one the generator is seeded from the
/// thread RNG.
#[derive(Resource, Deref, DerefMut, Debug, Clone, PartialEq)]
pub struct SharedRng(pub ChaCha8Rng);

impl SharedRng {
    pub fn from_seed(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::default, Self::from_seed)
    }

    /// Rewinds to the start of the stream for `seed`
    pub fn reseed(&mut self, seed: Option<u64>) {
        *self = Self::from_optional_seed(seed);
    }
}

impl Default for SharedRng {
    fn default() -> Self {
        Self(ChaCha8Rng::from_rng(&mut rand::rng()))
    }
}

/// Number of ticks after which the headless app exits, if any
#[derive(Resource, Deref, DerefMut, Copy, Clone, Default, PartialEq, Debug)]
pub struct TickLimit(pub Option<u64>);

impl TickLimit {
    /// Whether `tick_count` ticks use up the limit
    pub fn is_reached(&self, tick_count: u64) -> bool {
        self.0.is_some_and(|limit| tick_count >= limit)
    }
}
