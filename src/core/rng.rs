//! Deterministic random number generation.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Injected**: Owned by whoever rolls; there is no global source
//! - **Context streams**: Independent sequences for different purposes
//!
//! ```
//! use ladders::core::GameRng;
//!
//! let rng = GameRng::new(42);
//!
//! // Dice and shield placement draw from separate streams.
//! let mut dice = rng.for_context("dice");
//! let mut shield = rng.for_context("shield");
//!
//! let mut again = GameRng::new(42).for_context("dice");
//! assert_eq!(dice.gen_range(1..=6), again.gen_range(1..=6));
//! # let _ = shield.gen_range(1..=6);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::hash::{Hash, Hasher};
use std::ops::RangeInclusive;

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG with a seed drawn from the operating system.
    ///
    /// The chosen seed is still recorded so the game can be replayed.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;

        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);

        Self::new(hasher.finish())
    }

    /// Generate a random integer in the given inclusive range.
    pub fn gen_range(&mut self, range: RangeInclusive<u32>) -> u32 {
        self.inner.gen_range(range)
    }
}
