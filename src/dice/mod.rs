//! The die.
//!
//! A `Die` owns its `GameRng`; seeding the RNG makes every roll of a game
//! reproducible. The mode is fixed when the die is made.

use crate::core::{DieMode, GameRng};

/// A six-sided die with a configurable bias.
#[derive(Clone, Debug)]
pub struct Die {
    mode: DieMode,
    rng: GameRng,
}

impl Die {
    /// Create a die rolling with `mode` from `rng`.
    ///
    /// A `Fixed` face outside `1..=6` is clamped into range.
    #[must_use]
    pub fn new(mode: DieMode, rng: GameRng) -> Self {
        let mode = match mode {
            DieMode::Fixed(face) => DieMode::Fixed(face.clamp(1, 6)),
            other => other,
        };
        Self { mode, rng }
    }

    /// A fair die seeded with `seed`.
    #[must_use]
    pub fn fair(seed: u64) -> Self {
        Self::new(DieMode::Fair, GameRng::new(seed))
    }

    /// A die that always shows `face`.
    #[must_use]
    pub fn fixed(face: u32) -> Self {
        Self::new(DieMode::Fixed(face), GameRng::new(0))
    }

    #[must_use]
    pub fn mode(&self) -> DieMode {
        self.mode
    }

    /// Roll once.
    ///
    /// - `Fair`: 1..=6
    /// - `Biased`: 3..=6
    /// - `AlwaysOne`: 1
    /// - `Fixed(n)`: n
    pub fn roll(&mut self) -> u32 {
        match self.mode {
            DieMode::Fair => self.rng.gen_range(1..=6),
            DieMode::Biased => self.rng.gen_range(3..=6),
            DieMode::AlwaysOne => 1,
            DieMode::Fixed(face) => face,
        }
    }
}
