//! # ladders
//!
//! A Snake and Ladders engine: players take turns rolling a die along a
//! numbered board and get redirected by snakes (down) and ladders (up)
//! until they reach the final square.
//!
//! ## Design Principles
//!
//! 1. **Configured up front**: a `GameConfig` is validated once; the turn
//!    loop only ever sees valid squares and names.
//!
//! 2. **Deterministic**: the die owns a seeded `GameRng`. The same seed
//!    replays the same game.
//!
//! 3. **Observable**: every turn yields a structured `TurnOutcome`;
//!    human-readable text is the job of an `EventSink`.
//!
//! ## Modules
//!
//! - `core`: players, RNG, configuration, errors
//! - `board`: snakes, ladders and the transition table
//! - `dice`: the die
//! - `rules`: turn resolution and game results
//! - `game`: setup, the game loop, event sinks

pub mod board;
pub mod core;
pub mod dice;
pub mod game;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, DieMode, GameConfig, GameError, GameRng, Player, PlayerId, PlayerMap,
    PlayerStatus, ShieldConfig, ShieldEffect, TransitionError, WinPolicy,
};

pub use crate::board::{Board, Transition, TransitionKind};

pub use crate::dice::Die;

pub use crate::rules::{GameResult, TurnEngine, TurnOutcome};

pub use crate::game::{
    ConsoleSink, EventSink, Game, GameBuilder, GameEvent, GameSummary, NullSink, RecordingSink,
};
