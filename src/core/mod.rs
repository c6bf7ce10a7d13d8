//! Core types: players, RNG, configuration, errors.
//!
//! Everything else in the crate builds on these.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{DieMode, GameConfig, ShieldConfig, ShieldEffect, WinPolicy};
pub use error::{ConfigError, GameError, TransitionError};
pub use player::{Player, PlayerId, PlayerMap, PlayerStatus};
pub use rng::GameRng;
