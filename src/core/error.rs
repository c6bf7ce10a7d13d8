//! Error types.
//!
//! - `TransitionError`: one snake or ladder candidate was rejected. Setup
//!   skips the candidate and carries on.
//! - `ConfigError`: the configuration as a whole is unusable.
//! - `GameError`: anything `GameBuilder::build` can fail with.
//!
//! The turn engine and the transition table never fail.

use thiserror::Error;

use crate::board::TransitionKind;

/// A snake or ladder candidate that cannot be placed on the board.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("{kind} {start} -> {end} points the wrong way")]
    WrongDirection {
        kind: TransitionKind,
        start: u32,
        end: u32,
    },

    #[error("{kind} {start} -> {end} leaves the board 1..={board_size}")]
    OutOfBounds {
        kind: TransitionKind,
        start: u32,
        end: u32,
        board_size: u32,
    },
}

/// Malformed configuration, rejected before play starts.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("board size must be at least 2, got {0}")]
    BoardTooSmall(u32),

    #[error("at least one player is required")]
    NoPlayers,

    #[error("at most 255 players are supported, got {0}")]
    TooManyPlayers(usize),

    #[error("player {0} has an empty name")]
    EmptyPlayerName(usize),

    #[error("start position {start} must be below the final square {board_size}")]
    StartOutOfRange { start: u32, board_size: u32 },

    #[error("a fixed die must show a face in 1..=6, got {0}")]
    InvalidDieFace(u32),

    #[error("shield square {square} is not on the board 1..{board_size}")]
    ShieldOutOfRange { square: u32, board_size: u32 },

    #[error("shield square {0} is the start of a snake or ladder")]
    ShieldOnTransition(u32),

    #[error("max_rounds must be positive")]
    ZeroRounds,

    #[error("could not parse configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Errors surfaced while setting up a game.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}
