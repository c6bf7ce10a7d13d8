//! Game rules.
//!
//! `TurnEngine` turns a roll into a move: overshoot, shield pickup,
//! snakes and ladders, win detection. It reports each turn as a
//! `TurnOutcome`. The game loop collects results into a `GameResult`.

pub mod engine;

pub use engine::{GameResult, TurnEngine, TurnOutcome};
