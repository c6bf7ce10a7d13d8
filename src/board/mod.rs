//! Board model.
//!
//! - `Transition`: a snake or a ladder, validated on construction
//! - `Board`: the transition table plus final square and shield square
//!
//! Lookups are total: a square without a transition maps to itself.

mod table;
mod transition;

pub use table::Board;
pub use transition::{Transition, TransitionKind};
