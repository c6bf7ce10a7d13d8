//! Snakes and ladders as one tagged entity.

use serde::{Deserialize, Serialize};

use crate::core::TransitionError;

/// Direction of a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransitionKind {
    /// Moves a player down: `destination < source`.
    Snake,
    /// Moves a player up: `destination > source`.
    Ladder,
}

impl TransitionKind {
    /// Derive the kind from a move, if the move goes anywhere.
    #[must_use]
    pub fn between(from: u32, to: u32) -> Option<Self> {
        match to.cmp(&from) {
            std::cmp::Ordering::Less => Some(Self::Snake),
            std::cmp::Ordering::Greater => Some(Self::Ladder),
            std::cmp::Ordering::Equal => None,
        }
    }
}

impl std::fmt::Display for TransitionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransitionKind::Snake => write!(f, "snake"),
            TransitionKind::Ladder => write!(f, "ladder"),
        }
    }
}

/// A board rule redirecting a player landing on `source` to `destination`.
///
/// Only constructible through [`Transition::snake`], [`Transition::ladder`]
/// or [`Transition::new`], all of which enforce the direction rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Transition {
    source: u32,
    destination: u32,
    kind: TransitionKind,
}

impl Transition {
    /// Create a transition of the given kind.
    pub fn new(kind: TransitionKind, source: u32, destination: u32) -> Result<Self, TransitionError> {
        if TransitionKind::between(source, destination) != Some(kind) {
            return Err(TransitionError::WrongDirection {
                kind,
                start: source,
                end: destination,
            });
        }
        Ok(Self {
            source,
            destination,
            kind,
        })
    }

    /// A snake from `source` down to `destination`.
    pub fn snake(source: u32, destination: u32) -> Result<Self, TransitionError> {
        Self::new(TransitionKind::Snake, source, destination)
    }

    /// A ladder from `source` up to `destination`.
    pub fn ladder(source: u32, destination: u32) -> Result<Self, TransitionError> {
        Self::new(TransitionKind::Ladder, source, destination)
    }

    #[must_use]
    pub fn source(&self) -> u32 {
        self.source
    }

    #[must_use]
    pub fn destination(&self) -> u32 {
        self.destination
    }

    #[must_use]
    pub fn kind(&self) -> TransitionKind {
        self.kind
    }
}

impl std::fmt::Display for Transition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} -> {}", self.kind, self.source, self.destination)
    }
}
