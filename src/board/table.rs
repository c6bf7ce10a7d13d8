//! The board: final square, transition table, shield square.

use rustc_hash::FxHashMap;
use tracing::{debug, instrument};

use super::transition::{Transition, TransitionKind};
use crate::core::{GameRng, TransitionError};

/// Linear board of squares `1..=size` with point-to-point transitions.
///
/// Built once before play. After setup the only change is the shield
/// square, which is set at most once.
#[derive(Clone, Debug)]
pub struct Board {
    size: u32,
    transitions: FxHashMap<u32, Transition>,
    shield_square: Option<u32>,
}

impl Board {
    /// Create an empty board whose final square is `size`.
    #[must_use]
    pub fn new(size: u32) -> Self {
        Self {
            size,
            transitions: FxHashMap::default(),
            shield_square: None,
        }
    }

    /// The final (winning) square.
    #[must_use]
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Register a transition.
    ///
    /// Both ends must lie on the board. A transition starting on a square
    /// that already has one replaces it; the replaced one is returned.
    pub fn add_transition(&mut self, transition: Transition) -> Result<Option<Transition>, TransitionError> {
        let on_board = |square: u32| (1..=self.size).contains(&square);
        if !on_board(transition.source()) || !on_board(transition.destination()) {
            return Err(TransitionError::OutOfBounds {
                kind: transition.kind(),
                start: transition.source(),
                end: transition.destination(),
                board_size: self.size,
            });
        }

        let replaced = self.transitions.insert(transition.source(), transition);
        if let Some(old) = replaced {
            debug!(%old, new = %transition, "transition overwritten");
        }
        Ok(replaced)
    }

    /// Validate and register a snake candidate.
    pub fn add_snake(&mut self, start: u32, end: u32) -> Result<Option<Transition>, TransitionError> {
        self.add_transition(Transition::snake(start, end)?)
    }

    /// Validate and register a ladder candidate.
    pub fn add_ladder(&mut self, start: u32, end: u32) -> Result<Option<Transition>, TransitionError> {
        self.add_transition(Transition::ladder(start, end)?)
    }

    /// Where a player landing on `position` ends up.
    ///
    /// Squares without a transition map to themselves.
    #[must_use]
    pub fn destination_of(&self, position: u32) -> u32 {
        self.transitions
            .get(&position)
            .map_or(position, Transition::destination)
    }

    /// The transition starting on `position`, if any.
    #[must_use]
    pub fn transition_at(&self, position: u32) -> Option<&Transition> {
        self.transitions.get(&position)
    }

    /// All registered transitions, ordered by source square.
    #[must_use]
    pub fn transitions(&self) -> Vec<Transition> {
        let mut all: Vec<_> = self.transitions.values().copied().collect();
        all.sort_by_key(Transition::source);
        all
    }

    /// Number of registered transitions of `kind`.
    #[must_use]
    pub fn count(&self, kind: TransitionKind) -> usize {
        self.transitions.values().filter(|t| t.kind() == kind).count()
    }

    #[must_use]
    pub fn shield_square(&self) -> Option<u32> {
        self.shield_square
    }

    /// Put the shield on `square`.
    pub(crate) fn set_shield_square(&mut self, square: u32) {
        self.shield_square = Some(square);
    }

    /// Put the shield on a uniformly chosen square in `1..size` that does
    /// not start a transition.
    ///
    /// Samples and retries, so the cost does not grow with the board.
    /// Returns `None` when every candidate square starts a transition.
    #[instrument(skip(self, rng), fields(size = self.size))]
    pub(crate) fn place_shield(&mut self, rng: &mut GameRng) -> Option<u32> {
        let last = self.size.checked_sub(1)?;
        let taken = self.transitions.keys().filter(|&&square| square <= last).count();
        if taken as u64 >= u64::from(last) {
            return None;
        }

        let square = loop {
            let square = rng.gen_range(1..=last);
            if !self.transitions.contains_key(&square) {
                break square;
            }
        };
        self.set_shield_square(square);
        Some(square)
    }
}
