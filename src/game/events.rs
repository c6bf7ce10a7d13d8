//! Progress events and the sinks that receive them.
//!
//! The game reports what happens as `GameEvent`s. The exact wording the
//! console sink prints is not part of the contract; the structured
//! `TurnOutcome` inside each turn event is.

use std::io::Write;

use serde::Serialize;
use tracing::warn;

use crate::board::TransitionKind;
use crate::core::TransitionError;
use crate::rules::TurnOutcome;

/// Something worth telling the players about.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum GameEvent {
    /// A snake or ladder candidate was skipped during setup.
    TransitionRejected(#[serde(serialize_with = "as_display")] TransitionError),

    /// The shield was placed on `square`.
    ShieldPlaced { square: u32 },

    /// One player's turn.
    Turn { name: String, outcome: TurnOutcome },

    /// The game stopped. `winners` holds `(name, square)` in finishing order.
    GameOver {
        winners: Vec<(String, u32)>,
        finished: bool,
    },
}

fn as_display<S: serde::Serializer>(err: &TransitionError, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(err)
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameEvent::TransitionRejected(err) => write!(f, "Invalid {err}. Skipping..."),
            GameEvent::ShieldPlaced { square } => write!(f, "A shield lies on square {square}."),
            GameEvent::Turn { name, outcome } => {
                write!(f, "{name} rolled a {}", outcome.roll)?;
                if outcome.overshoot {
                    return write!(f, "\n{name} exceeds the board size and stays at {}", outcome.from);
                }
                if outcome.shield_picked {
                    write!(f, "\n{name} picked up a shield!")?;
                }
                if outcome.shield_used {
                    write!(f, "\n{name}'s shield blocked a snake!")?;
                }
                match outcome.transition {
                    Some(TransitionKind::Snake) => write!(f, "\n{name} was bitten by a snake!")?,
                    Some(TransitionKind::Ladder) => write!(f, "\n{name} climbed a ladder!")?,
                    None => {}
                }
                write!(f, "\n{name} moved to position {}", outcome.to)?;
                if outcome.won {
                    write!(f, "\n{name} has won the game!")?;
                }
                Ok(())
            }
            GameEvent::GameOver { winners, finished } => {
                if *finished {
                    write!(f, "\nGame Over! Winners:")?;
                } else {
                    write!(f, "\nRound limit reached. Finished so far:")?;
                }
                for (name, square) in winners {
                    write!(f, "\n{name} at position {square}")?;
                }
                Ok(())
            }
        }
    }
}

/// Receives game events.
pub trait EventSink {
    fn emit(&mut self, event: &GameEvent);
}

impl<T: EventSink + ?Sized> EventSink for &mut T {
    fn emit(&mut self, event: &GameEvent) {
        (**self).emit(event);
    }
}

/// Discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: &GameEvent) {}
}

/// Keeps every event, for inspection after the game.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    events: Vec<GameEvent>,
}

impl RecordingSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Turn outcomes only, in play order.
    pub fn outcomes(&self) -> impl Iterator<Item = &TurnOutcome> {
        self.events.iter().filter_map(|event| match event {
            GameEvent::Turn { outcome, .. } => Some(outcome),
            _ => None,
        })
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &GameEvent) {
        self.events.push(event.clone());
    }
}

/// Writes events as text lines.
#[derive(Debug)]
pub struct ConsoleSink<W> {
    out: W,
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl ConsoleSink<std::io::Stdout> {
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> EventSink for ConsoleSink<W> {
    fn emit(&mut self, event: &GameEvent) {
        if let Err(error) = writeln!(self.out, "{event}") {
            warn!(%error, "failed to write game event");
        }
    }
}
