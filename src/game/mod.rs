//! The game loop.
//!
//! `GameBuilder` turns a `GameConfig` into a ready `Game`; `Game::run`
//! plays passes over the players until the win policy is met.
//!
//! ```
//! use ladders::core::{DieMode, GameConfig};
//! use ladders::game::GameBuilder;
//! use ladders::rules::GameResult;
//!
//! let config = GameConfig::new(6)
//!     .with_player("Ada")
//!     .with_player("Grace")
//!     .with_start_position(0)
//!     .with_die(DieMode::Fixed(6));
//!
//! let summary = GameBuilder::new(config).build().unwrap().run();
//! assert_eq!(summary.result.winners().len(), 2);
//! ```

mod events;
mod session;

pub use events::{ConsoleSink, EventSink, GameEvent, NullSink, RecordingSink};
pub use session::{Game, GameBuilder, GameSummary};
