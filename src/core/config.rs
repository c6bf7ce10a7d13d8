//! Game configuration types.
//!
//! A game is configured once, up front, by a `GameConfig`:
//! - board size and the snake/ladder candidates
//! - player names (seating order)
//! - die mode, shield power-up, win policy
//! - RNG seed and a round cap
//!
//! The config can be built in code with the `with_*` methods or loaded
//! from TOML:
//!
//! ```
//! use ladders::core::{DieMode, GameConfig, WinPolicy};
//!
//! let config = GameConfig::from_toml_str(r#"
//!     board_size = 30
//!     players = ["Ada", "Grace"]
//!     snakes = [[17, 7], [27, 1]]
//!     ladders = [[4, 25]]
//!     die = "biased"
//!     win_policy = "first-to-finish"
//! "#).unwrap();
//!
//! assert_eq!(config.board_size, 30);
//! assert_eq!(config.die, DieMode::Biased);
//! assert_eq!(config.win_policy, WinPolicy::FirstToFinish);
//! ```

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// How the die produces faces.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DieMode {
    /// Uniform over 1..=6.
    #[default]
    Fair,
    /// Uniform over 3..=6.
    Biased,
    /// Always 1.
    AlwaysOne,
    /// Always the given face (1..=6). Used for scripted play.
    Fixed(u32),
}

/// When the game loop stops.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WinPolicy {
    /// Keep playing until every player has reached the final square.
    #[default]
    AllMustFinish,
    /// Stop as soon as one player reaches the final square.
    FirstToFinish,
}

/// What holding a shield does.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShieldEffect {
    /// The shield is collected and reported, nothing more.
    #[default]
    Inert,
    /// The shield is spent to ignore the next snake its holder lands on.
    BlockSnake,
}

/// Shield power-up settings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShieldConfig {
    /// Place a shield on the board at all.
    pub enabled: bool,

    /// Explicit shield square. `None` picks a random free square.
    pub square: Option<u32>,

    pub effect: ShieldEffect,
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Final square. Squares run `1..=board_size`.
    pub board_size: u32,

    /// Snake candidates as `(start, end)`; valid when `end < start`.
    #[serde(default)]
    pub snakes: Vec<(u32, u32)>,

    /// Ladder candidates as `(start, end)`; valid when `end > start`.
    #[serde(default)]
    pub ladders: Vec<(u32, u32)>,

    /// Player names in seating order.
    pub players: Vec<String>,

    #[serde(default)]
    pub die: DieMode,

    #[serde(default)]
    pub shield: ShieldConfig,

    #[serde(default)]
    pub win_policy: WinPolicy,

    /// Square every player starts on (0 means "off the board").
    #[serde(default = "default_start_position")]
    pub start_position: u32,

    /// RNG seed. `None` seeds from the operating system.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Full passes over the players before the loop gives up.
    #[serde(default = "default_max_rounds")]
    pub max_rounds: u32,
}

fn default_start_position() -> u32 {
    1
}

fn default_max_rounds() -> u32 {
    10_000
}

impl GameConfig {
    /// Create a configuration for a board with no players, snakes or ladders.
    pub fn new(board_size: u32) -> Self {
        Self {
            board_size,
            snakes: Vec::new(),
            ladders: Vec::new(),
            players: Vec::new(),
            die: DieMode::default(),
            shield: ShieldConfig::default(),
            win_policy: WinPolicy::default(),
            start_position: default_start_position(),
            seed: None,
            max_rounds: default_max_rounds(),
        }
    }

    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Add a player.
    #[must_use]
    pub fn with_player(mut self, name: impl Into<String>) -> Self {
        self.players.push(name.into());
        self
    }

    /// Add a snake candidate.
    #[must_use]
    pub fn with_snake(mut self, start: u32, end: u32) -> Self {
        self.snakes.push((start, end));
        self
    }

    /// Add a ladder candidate.
    #[must_use]
    pub fn with_ladder(mut self, start: u32, end: u32) -> Self {
        self.ladders.push((start, end));
        self
    }

    #[must_use]
    pub fn with_die(mut self, die: DieMode) -> Self {
        self.die = die;
        self
    }

    /// Enable the shield on a random free square.
    #[must_use]
    pub fn with_shield(mut self, effect: ShieldEffect) -> Self {
        self.shield.enabled = true;
        self.shield.effect = effect;
        self
    }

    /// Enable the shield on a fixed square.
    #[must_use]
    pub fn with_shield_at(mut self, square: u32, effect: ShieldEffect) -> Self {
        self.shield = ShieldConfig {
            enabled: true,
            square: Some(square),
            effect,
        };
        self
    }

    #[must_use]
    pub fn with_win_policy(mut self, policy: WinPolicy) -> Self {
        self.win_policy = policy;
        self
    }

    #[must_use]
    pub fn with_start_position(mut self, start: u32) -> Self {
        self.start_position = start;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_max_rounds(mut self, rounds: u32) -> Self {
        self.max_rounds = rounds;
        self
    }

    /// Check everything that can be checked without building the board.
    ///
    /// Snake and ladder candidates are not checked here; bad ones are
    /// skipped individually while the board is built.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size < 2 {
            return Err(ConfigError::BoardTooSmall(self.board_size));
        }
        if self.players.is_empty() {
            return Err(ConfigError::NoPlayers);
        }
        if self.players.len() > 255 {
            return Err(ConfigError::TooManyPlayers(self.players.len()));
        }
        if let Some(index) = self.players.iter().position(|name| name.trim().is_empty()) {
            return Err(ConfigError::EmptyPlayerName(index));
        }
        if self.start_position >= self.board_size {
            return Err(ConfigError::StartOutOfRange {
                start: self.start_position,
                board_size: self.board_size,
            });
        }
        if let DieMode::Fixed(face) = self.die {
            if !(1..=6).contains(&face) {
                return Err(ConfigError::InvalidDieFace(face));
            }
        }
        if let Some(square) = self.shield.square.filter(|_| self.shield.enabled) {
            if square == 0 || square >= self.board_size {
                return Err(ConfigError::ShieldOutOfRange {
                    square,
                    board_size: self.board_size,
                });
            }
        }
        if self.max_rounds == 0 {
            return Err(ConfigError::ZeroRounds);
        }
        Ok(())
    }
}
