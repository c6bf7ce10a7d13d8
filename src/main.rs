//! Ladders - command-line Snake and Ladders.
//!
//! Builds a `GameConfig` from an optional TOML file plus flags, plays the
//! game and prints every turn followed by the winners.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use ladders::core::{DieMode, GameConfig, ShieldEffect, WinPolicy};
use ladders::game::{ConsoleSink, GameBuilder};
use tracing::{debug, instrument};
use tracing_subscriber::EnvFilter;

/// Play Snake and Ladders in the terminal
#[derive(Parser, Debug)]
#[command(name = "ladders")]
#[command(about = "Snake and Ladders simulation", long_about = None)]
#[command(version)]
struct Cli {
    /// TOML game configuration; flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Final square of the board
    #[arg(long)]
    board_size: Option<u32>,

    /// Player name (repeat for each player, in seating order)
    #[arg(short, long = "player")]
    players: Vec<String>,

    /// Snake as START:END (repeatable)
    #[arg(long = "snake", value_parser = parse_pair)]
    snakes: Vec<(u32, u32)>,

    /// Ladder as START:END (repeatable)
    #[arg(long = "ladder", value_parser = parse_pair)]
    ladders: Vec<(u32, u32)>,

    /// Die: fair, biased, always-one or fixed:N
    #[arg(long, value_parser = parse_die)]
    die: Option<DieMode>,

    /// Place a shield on a random free square
    #[arg(long)]
    shield: bool,

    /// Spend the shield to ignore the next snake
    #[arg(long)]
    shield_blocks_snakes: bool,

    /// Stop as soon as one player finishes
    #[arg(long)]
    first_to_finish: bool,

    /// Square players start on (0 or 1)
    #[arg(long)]
    start_position: Option<u32>,

    /// RNG seed for a reproducible game
    #[arg(long)]
    seed: Option<u64>,

    /// Give up after this many rounds
    #[arg(long)]
    max_rounds: Option<u32>,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long)]
    verbose: bool,
}

fn parse_pair(text: &str) -> Result<(u32, u32), String> {
    let (start, end) = text
        .split_once(':')
        .ok_or_else(|| format!("expected START:END, got {text:?}"))?;
    let square = |s: &str| {
        s.trim()
            .parse::<u32>()
            .map_err(|e| format!("{s:?} is not a square: {e}"))
    };
    Ok((square(start)?, square(end)?))
}

fn parse_die(text: &str) -> Result<DieMode, String> {
    match text {
        "fair" => Ok(DieMode::Fair),
        "biased" => Ok(DieMode::Biased),
        "always-one" => Ok(DieMode::AlwaysOne),
        other => other
            .strip_prefix("fixed:")
            .and_then(|face| face.parse().ok())
            .map(DieMode::Fixed)
            .ok_or_else(|| format!("unknown die {other:?}")),
    }
}

impl Cli {
    /// Merge the config file (if any) with the command-line flags.
    #[instrument(skip(self))]
    fn into_config(self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                GameConfig::from_toml_str(&text).with_context(|| format!("parsing {}", path.display()))?
            }
            None => GameConfig::new(100),
        };

        if let Some(size) = self.board_size {
            config.board_size = size;
        }
        if !self.players.is_empty() {
            config.players = self.players;
        }
        config.snakes.extend(self.snakes);
        config.ladders.extend(self.ladders);
        if let Some(die) = self.die {
            config.die = die;
        }
        if self.shield || self.shield_blocks_snakes {
            config.shield.enabled = true;
        }
        if self.shield_blocks_snakes {
            config.shield.effect = ShieldEffect::BlockSnake;
        }
        if self.first_to_finish {
            config.win_policy = WinPolicy::FirstToFinish;
        }
        if let Some(start) = self.start_position {
            config.start_position = start;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if let Some(rounds) = self.max_rounds {
            config.max_rounds = rounds;
        }

        debug!(?config, "configuration assembled");
        Ok(config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = cli.into_config()?;
    let mut game = GameBuilder::new(config)
        .with_sink(ConsoleSink::stdout())
        .build()?;
    let summary = game.run();

    println!(
        "\n{} rounds, {} turns (seed {})",
        summary.rounds, summary.turns, summary.seed
    );
    Ok(())
}
