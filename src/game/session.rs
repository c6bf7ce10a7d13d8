//! Game setup and the game loop.

use tracing::{info, instrument, warn};

use super::events::{EventSink, GameEvent, NullSink};
use crate::board::{Board, Transition, TransitionKind};
use crate::core::{
    ConfigError, GameConfig, GameError, GameRng, Player, PlayerId, PlayerMap, TransitionError,
    WinPolicy,
};
use crate::dice::Die;
use crate::rules::{GameResult, TurnEngine, TurnOutcome};

/// How a game ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameSummary {
    pub result: GameResult,
    /// Full or partial passes over the players.
    pub rounds: u32,
    /// Turns actually played (skipped winners excluded).
    pub turns: u64,
    /// Seed that reproduces this game.
    pub seed: u64,
}

/// A game in progress.
///
/// Owns the board, the die and the players; nothing else holds a
/// reference to them while the game runs.
pub struct Game<S = NullSink> {
    board: Board,
    die: Die,
    players: PlayerMap<Player>,
    winners: Vec<PlayerId>,
    engine: TurnEngine,
    policy: WinPolicy,
    max_rounds: u32,
    rounds: u32,
    turns: u64,
    seed: u64,
    rejected: Vec<TransitionError>,
    sink: S,
}

/// Builder for creating a `Game`.
pub struct GameBuilder<S = NullSink> {
    config: GameConfig,
    die: Option<Die>,
    sink: S,
}

impl GameBuilder<NullSink> {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            die: None,
            sink: NullSink,
        }
    }
}

impl<S: EventSink> GameBuilder<S> {
    /// Send progress events to `sink`.
    pub fn with_sink<T: EventSink>(self, sink: T) -> GameBuilder<T> {
        GameBuilder {
            config: self.config,
            die: self.die,
            sink,
        }
    }

    /// Roll with `die` instead of one built from the config.
    #[must_use]
    pub fn with_die(mut self, die: Die) -> Self {
        self.die = Some(die);
        self
    }

    /// Validate the config, build the board and seat the players.
    ///
    /// Invalid snake or ladder candidates are skipped, logged and reported
    /// to the sink; they do not fail the build.
    #[instrument(skip(self), fields(board_size = self.config.board_size, players = self.config.players.len()))]
    pub fn build(self) -> Result<Game<S>, GameError> {
        let Self {
            config,
            die,
            mut sink,
        } = self;
        config.validate()?;

        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let seed = rng.seed();

        let mut board = Board::new(config.board_size);
        let mut rejected = Vec::new();
        let snakes = config.snakes.iter().map(|&(start, end)| (TransitionKind::Snake, start, end));
        let ladders = config.ladders.iter().map(|&(start, end)| (TransitionKind::Ladder, start, end));
        for (kind, start, end) in snakes.chain(ladders) {
            let added = Transition::new(kind, start, end).and_then(|t| board.add_transition(t));
            if let Err(err) = added {
                warn!(%err, "skipping transition");
                sink.emit(&GameEvent::TransitionRejected(err.clone()));
                rejected.push(err);
            }
        }

        if config.shield.enabled {
            let placed = match config.shield.square {
                Some(square) if board.destination_of(square) != square => {
                    return Err(ConfigError::ShieldOnTransition(square).into());
                }
                Some(square) => {
                    board.set_shield_square(square);
                    Some(square)
                }
                None => board.place_shield(&mut rng.for_context("shield")),
            };
            match placed {
                Some(square) => sink.emit(&GameEvent::ShieldPlaced { square }),
                None => warn!("no free square for the shield, playing without one"),
            }
        }

        let die = die.unwrap_or_else(|| Die::new(config.die, rng.for_context("dice")));
        let players = PlayerMap::new(config.players.len(), |id| {
            Player::new(id, config.players[id.index()].clone(), config.start_position)
        });

        info!(
            seed,
            snakes = board.count(TransitionKind::Snake),
            ladders = board.count(TransitionKind::Ladder),
            shield = ?board.shield_square(),
            "game ready"
        );

        Ok(Game {
            board,
            die,
            players,
            winners: Vec::new(),
            engine: TurnEngine::new(config.shield.effect),
            policy: config.win_policy,
            max_rounds: config.max_rounds,
            rounds: 0,
            turns: 0,
            seed,
            rejected,
            sink,
        })
    }
}

impl<S: EventSink> Game<S> {
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    /// Place a player on `square` before play, for scripted scenarios.
    pub fn place_player(&mut self, id: PlayerId, square: u32) {
        self.players[id].move_to(square);
    }

    /// Winners so far, in finishing order.
    #[must_use]
    pub fn winners(&self) -> &[PlayerId] {
        &self.winners
    }

    /// Snake and ladder candidates skipped during setup.
    #[must_use]
    pub fn rejected_transitions(&self) -> &[TransitionError] {
        &self.rejected
    }

    #[must_use]
    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Whether the win policy is satisfied.
    #[must_use]
    pub fn is_over(&self) -> bool {
        match self.policy {
            WinPolicy::AllMustFinish => self.winners.len() == self.players.player_count(),
            WinPolicy::FirstToFinish => !self.winners.is_empty(),
        }
    }

    /// Play one pass over the players in seating order.
    ///
    /// Winners are skipped. Under `FirstToFinish` the pass stops right
    /// after the first win.
    pub fn play_round(&mut self) -> Vec<TurnOutcome> {
        let mut outcomes = Vec::new();
        if self.is_over() {
            return outcomes;
        }
        self.rounds += 1;

        for id in PlayerId::all(self.players.player_count()) {
            let player = self.players.get_mut(id);
            let resolved = self
                .engine
                .resolve(player, &self.board, &mut self.die, &mut self.winners);
            let Some(outcome) = resolved else {
                continue;
            };
            self.turns += 1;
            self.sink.emit(&GameEvent::Turn {
                name: player.name().to_string(),
                outcome,
            });
            outcomes.push(outcome);

            if outcome.won && self.policy == WinPolicy::FirstToFinish {
                break;
            }
        }
        outcomes
    }

    /// Play rounds until the win policy is satisfied or the round cap hits.
    #[instrument(skip(self), fields(seed = self.seed, policy = ?self.policy))]
    pub fn run(&mut self) -> GameSummary {
        while !self.is_over() && self.rounds < self.max_rounds {
            self.play_round();
        }

        let result = if !self.is_over() {
            warn!(rounds = self.rounds, "round limit reached");
            GameResult::Unfinished(self.winners.clone())
        } else {
            match self.policy {
                WinPolicy::FirstToFinish => GameResult::Winner(self.winners[0]),
                WinPolicy::AllMustFinish => GameResult::Winners(self.winners.clone()),
            }
        };

        let winners = self
            .winners
            .iter()
            .map(|&id| (self.players[id].name().to_string(), self.players[id].position()))
            .collect();
        self.sink.emit(&GameEvent::GameOver {
            winners,
            finished: result.is_finished(),
        });
        info!(rounds = self.rounds, turns = self.turns, winners = self.winners.len(), "game over");

        GameSummary {
            result,
            rounds: self.rounds,
            turns: self.turns,
            seed: self.seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DieMode;
    use crate::game::RecordingSink;

    #[test]
    fn test_build_rejects_bad_config() {
        let err = GameBuilder::new(GameConfig::new(1).with_player("Ada")).build().err();
        assert!(matches!(err, Some(GameError::Config(ConfigError::BoardTooSmall(1)))));
    }

    #[test]
    fn test_build_skips_invalid_transitions() {
        let config = GameConfig::new(30)
            .with_player("Ada")
            .with_snake(17, 7)
            .with_snake(7, 17)
            .with_ladder(4, 25)
            .with_ladder(25, 40)
            .with_seed(1);

        let game = GameBuilder::new(config)
            .with_sink(RecordingSink::new())
            .build()
            .unwrap();

        assert_eq!(game.board().transitions().len(), 2);
        assert_eq!(game.rejected_transitions().len(), 2);
        let reported = game
            .sink()
            .events()
            .iter()
            .filter(|e| matches!(e, GameEvent::TransitionRejected(_)))
            .count();
        assert_eq!(reported, 2);
    }

    #[test]
    fn test_explicit_shield_on_transition_is_rejected() {
        let config = GameConfig::new(30)
            .with_player("Ada")
            .with_ladder(4, 25)
            .with_shield_at(4, crate::core::ShieldEffect::Inert);

        let err = GameBuilder::new(config).build().err();
        assert!(matches!(err, Some(GameError::Config(ConfigError::ShieldOnTransition(4)))));
    }

    #[test]
    fn test_random_shield_lands_on_free_square() {
        for seed in 0..20 {
            let config = GameConfig::new(12)
                .with_player("Ada")
                .with_ladder(2, 9)
                .with_snake(11, 3)
                .with_shield(crate::core::ShieldEffect::Inert)
                .with_seed(seed);

            let game = GameBuilder::new(config).build().unwrap();
            let square = game.board().shield_square().unwrap();
            assert!((1..12).contains(&square));
            assert_eq!(game.board().destination_of(square), square);
        }
    }

    #[test]
    fn test_random_shield_on_largest_board() {
        let config = GameConfig::new(u32::MAX)
            .with_player("Ada")
            .with_ladder(3, u32::MAX - 1)
            .with_shield(crate::core::ShieldEffect::Inert)
            .with_seed(3);

        let game = GameBuilder::new(config).build().unwrap();
        let square = game.board().shield_square().unwrap();
        assert!((1..u32::MAX).contains(&square));
        assert_ne!(square, 3);
    }

    #[test]
    fn test_same_seed_same_game() {
        let config = GameConfig::new(50)
            .with_player("Ada")
            .with_player("Grace")
            .with_snake(48, 3)
            .with_ladder(5, 30)
            .with_seed(1234);

        let first = GameBuilder::new(config.clone()).build().unwrap().run();
        let second = GameBuilder::new(config).build().unwrap().run();

        assert_eq!(first, second);
        assert_eq!(first.seed, 1234);
    }

    #[test]
    fn test_play_round_after_game_over_is_noop() {
        let config = GameConfig::new(6)
            .with_player("Ada")
            .with_start_position(0)
            .with_die(DieMode::Fixed(6));

        let mut game = GameBuilder::new(config).build().unwrap();
        assert_eq!(game.play_round().len(), 1);
        assert!(game.is_over());
        assert!(game.play_round().is_empty());
        assert_eq!(game.rounds(), 1);
    }

    #[test]
    fn test_round_cap() {
        // Always rolling 1 into a snake back to the start never finishes.
        let config = GameConfig::new(10)
            .with_player("Ada")
            .with_snake(3, 1)
            .with_die(DieMode::AlwaysOne)
            .with_max_rounds(25);

        let summary = GameBuilder::new(config).build().unwrap().run();

        assert_eq!(summary.result, GameResult::Unfinished(vec![]));
        assert_eq!(summary.rounds, 25);
        assert_eq!(summary.turns, 25);
    }
}
