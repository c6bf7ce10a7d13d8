//! Turn resolution.
//!
//! One call to [`TurnEngine::resolve`] plays one player's turn:
//!
//! 1. winners are skipped (no roll)
//! 2. roll, add to the current square
//! 3. past the final square: the move is void
//! 4. landing on the shield square picks the shield up
//! 5. follow a snake or ladder (a held shield may block a snake)
//! 6. reaching the final square makes the player a winner

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::board::{Board, TransitionKind};
use crate::core::{Player, PlayerId, ShieldEffect};
use crate::dice::Die;

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// First-to-finish: the single winner.
    Winner(PlayerId),
    /// All-must-finish: everyone, in finishing order.
    Winners(Vec<PlayerId>),
    /// The round cap was hit. Holds whoever finished before that.
    Unfinished(Vec<PlayerId>),
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Winners(ps) | GameResult::Unfinished(ps) => ps.contains(&player),
        }
    }

    /// Winners in finishing order.
    #[must_use]
    pub fn winners(&self) -> &[PlayerId] {
        match self {
            GameResult::Winner(p) => std::slice::from_ref(p),
            GameResult::Winners(ps) | GameResult::Unfinished(ps) => ps,
        }
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        !matches!(self, GameResult::Unfinished(_))
    }
}

/// What happened during one turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnOutcome {
    pub player: PlayerId,
    /// Face rolled.
    pub roll: u32,
    /// Square before the turn.
    pub from: u32,
    /// `from + roll`, before any transition. Saturates at `u32::MAX`.
    pub tentative: u32,
    /// Square after the turn.
    pub to: u32,
    /// The roll went past the final square and was voided.
    pub overshoot: bool,
    /// Snake or ladder followed this turn.
    pub transition: Option<TransitionKind>,
    pub shield_picked: bool,
    /// A shield was spent to ignore a snake.
    pub shield_used: bool,
    /// The player reached the final square this turn.
    pub won: bool,
}

/// Resolves single turns against a board.
#[derive(Clone, Copy, Debug, Default)]
pub struct TurnEngine {
    shield_effect: ShieldEffect,
}

impl TurnEngine {
    #[must_use]
    pub fn new(shield_effect: ShieldEffect) -> Self {
        Self { shield_effect }
    }

    /// Play one turn for `player`.
    ///
    /// Returns `None` without rolling when the player has already won.
    /// A player who reaches the final square is appended to `winners`.
    pub fn resolve(
        &self,
        player: &mut Player,
        board: &Board,
        die: &mut Die,
        winners: &mut Vec<PlayerId>,
    ) -> Option<TurnOutcome> {
        if player.is_winner() {
            return None;
        }

        let roll = die.roll();
        let from = player.position();
        let tentative = from.saturating_add(roll);

        let mut outcome = TurnOutcome {
            player: player.id(),
            roll,
            from,
            tentative,
            to: from,
            overshoot: false,
            transition: None,
            shield_picked: false,
            shield_used: false,
            won: false,
        };

        if from.checked_add(roll).filter(|&square| square <= board.size()).is_none() {
            outcome.overshoot = true;
            debug!(player = %player, roll, from, "overshoot, staying put");
            return Some(outcome);
        }

        if board.shield_square() == Some(tentative) && !player.has_shield() {
            player.pick_shield();
            outcome.shield_picked = true;
        }

        let mut destination = board.destination_of(tentative);
        let kind = TransitionKind::between(tentative, destination);

        if kind == Some(TransitionKind::Snake)
            && self.shield_effect == ShieldEffect::BlockSnake
            && player.has_shield()
        {
            player.use_shield();
            outcome.shield_used = true;
            destination = tentative;
        } else {
            outcome.transition = kind;
        }

        player.move_to(destination);
        outcome.to = destination;

        if destination == board.size() && player.mark_winner() {
            winners.push(player.id());
            outcome.won = true;
            info!(player = %player, place = winners.len(), "player finished");
        }

        debug!(
            player = %player,
            roll,
            from,
            to = destination,
            transition = ?outcome.transition,
            "turn resolved"
        );
        Some(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player_at(square: u32) -> Player {
        let mut player = Player::new(PlayerId::new(0), "Ada", 1);
        player.move_to(square);
        player
    }

    #[test]
    fn test_game_result_is_winner() {
        let result = GameResult::Winner(PlayerId::new(1));
        assert!(!result.is_winner(PlayerId::new(0)));
        assert!(result.is_winner(PlayerId::new(1)));
        assert_eq!(result.winners(), &[PlayerId::new(1)]);

        let all = GameResult::Winners(vec![PlayerId::new(2), PlayerId::new(0)]);
        assert!(all.is_winner(PlayerId::new(0)));
        assert!(!all.is_winner(PlayerId::new(1)));
        assert!(all.is_finished());

        let stalled = GameResult::Unfinished(vec![]);
        assert!(!stalled.is_finished());
        assert!(stalled.winners().is_empty());
    }

    #[test]
    fn test_winner_is_skipped_without_rolling() {
        let board = Board::new(10);
        let mut die = Die::fixed(3);
        let mut winners = Vec::new();
        let mut player = player_at(7);

        TurnEngine::default().resolve(&mut player, &board, &mut die, &mut winners);
        assert!(player.is_winner());

        let again = TurnEngine::default().resolve(&mut player, &board, &mut die, &mut winners);
        assert_eq!(again, None);
        assert_eq!(player.position(), 10);
        assert_eq!(winners, vec![PlayerId::new(0)]);
    }

    #[test]
    fn test_exact_landing_on_ladder_top_wins() {
        let mut board = Board::new(20);
        board.add_ladder(15, 20).unwrap();
        let mut winners = Vec::new();
        let mut player = player_at(12);

        let outcome = TurnEngine::default()
            .resolve(&mut player, &board, &mut Die::fixed(3), &mut winners)
            .unwrap();

        assert_eq!(outcome.transition, Some(TransitionKind::Ladder));
        assert!(outcome.won);
        assert_eq!(winners.len(), 1);
    }

    #[test]
    fn test_shield_pickup_does_not_move_player() {
        let mut board = Board::new(20);
        board.set_shield_square(6);
        let mut player = player_at(2);

        let outcome = TurnEngine::default()
            .resolve(&mut player, &board, &mut Die::fixed(4), &mut Vec::new())
            .unwrap();

        assert!(outcome.shield_picked);
        assert!(player.has_shield());
        assert_eq!(player.position(), 6);
    }

    #[test]
    fn test_inert_shield_does_not_block() {
        let mut board = Board::new(20);
        board.add_snake(9, 3).unwrap();
        let mut player = player_at(5);
        player.pick_shield();

        let outcome = TurnEngine::new(ShieldEffect::Inert)
            .resolve(&mut player, &board, &mut Die::fixed(4), &mut Vec::new())
            .unwrap();

        assert_eq!(outcome.transition, Some(TransitionKind::Snake));
        assert!(!outcome.shield_used);
        assert!(player.has_shield());
        assert_eq!(player.position(), 3);
    }

    #[test]
    fn test_block_snake_spends_shield() {
        let mut board = Board::new(20);
        board.add_snake(9, 3).unwrap();
        let engine = TurnEngine::new(ShieldEffect::BlockSnake);
        let mut player = player_at(5);
        player.pick_shield();

        let outcome = engine
            .resolve(&mut player, &board, &mut Die::fixed(4), &mut Vec::new())
            .unwrap();

        assert!(outcome.shield_used);
        assert_eq!(outcome.transition, None);
        assert_eq!(player.position(), 9);
        assert!(!player.has_shield());

        // No shield left for the second bite.
        player.move_to(5);
        let outcome = engine
            .resolve(&mut player, &board, &mut Die::fixed(4), &mut Vec::new())
            .unwrap();
        assert_eq!(outcome.transition, Some(TransitionKind::Snake));
        assert_eq!(player.position(), 3);
    }

    #[test]
    fn test_block_snake_ignores_ladders() {
        let mut board = Board::new(30);
        board.add_ladder(4, 25).unwrap();
        let mut player = player_at(1);
        player.pick_shield();

        let outcome = TurnEngine::new(ShieldEffect::BlockSnake)
            .resolve(&mut player, &board, &mut Die::fixed(3), &mut Vec::new())
            .unwrap();

        assert_eq!(outcome.transition, Some(TransitionKind::Ladder));
        assert!(player.has_shield());
        assert_eq!(player.position(), 25);
    }
}
