//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Type-safe player identifier supporting 1-255 players.
//!
//! ## PlayerMap
//!
//! Per-player data storage backed by `Vec` for O(1) access, indexed by
//! `PlayerId` and iterated in seating (insertion) order.
//!
//! ## Player
//!
//! The mutable racer: name, square, win status and shield flag.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Player identifier supporting 1-255 players.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use ladders::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[0], PlayerId::new(0));
    /// assert_eq!(players[3], PlayerId::new(3));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use ladders::core::{PlayerId, PlayerMap};
///
/// let mut squares: PlayerMap<u32> = PlayerMap::new(4, |_| 1);
/// assert_eq!(squares[PlayerId::new(0)], 1);
///
/// squares[PlayerId::new(1)] = 15;
/// assert_eq!(squares[PlayerId::new(1)], 15);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    ///
    /// The factory receives the `PlayerId` for each player.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        let data = (0..player_count as u8)
            .map(|i| factory(PlayerId(i)))
            .collect();

        Self { data }
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs in seating order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// Where a player stands in the race.
///
/// `Active -> Winner` fires at most once; nothing leaves `Winner`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerStatus {
    #[default]
    Active,
    Winner,
}

/// A racer on the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    name: String,
    position: u32,
    status: PlayerStatus,
    has_shield: bool,
}

impl Player {
    /// Create an active player standing on `start`.
    pub fn new(id: PlayerId, name: impl Into<String>, start: u32) -> Self {
        Self {
            id,
            name: name.into(),
            position: start,
            status: PlayerStatus::Active,
            has_shield: false,
        }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current square.
    #[must_use]
    pub fn position(&self) -> u32 {
        self.position
    }

    #[must_use]
    pub fn status(&self) -> PlayerStatus {
        self.status
    }

    #[must_use]
    pub fn is_winner(&self) -> bool {
        self.status == PlayerStatus::Winner
    }

    #[must_use]
    pub fn has_shield(&self) -> bool {
        self.has_shield
    }

    /// Place the player on `square` without any rule processing.
    ///
    /// Used by scenario setup; the turn engine is the only in-game mover.
    pub fn move_to(&mut self, square: u32) {
        self.position = square;
    }

    pub(crate) fn pick_shield(&mut self) {
        self.has_shield = true;
    }

    pub(crate) fn use_shield(&mut self) {
        self.has_shield = false;
    }

    /// Flag the player as a winner. Returns `false` if already flagged.
    pub(crate) fn mark_winner(&mut self) -> bool {
        if self.is_winner() {
            return false;
        }
        self.status = PlayerStatus::Winner;
        true
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        assert_eq!(p0.index(), 0);
        assert_eq!(p1.index(), 1);
        assert_eq!(format!("{}", p0), "Player 0");
    }

    #[test]
    fn test_player_id_all() {
        let players: Vec<_> = PlayerId::all(3).collect();
        assert_eq!(players, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
    }

    #[test]
    fn test_player_map_new() {
        let map: PlayerMap<u32> = PlayerMap::new(3, |p| p.index() as u32 * 10);

        assert_eq!(map[PlayerId::new(0)], 0);
        assert_eq!(map[PlayerId::new(1)], 10);
        assert_eq!(map[PlayerId::new(2)], 20);
        assert_eq!(map.player_count(), 3);
    }

    #[test]
    fn test_player_map_iter_in_seating_order() {
        let map: PlayerMap<u32> = PlayerMap::new(3, |p| p.index() as u32);

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs[0], (PlayerId::new(0), &0));
        assert_eq!(pairs[2], (PlayerId::new(2), &2));
    }

    #[test]
    fn test_player_map_mutation() {
        let mut map: PlayerMap<u32> = PlayerMap::new(2, |_| 1);
        map[PlayerId::new(1)] = 20;

        assert_eq!(map[PlayerId::new(0)], 1);
        assert_eq!(map[PlayerId::new(1)], 20);
    }

    #[test]
    #[should_panic(expected = "Must have at least 1 player")]
    fn test_player_map_zero_players() {
        let _: PlayerMap<u32> = PlayerMap::new(0, |_| 0);
    }

    #[test]
    fn test_new_player_is_active() {
        let player = Player::new(PlayerId::new(0), "Ada", 1);

        assert_eq!(player.name(), "Ada");
        assert_eq!(player.position(), 1);
        assert_eq!(player.status(), PlayerStatus::Active);
        assert!(!player.has_shield());
    }

    #[test]
    fn test_mark_winner_fires_once() {
        let mut player = Player::new(PlayerId::new(0), "Ada", 1);

        assert!(player.mark_winner());
        assert!(!player.mark_winner());
        assert!(player.is_winner());
    }

    #[test]
    fn test_shield_pick_and_use() {
        let mut player = Player::new(PlayerId::new(0), "Ada", 1);

        player.pick_shield();
        assert!(player.has_shield());
        player.use_shield();
        assert!(!player.has_shield());
    }

    #[test]
    fn test_player_serialization() {
        let player = Player::new(PlayerId::new(2), "Grace", 0);
        let json = serde_json::to_string(&player).unwrap();
        let back: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(player, back);
    }
}
