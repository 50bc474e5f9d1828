//! Read-only views of a session: game status and the player's surroundings.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::cave::{RoomNumber, TUNNELS_PER_ROOM};

/// Where the current game stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Still being played.
    Open,
    /// The monster was shot.
    Won,
    /// Pit, monster, own arrow, or an empty quiver.
    Lost,
}

impl GameStatus {
    /// Check if the game has been decided.
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, GameStatus::Open)
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GameStatus::Open => "open",
            GameStatus::Won => "won",
            GameStatus::Lost => "lost",
        };
        f.write_str(name)
    }
}

/// Hazard sensed in a neighboring room.
///
/// Ordered the way warnings are reported: monster, then pits, then bats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Warning {
    Monster,
    Pit,
    Bat,
}

/// What the player can perceive from the current room.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExploreRoomResult {
    /// Room the player is in.
    pub room: RoomNumber,

    /// Rooms reachable through one tunnel, in declared order.
    pub tunnels: [RoomNumber; TUNNELS_PER_ROOM],

    /// One entry per hazard type found next door.
    pub warnings: BTreeSet<Warning>,
}

impl ExploreRoomResult {
    /// Check whether a tunnel leads to `room`.
    #[must_use]
    pub fn has_tunnel_to(&self, room: u8) -> bool {
        self.tunnels.iter().any(|t| t.get() == room)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_is_over() {
        assert!(!GameStatus::Open.is_over());
        assert!(GameStatus::Won.is_over());
        assert!(GameStatus::Lost.is_over());
    }

    #[test]
    fn test_warning_order() {
        let warnings: BTreeSet<_> = [Warning::Bat, Warning::Monster, Warning::Pit].into();
        let ordered: Vec<_> = warnings.into_iter().collect();
        assert_eq!(ordered, vec![Warning::Monster, Warning::Pit, Warning::Bat]);
    }

    #[test]
    fn test_has_tunnel_to() {
        let result = ExploreRoomResult {
            room: RoomNumber::new(1).unwrap(),
            tunnels: [2, 5, 8].map(|n| RoomNumber::new(n).unwrap()),
            warnings: BTreeSet::new(),
        };

        assert!(result.has_tunnel_to(5));
        assert!(!result.has_tunnel_to(1));
        assert!(!result.has_tunnel_to(0));
    }
}
