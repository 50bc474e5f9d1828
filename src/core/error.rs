//! Error types for cave lookups and session commands.
//!
//! These are usage-contract violations: the console never produces them
//! during normal play because it validates input before issuing commands.

use thiserror::Error;

use crate::cave::Item;
use crate::rules::GameStatus;

/// Errors raised by the cave and the game session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WumpusError {
    /// Room number outside 1..=20.
    #[error("Invalid room number: {0}")]
    InvalidRoom(u8),

    /// Item has not been placed in the cave yet.
    #[error("{0} has not been placed in the cave")]
    UnpositionedItem(Item),

    /// Arrow path length outside 1..=max.
    #[error("Arrow path must cover 1 to {max} rooms, got {len}")]
    InvalidPathLength { len: usize, max: usize },

    /// Two items were given the same starting room.
    #[error("{first} and {second} both placed in room {room}")]
    CrowdedRoom { first: Item, second: Item, room: u8 },

    /// Session configuration with an unusable limit.
    #[error("Invalid session configuration: {0}")]
    InvalidConfig(&'static str),

    /// Command issued after the game was decided.
    #[error("Game is over ({0}); start a new game first")]
    GameOver(GameStatus),
}

/// Result alias used throughout the crate.
pub type WumpusResult<T> = Result<T, WumpusError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(WumpusError::InvalidRoom(21).to_string(), "Invalid room number: 21");
        assert_eq!(
            WumpusError::UnpositionedItem(Item::Monster).to_string(),
            "Wumpus has not been placed in the cave"
        );
        assert_eq!(
            WumpusError::InvalidPathLength { len: 6, max: 5 }.to_string(),
            "Arrow path must cover 1 to 5 rooms, got 6"
        );
        assert_eq!(
            WumpusError::InvalidConfig("no arrows").to_string(),
            "Invalid session configuration: no arrows"
        );
        assert_eq!(
            WumpusError::GameOver(GameStatus::Won).to_string(),
            "Game is over (won); start a new game first"
        );
    }
}
