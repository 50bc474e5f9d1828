//! Session configuration.
//!
//! The cave itself is fixed; what a session may vary is the arrow supply
//! and how far a single arrow can fly.

use serde::{Deserialize, Serialize};

use super::error::{WumpusError, WumpusResult};

/// Arrows in the quiver at the start of every game.
pub const DEFAULT_STARTING_ARROWS: u8 = 5;

/// Longest path a single arrow may be aimed along.
pub const DEFAULT_MAX_ARROW_PATH: usize = 5;

/// Configuration for a game session.
///
/// ## Example
///
/// ```
/// use hunt_the_wumpus::core::SessionConfig;
///
/// let config = SessionConfig::default().with_starting_arrows(3);
/// assert_eq!(config.starting_arrows, 3);
/// assert_eq!(config.max_arrow_path, 5);
/// ```
///
/// Both limits must be at least 1. Deserializing checks this and fails
/// with `WumpusError::InvalidConfig`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSessionConfig")]
pub struct SessionConfig {
    /// Arrows available after each start.
    pub starting_arrows: u8,

    /// Maximum number of rooms in one arrow path.
    pub max_arrow_path: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            starting_arrows: DEFAULT_STARTING_ARROWS,
            max_arrow_path: DEFAULT_MAX_ARROW_PATH,
        }
    }
}

const NO_ARROWS: &str = "A game needs at least 1 arrow";
const NO_PATH: &str = "An arrow must fly through at least 1 room";

impl SessionConfig {
    /// Set the number of arrows each game starts with.
    #[must_use]
    pub fn with_starting_arrows(mut self, arrows: u8) -> Self {
        assert!(arrows > 0, "{NO_ARROWS}");
        self.starting_arrows = arrows;
        self
    }

    /// Set the maximum arrow path length.
    #[must_use]
    pub fn with_max_arrow_path(mut self, rooms: usize) -> Self {
        assert!(rooms > 0, "{NO_PATH}");
        self.max_arrow_path = rooms;
        self
    }

    /// Check that both limits are usable.
    pub fn validate(&self) -> WumpusResult<()> {
        if self.starting_arrows == 0 {
            return Err(WumpusError::InvalidConfig(NO_ARROWS));
        }
        if self.max_arrow_path == 0 {
            return Err(WumpusError::InvalidConfig(NO_PATH));
        }
        Ok(())
    }
}

/// Wire form of `SessionConfig`, checked before it becomes one.
#[derive(Deserialize)]
#[serde(default)]
struct RawSessionConfig {
    starting_arrows: u8,
    max_arrow_path: usize,
}

impl Default for RawSessionConfig {
    fn default() -> Self {
        let SessionConfig {
            starting_arrows,
            max_arrow_path,
        } = SessionConfig::default();
        Self {
            starting_arrows,
            max_arrow_path,
        }
    }
}

impl TryFrom<RawSessionConfig> for SessionConfig {
    type Error = WumpusError;

    fn try_from(raw: RawSessionConfig) -> WumpusResult<Self> {
        let config = Self {
            starting_arrows: raw.starting_arrows,
            max_arrow_path: raw.max_arrow_path,
        };
        config.validate()?;
        Ok(config)
    }
}
