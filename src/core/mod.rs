//! Core engine types: randomness, configuration, errors.
//!
//! Nothing in here knows about caves or monsters; the cave and rules
//! modules build on these.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{SessionConfig, DEFAULT_MAX_ARROW_PATH, DEFAULT_STARTING_ARROWS};
pub use error::{WumpusError, WumpusResult};
pub use rng::{GameRng, GameRngState, RandomSource};
#[cfg(any(test, feature = "testing"))]
pub use rng::ScriptedRng;
