//! # hunt-the-wumpus
//!
//! The classic cave hunt as a deterministic, seedable game engine.
//!
//! ## Design Principles
//!
//! 1. **Engine, not UI**: The session never prints. Commands report what
//!    happened through `GameObserver`; presentation code renders it.
//!
//! 2. **Injectable Randomness**: Every random decision goes through
//!    `RandomSource`, so a seed (or a scripted draw list) reproduces a game.
//!
//! 3. **Explicit Sessions**: No global state. A `GameSession` owns its cave,
//!    its random source and its status.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, errors
//! - `cave`: Room numbers, the dodecahedron, items and placement
//! - `events`: Game notifications and observers
//! - `rules`: The game session (commands and queries)
//! - `console`: Text front end over any reader/writer

pub mod core;
pub mod cave;
pub mod events;
pub mod rules;
pub mod console;

// Re-export commonly used types
pub use crate::core::{
    GameRng, GameRngState, RandomSource,
    SessionConfig, WumpusError, WumpusResult,
};
#[cfg(any(test, feature = "testing"))]
pub use crate::core::ScriptedRng;

pub use crate::cave::{Cave, Item, Placement, Room, RoomNumber};

pub use crate::events::{GameNotification, GameObserver};

pub use crate::rules::{ArrowPath, ExploreRoomResult, GameSession, GameStatus, Warning};

pub use crate::console::{Console, ConsoleError};
