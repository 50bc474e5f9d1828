//! Game session and rule engine.
//!
//! `GameSession` applies the movement, hazard and shooting rules to the
//! cave and tracks whether the game is open, won, or lost. Presentation
//! code drives it through commands and reads it through queries; it
//! never touches the cave directly.

mod arrow;
mod query;
mod session;

pub use arrow::ArrowPath;
pub use query::{ExploreRoomResult, GameStatus, Warning};
pub use session::GameSession;
