//! Cave topology and item placement.
//!
//! The cave is a fixed 3-regular graph (the vertices and edges of a
//! dodecahedron). Rooms never change; only item positions do.

mod item;
mod room;
mod topology;

pub use item::{Item, Placement};
pub(crate) use item::random_room;
pub use room::{Room, RoomNumber, ROOM_COUNT, TUNNELS_PER_ROOM};
pub use topology::Cave;
