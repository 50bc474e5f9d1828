//! Room identification and tunnels.
//!
//! ## RoomNumber
//!
//! Type-safe room identifier, always within 1..=20.
//!
//! ## Room
//!
//! A room and the three rooms its tunnels lead to, in declared order.
//! The order matters: monster movement and crooked arrows pick a tunnel
//! by index.

use serde::{Deserialize, Serialize};

use crate::core::{WumpusError, WumpusResult};

/// Number of rooms in the cave.
pub const ROOM_COUNT: u8 = 20;

/// Number of tunnels leaving every room.
pub const TUNNELS_PER_ROOM: usize = 3;

/// Room identifier supporting rooms 1 through 20.
///
/// ```
/// use hunt_the_wumpus::cave::RoomNumber;
///
/// let room = RoomNumber::new(7).unwrap();
/// assert_eq!(room.get(), 7);
/// assert!(RoomNumber::new(0).is_err());
/// assert!(RoomNumber::new(21).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct RoomNumber(u8);

impl RoomNumber {
    /// Create a room number, failing if outside 1..=20.
    pub fn new(number: u8) -> WumpusResult<Self> {
        if (1..=ROOM_COUNT).contains(&number) {
            Ok(Self(number))
        } else {
            Err(WumpusError::InvalidRoom(number))
        }
    }

    /// Get the raw room number (1-based).
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// 0-based index into the room table.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize - 1
    }

    /// Iterate over every room in the cave, in order.
    pub fn all() -> impl Iterator<Item = RoomNumber> {
        (1..=ROOM_COUNT).map(RoomNumber)
    }

    /// Room number for a 0-based table index. Only called with indices
    /// below `ROOM_COUNT`.
    pub(crate) const fn from_index(index: usize) -> Self {
        Self(index as u8 + 1)
    }
}

impl TryFrom<u8> for RoomNumber {
    type Error = WumpusError;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Self::new(number)
    }
}

impl From<RoomNumber> for u8 {
    fn from(room: RoomNumber) -> u8 {
        room.0
    }
}

impl std::fmt::Display for RoomNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A room and the rooms its tunnels lead to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    number: RoomNumber,
    tunnels: [RoomNumber; TUNNELS_PER_ROOM],
}

impl Room {
    pub(crate) const fn new(number: RoomNumber, tunnels: [RoomNumber; TUNNELS_PER_ROOM]) -> Self {
        Self { number, tunnels }
    }

    /// This room's number.
    #[must_use]
    pub const fn number(&self) -> RoomNumber {
        self.number
    }

    /// Neighboring rooms in declared order.
    #[must_use]
    pub const fn tunnels(&self) -> [RoomNumber; TUNNELS_PER_ROOM] {
        self.tunnels
    }

    /// Neighbor reached through tunnel `index` (0, 1 or 2).
    #[must_use]
    pub fn tunnel(&self, index: usize) -> RoomNumber {
        self.tunnels[index]
    }

    /// Check whether a tunnel leads from this room to `other`.
    #[must_use]
    pub fn leads_to(&self, other: RoomNumber) -> bool {
        self.tunnels.contains(&other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_number_bounds() {
        assert!(RoomNumber::new(1).is_ok());
        assert!(RoomNumber::new(20).is_ok());
        assert_eq!(RoomNumber::new(0), Err(WumpusError::InvalidRoom(0)));
        assert_eq!(RoomNumber::new(21), Err(WumpusError::InvalidRoom(21)));
    }

    #[test]
    fn test_room_number_index() {
        let first = RoomNumber::new(1).unwrap();
        let last = RoomNumber::new(20).unwrap();

        assert_eq!(first.index(), 0);
        assert_eq!(last.index(), 19);
        assert_eq!(RoomNumber::from_index(19), last);
    }

    #[test]
    fn test_room_number_all() {
        let rooms: Vec<_> = RoomNumber::all().map(RoomNumber::get).collect();
        assert_eq!(rooms, (1..=20).collect::<Vec<u8>>());
    }

    #[test]
    fn test_room_number_display() {
        assert_eq!(format!("{}", RoomNumber::new(13).unwrap()), "13");
    }

    #[test]
    fn test_room_number_serde_rejects_out_of_range() {
        let room: RoomNumber = serde_json::from_str("4").unwrap();
        assert_eq!(room.get(), 4);
        assert!(serde_json::from_str::<RoomNumber>("42").is_err());
    }

    #[test]
    fn test_room_tunnels() {
        let room = Room::new(
            RoomNumber(1),
            [RoomNumber(2), RoomNumber(5), RoomNumber(8)],
        );

        assert_eq!(room.tunnel(1), RoomNumber(5));
        assert!(room.leads_to(RoomNumber(8)));
        assert!(!room.leads_to(RoomNumber(3)));
    }
}
