//! The cave: a fixed dodecahedron of 20 rooms plus item positions.
//!
//! The `Cave` tracks where items are and answers adjacency questions.
//! It supports:
//! - Room lookup by number
//! - Item placement (unconditional overwrite)
//! - Item lookup, failing for items never placed
//!
//! ## Usage
//!
//! ```
//! use hunt_the_wumpus::cave::{Cave, Item, RoomNumber};
//!
//! let mut cave = Cave::new();
//! let room = RoomNumber::new(1).unwrap();
//! cave.place(Item::Player, room);
//!
//! let tunnels: Vec<u8> = cave.position_of(Item::Player).unwrap()
//!     .tunnels().iter().map(|r| r.get()).collect();
//! assert_eq!(tunnels, vec![2, 5, 8]);
//! ```

use rustc_hash::FxHashMap;

use super::item::{Item, Placement};
use super::room::{Room, RoomNumber, ROOM_COUNT, TUNNELS_PER_ROOM};
use crate::core::{WumpusError, WumpusResult};

/// Tunnels from each room, in declared order. Row `i` is room `i + 1`.
const DODECAHEDRON: [[u8; TUNNELS_PER_ROOM]; ROOM_COUNT as usize] = [
    [2, 5, 8],
    [1, 3, 10],
    [2, 4, 12],
    [3, 5, 14],
    [1, 4, 6],
    [5, 7, 15],
    [6, 8, 17],
    [1, 7, 9],
    [8, 10, 18],
    [2, 9, 11],
    [10, 12, 19],
    [3, 11, 13],
    [12, 14, 20],
    [4, 13, 15],
    [6, 14, 16],
    [15, 17, 20],
    [7, 16, 18],
    [9, 17, 19],
    [11, 18, 20],
    [13, 16, 19],
];

/// The 20 rooms and what is in them.
#[derive(Clone, Debug)]
pub struct Cave {
    rooms: [Room; ROOM_COUNT as usize],

    /// Item locations: item -> room
    items: FxHashMap<Item, RoomNumber>,
}

impl Default for Cave {
    fn default() -> Self {
        Self::new()
    }
}

impl Cave {
    /// Create the cave with no items placed.
    #[must_use]
    pub fn new() -> Self {
        let rooms = std::array::from_fn(|index| {
            let tunnels = DODECAHEDRON[index].map(|n| RoomNumber::from_index(n as usize - 1));
            Room::new(RoomNumber::from_index(index), tunnels)
        });

        Self {
            rooms,
            items: FxHashMap::default(),
        }
    }

    /// Look up a room by raw number.
    pub fn room_by_number(&self, number: u8) -> WumpusResult<&Room> {
        Ok(self.room(RoomNumber::new(number)?))
    }

    /// Look up a room.
    #[must_use]
    pub fn room(&self, number: RoomNumber) -> &Room {
        &self.rooms[number.index()]
    }

    /// Iterate over all rooms in order.
    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.iter()
    }

    /// Room currently holding `item`.
    pub fn position_of(&self, item: Item) -> WumpusResult<&Room> {
        self.items
            .get(&item)
            .map(|&number| self.room(number))
            .ok_or(WumpusError::UnpositionedItem(item))
    }

    /// Move `item` to `room`, replacing any previous position.
    pub fn place(&mut self, item: Item, room: RoomNumber) {
        self.items.insert(item, room);
    }

    /// Place every item at its starting room.
    pub fn apply(&mut self, placement: &Placement) {
        for (item, room) in placement.iter() {
            self.place(item, room);
        }
    }

    /// Check whether `item` is in `room`.
    pub fn is_at(&self, item: Item, room: RoomNumber) -> WumpusResult<bool> {
        Ok(self.position_of(item)?.number() == room)
    }

    /// Check whether any of `items` is in `room`.
    pub fn any_at(&self, items: &[Item], room: RoomNumber) -> WumpusResult<bool> {
        for &item in items {
            if self.is_at(item, room)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Check whether a tunnel connects two rooms.
    #[must_use]
    pub fn tunnel_between(&self, from: RoomNumber, to: RoomNumber) -> bool {
        self.room(from).leads_to(to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room(n: u8) -> RoomNumber {
        RoomNumber::new(n).unwrap()
    }

    #[test]
    fn test_room_by_number() {
        let cave = Cave::new();

        let tunnels: Vec<_> = cave.room_by_number(20).unwrap().tunnels().map(RoomNumber::get).to_vec();
        assert_eq!(tunnels, vec![13, 16, 19]);
        assert_eq!(cave.room_by_number(0).unwrap_err(), WumpusError::InvalidRoom(0));
        assert_eq!(cave.room_by_number(21).unwrap_err(), WumpusError::InvalidRoom(21));
    }

    #[test]
    fn test_room_numbers_match_table_rows() {
        let cave = Cave::new();
        for (index, r) in cave.rooms().enumerate() {
            assert_eq!(r.number().index(), index);
        }
    }

    #[test]
    fn test_every_room_has_three_distinct_tunnels() {
        let cave = Cave::new();
        for r in cave.rooms() {
            let [a, b, c] = r.tunnels();
            assert!(a != b && b != c && a != c, "room {} repeats a tunnel", r.number());
            assert!(!r.leads_to(r.number()), "room {} leads to itself", r.number());
        }
    }

    #[test]
    fn test_tunnels_are_symmetric() {
        let cave = Cave::new();
        for r in cave.rooms() {
            for t in r.tunnels() {
                assert!(
                    cave.tunnel_between(t, r.number()),
                    "{} -> {} has no way back",
                    r.number(),
                    t
                );
            }
        }
    }

    #[test]
    fn test_unpositioned_item() {
        let cave = Cave::new();
        assert_eq!(
            cave.position_of(Item::Bat1).unwrap_err(),
            WumpusError::UnpositionedItem(Item::Bat1)
        );
    }

    #[test]
    fn test_place_overwrites() {
        let mut cave = Cave::new();

        cave.place(Item::Monster, room(3));
        cave.place(Item::Monster, room(9));

        assert_eq!(cave.position_of(Item::Monster).unwrap().number(), room(9));
        assert!(cave.is_at(Item::Monster, room(9)).unwrap());
        assert!(!cave.is_at(Item::Monster, room(3)).unwrap());
    }

    #[test]
    fn test_apply_and_any_at() {
        let mut cave = Cave::new();
        let placement = Placement::from_rooms([1, 2, 3, 4, 5, 6]).unwrap();

        cave.apply(&placement);

        assert!(cave.any_at(&Item::PITS, room(4)).unwrap());
        assert!(cave.any_at(&Item::BATS, room(5)).unwrap());
        assert!(!cave.any_at(&Item::BATS, room(4)).unwrap());
    }
}
