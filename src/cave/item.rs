//! Items that occupy rooms, and their starting layout.
//!
//! A `Placement` is drawn once per new layout and kept so a lost (or won)
//! game can be replayed with the same setup.

use std::ops::Index;

use serde::{Deserialize, Serialize};

use super::room::{RoomNumber, ROOM_COUNT};
use crate::core::{RandomSource, WumpusError, WumpusResult};

/// Something that occupies a room.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Item {
    Player,
    Monster,
    Pit1,
    Pit2,
    Bat1,
    Bat2,
}

impl Item {
    /// All items, in placement order.
    pub const ALL: [Item; 6] = [
        Item::Player,
        Item::Monster,
        Item::Pit1,
        Item::Pit2,
        Item::Bat1,
        Item::Bat2,
    ];

    /// Both pits.
    pub const PITS: [Item; 2] = [Item::Pit1, Item::Pit2];

    /// Both bats.
    pub const BATS: [Item; 2] = [Item::Bat1, Item::Bat2];

    /// Position of this item in `ALL`.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Item::Player => "Player",
            Item::Monster => "Wumpus",
            Item::Pit1 => "Pit 1",
            Item::Pit2 => "Pit 2",
            Item::Bat1 => "Bat 1",
            Item::Bat2 => "Bat 2",
        };
        f.write_str(name)
    }
}

/// Starting room for every item.
///
/// No two items share a room.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    rooms: [RoomNumber; 6],
}

impl Placement {
    /// Draw a random layout.
    ///
    /// Each item gets a uniform room in `ALL` order; the whole draw is
    /// repeated until no two items collide.
    pub fn random(rng: &mut impl RandomSource) -> Self {
        let mut attempts = 0u32;
        loop {
            attempts += 1;
            let rooms = Item::ALL.map(|_| random_room(rng));
            if find_crowded(&rooms).is_none() {
                tracing::trace!(attempts, "placed items");
                return Self { rooms };
            }
        }
    }

    /// Build a layout from raw room numbers, in `Item::ALL` order.
    ///
    /// ```
    /// use hunt_the_wumpus::cave::{Item, Placement};
    ///
    /// let placement = Placement::from_rooms([1, 5, 10, 15, 18, 20]).unwrap();
    /// assert_eq!(placement[Item::Monster].get(), 5);
    ///
    /// assert!(Placement::from_rooms([1, 1, 10, 15, 18, 20]).is_err());
    /// ```
    pub fn from_rooms(rooms: [u8; 6]) -> WumpusResult<Self> {
        let mut checked = [RoomNumber::from_index(0); 6];
        for (slot, number) in checked.iter_mut().zip(rooms) {
            *slot = RoomNumber::new(number)?;
        }

        if let Some((first, second)) = find_crowded(&checked) {
            return Err(WumpusError::CrowdedRoom {
                first,
                second,
                room: checked[first.index()].get(),
            });
        }

        Ok(Self { rooms: checked })
    }

    /// Starting room of an item.
    #[must_use]
    pub fn room_of(&self, item: Item) -> RoomNumber {
        self.rooms[item.index()]
    }

    /// Iterate over (Item, RoomNumber) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Item, RoomNumber)> + '_ {
        Item::ALL.iter().map(|&item| (item, self.room_of(item)))
    }
}

impl Index<Item> for Placement {
    type Output = RoomNumber;

    fn index(&self, item: Item) -> &Self::Output {
        &self.rooms[item.index()]
    }
}

/// Uniform room in 1..=20.
pub(crate) fn random_room(rng: &mut impl RandomSource) -> RoomNumber {
    RoomNumber::from_index(rng.next_below(u32::from(ROOM_COUNT)) as usize)
}

/// First pair of distinct items sharing a room.
fn find_crowded(rooms: &[RoomNumber; 6]) -> Option<(Item, Item)> {
    for first in Item::ALL {
        for second in Item::ALL {
            if first != second && rooms[first.index()] == rooms[second.index()] {
                return Some((first, second));
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameRng, ScriptedRng};

    #[test]
    fn test_item_order() {
        let indices: Vec<_> = Item::ALL.iter().map(|i| i.index()).collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_item_display() {
        assert_eq!(Item::Monster.to_string(), "Wumpus");
        assert_eq!(Item::Pit2.to_string(), "Pit 2");
    }

    #[test]
    fn test_random_uses_draw_order() {
        // Draws are 0-based; rooms are 1-based.
        let mut rng = ScriptedRng::new([0, 1, 2, 3, 4, 5]);
        let placement = Placement::random(&mut rng);

        assert_eq!(placement[Item::Player].get(), 1);
        assert_eq!(placement[Item::Monster].get(), 2);
        assert_eq!(placement[Item::Pit1].get(), 3);
        assert_eq!(placement[Item::Pit2].get(), 4);
        assert_eq!(placement[Item::Bat1].get(), 5);
        assert_eq!(placement[Item::Bat2].get(), 6);
        assert_eq!(rng.remaining(), 0);
    }

    #[test]
    fn test_random_redraws_everything_on_collision() {
        // First round: bat 2 lands on the player. Whole round is redrawn.
        let mut rng = ScriptedRng::new([0, 1, 2, 3, 4, 0, 19, 18, 17, 16, 15, 14]);
        let placement = Placement::random(&mut rng);

        let rooms: Vec<_> = placement.iter().map(|(_, r)| r.get()).collect();
        assert_eq!(rooms, vec![20, 19, 18, 17, 16, 15]);
        assert_eq!(rng.remaining(), 0);
    }

    #[test]
    fn test_random_never_collides() {
        let mut rng = GameRng::new(42);

        for _ in 0..500 {
            let placement = Placement::random(&mut rng);
            for (a, room_a) in placement.iter() {
                for (b, room_b) in placement.iter() {
                    if a != b {
                        assert_ne!(room_a, room_b, "{a} and {b} share room {room_a}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_from_rooms_rejects_invalid_room() {
        assert_eq!(
            Placement::from_rooms([1, 2, 3, 4, 5, 21]),
            Err(WumpusError::InvalidRoom(21))
        );
    }

    #[test]
    fn test_from_rooms_reports_crowded_pair() {
        assert_eq!(
            Placement::from_rooms([1, 2, 3, 3, 5, 6]),
            Err(WumpusError::CrowdedRoom {
                first: Item::Pit1,
                second: Item::Pit2,
                room: 3,
            })
        );
    }
}
