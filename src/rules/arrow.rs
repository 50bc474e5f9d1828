//! Arrow path payload for the shoot command.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{WumpusError, WumpusResult, DEFAULT_MAX_ARROW_PATH};

/// Rooms an arrow is aimed through, in flight order.
///
/// Length is checked on construction. Room numbers are not: an entry with
/// no tunnel from the previous room sends the arrow down a random tunnel
/// instead.
///
/// ```
/// use hunt_the_wumpus::rules::ArrowPath;
///
/// let path = ArrowPath::new(&[5, 6, 7]).unwrap();
/// assert_eq!(path.rooms(), &[5, 6, 7]);
///
/// assert!(ArrowPath::new(&[]).is_err());
/// assert!(ArrowPath::new(&[1, 2, 3, 4, 5, 6]).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrowPath {
    rooms: SmallVec<[u8; DEFAULT_MAX_ARROW_PATH]>,
}

impl ArrowPath {
    /// Create a path of 1 to 5 rooms.
    pub fn new(rooms: &[u8]) -> WumpusResult<Self> {
        Self::with_limit(rooms, DEFAULT_MAX_ARROW_PATH)
    }

    /// Create a path of 1 to `max_len` rooms.
    pub fn with_limit(rooms: &[u8], max_len: usize) -> WumpusResult<Self> {
        if rooms.is_empty() || rooms.len() > max_len {
            return Err(WumpusError::InvalidPathLength {
                len: rooms.len(),
                max: max_len,
            });
        }
        Ok(Self {
            rooms: SmallVec::from_slice(rooms),
        })
    }

    /// Requested rooms in order.
    #[must_use]
    pub fn rooms(&self) -> &[u8] {
        &self.rooms
    }

    /// Number of rooms in the path.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// Always false; a path has at least one room.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Check whether `next` would double straight back on the path.
    ///
    /// An arrow cannot return to the room it left one step earlier.
    #[must_use]
    pub fn is_too_crooked(prefix: &[u8], next: u8) -> bool {
        prefix.len() >= 2 && prefix[prefix.len() - 2] == next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lengths() {
        for len in 1..=5 {
            let rooms: Vec<u8> = (1..=len).collect();
            assert_eq!(ArrowPath::new(&rooms).unwrap().len(), len as usize);
        }

        assert_eq!(
            ArrowPath::new(&[]),
            Err(WumpusError::InvalidPathLength { len: 0, max: 5 })
        );
        assert_eq!(
            ArrowPath::new(&[1, 2, 3, 4, 5, 6]),
            Err(WumpusError::InvalidPathLength { len: 6, max: 5 })
        );
    }

    #[test]
    fn test_custom_limit() {
        assert!(ArrowPath::with_limit(&[1, 2, 3], 2).is_err());
        assert!(ArrowPath::with_limit(&[1, 2, 3, 4, 5, 6, 7], 7).is_ok());
    }

    #[test]
    fn test_out_of_range_rooms_are_kept() {
        let path = ArrowPath::new(&[0, 99]).unwrap();
        assert_eq!(path.rooms(), &[0, 99]);
        assert!(!path.is_empty());
    }

    #[test]
    fn test_too_crooked() {
        assert!(!ArrowPath::is_too_crooked(&[], 1));
        assert!(!ArrowPath::is_too_crooked(&[1], 1));
        assert!(ArrowPath::is_too_crooked(&[1, 2], 1));
        assert!(!ArrowPath::is_too_crooked(&[1, 2], 3));
        assert!(ArrowPath::is_too_crooked(&[1, 2, 3], 2));
    }
}
