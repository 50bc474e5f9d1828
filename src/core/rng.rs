//! Injectable randomness for placement, monster movement, and crooked arrows.
//!
//! ## Key Features
//!
//! - **Injectable**: The rule engine only sees the `RandomSource` trait
//! - **Deterministic**: Same seed produces identical games
//! - **Serializable**: O(1) state capture and restore via `GameRngState`
//! - **Scriptable**: `ScriptedRng` replays an exact sequence of draws
//!   (tests, or the `testing` feature)
//!
//! ## Usage
//!
//! ```
//! use hunt_the_wumpus::core::{GameRng, RandomSource};
//!
//! let mut a = GameRng::new(7);
//! let mut b = GameRng::new(7);
//!
//! // Same seed, same rooms
//! assert_eq!(a.next_below(20), b.next_below(20));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Source of uniform random integers.
///
/// Every random decision in a game goes through `next_below`, so swapping
/// the source is enough to reproduce or script a whole game.
pub trait RandomSource {
    /// Draw a uniform integer in `0..bound`.
    ///
    /// `bound` is always greater than zero.
    fn next_below(&mut self, bound: u32) -> u32;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_below(&mut self, bound: u32) -> u32 {
        (**self).next_below(bound)
    }
}

/// Seeded RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Seeded generator; the same seed always yields the same game.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG from a fresh random seed.
    ///
    /// The chosen seed is available via `seed()` so the game can be replayed.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this generator was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Snapshot of the seed and stream position.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Rebuild a generator at a snapshot position.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl RandomSource for GameRng {
    fn next_below(&mut self, bound: u32) -> u32 {
        let value = self.inner.gen_range(0..bound);
        tracing::trace!(bound, value, "random draw");
        value
    }
}

/// Saved generator position.
///
/// Restoring seeks straight to `word_pos`, so the cost does not grow with
/// the number of draws already made.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Seed the stream started from
    pub seed: u64,
    /// Position in the ChaCha8 stream
    pub word_pos: u128,
}

/// Random source that replays a fixed sequence of draws.
///
/// Each call to `next_below` consumes the next scripted value. Useful for
/// reproducing a reported game or forcing a specific monster move.
///
/// ## Panics
///
/// `next_below` panics when the script is exhausted or when a scripted
/// value is not below the requested bound.
#[cfg(any(test, feature = "testing"))]
#[derive(Clone, Debug, Default)]
pub struct ScriptedRng {
    draws: std::collections::VecDeque<u32>,
}

#[cfg(any(test, feature = "testing"))]
impl ScriptedRng {
    /// Create a source that yields `draws` in order.
    pub fn new(draws: impl IntoIterator<Item = u32>) -> Self {
        Self {
            draws: draws.into_iter().collect(),
        }
    }

    /// Append more draws to the end of the script.
    pub fn extend(&mut self, draws: impl IntoIterator<Item = u32>) {
        self.draws.extend(draws);
    }

    /// Number of draws not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.draws.len()
    }
}

#[cfg(any(test, feature = "testing"))]
impl RandomSource for ScriptedRng {
    fn next_below(&mut self, bound: u32) -> u32 {
        let value = self
            .draws
            .pop_front()
            .unwrap_or_else(|| panic!("scripted random source exhausted (bound {bound})"));
        assert!(value < bound, "scripted draw {value} out of range 0..{bound}");
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.next_below(20), rng2.next_below(20));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..10).map(|_| rng1.next_below(1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.next_below(1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_draws_stay_below_bound() {
        let mut rng = GameRng::new(7);

        for bound in [1, 3, 4, 20] {
            for _ in 0..200 {
                assert!(rng.next_below(bound) < bound);
            }
        }
    }

    #[test]
    fn test_from_entropy_records_seed() {
        let rng = GameRng::from_entropy();
        let mut replay = GameRng::new(rng.seed());
        let mut original = rng.clone();

        assert_eq!(original.next_below(1000), replay.next_below(1000));
    }

    #[test]
    fn test_resume_from_snapshot() {
        let mut rng = GameRng::new(99);
        (0..37).for_each(|_| {
            rng.next_below(20);
        });

        let json = serde_json::to_string(&rng.state()).unwrap();
        let saved: GameRngState = serde_json::from_str(&json).unwrap();
        let mut resumed = GameRng::from_state(&saved);

        assert_eq!(resumed.seed(), 99);
        for bound in [20, 4, 3, 20, 4] {
            assert_eq!(rng.next_below(bound), resumed.next_below(bound));
        }
    }

    #[test]
    fn test_scripted_replays_in_order() {
        let mut rng = ScriptedRng::new([3, 0, 2]);

        assert_eq!(rng.remaining(), 3);
        assert_eq!(rng.next_below(4), 3);
        assert_eq!(rng.next_below(3), 0);
        rng.extend([1]);
        assert_eq!(rng.next_below(3), 2);
        assert_eq!(rng.next_below(20), 1);
        assert_eq!(rng.remaining(), 0);
    }

    #[test]
    #[should_panic(expected = "scripted random source exhausted")]
    fn test_scripted_exhausted() {
        let mut rng = ScriptedRng::default();
        rng.next_below(4);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_scripted_out_of_range() {
        let mut rng = ScriptedRng::new([3]);
        rng.next_below(3);
    }

    #[test]
    fn test_mut_ref_is_a_source() {
        fn draw(mut source: impl RandomSource) -> u32 {
            source.next_below(10)
        }

        let mut rng = ScriptedRng::new([4, 5]);
        assert_eq!(draw(&mut rng), 4);
        assert_eq!(rng.next_below(10), 5);
    }
}
