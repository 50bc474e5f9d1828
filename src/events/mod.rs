//! Game notifications and the observer seam.
//!
//! Commands report what happened (a pit, a bat, an arrow finding its mark)
//! by handing `GameNotification`s to a `GameObserver`. The engine never
//! renders them; presentation code decides what each one looks like.
//!
//! ## Example
//!
//! ```
//! use hunt_the_wumpus::events::{GameNotification, GameObserver};
//!
//! // A Vec collects everything it is notified about.
//! let mut log: Vec<GameNotification> = Vec::new();
//! log.notify(GameNotification::PlayerSnatchedByBat);
//! assert_eq!(log, vec![GameNotification::PlayerSnatchedByBat]);
//! ```

use serde::{Deserialize, Serialize};

/// Something noteworthy that happened while a command ran.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameNotification {
    PlayerFellIntoPit,
    PlayerSnatchedByBat,
    PlayerBumpedMonster,
    /// Never emitted by the engine; kept for observers that match on it.
    ArrowMissed,
    ArrowHitMonster,
    ArrowHitPlayer,
    MonsterAtePlayer,
}

/// Receives notifications while a command runs.
pub trait GameObserver {
    /// Called once per notification, in the order they happen.
    fn notify(&mut self, event: GameNotification);
}

impl GameObserver for Vec<GameNotification> {
    fn notify(&mut self, event: GameNotification) {
        self.push(event);
    }
}

impl<O: GameObserver + ?Sized> GameObserver for &mut O {
    fn notify(&mut self, event: GameNotification) {
        (**self).notify(event);
    }
}

/// Observer that discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct IgnoreEvents;

impl GameObserver for IgnoreEvents {
    fn notify(&mut self, _event: GameNotification) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_collects_in_order() {
        let mut log: Vec<GameNotification> = Vec::new();
        log.notify(GameNotification::PlayerBumpedMonster);
        log.notify(GameNotification::MonsterAtePlayer);

        assert_eq!(
            log,
            vec![GameNotification::PlayerBumpedMonster, GameNotification::MonsterAtePlayer]
        );
    }

    #[test]
    fn test_mut_ref_forwards() {
        fn forward(mut observer: impl GameObserver) {
            observer.notify(GameNotification::ArrowHitPlayer);
        }

        let mut log: Vec<GameNotification> = Vec::new();
        forward(&mut log);
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&GameNotification::ArrowHitMonster).unwrap();
        let back: GameNotification = serde_json::from_str(&json).unwrap();
        assert_eq!(back, GameNotification::ArrowHitMonster);
    }
}
