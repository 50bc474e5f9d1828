//! The game session: commands, queries, and the hazard rules.
//!
//! A `GameSession` owns the cave, the random source, and the game status.
//! Commands (`start`, `move_player`, `shoot_arrow`) mutate it and report
//! notifications to a `GameObserver`; queries (`explore_room`,
//! `determine_state`) only read.
//!
//! ## Turn Rules
//!
//! - Entering the monster's room wakes it; it moves (p=3/4) or stays
//!   (p=1/4). If it ends up with the player, the player is eaten.
//! - Entering a pit loses the game.
//! - Entering a bat room carries the player to a random other room, where
//!   the same checks apply again.
//! - An arrow follows the requested rooms while tunnels exist and veers
//!   down a random tunnel otherwise. Every room it passes without hitting
//!   anything wakes the monster.
//! - A shot that hits nothing costs one arrow; the last arrow lost is the
//!   game lost.
//!
//! ## Example
//!
//! ```
//! use hunt_the_wumpus::cave::{Placement, RoomNumber};
//! use hunt_the_wumpus::core::{ScriptedRng, SessionConfig};
//! use hunt_the_wumpus::events::GameNotification;
//! use hunt_the_wumpus::rules::{ArrowPath, GameSession, GameStatus};
//!
//! let mut session = GameSession::with_rng(ScriptedRng::default(), SessionConfig::default());
//! // Player in 1, monster in 5.
//! session.start_with_placement(Placement::from_rooms([1, 5, 10, 15, 18, 20]).unwrap());
//!
//! let mut events: Vec<GameNotification> = Vec::new();
//! session.shoot_arrow(&ArrowPath::new(&[5]).unwrap(), &mut events).unwrap();
//!
//! assert_eq!(events, vec![GameNotification::ArrowHitMonster]);
//! assert_eq!(session.determine_state(), Some(GameStatus::Won));
//! ```

use std::collections::BTreeSet;

use tracing::{debug, info, trace};

use super::arrow::ArrowPath;
use super::query::{ExploreRoomResult, GameStatus, Warning};
use crate::cave::{random_room, Cave, Item, Placement, RoomNumber, TUNNELS_PER_ROOM};
use crate::core::{GameRng, RandomSource, SessionConfig, WumpusError, WumpusResult};
use crate::events::{GameNotification, GameObserver};

/// Outcomes of a monster wake-up draw; the last one means "stay put".
const MONSTER_MOVE_OUTCOMES: u32 = TUNNELS_PER_ROOM as u32 + 1;

/// One game session, reused across restarts.
pub struct GameSession<R = GameRng> {
    cave: Cave,
    rng: R,
    config: SessionConfig,

    /// Layout of the most recent new game, reused for "same setup".
    initial: Option<Placement>,

    /// `None` until the first start.
    status: Option<GameStatus>,

    arrows: u8,
}

impl GameSession<GameRng> {
    /// Create a session with a seeded RNG and default configuration.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_rng(GameRng::new(seed), SessionConfig::default())
    }
}

impl<R: RandomSource> GameSession<R> {
    /// Create a session from any random source.
    pub fn with_rng(rng: R, config: SessionConfig) -> Self {
        Self {
            cave: Cave::new(),
            rng,
            config,
            initial: None,
            status: None,
            arrows: 0,
        }
    }

    /// Get the session configuration.
    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Get the cave.
    #[must_use]
    pub fn cave(&self) -> &Cave {
        &self.cave
    }

    /// Get the random source.
    #[must_use]
    pub fn rng(&self) -> &R {
        &self.rng
    }

    /// Layout the current game started from.
    #[must_use]
    pub fn initial_placement(&self) -> Option<&Placement> {
        self.initial.as_ref()
    }

    /// Arrows left in the quiver.
    #[must_use]
    pub fn arrows_remaining(&self) -> u8 {
        self.arrows
    }

    /// Current room of an item.
    pub fn position_of(&self, item: Item) -> WumpusResult<RoomNumber> {
        Ok(self.cave.position_of(item)?.number())
    }

    // === Commands ===

    /// Start a game.
    ///
    /// With `same_setup`, items return to where the previous layout put
    /// them. Otherwise, or when there is no previous layout, a new one is
    /// drawn.
    pub fn start(&mut self, same_setup: bool) {
        let placement = match self.initial {
            Some(placement) if same_setup => placement,
            _ => Placement::random(&mut self.rng),
        };
        self.begin(placement);
    }

    /// Start a game from a fixed layout.
    ///
    /// The layout is remembered for later same-setup restarts.
    pub fn start_with_placement(&mut self, placement: Placement) {
        self.begin(placement);
    }

    fn begin(&mut self, placement: Placement) {
        self.initial = Some(placement);
        self.cave.apply(&placement);
        self.status = Some(GameStatus::Open);
        self.arrows = self.config.starting_arrows;
        info!(
            player = placement[Item::Player].get(),
            monster = placement[Item::Monster].get(),
            arrows = self.arrows,
            "game started"
        );
    }

    /// Move the player into `room`.
    ///
    /// No tunnel check is made; callers only offer rooms the player can
    /// actually reach.
    pub fn move_player(
        &mut self,
        room: RoomNumber,
        mut observer: impl GameObserver,
    ) -> WumpusResult<()> {
        self.ensure_open()?;
        debug!(room = room.get(), "player moves");

        let mut target = room;
        let mut snatches = 0u32;
        loop {
            self.cave.place(Item::Player, target);

            if self.cave.is_at(Item::Monster, target)? {
                emit(&mut observer, GameNotification::PlayerBumpedMonster);
                self.move_monster()?;
                self.check_monster_ate_player(&mut observer)?;
            } else if self.cave.any_at(&Item::PITS, target)? {
                emit(&mut observer, GameNotification::PlayerFellIntoPit);
                self.finish(GameStatus::Lost);
            } else if self.cave.any_at(&Item::BATS, target)? {
                emit(&mut observer, GameNotification::PlayerSnatchedByBat);
                target = self.random_room_except(target);
                snatches += 1;
                trace!(snatches, to = target.get(), "bat drops player");
                continue;
            }

            return Ok(());
        }
    }

    /// Shoot an arrow along `path`.
    ///
    /// Stops at the first room holding the monster (won) or the player
    /// (lost), or when the monster wakes into the player's room. A shot
    /// that flies its whole path costs one arrow.
    pub fn shoot_arrow(
        &mut self,
        path: &ArrowPath,
        mut observer: impl GameObserver,
    ) -> WumpusResult<()> {
        self.ensure_open()?;
        debug!(path = ?path.rooms(), "arrow shot");

        let mut current = self.position_of(Item::Player)?;
        for &requested in path.rooms() {
            current = self.next_arrow_room(current, requested);

            if self.cave.is_at(Item::Monster, current)? {
                emit(&mut observer, GameNotification::ArrowHitMonster);
                self.finish(GameStatus::Won);
                return Ok(());
            }
            if self.cave.is_at(Item::Player, current)? {
                emit(&mut observer, GameNotification::ArrowHitPlayer);
                self.finish(GameStatus::Lost);
                return Ok(());
            }

            self.move_monster()?;
            if self.check_monster_ate_player(&mut observer)? {
                return Ok(());
            }
        }

        self.arrows = self.arrows.saturating_sub(1);
        debug!(arrows = self.arrows, "arrow spent");
        if self.arrows == 0 {
            self.finish(GameStatus::Lost);
        }
        Ok(())
    }

    // === Queries ===

    /// Describe the player's room, its tunnels, and nearby hazards.
    pub fn explore_room(&self) -> WumpusResult<ExploreRoomResult> {
        let room = self.cave.position_of(Item::Player)?;
        let tunnels = room.tunnels();

        let mut warnings = BTreeSet::new();
        if self.any_next_door(&tunnels, &[Item::Monster])? {
            warnings.insert(Warning::Monster);
        }
        if self.any_next_door(&tunnels, &Item::PITS)? {
            warnings.insert(Warning::Pit);
        }
        if self.any_next_door(&tunnels, &Item::BATS)? {
            warnings.insert(Warning::Bat);
        }

        Ok(ExploreRoomResult {
            room: room.number(),
            tunnels,
            warnings,
        })
    }

    /// Current game status, or `None` before the first start.
    #[must_use]
    pub fn determine_state(&self) -> Option<GameStatus> {
        self.status
    }

    // === Rules ===

    fn ensure_open(&self) -> WumpusResult<()> {
        match self.status {
            None => Err(WumpusError::UnpositionedItem(Item::Player)),
            Some(GameStatus::Open) => Ok(()),
            Some(status) => Err(WumpusError::GameOver(status)),
        }
    }

    fn finish(&mut self, status: GameStatus) {
        self.status = Some(status);
        info!(%status, arrows = self.arrows, "game over");
    }

    /// Wake the monster: it takes a random tunnel or stays put.
    fn move_monster(&mut self) -> WumpusResult<()> {
        let room = *self.cave.position_of(Item::Monster)?;
        let draw = self.rng.next_below(MONSTER_MOVE_OUTCOMES) as usize;
        if draw < TUNNELS_PER_ROOM {
            let to = room.tunnel(draw);
            trace!(from = room.number().get(), to = to.get(), "monster moves");
            self.cave.place(Item::Monster, to);
        } else {
            trace!(room = room.number().get(), "monster stays");
        }
        Ok(())
    }

    /// Returns true if the monster and player share a room, ending the game.
    fn check_monster_ate_player(&mut self, observer: &mut impl GameObserver) -> WumpusResult<bool> {
        let player = self.position_of(Item::Player)?;
        if self.cave.is_at(Item::Monster, player)? {
            emit(observer, GameNotification::MonsterAtePlayer);
            self.finish(GameStatus::Lost);
            return Ok(true);
        }
        Ok(false)
    }

    /// Room the arrow enters after `current` when aimed at `requested`.
    fn next_arrow_room(&mut self, current: RoomNumber, requested: u8) -> RoomNumber {
        let room = self.cave.room(current);
        if let Some(&through) = room.tunnels().iter().find(|t| t.get() == requested) {
            return through;
        }

        let veer = room.tunnel(self.rng.next_below(TUNNELS_PER_ROOM as u32) as usize);
        debug!(requested, to = veer.get(), "arrow veers");
        veer
    }

    /// Uniform random room other than `avoid`.
    fn random_room_except(&mut self, avoid: RoomNumber) -> RoomNumber {
        loop {
            let room = random_room(&mut self.rng);
            if room != avoid {
                return room;
            }
        }
    }

    fn any_next_door(&self, tunnels: &[RoomNumber], items: &[Item]) -> WumpusResult<bool> {
        for &item in items {
            if tunnels.contains(&self.position_of(item)?) {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

fn emit(observer: &mut impl GameObserver, event: GameNotification) {
    debug!(?event, "notification");
    observer.notify(event);
}
