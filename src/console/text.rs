//! Fixed text shown by the console.

use crate::core::SessionConfig;
use crate::events::GameNotification;
use crate::rules::{GameStatus, Warning};

pub const TITLE: &str = "Hunt the Wumpus";

/// The rules screen, with the session's arrow supply and path limit.
#[must_use]
pub fn instructions(config: &SessionConfig) -> String {
    let arrows = config.starting_arrows;
    let max_path = config.max_arrow_path;
    format!(
        "\
Welcome to 'Hunt the Wumpus'

  The wumpus lives in a cave of 20 rooms. Each room has 3 tunnels leading
to other rooms. (Look at a dodecahedron to see how this works - if you don't
know what a dodecahedron is, ask someone)

Hazards:

Bottomless pits - two rooms have bottomless pits in them. If you go there,
    you fall into the pit (& lose!)
Super bats - two other rooms have super bats. If you go there, a bat
    grabs you and takes you to some other room at random. (Which might be
    troublesome)

Wumpus:

  The wumpus is not bothered by the hazards (he has sucker feet and is too
big for a bat to lift). Usually he is asleep. Two things wake him up: your
entering his room or your shooting an arrow.
  If the wumpus wakes, he moves (p=0.75) one room or stays still (p=0.25).
After that, if he is where you are, he eats you up (& you lose!)

You:

  Each turn you may move or shoot a crooked arrow
moving: you can go one room (thru one tunnel)
arrows: you have {arrows} arrows. You lose when you run out. Each arrow can go
    from 1 to {max_path} rooms. You aim by telling the computer the room#s you want
    the arrow to go to.
    If the arrow can't go that way (ie no tunnel) it moves at random to
    the next room.
    If the arrow hits the wumpus, you win.
    If the arrow hits you, you lose.

Warnings:

  When you are one room away from wumpus or hazard, the computer says:
Wumpus - 'I smell a Wumpus!'
Bat    - 'Bats nearby!'
Pit    - 'I feel a draft'
"
    )
}

pub const NOT_POSSIBLE: &str = "Not possible";

pub const TOO_CROOKED: &str = "Arrows aren't that crooked - Try another room";

/// Flavor text for a notification.
#[must_use]
pub fn notification(event: GameNotification) -> &'static str {
    match event {
        GameNotification::PlayerFellIntoPit => "YYYIIIIEEEE ... fell in pit",
        GameNotification::PlayerSnatchedByBat => "ZAP - Super bat snatch! Elsewhereville for you!",
        GameNotification::PlayerBumpedMonster => "...OOPS! Bumped a Wumpus!",
        GameNotification::ArrowMissed => "Missed",
        GameNotification::ArrowHitMonster => "AHA! You got the Wumpus!",
        GameNotification::ArrowHitPlayer => "OUCH! Arrow got you!",
        GameNotification::MonsterAtePlayer => "TSK TSK TSK - Wumpus got you!",
    }
}

/// What the player senses for a nearby hazard.
#[must_use]
pub fn warning(warning: Warning) -> &'static str {
    match warning {
        Warning::Monster => "I smell a Wumpus!",
        Warning::Pit => "I feel a draft",
        Warning::Bat => "Bats nearby!",
    }
}

/// Closing line for a decided game; `None` while it is still open.
#[must_use]
pub fn outcome(status: GameStatus) -> Option<&'static str> {
    match status {
        GameStatus::Open => None,
        GameStatus::Won => Some("HEE HEE HEE - The wumpus'll getcha next time!!"),
        GameStatus::Lost => Some("HA HA HA - You lose!"),
    }
}
