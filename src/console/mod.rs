//! Text console front end.
//!
//! The console prompts for commands, checks the player's input against what
//! was last shown (only listed tunnels can be walked, arrow paths are 1 to 5
//! rooms and may not double back), and prints the engine's notifications as
//! flavor text. It reads from any `BufRead` and writes to any `Write`, so a
//! whole game can be scripted.
//!
//! End of input at any prompt ends the session.

pub mod text;

use std::io::{self, BufRead, Write};

use thiserror::Error;
use tracing::debug;

use crate::cave::RoomNumber;
use crate::core::{RandomSource, WumpusError};
use crate::events::GameNotification;
use crate::rules::{ArrowPath, ExploreRoomResult, GameSession};

/// Errors that stop the console.
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("Console I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Game(#[from] WumpusError),
}

/// Result alias for console operations.
pub type ConsoleResult<T> = Result<T, ConsoleError>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TurnAction {
    Shoot,
    Move,
}

/// Interactive console bound to an input and an output stream.
pub struct Console<I, O> {
    input: I,
    output: O,

    /// Last room shown to the player; moves are checked against it.
    last_seen: Option<ExploreRoomResult>,
}

impl<I: BufRead, O: Write> Console<I, O> {
    /// Create a console.
    pub fn new(input: I, output: O) -> Self {
        Self {
            input,
            output,
            last_seen: None,
        }
    }

    /// Consume the console and return its output stream.
    pub fn into_output(self) -> O {
        self.output
    }

    /// Play games until the input runs out.
    ///
    /// With `ask_instructions`, first offers to print the rules.
    pub fn run<R: RandomSource>(
        &mut self,
        session: &mut GameSession<R>,
        ask_instructions: bool,
    ) -> ConsoleResult<()> {
        session.config().validate()?;

        if ask_instructions {
            let Some(answer) = self.prompt("Instructions (y/n)")? else {
                return Ok(());
            };
            if answer == "y" {
                writeln!(self.output, "{}", text::instructions(session.config()))?;
            } else {
                writeln!(self.output)?;
            }
        }

        let mut same_setup = false;
        loop {
            self.start_game(session, same_setup)?;

            while session.determine_state().is_some_and(|status| !status.is_over()) {
                self.explore_room(session)?;
                let played = match self.choose_action()? {
                    Some(TurnAction::Shoot) => self.shoot_arrow(session)?,
                    Some(TurnAction::Move) => self.move_player(session)?,
                    None => false,
                };
                if !played {
                    return Ok(());
                }
            }

            let Some(answer) = self.prompt("Same set-up (y/n)")? else {
                return Ok(());
            };
            same_setup = answer == "y";
            writeln!(self.output)?;
        }
    }

    fn start_game<R: RandomSource>(
        &mut self,
        session: &mut GameSession<R>,
        same_setup: bool,
    ) -> ConsoleResult<()> {
        writeln!(self.output, "{}", text::TITLE)?;
        writeln!(self.output)?;
        session.start(same_setup);
        debug!(same_setup, "console started game");
        self.show_state(session)
    }

    fn explore_room<R: RandomSource>(&mut self, session: &GameSession<R>) -> ConsoleResult<()> {
        let result = session.explore_room()?;

        writeln!(self.output, "You are in room {}", result.room)?;
        let tunnels: Vec<String> = result.tunnels.iter().map(ToString::to_string).collect();
        writeln!(self.output, "Tunnels lead to {}", tunnels.join(", "))?;
        for &warning in &result.warnings {
            writeln!(self.output, "{}", text::warning(warning))?;
        }
        writeln!(self.output)?;

        self.last_seen = Some(result);
        Ok(())
    }

    fn choose_action(&mut self) -> ConsoleResult<Option<TurnAction>> {
        loop {
            match self.prompt("Shoot or move (s/m)")?.as_deref() {
                None => return Ok(None),
                Some("s") => return Ok(Some(TurnAction::Shoot)),
                Some("m") => return Ok(Some(TurnAction::Move)),
                Some(_) => writeln!(self.output)?,
            }
        }
    }

    /// Returns false if the input ran out.
    fn move_player<R: RandomSource>(&mut self, session: &mut GameSession<R>) -> ConsoleResult<bool> {
        loop {
            let Some(answer) = self.prompt("Where to")? else {
                return Ok(false);
            };

            let reachable = answer.parse::<u8>().ok().filter(|&n| {
                self.last_seen
                    .as_ref()
                    .is_some_and(|seen| seen.has_tunnel_to(n))
            });

            if let Some(number) = reachable {
                let mut events: Vec<GameNotification> = Vec::new();
                session.move_player(RoomNumber::new(number)?, &mut events)?;
                self.show_events(&events)?;
                self.show_state(session)?;
                writeln!(self.output)?;
                return Ok(true);
            }

            writeln!(self.output, "{}", text::NOT_POSSIBLE)?;
        }
    }

    /// Returns false if the input ran out.
    fn shoot_arrow<R: RandomSource>(&mut self, session: &mut GameSession<R>) -> ConsoleResult<bool> {
        let max = session.config().max_arrow_path;
        let label = format!("No. of rooms (1-{max})");

        let count = loop {
            let Some(answer) = self.prompt(&label)? else {
                return Ok(false);
            };
            match answer.parse::<usize>() {
                Ok(n) if (1..=max).contains(&n) => break n,
                _ => continue,
            }
        };

        let mut rooms: Vec<u8> = Vec::with_capacity(count);
        while rooms.len() < count {
            let Some(answer) = self.prompt("Room #")? else {
                return Ok(false);
            };
            let Ok(number) = answer.parse::<u8>() else {
                continue;
            };
            if ArrowPath::is_too_crooked(&rooms, number) {
                writeln!(self.output, "{}", text::TOO_CROOKED)?;
                continue;
            }
            rooms.push(number);
        }
        writeln!(self.output)?;

        let path = ArrowPath::with_limit(&rooms, max)?;
        let mut events: Vec<GameNotification> = Vec::new();
        session.shoot_arrow(&path, &mut events)?;
        self.show_events(&events)?;
        self.show_state(session)?;
        Ok(true)
    }

    fn show_events(&mut self, events: &[GameNotification]) -> ConsoleResult<()> {
        for &event in events {
            writeln!(self.output, "{}", text::notification(event))?;
        }
        Ok(())
    }

    fn show_state<R: RandomSource>(&mut self, session: &GameSession<R>) -> ConsoleResult<()> {
        if let Some(line) = session.determine_state().and_then(text::outcome) {
            writeln!(self.output, "{line}")?;
        }
        Ok(())
    }

    /// Print `label`, then read one trimmed line. `None` at end of input.
    fn prompt(&mut self, label: &str) -> ConsoleResult<Option<String>> {
        write!(self.output, "{label} ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
