//! Simulation tick
//!
//! Advances the game deterministically, one tick at a time. The phase order
//! inside a tick is a hard contract: advance-and-cull, then collisions, then
//! spawning, then leveling, then the game-over check. Player commands are
//! applied at the tick boundary, never mid-phase.

use std::str::FromStr;

use super::collision::resolve_collisions;
use super::spawn::spawn_objects;
use super::state::{Direction, GameEvent, GamePhase, GameState};
use crate::error::GameError;

/// A discrete player command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Fire,
    Pause,
}

/// Parses the input tokens delivered by an external input source.
/// Unrecognized tokens are rejected; the simulation never guesses.
impl FromStr for Command {
    type Err = GameError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token.to_ascii_lowercase().as_str() {
            "up" => Ok(Command::Move(Direction::Up)),
            "down" => Ok(Command::Move(Direction::Down)),
            "left" => Ok(Command::Move(Direction::Left)),
            "right" => Ok(Command::Move(Direction::Right)),
            "fire" => Ok(Command::Fire),
            "pause" => Ok(Command::Pause),
            _ => Err(GameError::UnknownCommand {
                token: token.to_string(),
            }),
        }
    }
}

/// Commands gathered since the last tick (deterministic, in arrival order)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub commands: Vec<Command>,
}

impl TickInput {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with(commands: &[Command]) -> Self {
        Self {
            commands: commands.to_vec(),
        }
    }
}

/// Apply a single command to the game state
///
/// Rejected moves surface as errors for the caller to log; the ship and the
/// rest of the state are untouched by a rejection.
pub fn apply_command(state: &mut GameState, command: Command) -> Result<(), GameError> {
    match command {
        Command::Move(direction) => state.move_ship(direction),
        Command::Fire => {
            state.fire_bullet();
            Ok(())
        }
        Command::Pause => {
            state.phase = match state.phase {
                GamePhase::Running => GamePhase::Paused,
                GamePhase::Paused => GamePhase::Running,
                // Terminal state, pause cannot revive it
                GamePhase::GameOver => GamePhase::GameOver,
            };
            Ok(())
        }
    }
}

/// Advance phase: tick every entity, then cull anything now out of bounds
///
/// After this returns, every remaining entity satisfies the in-bounds
/// predicate.
pub fn advance(state: &mut GameState, tick: u64) {
    let interval = state.config.powerup_descent_interval;
    for entity in &mut state.entities {
        entity.tick(tick, interval);
    }
    let (width, height) = (state.config.width, state.config.height);
    state
        .entities
        .retain(|e| e.pos.x >= 0 && e.pos.x < width && e.pos.y >= 0 && e.pos.y < height);
}

/// Advance the game by one tick
///
/// Pause toggles are honored first; a paused or finished game consumes no
/// RNG draws and mutates nothing else. Otherwise the phases run in their
/// mandated order and the game-over transition is edge-triggered at the end.
pub fn tick(state: &mut GameState, input: &TickInput) {
    for &command in &input.commands {
        if command == Command::Pause {
            // Infallible for pause
            let _ = apply_command(state, command);
        }
    }

    match state.phase {
        GamePhase::Paused | GamePhase::GameOver => return,
        GamePhase::Running => {}
    }

    state.time_ticks += 1;
    let now = state.time_ticks;

    for &command in &input.commands {
        if command == Command::Pause {
            continue;
        }
        if let Err(err) = apply_command(state, command) {
            log::warn!("{}", err);
        }
    }

    advance(state, now);
    resolve_collisions(state);
    spawn_objects(state);
    state.level_up();

    if state.is_game_over() {
        state.phase = GamePhase::GameOver;
        let score = state.ship.score();
        state.push_event(GameEvent::GameOver { score });
    }
}
