//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick processed to completion before the next
//! - Seeded RNG only, owned by the driver, fixed draw order
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod collision;
pub mod entity;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::resolve_collisions;
pub use entity::{Entity, EntityKind, PowerUpKind};
pub use spawn::spawn_objects;
pub use state::{Direction, GameEvent, GamePhase, GameState, Ship};
pub use tick::{Command, TickInput, advance, apply_command, tick};
