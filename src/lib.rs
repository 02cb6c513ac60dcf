//! Astro Grid - a deterministic grid-based space shooter simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, spawning, collisions, game state)
//! - `config`: Per-instance game configuration
//! - `stats`: Player statistics built from drained game events
//! - `achievements`: Achievement progress tracking

pub mod achievements;
pub mod config;
pub mod error;
pub mod sim;
pub mod stats;

pub use config::GameConfig;
pub use error::GameError;
pub use stats::PlayerStats;

/// Default game tunables
///
/// These seed [`GameConfig::default`]; simulations read dimensions and rates
/// from their own config, never from these directly.
pub mod consts {
    /// Grid width in cells
    pub const GAME_WIDTH: i32 = 10;
    /// Grid height in cells
    pub const GAME_HEIGHT: i32 = 20;

    /// Spawn-rate percentage at level 1
    pub const START_SPAWN_RATE: u32 = 2;
    /// Spawn-rate percentage added per level
    pub const SPAWN_RATE_INCREASE: u32 = 5;
    /// Score required per level (level N needs N * SCORE_THRESHOLD)
    pub const SCORE_THRESHOLD: u32 = 100;

    /// Enemy spawn threshold as a fraction of the asteroid spawn rate
    pub const ENEMY_SPAWN_FACTOR: f64 = 0.5;
    /// Power-up spawn threshold as a fraction of the asteroid spawn rate
    pub const POWERUP_SPAWN_FACTOR: f64 = 0.25;

    /// Ship health cap (and starting health)
    pub const MAX_HEALTH: u32 = 100;
    /// Health lost when an asteroid reaches the ship
    pub const ASTEROID_DAMAGE: u32 = 10;
    /// Health lost when an enemy reaches the ship
    pub const ENEMY_DAMAGE: u32 = 20;

    /// Health restored by a health power-up
    pub const HEALTH_POWERUP_HEAL: u32 = 20;
    /// Score granted by a shield power-up
    pub const SHIELD_POWERUP_SCORE: u32 = 50;
    /// Score granted per enemy destroyed by a bullet
    pub const ENEMY_KILL_SCORE: u32 = 50;

    /// Power-ups descend one cell every this many ticks
    pub const POWERUP_DESCENT_INTERVAL: u64 = 10;
}
