//! Game configuration
//!
//! Every simulation instance owns an immutable `GameConfig`, so independent
//! games (and tests) never share tunables through globals.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::GameError;

/// Immutable per-game tunables, fixed at construction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Grid width in cells
    pub width: i32,
    /// Grid height in cells
    pub height: i32,

    /// Spawn-rate percentage at level 1
    pub start_spawn_rate: u32,
    /// Spawn-rate percentage added on each level-up
    pub spawn_rate_increase: u32,
    /// Score required per level
    pub score_threshold: u32,
    /// Enemy spawn threshold as a fraction of the spawn rate
    pub enemy_spawn_factor: f64,
    /// Power-up spawn threshold as a fraction of the spawn rate
    pub powerup_spawn_factor: f64,

    /// Health lost to an asteroid
    pub asteroid_damage: u32,
    /// Health lost to an enemy
    pub enemy_damage: u32,
    /// Health restored by a health power-up
    pub health_powerup_heal: u32,
    /// Score granted by a shield power-up
    pub shield_powerup_score: u32,
    /// Score granted per enemy destroyed
    pub enemy_kill_score: u32,

    /// Power-ups descend one cell every this many ticks
    pub powerup_descent_interval: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: GAME_WIDTH,
            height: GAME_HEIGHT,
            start_spawn_rate: START_SPAWN_RATE,
            spawn_rate_increase: SPAWN_RATE_INCREASE,
            score_threshold: SCORE_THRESHOLD,
            enemy_spawn_factor: ENEMY_SPAWN_FACTOR,
            powerup_spawn_factor: POWERUP_SPAWN_FACTOR,
            asteroid_damage: ASTEROID_DAMAGE,
            enemy_damage: ENEMY_DAMAGE,
            health_powerup_heal: HEALTH_POWERUP_HEAL,
            shield_powerup_score: SHIELD_POWERUP_SCORE,
            enemy_kill_score: ENEMY_KILL_SCORE,
            powerup_descent_interval: POWERUP_DESCENT_INTERVAL,
        }
    }
}

impl GameConfig {
    /// Validate construction preconditions
    ///
    /// A degenerate grid or a zero descent interval would make the simulation
    /// meaningless, so these fail fast instead of being silently defaulted.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.width <= 0 || self.height <= 0 {
            return Err(GameError::InvalidConfig {
                reason: format!("grid must be positive, got {}x{}", self.width, self.height),
            });
        }
        if self.score_threshold == 0 {
            return Err(GameError::InvalidConfig {
                reason: "score_threshold must be positive".into(),
            });
        }
        if self.powerup_descent_interval == 0 {
            return Err(GameError::InvalidConfig {
                reason: "powerup_descent_interval must be positive".into(),
            });
        }
        if !(0.0..=1.0).contains(&self.enemy_spawn_factor)
            || !(0.0..=1.0).contains(&self.powerup_spawn_factor)
        {
            return Err(GameError::InvalidConfig {
                reason: "spawn factors must be within [0, 1]".into(),
            });
        }
        Ok(())
    }

    /// Load a validated config from a JSON file (native only)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(path: &std::path::Path) -> Result<Self, GameError> {
        let json = std::fs::read_to_string(path).map_err(|e| GameError::InvalidConfig {
            reason: format!("cannot read {}: {}", path.display(), e),
        })?;
        let config: Self = serde_json::from_str(&json).map_err(|e| GameError::InvalidConfig {
            reason: format!("cannot parse {}: {}", path.display(), e),
        })?;
        config.validate()?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_degenerate_grid() {
        let config = GameConfig {
            width: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(GameError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn rejects_out_of_range_spawn_factor() {
        let config = GameConfig {
            enemy_spawn_factor: 1.5,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{"width": 16}"#).unwrap();
        assert_eq!(config.width, 16);
        assert_eq!(config.height, GAME_HEIGHT);
        assert!(config.validate().is_ok());
    }
}
