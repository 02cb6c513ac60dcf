//! Game entities and their per-tick behavior
//!
//! Entities are a tagged variant over kind rather than a trait object tree:
//! each kind's movement and glyph are dispatched with a `match`, keeping the
//! whole set serializable and trivially cloneable for snapshots.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Power-up flavors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUpKind {
    /// Restores ship health on pickup
    Health,
    /// Grants bonus score on pickup
    Shield,
}

/// Entity kinds, each with its own descent behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    /// Fired by the ship; climbs one cell per tick
    Bullet,
    /// Falls one cell per tick, damages the ship on contact
    Asteroid,
    /// Falls one cell per tick, damages the ship more on contact
    Enemy,
    /// Falls slowly, applies its effect to the ship on contact
    PowerUp(PowerUpKind),
}

impl EntityKind {
    /// Single-character glyph for textual frames
    pub fn glyph(&self) -> char {
        match self {
            EntityKind::Bullet => '!',
            EntityKind::Asteroid => 'O',
            EntityKind::Enemy => 'V',
            EntityKind::PowerUp(PowerUpKind::Health) => '+',
            EntityKind::PowerUp(PowerUpKind::Shield) => '#',
        }
    }

    /// Human-readable kind name for event strings
    pub fn name(&self) -> &'static str {
        match self {
            EntityKind::Bullet => "Bullet",
            EntityKind::Asteroid => "Asteroid",
            EntityKind::Enemy => "Enemy",
            EntityKind::PowerUp(PowerUpKind::Health) => "HealthPowerUp",
            EntityKind::PowerUp(PowerUpKind::Shield) => "ShieldPowerUp",
        }
    }
}

/// A positioned non-ship entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    /// Unique per simulation instance, allocated by the driver
    pub id: u32,
    /// Grid cell; x grows rightward, y grows downward
    pub pos: IVec2,
    pub kind: EntityKind,
}

impl Entity {
    pub fn new(id: u32, pos: IVec2, kind: EntityKind) -> Self {
        Self { id, pos, kind }
    }

    /// Advance this entity by one tick
    ///
    /// Bullets climb, asteroids and enemies descend every tick, power-ups
    /// descend only on ticks divisible by `powerup_interval`. Enemies have no
    /// horizontal drift.
    pub fn tick(&mut self, tick: u64, powerup_interval: u64) {
        match self.kind {
            EntityKind::Bullet => self.pos.y -= 1,
            EntityKind::Asteroid | EntityKind::Enemy => self.pos.y += 1,
            EntityKind::PowerUp(_) => {
                if tick % powerup_interval == 0 {
                    self.pos.y += 1;
                }
            }
        }
    }
}

/// Entities formatted as `Kind(x, y)` in logs and events
impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({}, {})", self.kind.name(), self.pos.x, self.pos.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bullet_climbs_each_tick() {
        let mut bullet = Entity::new(1, IVec2::new(5, 10), EntityKind::Bullet);
        bullet.tick(1, 10);
        assert_eq!(bullet.pos, IVec2::new(5, 9));
        bullet.tick(2, 10);
        assert_eq!(bullet.pos, IVec2::new(5, 8));
    }

    #[test]
    fn asteroid_and_enemy_descend_each_tick() {
        let mut asteroid = Entity::new(1, IVec2::new(3, 0), EntityKind::Asteroid);
        let mut enemy = Entity::new(2, IVec2::new(4, 0), EntityKind::Enemy);
        for tick in 1..=3 {
            asteroid.tick(tick, 10);
            enemy.tick(tick, 10);
        }
        assert_eq!(asteroid.pos, IVec2::new(3, 3));
        assert_eq!(enemy.pos, IVec2::new(4, 3));
    }

    #[test]
    fn powerup_descends_on_interval_only() {
        let mut powerup = Entity::new(1, IVec2::new(2, 0), EntityKind::PowerUp(PowerUpKind::Health));
        for tick in 1..=9 {
            powerup.tick(tick, 10);
        }
        assert_eq!(powerup.pos.y, 0);
        powerup.tick(10, 10);
        assert_eq!(powerup.pos.y, 1);
        for tick in 11..=20 {
            powerup.tick(tick, 10);
        }
        assert_eq!(powerup.pos.y, 2);
    }

    #[test]
    fn display_includes_kind_and_position() {
        let enemy = Entity::new(7, IVec2::new(2, 4), EntityKind::Enemy);
        assert_eq!(enemy.to_string(), "Enemy(2, 4)");
    }
}
