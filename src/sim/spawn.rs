//! Random spawning of asteroids, enemies and power-ups
//!
//! The draw protocol is a hard contract: every call consumes exactly seven
//! draws from the driver's RNG, in a fixed order, regardless of which spawns
//! actually fire. A skipped spawn (roll too high, or target cell occupied)
//! still consumes its draws, so the random stream stays aligned and a fixed
//! seed reproduces the same entity set bit-for-bit. Re-rolling is forbidden
//! for the same reason.

use glam::IVec2;
use rand::Rng;

use super::entity::{Entity, EntityKind, PowerUpKind};
use super::state::{GameEvent, GameState};

/// Decide and perform this tick's spawns
///
/// Draw order: asteroid roll, asteroid x, enemy roll, enemy x, power-up roll,
/// power-up x, power-up kind. Asteroids spawn when `roll < spawn_rate`;
/// enemies and power-ups use the configured fractions of the spawn rate.
/// All spawns land on the top row and are skipped outright when the target
/// cell already holds the ship or another entity, including one spawned
/// earlier in the same call.
pub fn spawn_objects(state: &mut GameState) {
    let width = state.config.width;
    let rate = state.spawn_rate;

    let asteroid_roll: u32 = state.rng.random_range(0..100);
    let asteroid_x: i32 = state.rng.random_range(0..width);
    let enemy_roll: u32 = state.rng.random_range(0..100);
    let enemy_x: i32 = state.rng.random_range(0..width);
    let powerup_roll: u32 = state.rng.random_range(0..100);
    let powerup_x: i32 = state.rng.random_range(0..width);
    let powerup_is_shield: bool = state.rng.random();

    if asteroid_roll < rate {
        try_spawn(state, asteroid_x, EntityKind::Asteroid);
    }
    if (enemy_roll as f64) < rate as f64 * state.config.enemy_spawn_factor {
        try_spawn(state, enemy_x, EntityKind::Enemy);
    }
    if (powerup_roll as f64) < rate as f64 * state.config.powerup_spawn_factor {
        let kind = if powerup_is_shield {
            PowerUpKind::Shield
        } else {
            PowerUpKind::Health
        };
        try_spawn(state, powerup_x, EntityKind::PowerUp(kind));
    }
}

/// Place `kind` at (x, 0) unless the cell is occupied
///
/// Occupied cells skip the spawn entirely; the caller's draws are already
/// spent and are never repeated.
fn try_spawn(state: &mut GameState, x: i32, kind: EntityKind) {
    let pos = IVec2::new(x, 0);
    if state.occupied(pos) {
        return;
    }
    let id = state.next_entity_id();
    state.entities.push(Entity::new(id, pos, kind));
    state.push_event(GameEvent::Spawned { kind, x });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use rand::Rng;

    fn game_with(seed: u64, spawn_rate: u32) -> GameState {
        let mut game = GameState::new(GameConfig::default(), seed).unwrap();
        game.spawn_rate = spawn_rate;
        game
    }

    #[test]
    fn draw_count_is_independent_of_spawn_outcomes() {
        // Same seed, opposite extremes of spawn rate: after one spawn call the
        // RNG streams must still be aligned.
        let mut none = game_with(7, 0);
        let mut all = game_with(7, 100);
        spawn_objects(&mut none);
        spawn_objects(&mut all);
        assert!(none.entities.is_empty());
        assert!(!all.entities.is_empty());
        assert_eq!(none.rng.random::<u64>(), all.rng.random::<u64>());
    }

    #[test]
    fn occupied_top_row_skips_all_spawns_but_consumes_draws() {
        let mut blocked = game_with(3, 100);
        for x in 0..blocked.config.width {
            let id = blocked.next_entity_id();
            blocked
                .entities
                .push(Entity::new(id, IVec2::new(x, 0), EntityKind::Asteroid));
        }
        let before = blocked.entities.len();
        let mut open = game_with(3, 100);
        spawn_objects(&mut blocked);
        spawn_objects(&mut open);
        assert_eq!(blocked.entities.len(), before);
        // Skipped spawns still consumed all seven draws
        assert_eq!(blocked.rng.random::<u64>(), open.rng.random::<u64>());
    }

    #[test]
    fn spawns_land_on_top_row() {
        let mut game = game_with(11, 100);
        spawn_objects(&mut game);
        assert!(!game.entities.is_empty());
        assert!(game.entities.iter().all(|e| e.pos.y == 0));
        assert!(game.entities.iter().all(|e| game.in_bounds(e.pos)));
    }

    #[test]
    fn zero_rate_never_spawns() {
        let mut game = game_with(999, 0);
        for _ in 0..50 {
            spawn_objects(&mut game);
        }
        assert!(game.entities.is_empty());
    }

    #[test]
    fn fixed_seed_reproduces_entity_set() {
        let mut a = game_with(12345, 40);
        let mut b = game_with(12345, 40);
        for _ in 0..20 {
            spawn_objects(&mut a);
            spawn_objects(&mut b);
        }
        assert_eq!(a.entities, b.entities);
    }
}
