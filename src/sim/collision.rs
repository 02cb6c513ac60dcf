//! Collision detection and resolution
//!
//! Two fixed passes over a snapshot of the entity collection: ship collisions
//! first, then bullet collisions. Working from a snapshot means removals made
//! while resolving never perturb which collisions this call detects.

use super::entity::{EntityKind, PowerUpKind};
use super::state::{GameEvent, GameState};

/// Detect and resolve all collisions for this tick
///
/// Pass 1 handles every non-bullet entity sharing the ship's cell: power-ups
/// apply their effect, asteroids and enemies deal their configured damage;
/// all are removed. Simultaneous hits stack, each applied exactly once.
///
/// Pass 2 scans, for each bullet, the pass-1 survivors for the first
/// co-located enemy or asteroid in entity-id order (the documented
/// tie-break). Enemy: both removed, score granted, shot-hit emitted.
/// Asteroid: only the bullet is removed. A bullet hits at most one target.
///
/// An entity flagged in pass 1 is excluded from pass-2 targeting, so nothing
/// participates in both passes.
pub fn resolve_collisions(state: &mut GameState) {
    let snapshot: Vec<_> = state
        .entities
        .iter()
        .map(|e| (e.id, e.pos, e.kind))
        .collect();
    let mut removed: Vec<u32> = Vec::new();

    // Pass 1: ship collisions
    for &(id, pos, kind) in &snapshot {
        if pos != state.ship.pos {
            continue;
        }
        match kind {
            EntityKind::Bullet => continue,
            EntityKind::PowerUp(powerup) => {
                match powerup {
                    PowerUpKind::Health => state.ship.heal(state.config.health_powerup_heal),
                    PowerUpKind::Shield => state.ship.add_score(state.config.shield_powerup_score),
                }
                state.push_event(GameEvent::PowerUpCollected { kind: powerup });
            }
            EntityKind::Asteroid => {
                let damage = state.config.asteroid_damage;
                state.ship.take_damage(damage);
                state.push_event(GameEvent::ShipHit { by: kind, damage });
            }
            EntityKind::Enemy => {
                let damage = state.config.enemy_damage;
                state.ship.take_damage(damage);
                state.push_event(GameEvent::ShipHit { by: kind, damage });
            }
        }
        removed.push(id);
    }

    // Pass 2: bullet collisions against pass-1 survivors
    for &(bullet_id, bullet_pos, kind) in &snapshot {
        if kind != EntityKind::Bullet {
            continue;
        }
        for &(target_id, target_pos, target_kind) in &snapshot {
            if target_pos != bullet_pos || removed.contains(&target_id) {
                continue;
            }
            match target_kind {
                EntityKind::Enemy => {
                    removed.push(bullet_id);
                    removed.push(target_id);
                    state.ship.add_score(state.config.enemy_kill_score);
                    state.push_event(GameEvent::ShotHit);
                    break;
                }
                EntityKind::Asteroid => {
                    // Asteroids absorb bullets without being destroyed
                    removed.push(bullet_id);
                    break;
                }
                _ => {}
            }
        }
    }

    state.entities.retain(|e| !removed.contains(&e.id));
}
