//! Game state and core simulation types
//!
//! `GameState` is the simulation driver: it owns the ship, the entity
//! collection, the seeded RNG, and the pending event queue. All state needed
//! for determinism lives here.

use glam::IVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::entity::{Entity, EntityKind, PowerUpKind};
use crate::config::GameConfig;
use crate::error::GameError;

/// Cardinal movement directions for the ship
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit cell offset for this direction (y grows downward)
    pub fn delta(&self) -> IVec2 {
        match self {
            Direction::Up => IVec2::new(0, -1),
            Direction::Down => IVec2::new(0, 1),
            Direction::Left => IVec2::new(-1, 0),
            Direction::Right => IVec2::new(1, 0),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.write_str(s)
    }
}

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Simulation suspended; ticks do nothing until unpaused
    Paused,
    /// Ship health reached zero. Terminal, no recovery path.
    GameOver,
}

/// Things that happened during a tick, drained by the outer loop
///
/// The simulation emits these instead of calling into presentation or
/// statistics collaborators directly; consumers fold them into logs,
/// stats counters, and achievement progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new entity appeared at the top row
    Spawned { kind: EntityKind, x: i32 },
    /// The player fired a bullet
    ShotFired,
    /// A bullet destroyed an enemy
    ShotHit,
    /// An asteroid or enemy reached the ship
    ShipHit { by: EntityKind, damage: u32 },
    /// The ship collected a power-up
    PowerUpCollected { kind: PowerUpKind },
    /// Score crossed the next threshold
    LevelUp { level: u32, spawn_rate: u32 },
    /// One-shot terminal notification with the final score
    GameOver { score: u32 },
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameEvent::Spawned { kind, x } => write!(f, "{} spawned at x={}", kind.name(), x),
            GameEvent::ShotFired => write!(f, "Shot fired"),
            GameEvent::ShotHit => write!(f, "Shot hit"),
            GameEvent::ShipHit { by, damage } => {
                write!(f, "Hit by {}! Health reduced by {}.", by.name(), damage)
            }
            GameEvent::PowerUpCollected { kind } => {
                write!(f, "PowerUp collected: {}", EntityKind::PowerUp(*kind).name())
            }
            GameEvent::LevelUp { level, spawn_rate } => write!(
                f,
                "Level Up! Welcome to Level {}. Spawn rate increased to {}%.",
                level, spawn_rate
            ),
            GameEvent::GameOver { score } => write!(f, "Game Over. Final score: {}", score),
        }
    }
}

/// The player's ship
///
/// A singleton owned by the driver, never stored in the entity collection.
/// It does not move on tick; only explicit commands shift it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ship {
    pub pos: IVec2,
    health: u32,
    score: u32,
}

impl Ship {
    /// Ship health cap (and starting health)
    pub const MAX_HEALTH: u32 = crate::consts::MAX_HEALTH;

    /// Spawn the ship at the grid center with full health and zero score
    pub fn new(config: &GameConfig) -> Self {
        Self {
            pos: IVec2::new(config.width / 2, config.height / 2),
            health: Self::MAX_HEALTH,
            score: 0,
        }
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Reduce health, clamped at zero
    pub fn take_damage(&mut self, damage: u32) {
        self.health = self.health.saturating_sub(damage);
    }

    /// Restore health, clamped at [`Ship::MAX_HEALTH`]
    pub fn heal(&mut self, amount: u32) {
        self.health = (self.health + amount).min(Self::MAX_HEALTH);
    }

    pub fn add_score(&mut self, points: u32) {
        self.score += points;
    }
}

fn skipped_rng() -> Pcg32 {
    Pcg32::seed_from_u64(0)
}

/// Complete simulation state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Immutable tunables for this instance
    pub config: GameConfig,
    /// Run seed for reproducibility
    pub seed: u64,
    /// Driver-owned RNG; the spawn generator is its only consumer.
    /// Not serialized: mid-game save/load is out of scope.
    #[serde(skip, default = "skipped_rng")]
    pub(crate) rng: Pcg32,
    /// The player's ship
    pub ship: Ship,
    /// Non-ship entities, kept in id order for deterministic iteration
    pub entities: Vec<Entity>,
    /// Current level, starts at 1 and only increases
    pub level: u32,
    /// Spawn-rate percentage, monotonically non-decreasing
    pub spawn_rate: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Current phase
    pub phase: GamePhase,
    /// Events emitted since the last drain
    events: Vec<GameEvent>,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a new game with the given config and seed
    ///
    /// Fails fast on an invalid config rather than defaulting it.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, GameError> {
        config.validate()?;
        let ship = Ship::new(&config);
        let spawn_rate = config.start_spawn_rate;
        Ok(Self {
            config,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            ship,
            entities: Vec::new(),
            level: 1,
            spawn_rate,
            time_ticks: 0,
            phase: GamePhase::Running,
            events: Vec::new(),
            next_id: 1,
        })
    }

    /// Allocate a new entity ID
    pub(crate) fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        log::debug!("{}", event);
        self.events.push(event);
    }

    /// Take all events emitted since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// True iff `pos` is within the grid
    pub fn in_bounds(&self, pos: IVec2) -> bool {
        pos.x >= 0 && pos.x < self.config.width && pos.y >= 0 && pos.y < self.config.height
    }

    /// True iff the ship or any entity occupies `pos`
    pub(crate) fn occupied(&self, pos: IVec2) -> bool {
        self.ship.pos == pos || self.entities.iter().any(|e| e.pos == pos)
    }

    /// Fire a bullet from the ship's current cell
    ///
    /// Player-input driven; callable between ticks at any time, never
    /// interleaved with an in-progress phase.
    pub fn fire_bullet(&mut self) {
        let id = self.next_entity_id();
        let bullet = Entity::new(id, self.ship.pos, EntityKind::Bullet);
        self.entities.push(bullet);
        self.push_event(GameEvent::ShotFired);
    }

    /// Move the ship one cell in `direction`
    ///
    /// Moves that would leave the grid are rejected and the ship stays put.
    pub fn move_ship(&mut self, direction: Direction) -> Result<(), GameError> {
        let target = self.ship.pos + direction.delta();
        if !self.in_bounds(target) {
            return Err(GameError::OutOfBounds { direction });
        }
        self.ship.pos = target;
        Ok(())
    }

    /// Level up if the score threshold for the current level is met
    ///
    /// Idempotent while the score is unchanged: one threshold crossing yields
    /// exactly one increment.
    pub fn level_up(&mut self) {
        if self.ship.score() >= self.level * self.config.score_threshold {
            self.level += 1;
            self.spawn_rate += self.config.spawn_rate_increase;
            self.push_event(GameEvent::LevelUp {
                level: self.level,
                spawn_rate: self.spawn_rate,
            });
        }
    }

    /// Pure query: the game is over iff ship health is zero
    pub fn is_game_over(&self) -> bool {
        self.ship.health() == 0
    }

    /// Textual frame: glyph grid plus a ship stats line
    pub fn frame(&self) -> String {
        let width = self.config.width as usize;
        let height = self.config.height as usize;
        let mut grid = vec![vec!['.'; width]; height];
        for entity in &self.entities {
            grid[entity.pos.y as usize][entity.pos.x as usize] = entity.kind.glyph();
        }
        grid[self.ship.pos.y as usize][self.ship.pos.x as usize] = '^';

        let mut out = String::with_capacity((width + 1) * (height + 1));
        for row in grid {
            out.extend(row);
            out.push('\n');
        }
        out.push_str(&format!(
            "Health: {} | Score: {} | Level: {}\n",
            self.ship.health(),
            self.ship.score(),
            self.level
        ));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn new_game() -> GameState {
        GameState::new(GameConfig::default(), 42).unwrap()
    }

    #[test]
    fn ship_starts_centered_with_full_health() {
        let game = new_game();
        assert_eq!(game.ship.pos, IVec2::new(5, 10));
        assert_eq!(game.ship.health(), 100);
        assert_eq!(game.ship.score(), 0);
    }

    #[test]
    fn invalid_config_is_rejected_at_construction() {
        let config = GameConfig {
            height: -1,
            ..Default::default()
        };
        assert!(GameState::new(config, 0).is_err());
    }

    #[test]
    fn move_rejected_at_grid_edge() {
        let mut game = new_game();
        game.ship.pos = IVec2::new(0, 10);
        let err = game.move_ship(Direction::Left).unwrap_err();
        assert_eq!(
            err,
            GameError::OutOfBounds {
                direction: Direction::Left
            }
        );
        // Rejected move leaves the ship where it was
        assert_eq!(game.ship.pos, IVec2::new(0, 10));
    }

    #[test]
    fn move_shifts_one_cell() {
        let mut game = new_game();
        game.move_ship(Direction::Right).unwrap();
        assert_eq!(game.ship.pos, IVec2::new(6, 10));
        game.move_ship(Direction::Up).unwrap();
        assert_eq!(game.ship.pos, IVec2::new(6, 9));
    }

    #[test]
    fn fire_places_bullet_at_ship_cell() {
        let mut game = new_game();
        game.fire_bullet();
        assert_eq!(game.entities.len(), 1);
        assert_eq!(game.entities[0].pos, game.ship.pos);
        assert_eq!(game.entities[0].kind, EntityKind::Bullet);
        assert_eq!(game.drain_events(), vec![GameEvent::ShotFired]);
    }

    #[test]
    fn level_up_is_idempotent_for_unchanged_score() {
        let mut game = new_game();
        game.ship.add_score(100);
        game.level_up();
        assert_eq!(game.level, 2);
        assert_eq!(game.spawn_rate, 7);
        // Score unchanged: second call must not increment again
        game.level_up();
        assert_eq!(game.level, 2);
        assert_eq!(game.spawn_rate, 7);
    }

    #[test]
    fn level_up_below_threshold_is_noop() {
        let mut game = new_game();
        game.ship.add_score(99);
        game.level_up();
        assert_eq!(game.level, 1);
        assert!(game.drain_events().is_empty());
    }

    #[test]
    fn game_over_query_tracks_health() {
        let mut game = new_game();
        assert!(!game.is_game_over());
        game.ship.take_damage(100);
        assert!(game.is_game_over());
        // No resurrection path
        assert!(game.is_game_over());
    }

    #[test]
    fn frame_shows_ship_and_stats() {
        let game = new_game();
        let frame = game.frame();
        let rows: Vec<&str> = frame.lines().collect();
        assert_eq!(rows.len(), 21);
        assert_eq!(rows[10].chars().nth(5), Some('^'));
        assert!(rows[20].starts_with("Health: 100 | Score: 0 | Level: 1"));
    }

    #[test]
    fn drain_events_empties_the_queue() {
        let mut game = new_game();
        game.fire_bullet();
        assert_eq!(game.drain_events().len(), 1);
        assert!(game.drain_events().is_empty());
    }

    proptest! {
        /// Health is clamped to [0, 100] under any damage/heal sequence
        #[test]
        fn health_always_clamped(ops in prop::collection::vec((any::<bool>(), 0u32..300), 0..64)) {
            let mut ship = Ship::new(&GameConfig::default());
            for (is_damage, amount) in ops {
                if is_damage {
                    ship.take_damage(amount);
                } else {
                    ship.heal(amount);
                }
                prop_assert!(ship.health() <= Ship::MAX_HEALTH);
            }
        }
    }
}
