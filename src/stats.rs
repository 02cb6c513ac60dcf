//! Player statistics
//!
//! The simulation does not own these counters; it emits [`GameEvent`]s and an
//! outer loop folds them in here.

use serde::{Deserialize, Serialize};

use crate::sim::GameEvent;

/// Shot and survival counters for one run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    /// Total bullets fired
    pub shots_fired: u32,
    /// Bullets that destroyed an enemy
    pub shots_hit: u32,
    /// Ticks survived so far
    pub ticks_survived: u64,
}

impl PlayerStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one drained event into the counters
    pub fn apply(&mut self, event: &GameEvent) {
        match event {
            GameEvent::ShotFired => self.shots_fired += 1,
            GameEvent::ShotHit => self.shots_hit += 1,
            _ => {}
        }
    }

    /// Fold a batch of drained events and note the tick they came from
    pub fn apply_all(&mut self, events: &[GameEvent], tick: u64) {
        for event in events {
            self.apply(event);
        }
        self.ticks_survived = self.ticks_survived.max(tick);
    }

    /// Hit ratio in [0, 1]; zero when nothing was fired
    pub fn accuracy(&self) -> f64 {
        if self.shots_fired == 0 {
            0.0
        } else {
            self.shots_hit as f64 / self.shots_fired as f64
        }
    }
}
