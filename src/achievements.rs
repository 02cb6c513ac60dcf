//! Achievement progress tracking
//!
//! Progress is a fraction in [0, 1], monotonically non-decreasing, with three
//! display tiers. The book updates once per tick from [`PlayerStats`];
//! persisting achievements to storage is someone else's job.

use serde::Serialize;

use crate::stats::PlayerStats;

/// Display tier derived from progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Tier {
    Novice,
    Expert,
    Master,
}

impl Tier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Novice => "Novice",
            Tier::Expert => "Expert",
            Tier::Master => "Master",
        }
    }
}

/// A single named achievement with clamped progress
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Achievement {
    pub name: &'static str,
    pub description: &'static str,
    progress: f64,
}

impl Achievement {
    pub fn new(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            description,
            progress: 0.0,
        }
    }

    /// Current progress in [0, 1]
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Raise progress to `value`, clamped to [0, 1]; never decreases
    pub fn update(&mut self, value: f64) {
        self.progress = self.progress.max(value.clamp(0.0, 1.0));
    }

    pub fn tier(&self) -> Tier {
        if self.progress >= 0.999 {
            Tier::Master
        } else if self.progress >= 0.5 {
            Tier::Expert
        } else {
            Tier::Novice
        }
    }

    pub fn is_mastered(&self) -> bool {
        self.tier() == Tier::Master
    }
}

impl std::fmt::Display for Achievement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} - {} ({:.0}% complete, Tier: {})",
            self.name,
            self.description,
            self.progress * 100.0,
            self.tier().as_str()
        )
    }
}

/// Ticks survived for full Survivor progress
const SURVIVOR_GOAL_TICKS: u64 = 1200;
/// Enemy kills for full Enemy Exterminator progress
const EXTERMINATOR_GOAL_KILLS: u32 = 20;
/// Shots that must be fired before accuracy counts toward Sharp Shooter
const SHARP_SHOOTER_MIN_SHOTS: u32 = 10;

/// The standard achievement set for one run
#[derive(Debug, Clone, Serialize)]
pub struct AchievementBook {
    survivor: Achievement,
    exterminator: Achievement,
    sharp_shooter: Achievement,
}

impl Default for AchievementBook {
    fn default() -> Self {
        Self::new()
    }
}

impl AchievementBook {
    pub fn new() -> Self {
        Self {
            survivor: Achievement::new("Survivor", "Stay alive"),
            exterminator: Achievement::new("Enemy Exterminator", "Destroy enemies"),
            sharp_shooter: Achievement::new("Sharp Shooter", "Shoot with accuracy"),
        }
    }

    /// Refresh all progress from the current stats
    ///
    /// Sharp Shooter stays at zero until enough shots have been fired for
    /// accuracy to mean anything.
    pub fn refresh(&mut self, stats: &PlayerStats) {
        self.survivor
            .update(stats.ticks_survived as f64 / SURVIVOR_GOAL_TICKS as f64);
        self.exterminator
            .update(stats.shots_hit as f64 / EXTERMINATOR_GOAL_KILLS as f64);
        if stats.shots_fired >= SHARP_SHOOTER_MIN_SHOTS {
            self.sharp_shooter.update(stats.accuracy());
        }
    }

    pub fn all(&self) -> [&Achievement; 3] {
        [&self.survivor, &self.exterminator, &self.sharp_shooter]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_clamped_and_monotone() {
        let mut achievement = Achievement::new("Test", "test");
        achievement.update(1.7);
        assert_eq!(achievement.progress(), 1.0);
        achievement.update(0.2);
        // Never decreases
        assert_eq!(achievement.progress(), 1.0);
        achievement.update(-3.0);
        assert_eq!(achievement.progress(), 1.0);
    }

    #[test]
    fn tiers_follow_thresholds() {
        let mut achievement = Achievement::new("Test", "test");
        assert_eq!(achievement.tier(), Tier::Novice);
        achievement.update(0.5);
        assert_eq!(achievement.tier(), Tier::Expert);
        achievement.update(0.999);
        assert_eq!(achievement.tier(), Tier::Master);
        assert!(achievement.is_mastered());
    }

    #[test]
    fn sharp_shooter_needs_minimum_shots() {
        let mut book = AchievementBook::new();
        let stats = PlayerStats {
            shots_fired: 5,
            shots_hit: 5,
            ticks_survived: 0,
        };
        book.refresh(&stats);
        assert_eq!(book.all()[2].progress(), 0.0);

        let stats = PlayerStats {
            shots_fired: 10,
            shots_hit: 5,
            ticks_survived: 0,
        };
        book.refresh(&stats);
        assert_eq!(book.all()[2].progress(), 0.5);
    }

    #[test]
    fn survivor_completes_at_goal() {
        let mut book = AchievementBook::new();
        let stats = PlayerStats {
            shots_fired: 0,
            shots_hit: 0,
            ticks_survived: SURVIVOR_GOAL_TICKS,
        };
        book.refresh(&stats);
        assert!(book.all()[0].is_mastered());
    }

    #[test]
    fn display_includes_tier() {
        let mut achievement = Achievement::new("Survivor", "Stay alive");
        achievement.update(0.6);
        assert_eq!(
            achievement.to_string(),
            "Survivor - Stay alive (60% complete, Tier: Expert)"
        );
    }
}
