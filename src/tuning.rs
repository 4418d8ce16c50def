//! Data-driven game balance
//!
//! All gameplay scalars live here so a run can be rebalanced without
//! touching simulation code. A `Tuning` is embedded in every `GameState`
//! and travels with snapshots.

use serde::{Deserialize, Serialize};

/// Balance knobs for a single run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    /// Minimum wall-clock gap between damage events (ms)
    pub hit_cooldown_ms: f64,

    /// Passive score accrual: period (ms) and points per firing
    pub score_tick_ms: f64,
    pub score_tick_points: u64,
    /// Points awarded per collected pickup
    pub pickup_points: u64,

    /// Ground scroll speed at run start (px per tick)
    pub start_game_speed: f32,
    /// Entity velocity at run start (px per second, negative = leftward)
    pub start_obstacle_speed: f32,
    /// Added to `game_speed` at each difficulty boost
    pub speed_boost: f32,
    /// Added to `obstacle_speed` at each difficulty boost
    pub obstacle_speed_boost: f32,
    /// Seconds of play time between difficulty boosts
    pub boost_interval_secs: u64,
    /// Seconds of play time per level
    pub level_interval_secs: u64,

    /// Per-tick spawn roll is uniform in [0, 100); a roll below
    /// `obstacle_chance` spawns an obstacle, a roll below `pickup_chance`
    /// (but not below `obstacle_chance`) spawns a pickup
    pub obstacle_chance: u32,
    pub pickup_chance: u32,

    /// X coordinate where new entities appear
    pub spawn_x: f32,
    /// X coordinate of the obstacle seeded at run start
    pub seed_spawn_x: f32,
    /// The spawner stays quiet until the newest obstacle has scrolled
    /// left of this x
    pub spawn_gate_x: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            hit_cooldown_ms: 2000.0,

            score_tick_ms: 1000.0,
            score_tick_points: 10,
            pickup_points: 100,

            start_game_speed: 20.0,
            start_obstacle_speed: -100.0,
            speed_boost: 2.0,
            obstacle_speed_boost: -50.0,
            boost_interval_secs: 20,
            level_interval_secs: 60,

            obstacle_chance: 5,
            pickup_chance: 8,

            spawn_x: 1300.0,
            seed_spawn_x: 1100.0,
            spawn_gate_x: 800.0,
        }
    }
}

impl Tuning {
    /// Load tuning from a JSON document
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_canonical() {
        let t = Tuning::default();
        assert_eq!(t.hit_cooldown_ms, 2000.0);
        assert_eq!(t.start_game_speed, 20.0);
        assert_eq!(t.start_obstacle_speed, -100.0);
        assert_eq!(t.obstacle_chance, 5);
        assert_eq!(t.pickup_chance, 8);
    }

    #[test]
    fn test_round_trip_json() {
        let t = Tuning {
            boost_interval_secs: 15,
            ..Default::default()
        };
        let json = serde_json::to_string(&t).unwrap();
        let back = Tuning::from_json(&json).unwrap();
        assert_eq!(back, t);
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(Tuning::from_json("{\"hit_cooldown_ms\": \"soon\"}").is_err());
    }
}
