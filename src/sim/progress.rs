//! Difficulty and level progression
//!
//! Elapsed time is sampled at frame rate, so threshold effects latch on a
//! monotonically increasing boundary marker instead of modulo-equality
//! checks. A boundary fires on the first tick where the sampled value has
//! reached it, once, even if several frames sample inside the same second
//! and even if a delayed frame jumps straight past it.

use serde::{Deserialize, Serialize};

use super::state::{BackgroundKey, GameEvent, GameState};

/// Exactly-once detector for evenly spaced thresholds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThresholdLatch {
    interval: u64,
    next: u64,
}

impl ThresholdLatch {
    pub fn new(interval: u64) -> Self {
        Self {
            interval,
            next: interval,
        }
    }

    /// Number of boundaries newly crossed at monotonic `value`
    pub fn crossings(&mut self, value: u64) -> u64 {
        let mut crossed = 0;
        while value >= self.next {
            self.next += self.interval;
            crossed += 1;
        }
        crossed
    }

    /// Rearm for a fresh run
    pub fn reset(&mut self) {
        self.next = self.interval;
    }
}

/// Level for a given amount of play time
pub fn level_for(elapsed_ms: f64, level_interval_secs: u64) -> u32 {
    let sec = (elapsed_ms / 1000.0).floor() as u64;
    (sec / level_interval_secs) as u32 + 1
}

/// Re-derive difficulty and level from play time. Runs every Playing tick;
/// the latches keep the side effects one-shot per boundary.
pub fn advance(state: &mut GameState) {
    let sec = (state.elapsed_ms / 1000.0).floor() as u64;

    let boosts = state.boost_latch.crossings(sec);
    if boosts > 0 {
        state.game_speed += state.tuning.speed_boost * boosts as f32;
        state.obstacle_speed += state.tuning.obstacle_speed_boost * boosts as f32;
        log::debug!(
            "difficulty boost at {sec}s: game_speed={} obstacle_speed={}",
            state.game_speed,
            state.obstacle_speed
        );
    }

    let level = level_for(state.elapsed_ms, state.tuning.level_interval_secs);
    if level != state.level {
        state.level = level;
        log::info!("level {level}");
        let key = BackgroundKey::for_level(level);
        if key != state.background {
            state.background = key;
            state.push_event(GameEvent::BackgroundSwap { key });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::FlowState;

    fn playing_state() -> GameState {
        let mut state = GameState::new(42);
        state.flow = FlowState::Playing;
        state
    }

    #[test]
    fn test_latch_fires_exactly_once_per_boundary() {
        let mut latch = ThresholdLatch::new(20);
        assert_eq!(latch.crossings(0), 0);
        assert_eq!(latch.crossings(19), 0);
        assert_eq!(latch.crossings(20), 1);
        // Every frame of the same second stays quiet
        assert_eq!(latch.crossings(20), 0);
        assert_eq!(latch.crossings(20), 0);
        assert_eq!(latch.crossings(39), 0);
        assert_eq!(latch.crossings(40), 1);
    }

    #[test]
    fn test_latch_catches_up_on_skipped_boundary() {
        let mut latch = ThresholdLatch::new(20);
        // A stalled frame jumps straight from 5s to 45s
        assert_eq!(latch.crossings(45), 2);
        assert_eq!(latch.crossings(59), 0);
        assert_eq!(latch.crossings(60), 1);
    }

    #[test]
    fn test_boost_applies_once_within_a_second() {
        let mut state = playing_state();
        // Several frames sampling inside [20000, 20999]
        for ms in [20000.0, 20400.0, 20999.0] {
            state.elapsed_ms = ms;
            advance(&mut state);
        }
        assert_eq!(state.game_speed, 22.0);
        assert_eq!(state.obstacle_speed, -150.0);
    }

    #[test]
    fn test_level_derivation() {
        assert_eq!(level_for(0.0, 60), 1);
        assert_eq!(level_for(59_999.0, 60), 1);
        assert_eq!(level_for(60_000.0, 60), 2);
        assert_eq!(level_for(119_999.0, 60), 2);
        assert_eq!(level_for(120_000.0, 60), 3);
    }

    #[test]
    fn test_background_swaps_on_level_change() {
        let mut state = playing_state();
        state.elapsed_ms = 60_000.0;
        advance(&mut state);
        assert_eq!(state.level, 2);
        assert_eq!(state.background, BackgroundKey::Office2);
        let events = state.drain_events();
        assert!(events.contains(&GameEvent::BackgroundSwap {
            key: BackgroundKey::Office2
        }));

        // Same level again: no further swap
        advance(&mut state);
        assert!(state.drain_events().is_empty());
    }
}
