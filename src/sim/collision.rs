//! Collision response
//!
//! The host physics layer detects overlaps; this module interprets them.
//! Damage shares one cooldown regardless of source, pickups bypass it
//! entirely. Handlers are state-gated and idempotent, so repeated or stale
//! reports are harmless.

use super::state::{EntityKind, FlowState, GameEvent, GameState};
use super::tick::enter_game_over;
use crate::consts::MAX_LIVES;

/// One overlap observed by the host physics layer this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlap {
    /// Player touched the pursuing boss
    Antagonist,
    /// Player touched a spawned entity
    Entity(u32),
}

/// Interpret this tick's overlap reports
pub fn apply(state: &mut GameState, overlaps: &[Overlap]) {
    if state.flow != FlowState::Playing {
        return;
    }
    for overlap in overlaps {
        if state.game_over {
            // A hit this tick may have ended the run; drop the rest
            return;
        }
        match *overlap {
            Overlap::Antagonist => on_hit(state),
            Overlap::Entity(id) => match state.entity(id).map(|e| e.kind) {
                Some(EntityKind::Pickup) => on_pickup(state, id),
                Some(EntityKind::Obstacle(_)) => on_hit(state),
                // Already destroyed (culled or consumed this tick)
                None => {}
            },
        }
    }
}

/// Damage path, shared by boss and obstacle overlaps
fn on_hit(state: &mut GameState) {
    let now = state.wall_clock_ms;
    let in_cooldown = state
        .last_hit_at_ms
        .is_some_and(|last| now - last < state.tuning.hit_cooldown_ms);
    if in_cooldown {
        return;
    }
    state.last_hit_at_ms = Some(now);

    state.lives = state.lives.saturating_sub(1);
    state.push_event(GameEvent::HeartHidden { slot: state.lives });
    state.push_event(GameEvent::DamageFlash);
    state.push_event(GameEvent::HitPopup);
    log::info!("hit: lives={}", state.lives);

    if state.lives == 0 {
        enter_game_over(state);
    }
}

/// Pickup path; not subject to the hit cooldown
fn on_pickup(state: &mut GameState, id: u32) {
    // Synchronous destroy: the entity is gone before any effect lands
    let Some(idx) = state.entities.iter().position(|e| e.id == id) else {
        return;
    };
    state.entities.remove(idx);

    state.score += state.tuning.pickup_points;
    state.push_event(GameEvent::RewardPopup);
    if state.lives < MAX_LIVES {
        state.push_event(GameEvent::HeartShown { slot: state.lives });
        state.lives += 1;
        state.push_event(GameEvent::LifePopup);
    }
    log::info!("pickup: score={} lives={}", state.score, state.lives);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::FlowState;
    use crate::sim::spawn;

    fn playing_state() -> GameState {
        let mut state = GameState::new(21);
        state.flow = FlowState::Playing;
        state
    }

    #[test]
    fn test_hit_decrements_and_hides_heart() {
        let mut state = playing_state();
        apply(&mut state, &[Overlap::Antagonist]);
        assert_eq!(state.lives, 2);
        let events = state.drain_events();
        assert!(events.contains(&GameEvent::HeartHidden { slot: 2 }));
        assert!(events.contains(&GameEvent::DamageFlash));
        assert!(events.contains(&GameEvent::HitPopup));
    }

    #[test]
    fn test_cooldown_absorbs_rapid_hits() {
        let mut state = playing_state();
        apply(&mut state, &[Overlap::Antagonist]);
        // 1999ms later: still inside the 2s window
        state.wall_clock_ms = 1999.0;
        apply(&mut state, &[Overlap::Antagonist]);
        assert_eq!(state.lives, 2);

        state.wall_clock_ms = 2000.0;
        apply(&mut state, &[Overlap::Antagonist]);
        assert_eq!(state.lives, 1);
    }

    #[test]
    fn test_sustained_overlap_single_decrement() {
        let mut state = playing_state();
        // Same tick reports the boss overlap several times
        apply(
            &mut state,
            &[Overlap::Antagonist, Overlap::Antagonist, Overlap::Antagonist],
        );
        assert_eq!(state.lives, 2);
    }

    #[test]
    fn test_obstacle_overlap_uses_damage_path() {
        let mut state = playing_state();
        spawn::spawn_obstacle(&mut state, 1300.0);
        let id = state.entities[0].id;
        apply(&mut state, &[Overlap::Entity(id)]);
        assert_eq!(state.lives, 2);
        // Obstacles survive the hit
        assert_eq!(state.entities.len(), 1);
    }

    #[test]
    fn test_pickup_rewards_and_destroys() {
        let mut state = playing_state();
        state.lives = 2;
        spawn::spawn_pickup(&mut state, 1300.0);
        let id = state.entities[0].id;

        apply(&mut state, &[Overlap::Entity(id)]);
        assert_eq!(state.score, 100);
        assert_eq!(state.lives, 3);
        assert!(state.entities.is_empty());
        let events = state.drain_events();
        assert!(events.contains(&GameEvent::RewardPopup));
        assert!(events.contains(&GameEvent::HeartShown { slot: 2 }));
        assert!(events.contains(&GameEvent::LifePopup));
    }

    #[test]
    fn test_pickup_at_full_lives_scores_only() {
        let mut state = playing_state();
        spawn::spawn_pickup(&mut state, 1300.0);
        let id = state.entities[0].id;
        apply(&mut state, &[Overlap::Entity(id)]);
        assert_eq!(state.score, 100);
        assert_eq!(state.lives, 3);
        assert!(!state.drain_events().contains(&GameEvent::LifePopup));
    }

    #[test]
    fn test_pickup_destroy_is_idempotent() {
        let mut state = playing_state();
        spawn::spawn_pickup(&mut state, 1300.0);
        let id = state.entities[0].id;
        // Physics layer double-reports the same overlap
        apply(&mut state, &[Overlap::Entity(id), Overlap::Entity(id)]);
        assert_eq!(state.score, 100);
    }

    #[test]
    fn test_pickup_ignores_hit_cooldown() {
        let mut state = playing_state();
        spawn::spawn_pickup(&mut state, 1300.0);
        let id = state.entities[0].id;
        // Hit and pickup in the same tick: both land
        apply(&mut state, &[Overlap::Antagonist, Overlap::Entity(id)]);
        assert_eq!(state.lives, 3); // 3 - 1 + 1
        assert_eq!(state.score, 100);
    }

    #[test]
    fn test_final_hit_ends_the_run() {
        let mut state = playing_state();
        spawn::spawn_obstacle(&mut state, 1300.0);
        state.lives = 1;
        apply(&mut state, &[Overlap::Antagonist]);

        assert_eq!(state.lives, 0);
        assert_eq!(state.flow, FlowState::GameOver);
        assert!(state.game_over);
        // World motion frozen
        assert!(state.entities.iter().all(|e| e.vel_x == 0.0));
        let events = state.drain_events();
        assert!(events.contains(&GameEvent::CharactersTinted));
        assert!(events.contains(&GameEvent::GameOverShown { score: 0 }));
    }

    #[test]
    fn test_lives_never_negative() {
        let mut state = playing_state();
        state.lives = 1;
        apply(&mut state, &[Overlap::Antagonist]);
        // Run is over; a straggling report changes nothing
        apply(&mut state, &[Overlap::Antagonist]);
        assert_eq!(state.lives, 0);
    }
}
