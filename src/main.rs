//! Office Dash headless driver
//!
//! Runs a scripted soak session against the simulation core and reports
//! the final state as JSON. Useful for balance checks and log inspection;
//! the playable build wraps the same `tick` in a renderer and physics host.

use std::time::{SystemTime, UNIX_EPOCH};

use office_dash::sim::{GameState, Overlap, TickInput, tick};

/// Frame delta for the soak run (~60 fps)
const FRAME_MS: f64 = 1000.0 / 60.0;

fn main() {
    env_logger::init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(1);
    log::info!("office-dash soak run, seed {seed}");

    let mut state = GameState::new(seed);

    // Confirm edge leaves the home screen
    tick(
        &mut state,
        &TickInput {
            confirm: true,
            ..Default::default()
        },
    );

    // 90 simulated seconds; the boss catches the player every 25s so the
    // run exercises hits, hearts and the game-over path
    let frames = (90_000.0 / FRAME_MS) as u64;
    for frame in 0..frames {
        let boss_caught = frame > 0 && frame.is_multiple_of((25_000.0 / FRAME_MS) as u64);
        let overlaps = if boss_caught {
            vec![Overlap::Antagonist]
        } else {
            Vec::new()
        };
        let input = TickInput {
            delta_ms: FRAME_MS,
            overlaps,
            ..Default::default()
        };
        tick(&mut state, &input);

        for event in state.drain_events() {
            log::debug!("event: {event:?}");
        }
        if state.game_over {
            break;
        }
    }

    log::info!(
        "finished: score={} level={} time={}",
        state.score,
        state.level,
        office_dash::format_clock(state.elapsed_ms)
    );

    match serde_json::to_string_pretty(&state) {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("failed to serialize session: {err}"),
    }
}
