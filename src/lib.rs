//! Office Dash - a side-scrolling office escape game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (game flow, spawning, progression, collision response)
//! - `tuning`: Data-driven game balance
//!
//! Rendering, physics integration and input polling live in the host
//! application; the core consumes per-tick input edges and overlap reports
//! and emits fire-and-forget presentation events.

pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Visible window dimensions (world units = pixels)
    pub const VIEW_WIDTH: f32 = 1300.0;
    pub const VIEW_HEIGHT: f32 = 720.0;

    /// Ground line where floor tiles and entities sit
    pub const GROUND_Y: f32 = 670.0;
    /// Width of one floor tile
    pub const FLOOR_TILE_WIDTH: f32 = 130.0;

    /// Player rest position on run start
    pub const PLAYER_START_X: f32 = 300.0;
    pub const PLAYER_START_Y: f32 = 500.0;
    /// Boss rest position on run start
    pub const BOSS_START_X: f32 = 0.0;
    pub const BOSS_START_Y: f32 = 550.0;

    /// Heart slot count (hard cap on lives)
    pub const MAX_LIVES: u8 = 3;

    /// Display widths used for off-screen culling
    pub const CUBICLE_WIDTH: f32 = 96.0;
    pub const PRINTER_WIDTH: f32 = 72.0;
    pub const COFFEE_WIDTH: f32 = 48.0;
}

/// Format a play-time value in milliseconds as `MM:SS:mmm`
pub fn format_clock(ms: f64) -> String {
    let total = ms.max(0.0) as u64;
    let mm = total / 60_000;
    let ss = (total % 60_000) / 1000;
    let millis = total % 1000;
    format!("{mm:02}:{ss:02}:{millis:03}")
}
