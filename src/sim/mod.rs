//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One synchronous tick per rendered frame
//! - Seeded RNG only
//! - No rendering, physics integration, or platform dependencies

pub mod clock;
pub mod collision;
pub mod lifecycle;
pub mod progress;
pub mod spawn;
pub mod state;
pub mod tick;

pub use clock::ScoreTicker;
pub use collision::Overlap;
pub use progress::ThresholdLatch;
pub use state::{
    BackgroundKey, Entity, EntityKind, FloorTile, FlowState, GameEvent, GameState, ObstacleKind,
};
pub use tick::{TickInput, tick};
