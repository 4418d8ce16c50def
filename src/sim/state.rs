//! Game state and core simulation types
//!
//! The whole session lives in one owned `GameState` aggregate; components
//! receive it explicitly and nothing is ambient.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::clock::ScoreTicker;
use super::progress::ThresholdLatch;
use crate::consts::*;
use crate::tuning::Tuning;

/// Top-level game mode. Exactly one is active; gameplay steps only in
/// `Playing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlowState {
    /// Title screen, waiting for confirm
    Home,
    /// Active run
    Playing,
    /// Run ended, waiting for restart or return home
    GameOver,
}

/// Obstacle sprite variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    Cubicle,
    Printer,
}

/// What a spawned entity is; collision effects dispatch on this tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    Obstacle(ObstacleKind),
    /// Coffee cup: +100 points, +1 life up to the cap
    Pickup,
}

/// A spawned obstacle or pickup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    pub id: u32,
    pub kind: EntityKind,
    pub pos: Vec2,
    /// Horizontal velocity in px/sec, fixed at spawn time. Difficulty ramps
    /// only affect entities spawned after the ramp.
    pub vel_x: f32,
}

impl Entity {
    /// Display width, used for off-screen culling
    pub fn width(&self) -> f32 {
        match self.kind {
            EntityKind::Obstacle(ObstacleKind::Cubicle) => CUBICLE_WIDTH,
            EntityKind::Obstacle(ObstacleKind::Printer) => PRINTER_WIDTH,
            EntityKind::Pickup => COFFEE_WIDTH,
        }
    }

    pub fn is_obstacle(&self) -> bool {
        matches!(self.kind, EntityKind::Obstacle(_))
    }

    pub fn is_pickup(&self) -> bool {
        matches!(self.kind, EntityKind::Pickup)
    }

    /// True once the entity has fully scrolled off the left edge
    pub fn off_screen(&self) -> bool {
        self.pos.x + self.width() < 0.0
    }
}

/// Background themes, alternated by level parity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BackgroundKey {
    Office1,
    Office2,
}

impl BackgroundKey {
    /// Theme for a given level (even levels use the second office)
    pub fn for_level(level: u32) -> Self {
        if level.is_multiple_of(2) {
            BackgroundKey::Office2
        } else {
            BackgroundKey::Office1
        }
    }
}

/// One wrapping ground tile
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FloorTile {
    pub x: f32,
}

/// Fire-and-forget presentation triggers. Drained by the host each frame;
/// the core never waits on their visual completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// New run started; host clears tint/alpha/popups
    RunStarted,
    /// Player damage flash
    DamageFlash,
    /// "-1" floating popup
    HitPopup,
    /// "+100" floating popup
    RewardPopup,
    /// "+1 life" floating popup
    LifePopup,
    /// Heart slot `slot` became hidden
    HeartHidden { slot: u8 },
    /// Heart slot `slot` became visible
    HeartShown { slot: u8 },
    /// Fade out, swap the background texture, fade back in
    BackgroundSwap { key: BackgroundKey },
    /// Player and boss tinted red on game over
    CharactersTinted,
    /// Game-over banner with the final score
    GameOverShown { score: u64 },
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Session RNG (spawn rolls)
    pub rng: Pcg32,
    /// Balance knobs
    pub tuning: Tuning,

    /// Current flow state
    pub flow: FlowState,
    /// Mirrors `flow == GameOver`; kept for cheap host queries
    pub game_over: bool,

    pub score: u64,
    pub lives: u8,
    pub level: u32,
    /// Accumulated play time (ms); pauses outside `Playing`
    pub elapsed_ms: f64,
    /// Monotonic clock across all flow states (ms); cooldown reference
    pub wall_clock_ms: f64,
    /// Wall-clock time of the last accepted hit
    pub last_hit_at_ms: Option<f64>,

    /// Ground scroll in px per tick
    pub game_speed: f32,
    /// Velocity assigned to newly spawned entities (px/sec)
    pub obstacle_speed: f32,

    pub background: BackgroundKey,
    /// Background tile scroll offset
    pub bg_scroll_x: f32,

    /// Passive score accrual task
    pub score_ticker: ScoreTicker,
    /// Exactly-once difficulty boost detector
    pub boost_latch: ThresholdLatch,

    /// Live obstacles and pickups, in spawn order
    pub entities: Vec<Entity>,
    /// Wrapping ground tiles; created once, never reset
    pub floor_tiles: Vec<FloorTile>,

    /// Player rest position (movement itself is host-side physics)
    pub player_pos: Vec2,
    /// Boss rest position
    pub boss_pos: Vec2,

    /// Pending presentation triggers
    #[serde(skip)]
    events: Vec<GameEvent>,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a fresh session on the home screen
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    /// Create a fresh session with custom balance
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let floor_tiles = (0..)
            .map(|i| FloorTile {
                x: i as f32 * FLOOR_TILE_WIDTH,
            })
            .take_while(|t| t.x <= VIEW_WIDTH)
            .collect();

        let boost_latch = ThresholdLatch::new(tuning.boost_interval_secs);
        let score_ticker = ScoreTicker::new(tuning.score_tick_ms);

        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            flow: FlowState::Home,
            game_over: false,
            score: 0,
            lives: MAX_LIVES,
            level: 1,
            elapsed_ms: 0.0,
            wall_clock_ms: 0.0,
            last_hit_at_ms: None,
            game_speed: tuning.start_game_speed,
            obstacle_speed: tuning.start_obstacle_speed,
            background: BackgroundKey::Office1,
            bg_scroll_x: 0.0,
            score_ticker,
            boost_latch,
            entities: Vec::new(),
            floor_tiles,
            player_pos: Vec2::new(PLAYER_START_X, PLAYER_START_Y),
            boss_pos: Vec2::new(BOSS_START_X, BOSS_START_Y),
            events: Vec::new(),
            next_id: 1,
            tuning,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Queue a presentation trigger
    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take this frame's presentation triggers
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Heart HUD projection: slot `i` is visible iff `lives > i`
    pub fn visible_hearts(&self) -> [bool; MAX_LIVES as usize] {
        std::array::from_fn(|i| self.lives as usize > i)
    }

    /// The most recently spawned live obstacle, if any
    pub fn newest_obstacle(&self) -> Option<&Entity> {
        self.entities.iter().rev().find(|e| e.is_obstacle())
    }

    /// Look up a live entity by id
    pub fn entity(&self, id: u32) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }
}
