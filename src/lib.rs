//! Potato Drop - a two-mode falling-object arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, motion, collisions, difficulty, game modes)
//! - `scene`: Scene state machines, menu, and the scene director
//! - `tuning`: Data-driven game balance

pub mod scene;
pub mod sim;
pub mod tuning;

pub use scene::{Flow, InputEvent, Key, RenderTarget, Scene, SceneCommand, SceneDirector, SceneId};
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Largest step used for motion and spawning (seconds).
    /// Long frames are clamped to this so a stall can't teleport entities.
    pub const MAX_MOTION_DT: f32 = 0.05;

    /// Shortest spawn interval a tuning may ask for (seconds)
    pub const MIN_SPAWN_INTERVAL: f32 = 0.01;

    /// Default playfield dimensions
    pub const WORLD_WIDTH: f32 = 600.0;
    pub const WORLD_HEIGHT: f32 = 800.0;

    /// Top edge of a freshly spawned entity (above the visible area)
    pub const SPAWN_TOP_Y: f32 = -60.0;
}
