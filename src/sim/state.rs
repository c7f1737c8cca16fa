//! Shared game-mode types
//!
//! Both game modes plug into the same scene state machine through
//! [`GameMode`]. A mode owns the rules for one tick; the state machine owns
//! phases, restarts, and transition requests.

use serde::{Deserialize, Serialize};

use super::difficulty::Toast;
use super::mover::{MoveInput, Mover};
use super::spawner::EntitySpawner;
use crate::scene::SceneId;

/// Current phase of a play scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Run ended; the summary has not been drawn yet
    GameOver,
    /// Summary drawn once; waiting for restart or menu
    AwaitingChoice,
}

impl GamePhase {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GamePhase::Playing)
    }
}

/// Result of a single gameplay tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    GameOver,
}

/// Numbers shown on the HUD and the game-over card
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Hud {
    Dodge {
        level: u32,
        avoided: u64,
        elapsed: f64,
    },
    Catch {
        score: u64,
        lives: u32,
        max_lives: u32,
        missed: u64,
        elapsed: f64,
    },
}

/// Rules for one game mode
pub trait GameMode {
    /// Scene identifier this mode runs under
    fn scene_id(&self) -> SceneId;

    /// Advance one tick. `dt` is the raw frame time; modes clamp it for motion.
    fn tick(&mut self, dt: f32, input: MoveInput) -> TickOutcome;

    /// Restore every piece of owned state to its construction value
    fn reset(&mut self);

    fn hud(&self) -> Hud;

    fn actor(&self) -> &Mover;

    fn spawner(&self) -> &EntitySpawner;

    /// Transient notification, if one is showing
    fn toast(&self) -> Option<&Toast> {
        None
    }
}
