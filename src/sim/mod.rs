//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Frame time is passed in, never read from a clock
//! - Seeded RNG only (one `Pcg32` per spawner)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod catch;
pub mod collision;
pub mod difficulty;
pub mod dodge;
pub mod entity;
pub mod mover;
pub mod spawner;
pub mod state;

pub use catch::CatchMode;
pub use collision::{Aabb, overlaps};
pub use difficulty::{DifficultyCurve, Toast};
pub use dodge::DodgeMode;
pub use entity::Entity;
pub use mover::{Facing, MoveInput, Mover};
pub use spawner::EntitySpawner;
pub use state::{GameMode, GamePhase, Hud, TickOutcome};
