//! Data-driven game balance
//!
//! Every number the simulation needs (sprite bounding sizes, speeds, spawn
//! cadence, difficulty caps, lives) is collected here. A `Tuning` is loaded
//! once, validated, and handed to each scene at construction; scenes never
//! mutate it.
//!
//! Tuning files are JSON. Every section is `#[serde(default)]`, so a file
//! only needs to list the values it changes:
//!
//! ```json
//! { "catch": { "lives": 5 } }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{MAX_MOTION_DT, MIN_SPAWN_INTERVAL, WORLD_HEIGHT, WORLD_WIDTH};

/// Reasons a tuning file is rejected
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{field} must be positive (got {value})")]
    NonPositive { field: String, value: f32 },
    #[error("{field} must be at least {min}s (got {value})")]
    TooShort { field: String, value: f32, min: f32 },
    #[error("dodge.hazards.interval {interval} is below dodge.difficulty.interval_floor {floor}")]
    BelowFloor { interval: f32, floor: f32 },
    #[error("{field} must be at least 1")]
    Zero { field: String },
    #[error("{field}: speed range is inverted ({min} >= {max})")]
    InvertedRange { field: String, min: f32, max: f32 },
    #[error("{field}: width {width} does not fit inside a world {world} wide")]
    TooWide { field: String, width: f32, world: f32 },
    #[error("{field} must be in (0, 1] (got {value})")]
    FactorOutOfRange { field: String, value: f32 },
    #[error("difficulty caps are inconsistent: {0}")]
    Caps(String),
}

/// Playfield size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldTuning {
    pub width: f32,
    pub height: f32,
}

impl Default for WorldTuning {
    fn default() -> Self {
        Self {
            width: WORLD_WIDTH,
            height: WORLD_HEIGHT,
        }
    }
}

/// Input-driven actor (player or bucket)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MoverTuning {
    /// Bounding box size in pixels
    pub size: Vec2,
    /// Center position at scene start (and after restart)
    pub start: Vec2,
    /// Horizontal speed in pixels/second
    pub speed: f32,
}

impl Default for MoverTuning {
    fn default() -> Self {
        Self::player()
    }
}

impl MoverTuning {
    /// Dodge-mode player
    pub fn player() -> Self {
        Self {
            size: Vec2::new(45.0, 70.0),
            start: Vec2::new(WORLD_WIDTH / 2.0, WORLD_HEIGHT / 2.0 + 270.0),
            speed: 500.0,
        }
    }

    /// Catch-mode bucket
    pub fn bucket() -> Self {
        Self {
            size: Vec2::new(70.0, 48.0),
            start: Vec2::new(WORLD_WIDTH / 2.0, WORLD_HEIGHT - 120.0),
            speed: 520.0,
        }
    }
}

/// Falling-entity spawner settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnerTuning {
    /// Entity bounding box size in pixels
    pub entity_size: Vec2,
    /// Seconds between spawn batches
    pub interval: f32,
    /// Fall speed range (pixels/second), sampled uniformly
    pub speed_min: f32,
    pub speed_max: f32,
    /// Entities requested per batch
    pub batch_size: u32,
    /// Hard cap on live entities
    pub max_population: u32,
    /// Entities spawned immediately at scene start
    pub initial_count: u32,
}

impl Default for SpawnerTuning {
    fn default() -> Self {
        Self::hazards()
    }
}

impl SpawnerTuning {
    /// Dodge-mode poisonous potatoes
    pub fn hazards() -> Self {
        Self {
            entity_size: Vec2::new(30.0, 23.0),
            interval: 0.7,
            speed_min: 320.0,
            speed_max: 700.0,
            batch_size: 3,
            max_population: 120,
            initial_count: 6,
        }
    }

    /// Catch-mode potatoes
    pub fn items() -> Self {
        Self {
            entity_size: Vec2::new(29.0, 24.0),
            interval: 0.9,
            speed_min: 280.0,
            speed_max: 600.0,
            batch_size: 1,
            max_population: 100,
            initial_count: 3,
        }
    }
}

/// Dodge-mode difficulty progression
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DifficultyTuning {
    /// Seconds of survival between level-ups
    pub level_interval: f32,
    /// Spawn interval multiplier applied per level
    pub interval_factor: f32,
    /// Spawn interval never drops below this
    pub interval_floor: f32,
    /// Per-level increase of the speed range bounds
    pub speed_min_step: f32,
    pub speed_max_step: f32,
    /// Absolute caps on the speed range bounds
    pub speed_min_cap: f32,
    pub speed_max_cap: f32,
    /// How long the level-up notification stays up
    pub toast_seconds: f32,
}

impl Default for DifficultyTuning {
    fn default() -> Self {
        Self {
            level_interval: 10.0,
            interval_factor: 0.85,
            interval_floor: 0.25,
            speed_min_step: 35.0,
            speed_max_step: 60.0,
            speed_min_cap: 1000.0,
            speed_max_cap: 1400.0,
            toast_seconds: 1.5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DodgeTuning {
    pub player: MoverTuning,
    pub hazards: SpawnerTuning,
    pub difficulty: DifficultyTuning,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatchTuning {
    pub bucket: MoverTuning,
    pub items: SpawnerTuning,
    /// Misses allowed before game over
    pub lives: u32,
}

impl Default for CatchTuning {
    fn default() -> Self {
        Self {
            bucket: MoverTuning::bucket(),
            items: SpawnerTuning::items(),
            lives: 3,
        }
    }
}

/// Complete game balance
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub world: WorldTuning,
    pub dodge: DodgeTuning,
    pub catch: CatchTuning,
}

impl Tuning {
    /// Parse and validate a JSON tuning document
    pub fn from_json_str(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Read, parse, and validate a tuning file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| TuningError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let tuning = Self::from_json_str(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Check every value the simulation relies on
    pub fn validate(&self) -> Result<(), TuningError> {
        positive("world.width", self.world.width)?;
        positive("world.height", self.world.height)?;

        validate_mover("dodge.player", &self.dodge.player, &self.world)?;
        validate_spawner("dodge.hazards", &self.dodge.hazards, &self.world)?;
        validate_difficulty(&self.dodge.difficulty, &self.dodge.hazards)?;

        validate_mover("catch.bucket", &self.catch.bucket, &self.world)?;
        validate_spawner("catch.items", &self.catch.items, &self.world)?;
        if self.catch.lives == 0 {
            return Err(TuningError::Zero {
                field: "catch.lives".into(),
            });
        }
        Ok(())
    }
}

fn positive(field: &str, value: f32) -> Result<(), TuningError> {
    // NaN fails this too
    if value > 0.0 {
        Ok(())
    } else {
        Err(TuningError::NonPositive {
            field: field.to_string(),
            value,
        })
    }
}

fn fits(field: &str, width: f32, world: &WorldTuning) -> Result<(), TuningError> {
    if width <= world.width {
        Ok(())
    } else {
        Err(TuningError::TooWide {
            field: field.to_string(),
            width,
            world: world.width,
        })
    }
}

/// Shortest interval the spawner can step through: no shorter than the
/// global minimum, and never more batches per motion step than the cap holds
fn min_interval(max_population: u32) -> f32 {
    MIN_SPAWN_INTERVAL.max(MAX_MOTION_DT / max_population.max(1) as f32)
}

fn not_shorter(field: &str, value: f32, min: f32) -> Result<(), TuningError> {
    if value >= min {
        Ok(())
    } else {
        Err(TuningError::TooShort {
            field: field.to_string(),
            value,
            min,
        })
    }
}

fn validate_mover(prefix: &str, mover: &MoverTuning, world: &WorldTuning) -> Result<(), TuningError> {
    positive(&format!("{prefix}.size.x"), mover.size.x)?;
    positive(&format!("{prefix}.size.y"), mover.size.y)?;
    positive(&format!("{prefix}.speed"), mover.speed)?;
    fits(&format!("{prefix}.size"), mover.size.x, world)
}

fn validate_spawner(
    prefix: &str,
    spawner: &SpawnerTuning,
    world: &WorldTuning,
) -> Result<(), TuningError> {
    positive(&format!("{prefix}.entity_size.x"), spawner.entity_size.x)?;
    positive(&format!("{prefix}.entity_size.y"), spawner.entity_size.y)?;
    fits(&format!("{prefix}.entity_size"), spawner.entity_size.x, world)?;
    positive(&format!("{prefix}.speed_min"), spawner.speed_min)?;
    if spawner.speed_min >= spawner.speed_max {
        return Err(TuningError::InvertedRange {
            field: prefix.to_string(),
            min: spawner.speed_min,
            max: spawner.speed_max,
        });
    }
    if spawner.batch_size == 0 {
        return Err(TuningError::Zero {
            field: format!("{prefix}.batch_size"),
        });
    }
    if spawner.max_population == 0 {
        return Err(TuningError::Zero {
            field: format!("{prefix}.max_population"),
        });
    }
    positive(&format!("{prefix}.interval"), spawner.interval)?;
    not_shorter(
        &format!("{prefix}.interval"),
        spawner.interval,
        min_interval(spawner.max_population),
    )
}

fn validate_difficulty(curve: &DifficultyTuning, hazards: &SpawnerTuning) -> Result<(), TuningError> {
    positive("dodge.difficulty.level_interval", curve.level_interval)?;
    positive("dodge.difficulty.interval_floor", curve.interval_floor)?;
    not_shorter(
        "dodge.difficulty.interval_floor",
        curve.interval_floor,
        min_interval(hazards.max_population),
    )?;
    // Leveling up must never lengthen the spawn interval
    if hazards.interval < curve.interval_floor {
        return Err(TuningError::BelowFloor {
            interval: hazards.interval,
            floor: curve.interval_floor,
        });
    }
    positive("dodge.difficulty.toast_seconds", curve.toast_seconds)?;
    if !(curve.interval_factor > 0.0 && curve.interval_factor <= 1.0) {
        return Err(TuningError::FactorOutOfRange {
            field: "dodge.difficulty.interval_factor".into(),
            value: curve.interval_factor,
        });
    }
    // These keep the range non-empty and non-decreasing at every level
    if curve.speed_min_step < 0.0 || curve.speed_min_step > curve.speed_max_step {
        return Err(TuningError::Caps(format!(
            "speed_min_step {} must be within [0, speed_max_step {}]",
            curve.speed_min_step, curve.speed_max_step
        )));
    }
    if curve.speed_min_cap >= curve.speed_max_cap {
        return Err(TuningError::Caps(format!(
            "speed_min_cap {} must be below speed_max_cap {}",
            curve.speed_min_cap, curve.speed_max_cap
        )));
    }
    if hazards.speed_min > curve.speed_min_cap || hazards.speed_max > curve.speed_max_cap {
        return Err(TuningError::Caps(format!(
            "starting speeds ({}, {}) exceed caps ({}, {})",
            hazards.speed_min, hazards.speed_max, curve.speed_min_cap, curve.speed_max_cap
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let tuning = Tuning::default();
        tuning.validate().unwrap();
        assert_eq!(tuning.dodge.hazards.interval, 0.7);
        assert_eq!(tuning.catch.items.batch_size, 1);
        assert_eq!(tuning.catch.bucket.start, Vec2::new(300.0, 680.0));
        assert_eq!(tuning.dodge.player.start, Vec2::new(300.0, 670.0));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json_str(r#"{ "catch": { "lives": 5 } }"#).unwrap();
        assert_eq!(tuning.catch.lives, 5);
        assert_eq!(tuning.catch.items, SpawnerTuning::items());
        assert_eq!(tuning.dodge, DodgeTuning::default());
    }

    #[test]
    fn test_vec2_fields_parse_as_arrays() {
        let json = r#"{ "dodge": { "player": { "size": [40.0, 60.0] } } }"#;
        let tuning = Tuning::from_json_str(json).unwrap();
        assert_eq!(tuning.dodge.player.size, Vec2::new(40.0, 60.0));
        assert_eq!(tuning.dodge.player.speed, 500.0);
    }

    #[test]
    fn test_malformed_json_rejected() {
        let err = Tuning::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, TuningError::Parse(_)));
    }

    #[test]
    fn test_inverted_speed_range_rejected() {
        let json = r#"{ "catch": { "items": { "speed_min": 700.0, "speed_max": 300.0 } } }"#;
        let err = Tuning::from_json_str(json).unwrap_err();
        assert!(matches!(err, TuningError::InvertedRange { ref field, .. } if field == "catch.items"));
    }

    #[test]
    fn test_zero_lives_rejected() {
        let err = Tuning::from_json_str(r#"{ "catch": { "lives": 0 } }"#).unwrap_err();
        assert!(matches!(err, TuningError::Zero { .. }));
    }

    #[test]
    fn test_non_positive_interval_rejected() {
        let json = r#"{ "dodge": { "hazards": { "interval": 0.0 } } }"#;
        let err = Tuning::from_json_str(json).unwrap_err();
        assert!(err.to_string().contains("dodge.hazards.interval"));
    }

    #[test]
    fn test_interval_below_floor_rejected() {
        let mut tuning = Tuning::default();
        tuning.dodge.hazards.interval = 0.2;
        let err = tuning.validate().unwrap_err();
        assert!(matches!(err, TuningError::BelowFloor { interval, floor } if interval == 0.2 && floor == 0.25));

        // Starting exactly on the floor is fine
        tuning.dodge.hazards.interval = 0.25;
        tuning.validate().unwrap();
    }

    #[test]
    fn test_vanishing_intervals_rejected() {
        let json = r#"{ "catch": { "items": { "interval": 1e-9 } } }"#;
        let err = Tuning::from_json_str(json).unwrap_err();
        assert!(matches!(err, TuningError::TooShort { ref field, .. } if field == "catch.items.interval"));

        let json = r#"{ "dodge": { "difficulty": { "interval_floor": 1e-9 } } }"#;
        let err = Tuning::from_json_str(json).unwrap_err();
        assert!(
            matches!(err, TuningError::TooShort { ref field, .. } if field == "dodge.difficulty.interval_floor")
        );
    }

    #[test]
    fn test_small_cap_needs_longer_interval() {
        // One entity at most: more than one batch per motion step is pointless
        let mut tuning = Tuning::default();
        tuning.catch.items.max_population = 1;
        tuning.catch.items.interval = 0.02;
        assert!(matches!(tuning.validate(), Err(TuningError::TooShort { .. })));
        tuning.catch.items.interval = 0.05;
        tuning.validate().unwrap();
    }

    #[test]
    fn test_entity_wider_than_world_rejected() {
        let json = r#"{ "world": { "width": 20.0 } }"#;
        let err = Tuning::from_json_str(json).unwrap_err();
        assert!(matches!(err, TuningError::TooWide { .. }));
    }

    #[test]
    fn test_inconsistent_caps_rejected() {
        let json = r#"{ "dodge": { "difficulty": { "speed_min_cap": 1500.0 } } }"#;
        let err = Tuning::from_json_str(json).unwrap_err();
        assert!(matches!(err, TuningError::Caps(_)));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = Tuning::load("/definitely/not/here.json").unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }
}
