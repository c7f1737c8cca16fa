//! Input-driven horizontal actor (dodge-mode player, catch-mode bucket)

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use crate::tuning::MoverTuning;

/// Which way the actor sprite faces (presentation only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

/// Held movement keys for a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveInput {
    pub left: bool,
    pub right: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mover {
    /// Center of the bounding box
    pub pos: Vec2,
    pub half_extents: Vec2,
    /// Pixels/second
    pub speed: f32,
    pub facing: Facing,
    world_width: f32,
}

impl Mover {
    pub fn new(tuning: &MoverTuning, world_width: f32) -> Self {
        let mut mover = Self {
            pos: tuning.start,
            half_extents: tuning.size * 0.5,
            speed: tuning.speed,
            facing: Facing::Right,
            world_width,
        };
        mover.clamp();
        mover
    }

    /// Move for `dt` seconds. Left wins when both keys are held.
    pub fn update(&mut self, dt: f32, input: MoveInput) {
        if input.left {
            self.pos.x -= self.speed * dt;
            self.facing = Facing::Left;
        } else if input.right {
            self.pos.x += self.speed * dt;
            self.facing = Facing::Right;
        }
        self.clamp();
    }

    /// Put the actor back at `start`, facing right
    pub fn reset_to(&mut self, start: Vec2) {
        self.pos = start;
        self.facing = Facing::Right;
        self.clamp();
    }

    fn clamp(&mut self) {
        let half_w = self.half_extents.x;
        self.pos.x = self.pos.x.clamp(half_w, (self.world_width - half_w).max(half_w));
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_center(self.pos, self.half_extents)
    }
}
