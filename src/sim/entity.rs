//! Falling entities (hazards in dodge mode, collectibles in catch mode)

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;

/// A falling potato
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: u32,
    /// Center of the bounding box
    pub pos: Vec2,
    /// Fall speed in pixels/second (always positive)
    pub speed: f32,
    pub half_extents: Vec2,
}

impl Entity {
    /// Create an entity whose top edge sits at `top_y`, horizontally centered on `x`
    pub fn from_top(id: u32, x: f32, top_y: f32, speed: f32, size: Vec2) -> Self {
        let half_extents = size * 0.5;
        Self {
            id,
            pos: Vec2::new(x, top_y + half_extents.y),
            speed,
            half_extents,
        }
    }

    /// Fall for `dt` seconds
    #[inline]
    pub fn advance(&mut self, dt: f32) {
        self.pos.y += self.speed * dt;
    }

    pub fn top(&self) -> f32 {
        self.pos.y - self.half_extents.y
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_center(self.pos, self.half_extents)
    }

    /// True once the entity has fallen completely past the bottom edge
    pub fn is_out(&self, world_height: f32) -> bool {
        self.top() > world_height
    }
}
