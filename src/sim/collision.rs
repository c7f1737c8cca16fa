//! Collision detection for the falling-object playfield
//!
//! Everything in the game is an axis-aligned box: the player, the bucket,
//! and every potato. The two modes share one overlap test and differ only
//! in what they do with a hit.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box in screen space (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Build a box from its center and half extents
    pub fn from_center(center: Vec2, half_extents: Vec2) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// Build a box from its top-left corner and size
    pub fn from_corner(top_left: Vec2, size: Vec2) -> Self {
        Self {
            min: top_left,
            max: top_left + size,
        }
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.min.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.max.y
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.min.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.max.x
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// Point containment, inclusive of the top/left edges only
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.min.x && point.x < self.max.x && point.y >= self.min.y && point.y < self.max.y
    }
}

/// Strict rectangle intersection. Boxes that only share an edge do not overlap.
#[inline]
pub fn overlaps(actor: &Aabb, entity: &Aabb) -> bool {
    actor.min.x < entity.max.x
        && actor.max.x > entity.min.x
        && actor.min.y < entity.max.y
        && actor.max.y > entity.min.y
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boxed(x: f32, y: f32, w: f32, h: f32) -> Aabb {
        Aabb::from_corner(Vec2::new(x, y), Vec2::new(w, h))
    }

    #[test]
    fn test_overlap_basic() {
        let a = boxed(0.0, 0.0, 10.0, 10.0);
        let b = boxed(5.0, 5.0, 10.0, 10.0);
        assert!(overlaps(&a, &b));
        assert!(overlaps(&b, &a));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = boxed(0.0, 0.0, 10.0, 10.0);
        let right = boxed(10.0, 0.0, 10.0, 10.0);
        let below = boxed(0.0, 10.0, 10.0, 10.0);
        assert!(!overlaps(&a, &right));
        assert!(!overlaps(&a, &below));
    }

    #[test]
    fn test_containment_counts_as_overlap() {
        let outer = boxed(0.0, 0.0, 100.0, 100.0);
        let inner = boxed(40.0, 40.0, 5.0, 5.0);
        assert!(overlaps(&outer, &inner));
        assert!(overlaps(&inner, &outer));
    }

    #[test]
    fn test_separated_on_one_axis() {
        let a = boxed(0.0, 0.0, 10.0, 10.0);
        // Overlaps on x, far apart on y
        let b = boxed(2.0, 50.0, 10.0, 10.0);
        assert!(!overlaps(&a, &b));
    }

    #[test]
    fn test_from_center_matches_corner() {
        let a = Aabb::from_center(Vec2::new(50.0, 40.0), Vec2::new(10.0, 5.0));
        assert_eq!(a, boxed(40.0, 35.0, 20.0, 10.0));
        assert_eq!(a.center(), Vec2::new(50.0, 40.0));
        assert_eq!(a.size(), Vec2::new(20.0, 10.0));
    }

    #[test]
    fn test_contains_point() {
        let button = boxed(180.0, 350.0, 240.0, 80.0);
        assert!(button.contains_point(Vec2::new(300.0, 390.0)));
        assert!(button.contains_point(Vec2::new(180.0, 350.0)));
        assert!(!button.contains_point(Vec2::new(420.0, 390.0)));
        assert!(!button.contains_point(Vec2::new(300.0, 10.0)));
    }
}
