//! Shared positional state and axis-aligned bounding boxes
//!
//! Every entity is a center point plus a footprint. Collision only ever looks
//! at the axis-aligned box around that footprint.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box in world space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Strict overlap test: boxes that only share an edge do not collide
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }

    /// True when the box lies entirely past one edge of `[0, width] x [0, height]`
    pub fn is_outside(&self, width: f32, height: f32) -> bool {
        self.max.x < 0.0 || self.min.x > width || self.max.y < 0.0 || self.min.y > height
    }
}

/// Footprint of a `size` rectangle after rotating it by `degrees`
///
/// The result is the axis-aligned hull of the rotated rectangle, so the sign
/// of the rotation does not matter.
pub fn rotated_size(size: Vec2, degrees: f32) -> Vec2 {
    let (sin, cos) = degrees.to_radians().sin_cos();
    let (sin, cos) = (sin.abs(), cos.abs());
    Vec2::new(size.x * cos + size.y * sin, size.x * sin + size.y * cos)
}

/// Positional state shared by the player, projectiles and enemies
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// Center position
    pub pos: Vec2,
    /// Unrotated footprint
    pub size: Vec2,
}

impl Body {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    /// Move along `dir` scaled by `speed`
    #[inline]
    pub fn move_by(&mut self, dir: Vec2, speed: f32) {
        self.pos += dir * speed;
    }

    #[inline]
    pub fn bounds(&self) -> Aabb {
        Aabb::from_center(self.pos, self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_is_strict() {
        let a = Aabb::from_center(Vec2::ZERO, Vec2::splat(10.0));
        // Shares the x = 5 edge only
        let touching = Aabb::from_center(Vec2::new(10.0, 0.0), Vec2::splat(10.0));
        assert!(!a.overlaps(&touching));

        let inside = Aabb::from_center(Vec2::new(9.9, 0.0), Vec2::splat(10.0));
        assert!(a.overlaps(&inside));
        assert!(inside.overlaps(&a));
    }

    #[test]
    fn test_outside_requires_full_exit() {
        let w = 100.0;
        let h = 50.0;
        // Straddling the left edge
        let partial = Aabb::from_center(Vec2::new(0.0, 25.0), Vec2::splat(12.0));
        assert!(!partial.is_outside(w, h));

        let gone_left = Aabb::from_center(Vec2::new(-6.5, 25.0), Vec2::splat(12.0));
        assert!(gone_left.is_outside(w, h));

        let gone_down = Aabb::from_center(Vec2::new(50.0, 56.5), Vec2::splat(12.0));
        assert!(gone_down.is_outside(w, h));

        // Exactly flush with the edge still counts as inside
        let flush = Aabb::from_center(Vec2::new(-6.0, 25.0), Vec2::splat(12.0));
        assert!(!flush.is_outside(w, h));
    }

    #[test]
    fn test_rotated_size() {
        let size = Vec2::new(60.0, 10.0);
        let flat = rotated_size(size, 0.0);
        assert!((flat - size).length() < 1e-4);

        let upright = rotated_size(size, 90.0);
        assert!((upright - Vec2::new(10.0, 60.0)).length() < 1e-3);

        // Sign of the rotation is irrelevant for the hull
        let a = rotated_size(size, 30.0);
        let b = rotated_size(size, -30.0);
        assert!((a - b).length() < 1e-4);
    }

    #[test]
    fn test_move_by() {
        let mut body = Body::new(Vec2::new(10.0, 10.0), Vec2::splat(4.0));
        body.move_by(Vec2::new(1.0, 0.0), 2.5);
        assert_eq!(body.pos, Vec2::new(12.5, 10.0));
        body.move_by(Vec2::ZERO, 100.0);
        assert_eq!(body.pos, Vec2::new(12.5, 10.0));
    }
}
