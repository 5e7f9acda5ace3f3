//! Enemy projectiles

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::{Aabb, Body};
use crate::consts::*;

/// A straight-flying orb. It has no owner once fired.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub body: Body,
    pub vel: Vec2,
    /// Set once the projectile has left the world
    pub expired: bool,
}

impl Projectile {
    /// Fire from `start` toward `target` at the fixed projectile speed.
    ///
    /// When `start == target` the orb has zero velocity and never moves.
    pub fn new(start: Vec2, target: Vec2) -> Self {
        Self::with_speed(start, target, PROJECTILE_SPEED)
    }

    pub fn with_speed(start: Vec2, target: Vec2, speed: f32) -> Self {
        let dir = (target - start).normalize_or_zero();
        Self {
            body: Body::new(start, PROJECTILE_SIZE),
            vel: dir * speed,
            expired: false,
        }
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.body.pos
    }

    #[inline]
    pub fn bounds(&self) -> Aabb {
        self.body.bounds()
    }

    /// Move one tick and flag for removal once fully outside the world
    pub fn update(&mut self, world_width: f32, world_height: f32) {
        self.body.move_by(self.vel, 1.0);
        if self.bounds().is_outside(world_width, world_height) {
            self.expired = true;
        }
    }
}
