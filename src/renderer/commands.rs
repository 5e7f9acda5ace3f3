//! Draw command types handed to an external renderer

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// What a command depicts, so a renderer can swap in real sprites
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpriteKind {
    Player,
    OrbitingBlade,
    SwingBlade,
    Slime,
    Boss,
    Projectile,
}

/// Primitive used when no sprite is available
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Shape {
    Rect,
    Circle,
}

/// One filled primitive
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrawCommand {
    pub sprite: SpriteKind,
    pub shape: Shape,
    pub center: Vec2,
    /// Unrotated size
    pub size: Vec2,
    /// Counter-clockwise rotation in degrees
    pub rotation: f32,
    pub color: [u8; 3],
}

impl DrawCommand {
    pub const fn rect(sprite: SpriteKind, center: Vec2, size: Vec2, color: [u8; 3]) -> Self {
        Self {
            sprite,
            shape: Shape::Rect,
            center,
            size,
            rotation: 0.0,
            color,
        }
    }

    pub fn rotated(mut self, rotation: f32) -> Self {
        self.rotation = rotation;
        self
    }
}

/// A line of text; `pos` is the top-left corner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextCommand {
    pub text: String,
    pub pos: Vec2,
    pub color: [u8; 3],
}

/// Colors for game elements
pub mod colors {
    pub const BACKGROUND: [u8; 3] = [0, 0, 0];
    pub const PLAYER: [u8; 3] = [255, 0, 0];
    pub const ORBITING_BLADE: [u8; 3] = [0, 255, 0];
    pub const SWING_BLADE: [u8; 3] = [255, 0, 0];
    pub const PROJECTILE: [u8; 3] = [255, 0, 0];
    pub const SLIME: [u8; 3] = [0, 0, 255];
    pub const BOSS: [u8; 3] = [128, 0, 255];
    pub const HUD_TEXT: [u8; 3] = [255, 255, 255];
    pub const GAME_OVER: [u8; 3] = [255, 0, 0];
    pub const VICTORY: [u8; 3] = [0, 255, 0];
}
