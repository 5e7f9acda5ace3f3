//! The player character

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::{Aabb, Body};
use super::tick::TickInput;
use super::weapon::Weapon;
use crate::consts::*;

/// Non-owning handle to a player slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

/// Which weapon occupies an equipment slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeaponSlot {
    Orbiting,
    Swing,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub body: Body,
    /// Normalized movement/facing vector (zero while standing still)
    pub vel: Vec2,
    pub speed: f32,
    pub health: i32,
    /// Equipped weapons. The weapons themselves live in `GameState`.
    pub equipment: Vec<WeaponSlot>,
}

impl Player {
    pub fn new(id: PlayerId, pos: Vec2) -> Self {
        Self {
            id,
            body: Body::new(pos, PLAYER_SIZE),
            vel: Vec2::ZERO,
            speed: PLAYER_SPEED,
            health: PLAYER_MAX_HEALTH,
            equipment: Vec::new(),
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

    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    /// Resolve a weapon's owner handle against this player slot
    pub fn as_owner(&self, handle: Option<PlayerId>) -> Option<&Player> {
        (handle == Some(self.id)).then_some(self)
    }

    /// Derive a movement direction from the held keys and step along it.
    ///
    /// Each axis takes the later of its two signals: down overrides up and
    /// right overrides left.
    pub fn update_from_input(&mut self, input: &TickInput) {
        let mut dir = Vec2::ZERO;
        if input.up {
            dir.y = -1.0;
        }
        if input.down {
            dir.y = 1.0;
        }
        if input.left {
            dir.x = -1.0;
        }
        if input.right {
            dir.x = 1.0;
        }

        self.vel = dir.normalize_or_zero();
        self.body.move_by(self.vel, self.speed);
    }

    /// Apply a health delta, clamped to [0, max]
    pub fn change_health(&mut self, delta: i32) {
        self.health = self
            .health
            .saturating_add(delta)
            .clamp(0, PLAYER_MAX_HEALTH);
    }

    /// Bind a weapon to this player. The weapon stays owned by the caller.
    pub fn equip<W: Weapon>(&mut self, weapon: &mut W) {
        weapon.bind_owner(self.id);
        self.equipment.push(weapon.slot());
    }
}
