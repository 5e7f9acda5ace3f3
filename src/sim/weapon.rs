//! Player blades
//!
//! Weapons never own their player. They hold a `PlayerId` handle set at equip
//! time, and the tick hands them the resolved player each update. Their pose
//! is derived from the owner every tick; an unbound weapon does nothing.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::{Aabb, rotated_size};
use super::player::{Player, PlayerId, WeaponSlot};
use crate::consts::*;
use crate::{heading_degrees, polar_offset, screen_polar_offset, wrap_degrees};

/// A weapon's damaging area for the current tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Strike {
    pub slot: WeaponSlot,
    pub bounds: Aabb,
    pub damage: i32,
}

/// Common surface the simulation uses to equip weapons and resolve hits
pub trait Weapon {
    fn slot(&self) -> WeaponSlot;

    fn owner(&self) -> Option<PlayerId>;

    fn bind_owner(&mut self, owner: PlayerId);

    /// Damaging area this tick, or `None` if the weapon cannot hit right now
    fn strike(&self) -> Option<Strike>;
}

/// Blade circling the player at a fixed radius. Always hot once equipped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrbitingWeapon {
    pub owner: Option<PlayerId>,
    pub damage: i32,
    pub radius: f32,
    /// Current angle in degrees, [0, 360)
    pub angle: f32,
    /// Degrees per tick
    pub angular_speed: f32,
    /// Center of the blade
    pub pos: Vec2,
    /// Sprite rotation (degrees), faces outward from the owner
    pub rotation: f32,
}

impl Default for OrbitingWeapon {
    fn default() -> Self {
        Self::new()
    }
}

impl OrbitingWeapon {
    pub fn new() -> Self {
        Self {
            owner: None,
            damage: ORBIT_DAMAGE,
            radius: ORBIT_RADIUS,
            angle: 0.0,
            angular_speed: ORBIT_ANGULAR_SPEED,
            pos: Vec2::ZERO,
            rotation: 0.0,
        }
    }

    /// Advance the orbit and place the blade around `owner`
    pub fn update(&mut self, owner: Option<&Player>) {
        let Some(owner) = owner else {
            return;
        };

        self.angle = wrap_degrees(self.angle + self.angular_speed);
        self.pos = owner.pos() + polar_offset(self.radius, self.angle);
        self.rotation = -self.angle;
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_center(self.pos, rotated_size(BLADE_SIZE, self.rotation))
    }
}

impl Weapon for OrbitingWeapon {
    fn slot(&self) -> WeaponSlot {
        WeaponSlot::Orbiting
    }

    fn owner(&self) -> Option<PlayerId> {
        self.owner
    }

    fn bind_owner(&mut self, owner: PlayerId) {
        self.owner = Some(owner);
    }

    fn strike(&self) -> Option<Strike> {
        self.owner?;
        Some(Strike {
            slot: self.slot(),
            bounds: self.bounds(),
            damage: self.damage,
        })
    }
}

/// Swing blade state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SwingState {
    Idle,
    Swinging,
}

/// Blade held in front of the player that sweeps an arc on attack
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwingWeapon {
    pub owner: Option<PlayerId>,
    pub damage: i32,
    /// Distance from the owner's center to the blade's center
    pub reach: f32,
    pub state: SwingState,
    /// Offset (degrees) from the facing direction, starts at -max_arc/2
    pub progress: f32,
    /// Degrees per tick
    pub swing_speed: f32,
    /// Full arc swept by one attack (degrees)
    pub max_arc: f32,
    /// Final blade angle (degrees, y up)
    pub angle: f32,
    pub pos: Vec2,
}

impl Default for SwingWeapon {
    fn default() -> Self {
        Self::new()
    }
}

impl SwingWeapon {
    pub fn new() -> Self {
        Self {
            owner: None,
            damage: SWING_DAMAGE,
            reach: SWING_REACH,
            state: SwingState::Idle,
            progress: 0.0,
            swing_speed: SWING_SPEED,
            max_arc: SWING_MAX_ARC,
            angle: 0.0,
            pos: Vec2::ZERO,
        }
    }

    #[inline]
    pub fn is_swinging(&self) -> bool {
        self.state == SwingState::Swinging
    }

    /// Begin a swing. A swing in progress cannot be restarted.
    pub fn start_attack(&mut self) {
        if self.state == SwingState::Idle {
            self.state = SwingState::Swinging;
            self.progress = -self.max_arc / 2.0;
        }
    }

    /// Advance the swing and place the blade in front of `owner`.
    ///
    /// Facing comes from the owner's current velocity only; a stationary
    /// owner faces right (0 degrees) regardless of how it last moved.
    pub fn update(&mut self, owner: Option<&Player>) {
        let Some(owner) = owner else {
            return;
        };

        let base_angle = if owner.vel != Vec2::ZERO {
            heading_degrees(owner.vel)
        } else {
            0.0
        };

        let offset = match self.state {
            SwingState::Swinging => {
                self.progress += self.swing_speed;
                if self.progress >= self.max_arc / 2.0 {
                    self.state = SwingState::Idle;
                }
                // The closing tick still draws at the end of the arc
                self.progress
            }
            SwingState::Idle => 0.0,
        };

        self.angle = base_angle + offset;
        self.pos = owner.pos() + screen_polar_offset(self.reach, self.angle);
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_center(self.pos, rotated_size(BLADE_SIZE, self.angle))
    }
}

impl Weapon for SwingWeapon {
    fn slot(&self) -> WeaponSlot {
        WeaponSlot::Swing
    }

    fn owner(&self) -> Option<PlayerId> {
        self.owner
    }

    fn bind_owner(&mut self, owner: PlayerId) {
        self.owner = Some(owner);
    }

    fn strike(&self) -> Option<Strike> {
        self.owner?;
        if !self.is_swinging() {
            return None;
        }
        Some(Strike {
            slot: self.slot(),
            bounds: self.bounds(),
            damage: self.damage,
        })
    }
}
