//! Slime Brawl - a top-down arena brawler
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, AI, combat, game state)
//! - `renderer`: Export of plain draw commands for an external renderer
//! - `platform`: Input/renderer seams and frame pacing
//! - `runner`: Fixed-rate loop driving the simulation
//! - `settings`: World configuration

pub mod platform;
pub mod renderer;
pub mod runner;
pub mod settings;
pub mod sim;

pub use runner::GameLoop;
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// World dimensions (screen space, y grows downward)
    pub const WORLD_WIDTH: f32 = 1920.0;
    pub const WORLD_HEIGHT: f32 = 1080.0;
    /// Target simulation rate (ticks per second)
    pub const TICK_RATE: u32 = 60;

    /// Player defaults
    pub const PLAYER_SIZE: Vec2 = Vec2::new(50.0, 50.0);
    pub const PLAYER_SPEED: f32 = 5.0;
    pub const PLAYER_MAX_HEALTH: i32 = 100;
    /// Damage taken per projectile that reaches the player
    pub const PROJECTILE_DAMAGE: i32 = 10;

    /// Both blades share the same sprite footprint
    pub const BLADE_SIZE: Vec2 = Vec2::new(60.0, 10.0);

    /// Orbiting blade
    pub const ORBIT_DAMAGE: i32 = 10;
    pub const ORBIT_RADIUS: f32 = 100.0;
    pub const ORBIT_ANGULAR_SPEED: f32 = 5.0; // degrees per tick

    /// Directional swing blade
    pub const SWING_DAMAGE: i32 = 15;
    pub const SWING_REACH: f32 = 60.0;
    pub const SWING_SPEED: f32 = 10.0; // degrees per tick
    pub const SWING_MAX_ARC: f32 = 120.0; // degrees

    /// Enemy projectiles
    pub const PROJECTILE_SIZE: Vec2 = Vec2::new(12.0, 12.0);
    pub const PROJECTILE_SPEED: f32 = 3.0;

    /// Enemies
    pub const ENEMY_SIZE: Vec2 = Vec2::new(40.0, 40.0);
    pub const SLIME_HEALTH: i32 = 50;
    pub const BOSS_HEALTH: i32 = 250;
    pub const ENEMY_MIN_SPEED: f32 = 1.0;
    pub const ENEMY_MAX_SPEED: f32 = 2.5;
    /// Invulnerability window after taking a hit (ticks)
    pub const ENEMY_HIT_COOLDOWN: u32 = 20;
    /// Behavior flip interval range (ticks, half-open)
    pub const STATE_TIMER_MIN: i32 = 60;
    pub const STATE_TIMER_MAX: i32 = 180;
    /// Shoot cooldown range (ticks, half-open), drawn once per enemy
    pub const SHOOT_COOLDOWN_MIN: u32 = 120;
    pub const SHOOT_COOLDOWN_MAX: u32 = 240;
}

/// Wrap an angle in degrees into [0, 360)
#[inline]
pub fn wrap_degrees(angle: f32) -> f32 {
    angle.rem_euclid(360.0)
}

/// Screen-space heading of a direction, in degrees.
///
/// Screen y grows downward, so y is negated before `atan2`: moving "up" the
/// screen reads as +90 degrees.
#[inline]
pub fn heading_degrees(dir: Vec2) -> f32 {
    (-dir.y).atan2(dir.x).to_degrees()
}

/// Offset of length `r` at `degrees`, measured with y growing downward
/// (positive angles sweep clockwise on screen)
#[inline]
pub fn polar_offset(r: f32, degrees: f32) -> Vec2 {
    let rad = degrees.to_radians();
    Vec2::new(r * rad.cos(), r * rad.sin())
}

/// Offset of length `r` at `degrees`, measured with y growing upward
/// (positive angles sweep counter-clockwise on screen)
#[inline]
pub fn screen_polar_offset(r: f32, degrees: f32) -> Vec2 {
    let rad = degrees.to_radians();
    Vec2::new(r * rad.cos(), -r * rad.sin())
}
