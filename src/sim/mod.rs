//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per call, no wall-clock time
//! - Seeded RNG only
//! - Stable iteration order (insertion order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod enemy;
pub mod entity;
pub mod player;
pub mod projectile;
pub mod state;
pub mod tick;
pub mod weapon;

pub use collision::{resolve_player_projectiles, resolve_weapon_hits};
pub use enemy::{Behavior, Enemy, EnemyKind};
pub use entity::{Aabb, Body};
pub use player::{Player, PlayerId, WeaponSlot};
pub use projectile::Projectile;
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{TickInput, tick};
pub use weapon::{OrbitingWeapon, Strike, SwingState, SwingWeapon, Weapon};
