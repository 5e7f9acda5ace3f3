//! Enemy AI: wander/chase controller with a ranged attack
//!
//! Slimes and the boss share one type; they differ only in starting health
//! and in how the renderer tints them.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::entity::{Aabb, Body};
use super::projectile::Projectile;
use crate::consts::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyKind {
    Slime,
    Boss,
}

impl EnemyKind {
    pub fn initial_health(&self) -> i32 {
        match self {
            EnemyKind::Slime => SLIME_HEALTH,
            EnemyKind::Boss => BOSS_HEALTH,
        }
    }
}

/// Movement behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Behavior {
    /// Drift along a random direction
    Wander,
    /// Head straight for the player
    Chase,
}

impl Behavior {
    pub fn flipped(self) -> Self {
        match self {
            Behavior::Wander => Behavior::Chase,
            Behavior::Chase => Behavior::Wander,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    /// Stable handle, assigned by the game state at spawn
    pub id: u32,
    pub kind: EnemyKind,
    pub body: Body,
    pub speed: f32,
    pub health: i32,
    pub behavior: Behavior,
    /// Ticks until the next behavior flip
    pub state_timer: i32,
    /// Unit direction used while wandering
    pub wander_dir: Vec2,
    /// Invulnerability ticks remaining after a hit
    pub hit_cooldown: u32,
    /// Ticks between shots, fixed for this enemy's lifetime
    pub shoot_cooldown: u32,
    /// Ticks since the last shot
    pub shoot_timer: u32,
}

impl Enemy {
    pub fn spawn<R: Rng + ?Sized>(kind: EnemyKind, pos: Vec2, rng: &mut R) -> Self {
        let speed = rng.random_range(ENEMY_MIN_SPEED..=ENEMY_MAX_SPEED);
        let state_timer = sample_state_timer(rng);
        let wander_dir = sample_wander_dir(rng);
        let shoot_cooldown = rng.random_range(SHOOT_COOLDOWN_MIN..SHOOT_COOLDOWN_MAX);

        Self {
            id: 0,
            kind,
            body: Body::new(pos, ENEMY_SIZE),
            speed,
            health: kind.initial_health(),
            behavior: Behavior::Wander,
            state_timer,
            wander_dir,
            hit_cooldown: 0,
            shoot_cooldown,
            shoot_timer: 0,
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

    /// Run one AI tick. Returns the projectile fired this tick, if any.
    pub fn update<R: Rng + ?Sized>(&mut self, player_pos: Vec2, rng: &mut R) -> Option<Projectile> {
        self.update_behavior(rng);

        let dir = self.movement_dir(player_pos);
        self.body.move_by(dir, self.speed);

        let shot = self.shoot_logic(player_pos);

        if self.hit_cooldown > 0 {
            self.hit_cooldown -= 1;
        }

        shot
    }

    /// Count down to the next flip; on expiry the timer, the behavior and the
    /// wander direction are all resampled together.
    fn update_behavior<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.state_timer -= 1;
        if self.state_timer <= 0 {
            self.state_timer = sample_state_timer(rng);
            self.behavior = self.behavior.flipped();
            self.wander_dir = sample_wander_dir(rng);
            log::trace!(
                "{:?} at ({:.0}, {:.0}) switched to {:?} for {} ticks",
                self.kind,
                self.body.pos.x,
                self.body.pos.y,
                self.behavior,
                self.state_timer
            );
        }
    }

    fn movement_dir(&self, player_pos: Vec2) -> Vec2 {
        match self.behavior {
            Behavior::Chase => (player_pos - self.body.pos).normalize_or_zero(),
            Behavior::Wander => self.wander_dir,
        }
    }

    fn shoot_logic(&mut self, player_pos: Vec2) -> Option<Projectile> {
        self.shoot_timer += 1;
        if self.shoot_timer >= self.shoot_cooldown {
            self.shoot_timer = 0;
            return Some(Projectile::new(self.body.pos, player_pos));
        }
        None
    }

    /// Apply a hit unless still invulnerable from the last one.
    ///
    /// Returns true if the damage landed.
    pub fn take_damage(&mut self, amount: i32) -> bool {
        if self.hit_cooldown > 0 {
            return false;
        }

        self.health -= amount;
        self.hit_cooldown = ENEMY_HIT_COOLDOWN;
        true
    }
}

fn sample_state_timer<R: Rng + ?Sized>(rng: &mut R) -> i32 {
    rng.random_range(STATE_TIMER_MIN..STATE_TIMER_MAX)
}

fn sample_wander_dir<R: Rng + ?Sized>(rng: &mut R) -> Vec2 {
    let v = Vec2::new(rng.random_range(-1.0..=1.0), rng.random_range(-1.0..=1.0));
    if v == Vec2::ZERO {
        Vec2::X
    } else {
        v.normalize()
    }
}
