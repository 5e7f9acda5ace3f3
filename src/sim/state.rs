//! Game state and core simulation types
//!
//! `GameState` owns every entity. Weapons point back at the player only
//! through a `PlayerId` handle.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::enemy::{Enemy, EnemyKind};
use super::player::{Player, PlayerId, WeaponSlot};
use super::projectile::Projectile;
use super::weapon::{OrbitingWeapon, SwingWeapon};
use crate::consts::PLAYER_MAX_HEALTH;
use crate::settings::Settings;

/// Outcome shown to the player. Terminal phases do not stop the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Fight in progress
    Playing,
    /// Player health reached zero (takes precedence over a win)
    GameOver,
    /// Every slime and boss is dead
    Victory,
}

impl GamePhase {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GamePhase::Playing)
    }
}

/// Something that happened during the current tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    ProjectileFired { from: EnemyKind, pos: Vec2 },
    PlayerHit { damage: i32, health: i32 },
    EnemyHit {
        id: u32,
        kind: EnemyKind,
        weapon: WeaponSlot,
        damage: i32,
        health: i32,
    },
    EnemyKilled { id: u32, kind: EnemyKind, pos: Vec2 },
    PhaseChanged { from: GamePhase, to: GamePhase },
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub(crate) rng: Pcg32,
    pub world_width: f32,
    pub world_height: f32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub phase: GamePhase,
    pub player: Player,
    pub orbiting: OrbitingWeapon,
    pub swing: SwingWeapon,
    /// Slimes and bosses, in spawn order
    pub enemies: Vec<Enemy>,
    next_enemy_id: u32,
    pub projectiles: Vec<Projectile>,
    /// Events raised during the last tick
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game with default settings and the given seed
    pub fn new(seed: u64) -> Self {
        Self::from_settings(&Settings::seeded(seed))
    }

    /// Create a new game: player at the center with both blades equipped,
    /// slimes then bosses at random positions.
    pub fn from_settings(settings: &Settings) -> Self {
        let seed = settings.seed.unwrap_or_else(rand::random);
        let center = Vec2::new(settings.world_width / 2.0, settings.world_height / 2.0);

        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            world_width: settings.world_width,
            world_height: settings.world_height,
            time_ticks: 0,
            phase: GamePhase::Playing,
            player: Player::new(PlayerId(1), center),
            orbiting: OrbitingWeapon::new(),
            swing: SwingWeapon::new(),
            enemies: Vec::new(),
            next_enemy_id: 0,
            projectiles: Vec::new(),
            events: Vec::new(),
        };

        state.player.equip(&mut state.orbiting);
        state.player.equip(&mut state.swing);

        for _ in 0..settings.slime_count {
            state.spawn_enemy(EnemyKind::Slime);
        }
        for _ in 0..settings.boss_count {
            state.spawn_enemy(EnemyKind::Boss);
        }

        log::info!(
            "New game (seed {}): {} slimes, {} bosses",
            seed,
            state.slime_count(),
            state.boss_count()
        );

        state
    }

    /// Spawn an enemy at a random whole-pixel position inside the world
    ///
    /// A degenerate world size (zero, negative or NaN) collapses to the origin.
    pub fn spawn_enemy(&mut self, kind: EnemyKind) {
        let max_x = (self.world_width as i32).max(0);
        let max_y = (self.world_height as i32).max(0);
        let x = self.rng.random_range(0..=max_x) as f32;
        let y = self.rng.random_range(0..=max_y) as f32;
        let mut enemy = Enemy::spawn(kind, Vec2::new(x, y), &mut self.rng);
        enemy.id = self.next_enemy_id;
        self.next_enemy_id += 1;
        self.enemies.push(enemy);
    }

    pub fn slime_count(&self) -> usize {
        self.count_kind(EnemyKind::Slime)
    }

    pub fn boss_count(&self) -> usize {
        self.count_kind(EnemyKind::Boss)
    }

    fn count_kind(&self, kind: EnemyKind) -> usize {
        self.enemies.iter().filter(|e| e.kind == kind).count()
    }

    /// No slimes and no bosses remain. Enemies never respawn, so once true
    /// this stays true.
    pub fn is_won(&self) -> bool {
        self.enemies.is_empty()
    }

    pub fn is_lost(&self) -> bool {
        self.player.is_dead()
    }

    /// Recompute the displayed outcome, recording a transition event
    pub fn update_phase(&mut self) {
        let next = if self.is_lost() {
            GamePhase::GameOver
        } else if self.is_won() {
            GamePhase::Victory
        } else {
            GamePhase::Playing
        };

        if next != self.phase {
            log::info!(
                "Phase {:?} -> {:?} at tick {}",
                self.phase,
                next,
                self.time_ticks
            );
            self.events.push(GameEvent::PhaseChanged {
                from: self.phase,
                to: next,
            });
            self.phase = next;
        }
    }

    /// Assert the structural invariants (debug builds only)
    pub fn debug_check_invariants(&self) {
        debug_assert!(
            (0..=PLAYER_MAX_HEALTH).contains(&self.player.health),
            "player health {} out of range",
            self.player.health
        );
        debug_assert!(
            self.enemies.iter().all(|e| e.health > 0),
            "dead enemy left in the active set"
        );
        debug_assert!(
            self.projectiles.iter().all(|p| !p.expired),
            "expired projectile left in the active set"
        );
        debug_assert!(
            (0.0..360.0).contains(&self.orbiting.angle),
            "orbit angle {} not wrapped",
            self.orbiting.angle
        );
    }
}
