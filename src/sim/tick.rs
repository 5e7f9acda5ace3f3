//! Fixed-rate simulation tick
//!
//! One call advances the whole game by exactly one step. Order matters and
//! is fixed: player, weapons, enemies, projectiles, then combat.

use serde::{Deserialize, Serialize};

use super::collision::{resolve_player_projectiles, resolve_weapon_hits};
use super::state::{GameEvent, GameState};
use super::weapon::Weapon;

/// Input signals sampled for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Start a swing (ignored while one is running)
    pub attack: bool,
    /// Leave the loop after this tick. The tick itself ignores it.
    pub quit: bool,
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.events.clear();
    state.time_ticks += 1;

    state.player.update_from_input(input);

    if input.attack {
        state.swing.start_attack();
    }

    // Weapon poses follow the player's new position
    let orbit_owner = state.player.as_owner(state.orbiting.owner);
    state.orbiting.update(orbit_owner);
    let swing_owner = state.player.as_owner(state.swing.owner);
    state.swing.update(swing_owner);

    let player_pos = state.player.pos();
    for enemy in state.enemies.iter_mut() {
        if let Some(orb) = enemy.update(player_pos, &mut state.rng) {
            state.events.push(GameEvent::ProjectileFired {
                from: enemy.kind,
                pos: orb.pos(),
            });
            state.projectiles.push(orb);
        }
    }

    // Freshly fired orbs move on the tick they spawn
    for projectile in state.projectiles.iter_mut() {
        projectile.update(state.world_width, state.world_height);
    }
    state.projectiles.retain(|p| !p.expired);

    resolve_player_projectiles(&mut state.player, &mut state.projectiles, &mut state.events);

    // Orbiting blade resolves before the swing blade
    let strikes = [state.orbiting.strike(), state.swing.strike()];
    for strike in strikes.iter().flatten() {
        resolve_weapon_hits(strike, &mut state.enemies, &mut state.events);
    }

    state.update_phase();
    state.debug_check_invariants();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    use crate::consts::*;
    use crate::settings::Settings;
    use crate::sim::enemy::{Behavior, Enemy, EnemyKind};
    use crate::sim::player::WeaponSlot;
    use crate::sim::projectile::Projectile;
    use crate::sim::state::GamePhase;
    use crate::sim::weapon::SwingState;
    use glam::Vec2;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    /// A game with no enemies spawned
    fn empty_game(seed: u64) -> GameState {
        let settings = Settings {
            slime_count: 0,
            boss_count: 0,
            ..Settings::seeded(seed)
        };
        GameState::from_settings(&settings)
    }

    /// An enemy that keeps its behavior and never fires during a test
    fn scripted_enemy(kind: EnemyKind, pos: Vec2, behavior: Behavior, speed: f32) -> Enemy {
        let mut rng = Pcg32::seed_from_u64(9);
        let mut e = Enemy::spawn(kind, pos, &mut rng);
        e.behavior = behavior;
        e.speed = speed;
        e.state_timer = i32::MAX;
        e.shoot_cooldown = u32::MAX;
        e
    }

    #[test]
    fn test_tick_advances_counter_and_clears_events() {
        let mut state = GameState::new(12345);
        tick(&mut state, &TickInput::default());
        assert_eq!(state.time_ticks, 1);

        state.events.push(GameEvent::PlayerHit {
            damage: 0,
            health: 100,
        });
        tick(&mut state, &TickInput::default());
        assert!(!state.events.iter().any(|e| matches!(e, GameEvent::PlayerHit { damage: 0, .. })));
    }

    #[test]
    fn test_weapons_follow_moved_player() {
        let mut state = empty_game(1);
        let input = TickInput {
            right: true,
            ..Default::default()
        };
        tick(&mut state, &input);

        let player = state.player.pos();
        assert_eq!(player, Vec2::new(965.0, 540.0));
        // Swing blade sits `reach` ahead of the already-moved player
        assert!((state.swing.pos - (player + Vec2::new(SWING_REACH, 0.0))).length() < 1e-3);
        assert!((state.orbiting.pos.distance(player) - ORBIT_RADIUS).abs() < 1e-3);
        assert_eq!(state.orbiting.angle, ORBIT_ANGULAR_SPEED);
    }

    #[test]
    fn test_two_projectiles_same_tick() {
        let mut state = empty_game(2);
        state.player.body.pos = Vec2::ZERO;
        state
            .projectiles
            .push(Projectile::new(Vec2::new(2.0, 2.0), Vec2::new(2.0, 2.0)));
        state
            .projectiles
            .push(Projectile::new(Vec2::new(8.0, 4.0), Vec2::new(8.0, 4.0)));

        tick(&mut state, &TickInput::default());

        assert_eq!(state.player.health, 80);
        assert!(state.projectiles.is_empty());
        let hits = state
            .events
            .iter()
            .filter(|e| matches!(e, GameEvent::PlayerHit { .. }))
            .count();
        assert_eq!(hits, 2);
    }

    #[test]
    fn test_swing_hits_chasing_slime_once() {
        let mut state = empty_game(3);
        // Only the swing blade takes part
        state.orbiting.owner = None;

        let player = state.player.pos();
        let distance = 200.0;
        let speed = 2.0;
        state.enemies.push(scripted_enemy(
            EnemyKind::Slime,
            player + Vec2::new(distance, 0.0),
            Behavior::Chase,
            speed,
        ));

        // Close in until the slime sits at the blade's resting spot
        let approach = ((distance - SWING_REACH) / speed).round() as u32;
        for _ in 0..approach {
            tick(&mut state, &TickInput::default());
        }
        assert_eq!(state.enemies[0].health, SLIME_HEALTH);
        assert!((state.enemies[0].pos().x - (player.x + SWING_REACH)).abs() < 1e-2);

        tick(
            &mut state,
            &TickInput {
                attack: true,
                ..Default::default()
            },
        );
        let mut hit_ticks = 0;
        let mut health = state.enemies[0].health;
        if health < SLIME_HEALTH {
            hit_ticks += 1;
        }
        while state.swing.is_swinging() {
            tick(&mut state, &TickInput::default());
            if state.enemies[0].health < health {
                hit_ticks += 1;
                health = state.enemies[0].health;
            }
        }

        assert_eq!(hit_ticks, 1);
        assert_eq!(state.enemies[0].health, SLIME_HEALTH - SWING_DAMAGE);
    }

    #[test]
    fn test_idle_swing_deals_no_damage() {
        let mut state = empty_game(4);
        state.orbiting.owner = None;
        let spot = state.player.pos() + Vec2::new(SWING_REACH, 0.0);
        state
            .enemies
            .push(scripted_enemy(EnemyKind::Slime, spot, Behavior::Wander, 0.0));

        for _ in 0..30 {
            tick(&mut state, &TickInput::default());
        }
        assert_eq!(state.enemies[0].health, SLIME_HEALTH);
    }

    #[test]
    fn test_orbit_blade_lands_before_swing() {
        let mut state = empty_game(5);
        let player = state.player.pos();
        // Both blades land on the slime next tick: the orbit reaches angle 0
        // at the swing's reach, and the swing sits mid-arc facing right.
        state.orbiting.radius = SWING_REACH;
        state.orbiting.angle = 360.0 - ORBIT_ANGULAR_SPEED;
        state.swing.state = SwingState::Swinging;
        state.swing.progress = -1.0;
        state.swing.swing_speed = 0.5;
        state.swing.max_arc = 4.0;
        state.enemies.push(scripted_enemy(
            EnemyKind::Slime,
            player + Vec2::new(SWING_REACH, 0.0),
            Behavior::Wander,
            0.0,
        ));

        tick(&mut state, &TickInput::default());

        let landed: Vec<_> = state
            .events
            .iter()
            .filter_map(|e| match e {
                GameEvent::EnemyHit { weapon, .. } => Some(*weapon),
                _ => None,
            })
            .collect();
        assert!(state.swing.is_swinging());
        assert_eq!(landed, vec![WeaponSlot::Orbiting]);
        assert_eq!(state.enemies[0].health, SLIME_HEALTH - ORBIT_DAMAGE);
    }

    #[test]
    fn test_enemy_removed_on_lethal_tick() {
        let mut state = empty_game(6);
        state.swing.owner = None;
        let mut slime = scripted_enemy(
            EnemyKind::Slime,
            state.player.pos() + Vec2::new(ORBIT_RADIUS, 0.0),
            Behavior::Wander,
            0.0,
        );
        slime.health = ORBIT_DAMAGE;
        state.enemies.push(slime);
        state.orbiting.angle = 360.0 - ORBIT_ANGULAR_SPEED;

        tick(&mut state, &TickInput::default());
        assert!(state.enemies.is_empty());
        assert!(state
            .events
            .iter()
            .any(|e| matches!(e, GameEvent::EnemyKilled { .. })));
    }

    #[test]
    fn test_win_persists_and_simulation_continues() {
        let mut state = GameState::new(7);
        assert_eq!(state.enemies.len(), 6);

        // Leave a single slime on its last hit point in the orbit's path
        state.enemies.truncate(1);
        let target = &mut state.enemies[0];
        target.body.pos = state.player.pos() + Vec2::new(ORBIT_RADIUS, 0.0);
        target.health = 1;
        target.speed = 0.0;
        target.state_timer = i32::MAX;
        target.shoot_cooldown = u32::MAX;
        state.orbiting.angle = 360.0 - ORBIT_ANGULAR_SPEED;
        state.swing.owner = None;

        tick(&mut state, &TickInput::default());
        assert!(state.is_won());
        assert_eq!(state.phase, GamePhase::Victory);
        let won_at = state.time_ticks;

        for _ in 0..120 {
            tick(&mut state, &TickInput::default());
            assert!(state.is_won());
            assert_eq!(state.phase, GamePhase::Victory);
        }
        assert_eq!(state.time_ticks, won_at + 120);
    }

    #[test]
    fn test_all_enemies_killed_by_blades() {
        let mut state = GameState::new(8);
        let player = state.player.pos();
        // Park every enemy on the orbit's path and let the blade grind them down
        for e in state.enemies.iter_mut() {
            e.body.pos = player + Vec2::new(ORBIT_RADIUS, 0.0);
            e.behavior = Behavior::Wander;
            e.speed = 0.0;
            e.state_timer = i32::MAX;
            e.shoot_cooldown = u32::MAX;
        }

        let mut ticks = 0;
        while !state.is_won() {
            tick(&mut state, &TickInput::default());
            ticks += 1;
            assert!(ticks < 100_000, "blades never finished the fight");
            assert!(state.enemies.iter().all(|e| e.health > 0));
        }
        assert_eq!(state.phase, GamePhase::Victory);
        assert_eq!(state.slime_count() + state.boss_count(), 0);
    }

    #[test]
    fn test_game_over_does_not_stop_ticking() {
        let mut state = empty_game(9);
        state.enemies.push(scripted_enemy(
            EnemyKind::Boss,
            Vec2::new(10.0, 10.0),
            Behavior::Wander,
            0.0,
        ));
        state.player.health = 10;
        let pos = state.player.pos();
        state.projectiles.push(Projectile::new(pos, pos));

        tick(&mut state, &TickInput::default());
        assert_eq!(state.player.health, 0);
        assert_eq!(state.phase, GamePhase::GameOver);

        let input = TickInput {
            left: true,
            ..Default::default()
        };
        tick(&mut state, &input);
        assert_eq!(state.time_ticks, 2);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(state.player.pos().x < pos.x);
    }

    #[test]
    fn test_determinism() {
        let mut state1 = GameState::new(99999);
        let mut state2 = GameState::new(99999);

        let inputs = [
            TickInput {
                up: true,
                ..Default::default()
            },
            TickInput {
                attack: true,
                right: true,
                ..Default::default()
            },
            TickInput::default(),
        ];

        for i in 0..600 {
            let input = &inputs[i % inputs.len()];
            tick(&mut state1, input);
            tick(&mut state2, input);
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.player.health, state2.player.health);
        assert_eq!(state1.enemies.len(), state2.enemies.len());
        assert_eq!(state1.projectiles.len(), state2.projectiles.len());
        for (a, b) in state1.enemies.iter().zip(&state2.enemies) {
            assert_eq!(a.pos(), b.pos());
            assert_eq!(a.health, b.health);
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn prop_invariants_hold_for_any_input(
            seed in any::<u64>(),
            keys in prop::collection::vec(any::<(bool, bool, bool, bool, bool)>(), 1..400),
        ) {
            let mut state = GameState::new(seed);
            let mut last_health: HashMap<u32, i32> =
                state.enemies.iter().map(|e| (e.id, e.health)).collect();

            for (up, down, left, right, attack) in keys {
                let input = TickInput { up, down, left, right, attack, quit: false };
                tick(&mut state, &input);

                prop_assert!((0..=PLAYER_MAX_HEALTH).contains(&state.player.health));
                prop_assert!(state.enemies.iter().all(|e| e.health > 0));
                for e in &state.enemies {
                    // Enemies never respawn: every survivor was alive last tick
                    let before = last_health.get(&e.id);
                    prop_assert!(before.is_some(), "enemy {} appeared mid-game", e.id);
                    prop_assert!(before.is_some_and(|b| e.health <= *b));
                }
                last_health = state.enemies.iter().map(|e| (e.id, e.health)).collect();
            }
        }
    }
}
