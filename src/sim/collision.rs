//! Combat resolution
//!
//! Overlap tests are plain AABB checks. The interesting part is ordering:
//! enemies carry their own invulnerability window, so when two blades reach
//! the same enemy in one tick only the first one resolved lands.

use super::enemy::Enemy;
use super::player::Player;
use super::projectile::Projectile;
use super::state::GameEvent;
use super::weapon::Strike;
use crate::consts::PROJECTILE_DAMAGE;

/// Remove every projectile touching the player; each one deals damage.
///
/// Returns the number of projectiles that hit.
pub fn resolve_player_projectiles(
    player: &mut Player,
    projectiles: &mut Vec<Projectile>,
    events: &mut Vec<GameEvent>,
) -> u32 {
    let bounds = player.bounds();
    let before = projectiles.len();
    projectiles.retain(|p| !p.bounds().overlaps(&bounds));
    let hits = (before - projectiles.len()) as u32;

    for _ in 0..hits {
        player.change_health(-PROJECTILE_DAMAGE);
        events.push(GameEvent::PlayerHit {
            damage: PROJECTILE_DAMAGE,
            health: player.health,
        });
    }

    if hits > 0 {
        log::debug!("Player hit by {} projectile(s), health {}", hits, player.health);
    }

    hits
}

/// Apply one weapon's strike to every overlapping enemy, then drop the dead
/// so later strikes this tick never see them.
///
/// Returns the number of hits that landed.
pub fn resolve_weapon_hits(
    strike: &Strike,
    enemies: &mut Vec<Enemy>,
    events: &mut Vec<GameEvent>,
) -> u32 {
    let mut landed = 0;

    for enemy in enemies.iter_mut() {
        if !enemy.bounds().overlaps(&strike.bounds) {
            continue;
        }
        if !enemy.take_damage(strike.damage) {
            continue;
        }

        landed += 1;
        events.push(GameEvent::EnemyHit {
            id: enemy.id,
            kind: enemy.kind,
            weapon: strike.slot,
            damage: strike.damage,
            health: enemy.health,
        });

        if enemy.is_dead() {
            log::debug!(
                "{:?} killed by {:?} at ({:.0}, {:.0})",
                enemy.kind,
                strike.slot,
                enemy.body.pos.x,
                enemy.body.pos.y
            );
            events.push(GameEvent::EnemyKilled {
                id: enemy.id,
                kind: enemy.kind,
                pos: enemy.body.pos,
            });
        }
    }

    enemies.retain(|e| !e.is_dead());
    landed
}
