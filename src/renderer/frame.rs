//! Per-tick frame export
//!
//! Turns a `GameState` into draw commands and HUD text. Read-only: nothing
//! here feeds back into the simulation.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::commands::{DrawCommand, Shape, SpriteKind, TextCommand, colors};
use crate::consts::BLADE_SIZE;
use crate::sim::{EnemyKind, GamePhase, GameState};

/// HUD line anchor
const STATUS_POS: Vec2 = Vec2::new(1400.0, 1000.0);
/// Banner sits slightly left of center so the short text looks centered
const BANNER_OFFSET_X: f32 = 60.0;

/// Everything a renderer needs to draw one tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub tick: u64,
    pub clear_color: [u8; 3],
    /// Back to front
    pub commands: Vec<DrawCommand>,
    pub status: TextCommand,
    pub banner: Option<TextCommand>,
}

/// Build the frame for the current state.
///
/// Draw order: player, orbiting blade, swing blade, slimes, bosses,
/// projectiles.
pub fn build_frame(state: &GameState) -> Frame {
    let mut commands =
        Vec::with_capacity(3 + state.enemies.len() + state.projectiles.len());

    let player = &state.player;
    commands.push(DrawCommand::rect(
        SpriteKind::Player,
        player.pos(),
        player.body.size,
        colors::PLAYER,
    ));

    commands.push(
        DrawCommand::rect(
            SpriteKind::OrbitingBlade,
            state.orbiting.pos,
            BLADE_SIZE,
            colors::ORBITING_BLADE,
        )
        .rotated(state.orbiting.rotation),
    );
    commands.push(
        DrawCommand::rect(
            SpriteKind::SwingBlade,
            state.swing.pos,
            BLADE_SIZE,
            colors::SWING_BLADE,
        )
        .rotated(state.swing.angle),
    );

    for kind in [EnemyKind::Slime, EnemyKind::Boss] {
        let (sprite, color) = match kind {
            EnemyKind::Slime => (SpriteKind::Slime, colors::SLIME),
            EnemyKind::Boss => (SpriteKind::Boss, colors::BOSS),
        };
        commands.extend(
            state
                .enemies
                .iter()
                .filter(|e| e.kind == kind)
                .map(|e| DrawCommand::rect(sprite, e.pos(), e.body.size, color)),
        );
    }

    commands.extend(state.projectiles.iter().map(|p| DrawCommand {
        shape: Shape::Circle,
        ..DrawCommand::rect(SpriteKind::Projectile, p.pos(), p.body.size, colors::PROJECTILE)
    }));

    Frame {
        tick: state.time_ticks,
        clear_color: colors::BACKGROUND,
        commands,
        status: TextCommand {
            text: status_text(state),
            pos: STATUS_POS,
            color: colors::HUD_TEXT,
        },
        banner: banner(state),
    }
}

/// HUD line: health and what is left to fight
pub fn status_text(state: &GameState) -> String {
    format!(
        "Health: {}  Enemies: {}  Bosses: {}",
        state.player.health,
        state.slime_count(),
        state.boss_count()
    )
}

/// Outcome banner, if the fight is decided
pub fn banner(state: &GameState) -> Option<TextCommand> {
    let (text, color) = match state.phase {
        GamePhase::Playing => return None,
        GamePhase::GameOver => ("Game Over", colors::GAME_OVER),
        GamePhase::Victory => ("You Win!", colors::VICTORY),
    };
    Some(TextCommand {
        text: text.to_string(),
        pos: Vec2::new(
            state.world_width / 2.0 - BANNER_OFFSET_X,
            state.world_height / 2.0,
        ),
        color,
    })
}
