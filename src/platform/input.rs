//! Built-in input sources

use std::collections::VecDeque;

use super::InputSource;
use crate::consts::SWING_REACH;
use crate::sim::{GameState, TickInput};

/// Replays a fixed list of inputs, then asks to quit
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    script: VecDeque<TickInput>,
}

impl ScriptedInput {
    pub fn new(script: impl IntoIterator<Item = TickInput>) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }

    /// The same input for `ticks` ticks
    pub fn repeat(input: TickInput, ticks: usize) -> Self {
        Self::new(std::iter::repeat_n(input, ticks))
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self, _state: &GameState) -> TickInput {
        self.script.pop_front().unwrap_or(TickInput {
            quit: true,
            ..Default::default()
        })
    }
}

/// Demo player: walks at the nearest enemy and swings when in reach
#[derive(Debug, Clone)]
pub struct Autopilot {
    /// Start a swing when the target is this close (center to center)
    pub engage_range: f32,
    /// Per-axis distance below which that axis is left alone
    pub deadzone: f32,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self {
            engage_range: SWING_REACH + 30.0,
            deadzone: 4.0,
        }
    }
}

impl InputSource for Autopilot {
    fn poll(&mut self, state: &GameState) -> TickInput {
        let player = state.player.pos();

        let nearest = state.enemies.iter().min_by(|a, b| {
            a.pos()
                .distance_squared(player)
                .partial_cmp(&b.pos().distance_squared(player))
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let Some(target) = nearest else {
            return TickInput::default();
        };

        let to_target = target.pos() - player;
        TickInput {
            up: to_target.y < -self.deadzone,
            down: to_target.y > self.deadzone,
            left: to_target.x < -self.deadzone,
            right: to_target.x > self.deadzone,
            attack: to_target.length() <= self.engage_range,
            quit: false,
        }
    }
}
