//! World configuration
//!
//! Everything the simulation would otherwise read from globals is passed in
//! here at construction. Loaded from a JSON file when one is given.

use std::path::Path;

use serde::de::Error as _;
use serde::{Deserialize, Serialize};

use crate::consts::{TICK_RATE, WORLD_HEIGHT, WORLD_WIDTH};

/// Simulation and driver settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === World ===
    /// World width in pixels
    pub world_width: f32,
    /// World height in pixels
    pub world_height: f32,
    /// Target ticks per second
    pub tick_rate: u32,

    // === Run ===
    /// RNG seed; a fresh random seed is drawn when absent
    pub seed: Option<u64>,
    /// Slimes spawned at start
    pub slime_count: u32,
    /// Bosses spawned at start
    pub boss_count: u32,

    // === Driver ===
    /// Stop the loop once the game is won or lost (the arcade original keeps
    /// ticking and only changes the banner)
    pub halt_on_outcome: bool,
    /// Stop after this many ticks (headless runs)
    pub max_ticks: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,
            tick_rate: TICK_RATE,

            seed: None,
            slime_count: 5,
            boss_count: 1,

            halt_on_outcome: false,
            max_ticks: None,
        }
    }
}

impl Settings {
    /// Default settings with a fixed seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Parse settings from JSON. Missing fields take their defaults; a world
    /// that is not a positive finite size is rejected.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let settings: Self = serde_json::from_str(json)?;
        settings.check_world().map_err(serde_json::Error::custom)?;
        Ok(settings)
    }

    fn check_world(&self) -> Result<(), String> {
        for (name, value) in [
            ("world_width", self.world_width),
            ("world_height", self.world_height),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(format!("{name} must be a positive number, got {value}"));
            }
        }
        Ok(())
    }

    /// Load settings from a JSON file, falling back to defaults on any failure
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Could not read settings from {}: {}", path.display(), e);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Invalid settings in {}: {}; using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Duration of one tick at the target rate
    pub fn tick_duration(&self) -> std::time::Duration {
        std::time::Duration::from_secs_f64(1.0 / self.tick_rate.max(1) as f64)
    }
}
