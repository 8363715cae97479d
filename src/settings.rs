//! Game settings and preferences
//!
//! Stored as JSON. Missing fields take their defaults, and an unreadable or
//! malformed file falls back to defaults with a warning.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Gameplay ===
    /// Score that ends the run in victory
    pub victory_score: u32,
    /// Largest delta-time a single tick integrates (seconds)
    pub max_tick_dt: f32,
    /// Background scroll speed (pixels/s)
    pub scroll_speed: f32,
    /// Costume selected when the game starts
    pub costume: usize,
    /// Fixed RNG seed (random when absent)
    pub seed: Option<u64>,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Mute all sound effects
    pub muted: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            victory_score: DEFAULT_VICTORY_SCORE,
            max_tick_dt: DEFAULT_MAX_TICK_DT,
            scroll_speed: SCROLL_SPEED,
            costume: 0,
            seed: None,

            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }
}

impl Settings {
    /// Parse settings from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from a JSON file, using defaults if it can't be read
    pub fn load_from(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Invalid settings in {}: {} - using defaults", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Cannot read {}: {} - using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Tick clamp, never negative
    pub fn tick_clamp(&self) -> f32 {
        self.max_tick_dt.max(0.0)
    }
}
