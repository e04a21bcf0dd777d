//! Presentation settings
//!
//! Supplied by the host at session construction. None of these affect
//! judgement outcomes.

use serde::{Deserialize, Serialize};

use crate::error::InputError;

/// Ruleset settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Visual Effects ===
    /// Show the beat visualiser (and its kiai flashes)
    pub show_visualizer: bool,
    /// Playfield background alpha (0.0 - 1.0)
    pub playfield_dim: f32,

    // === HUD ===
    /// Display judgement feedback at all
    pub show_judgements: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_visualizer: true,
            playfield_dim: 0.3,
            show_judgements: true,
        }
    }
}

impl Settings {
    /// Background alpha clamped to a usable range
    pub fn effective_playfield_dim(&self) -> f32 {
        if self.playfield_dim.is_finite() {
            self.playfield_dim.clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    /// Parse settings from JSON; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self, InputError> {
        let settings = serde_json::from_str(json)?;
        log::info!("Loaded settings");
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, InputError> {
        Ok(serde_json::to_string(self)?)
    }
}
