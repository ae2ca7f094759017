//! Arena geometry and pacing configuration
//!
//! The hosting layout supplies the geometry (center, spawn ring); pacing
//! knobs live here too. Everything round-trips through JSON so a host can
//! persist or ship presets.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_SPAWN_RATE;

/// Tunable simulation parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// Arena center in world units
    pub center: Vec2,
    /// Distance from center at which enemies are created
    pub spawn_radius: f32,
    /// Enemies farther out than this are dropped from the active set
    pub despawn_radius: f32,
    /// Upper bound of the uniform spawn-delay draw, seconds
    pub spawn_rate: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            center: Vec2::ZERO,
            spawn_radius: 400.0,
            despawn_radius: 600.0,
            spawn_rate: DEFAULT_SPAWN_RATE,
        }
    }
}

impl SimConfig {
    /// Clamp out-of-range values instead of erroring. A negative rate would
    /// turn into negative delays downstream; a despawn ring inside the spawn
    /// ring would cull enemies at birth.
    pub fn sanitize(mut self) -> Self {
        self.spawn_rate = self.spawn_rate.max(0.0);
        self.spawn_radius = self.spawn_radius.max(0.0);
        self.despawn_radius = self.despawn_radius.max(self.spawn_radius);
        self
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Self>(json).map(Self::sanitize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_clamps_negative_rate() {
        let config = SimConfig {
            spawn_rate: -3.0,
            ..Default::default()
        }
        .sanitize();
        assert_eq!(config.spawn_rate, 0.0);
    }

    #[test]
    fn test_sanitize_keeps_despawn_outside_spawn() {
        let config = SimConfig {
            spawn_radius: 400.0,
            despawn_radius: 100.0,
            ..Default::default()
        }
        .sanitize();
        assert!(config.despawn_radius >= config.spawn_radius);
    }

    #[test]
    fn test_from_json_sanitizes() {
        let json = r#"{
            "center": [0.0, 0.0],
            "spawn_radius": 300.0,
            "despawn_radius": 450.0,
            "spawn_rate": -1.0
        }"#;
        let config = SimConfig::from_json(json).unwrap();
        assert_eq!(config.spawn_rate, 0.0);
        assert_eq!(config.spawn_radius, 300.0);
    }
}
