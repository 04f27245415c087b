//! Scene configuration
//!
//! One parameterized scene replaces the separate demo variants: the full
//! aquarium is the default, and the minimal fish-only demo is the same
//! scene with the static decoration flags turned off.

use serde::{Deserialize, Serialize};

/// Scene variant flags plus the initial canvas size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SceneConfig {
    /// Initial canvas width in pixels
    pub width: f32,
    /// Initial canvas height in pixels
    pub height: f32,
    /// Generate and render the coral field
    pub with_coral: bool,
    /// Generate and render the rock field
    pub with_rocks: bool,
    /// Run the bubble system (rock emission requires this and `with_rocks`)
    pub with_bubbles: bool,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            with_coral: true,
            with_rocks: true,
            with_bubbles: true,
        }
    }
}

impl SceneConfig {
    /// The minimal variant: fish on a plain gradient, no decorations
    pub fn fish_only(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            with_coral: false,
            with_rocks: false,
            with_bubbles: false,
        }
    }

    /// Parse a config from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize the config to JSON
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_full_aquarium() {
        let config = SceneConfig::default();
        assert!(config.with_coral);
        assert!(config.with_rocks);
        assert!(config.with_bubbles);
        assert_eq!(config.width, 800.0);
        assert_eq!(config.height, 600.0);
    }

    #[test]
    fn test_fish_only_disables_decorations() {
        let config = SceneConfig::fish_only(640.0, 480.0);
        assert!(!config.with_coral);
        assert!(!config.with_rocks);
        assert!(!config.with_bubbles);
    }

    #[test]
    fn test_json_round_trip() {
        let config = SceneConfig {
            width: 1024.0,
            height: 768.0,
            with_coral: true,
            with_rocks: false,
            with_bubbles: false,
        };
        let parsed = SceneConfig::from_json(&config.to_json()).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_json_rejects_garbage() {
        assert!(SceneConfig::from_json("not json").is_err());
    }
}
