//! Pond settings and preferences
//!
//! Persisted in LocalStorage on the web; defaults everywhere else.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::PondConfig;

/// Quality preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum QualityPreset {
    Low,
    #[default]
    Medium,
    High,
}

impl QualityPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityPreset::Low => "Low",
            QualityPreset::Medium => "Medium",
            QualityPreset::High => "High",
        }
    }

    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" => Some(QualityPreset::Low),
            "medium" | "med" => Some(QualityPreset::Medium),
            "high" => Some(QualityPreset::High),
            _ => None,
        }
    }

    /// Triangles per ellipse when tessellating sprites
    pub fn ellipse_segments(&self) -> u32 {
        match self {
            QualityPreset::Low => 12,
            QualityPreset::Medium => 24,
            QualityPreset::High => 48,
        }
    }
}

/// Pond settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Graphics quality preset
    pub quality: QualityPreset,

    // === HUD ===
    /// Show the duck/breadcrumb counters
    pub show_stats: bool,

    // === Accessibility ===
    /// Reduced motion (tail stays still)
    pub reduced_motion: bool,

    // === Pond ===
    /// Ducks on the pond at start
    pub initial_ducks: usize,
    /// Most ducks the pond will hold
    pub max_ducks: usize,
    /// Breadcrumb lifetime in frames
    pub breadcrumb_lifetime: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            quality: QualityPreset::Medium,
            show_stats: true,
            reduced_motion: false,
            initial_ducks: INITIAL_MOVERS,
            max_ducks: MAX_MOVERS,
            breadcrumb_lifetime: LURE_MAX_AGE,
        }
    }
}

impl Settings {
    /// Create settings from a quality preset
    pub fn from_preset(preset: QualityPreset) -> Self {
        Self {
            quality: preset,
            ..Self::default()
        }
    }

    pub fn ellipse_segments(&self) -> u32 {
        self.quality.ellipse_segments()
    }

    /// Tail curl animation (respects reduced_motion)
    pub fn effective_tail_animation(&self) -> bool {
        !self.reduced_motion
    }

    /// Pond configuration for a canvas of the given size
    pub fn pond_config(&self, width: f32, height: f32) -> PondConfig {
        PondConfig {
            width,
            height,
            initial_movers: self.initial_ducks.min(self.max_ducks),
            max_movers: self.max_ducks,
            lure_max_age: self.breadcrumb_lifetime,
        }
    }

    /// Parse stored JSON, falling back to defaults when it is missing or bad
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Ignoring stored settings: {}", e);
                Self::default()
            }
        }
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "duck_pond_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                log::info!("Loaded settings from LocalStorage");
                return Self::from_json(&json);
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Native: defaults, with the quality preset overridable via DUCK_POND_QUALITY
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        match std::env::var("DUCK_POND_QUALITY")
            .ok()
            .and_then(|q| QualityPreset::from_name(&q))
        {
            Some(preset) => Self::from_preset(preset),
            None => Self::default(),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quality_names() {
        assert_eq!(QualityPreset::from_name("HIGH"), Some(QualityPreset::High));
        assert_eq!(QualityPreset::from_name("med"), Some(QualityPreset::Medium));
        assert_eq!(QualityPreset::from_name("ultra"), None);
        assert_eq!(QualityPreset::Low.as_str(), "Low");
    }

    #[test]
    fn test_json_roundtrip_and_partial() {
        let settings = Settings::from_preset(QualityPreset::High);
        let json = serde_json::to_string(&settings).unwrap();
        assert_eq!(Settings::from_json(&json), settings);

        let partial = Settings::from_json(r#"{"max_ducks": 4}"#);
        assert_eq!(partial.max_ducks, 4);
        assert_eq!(partial.quality, QualityPreset::Medium);
    }

    #[test]
    fn test_bad_json_falls_back() {
        assert_eq!(Settings::from_json("not json"), Settings::default());
    }

    #[test]
    fn test_pond_config_clamps_initial_ducks() {
        let settings = Settings {
            initial_ducks: 8,
            max_ducks: 5,
            ..Default::default()
        };
        let config = settings.pond_config(640.0, 480.0);
        assert_eq!(config.initial_movers, 5);
        assert_eq!(config.max_movers, 5);
        assert_eq!(config.bounds(), glam::Vec2::new(640.0, 480.0));
    }

    #[test]
    fn test_reduced_motion_stops_tail() {
        let settings = Settings {
            reduced_motion: true,
            ..Default::default()
        };
        assert!(!settings.effective_tail_animation());
    }
}
