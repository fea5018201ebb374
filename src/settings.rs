//! Game settings and preferences
//!
//! Loaded from a JSON file. Any key left out keeps its default, so a file can
//! override a single tuning value.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SettingsError;
use crate::sim::Tuning;

/// Sound preferences (never seen by the simulation)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    pub muted: bool,
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            muted: false,
            master_volume: 0.8,
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Gameplay balance
    pub tuning: Tuning,
    pub audio: AudioSettings,
}

impl Settings {
    /// Parse settings JSON, filling gaps with defaults
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let mut settings: Settings = serde_json::from_str(json)?;
        settings.sanitize();
        Ok(settings)
    }

    /// Read settings from a JSON file
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| SettingsError::from(e).with_path(path))?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Pull user-supplied values back into usable ranges
    fn sanitize(&mut self) {
        let vol = self.audio.master_volume;
        self.audio.master_volume = if vol.is_finite() { vol.clamp(0.0, 1.0) } else { 0.8 };

        let t = &mut self.tuning;
        if !(t.max_delta_ms.is_finite() && t.max_delta_ms > 0.0) {
            log::warn!("Ignoring invalid max_delta_ms {}", t.max_delta_ms);
            t.max_delta_ms = crate::consts::MAX_DELTA_MS;
        }
        if !(t.reference_frame_ms.is_finite() && t.reference_frame_ms > 0.0) {
            log::warn!("Ignoring invalid reference_frame_ms {}", t.reference_frame_ms);
            t.reference_frame_ms = crate::consts::REFERENCE_FRAME_MS;
        }
        if t.hostile_max_cooldown_ms < t.hostile_min_cooldown_ms {
            std::mem::swap(&mut t.hostile_min_cooldown_ms, &mut t.hostile_max_cooldown_ms);
        }
        if !(t.double_gun_duration_ms.is_finite() && t.double_gun_duration_ms > 0.0) {
            log::warn!("Ignoring invalid double_gun_duration_ms {}", t.double_gun_duration_ms);
            t.double_gun_duration_ms = crate::consts::DOUBLE_GUN_DURATION_MS;
        }
        t.pickup_drop_chance = t.pickup_drop_chance.clamp(0.0, 1.0);
        t.starting_lives = t.starting_lives.max(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_is_default() {
        let settings = Settings::from_json("{}").expect("empty object parses");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_partial_override() {
        let settings =
            Settings::from_json(r#"{"tuning": {"starting_lives": 5}, "audio": {"muted": true}}"#)
                .expect("partial settings parse");
        assert_eq!(settings.tuning.starting_lives, 5);
        assert_eq!(settings.tuning.fire_rate_ms, 300.0);
        assert!(settings.audio.muted);
        assert_eq!(settings.audio.master_volume, 0.8);
    }

    #[test]
    fn test_sanitize_out_of_range() {
        let settings = Settings::from_json(
            r#"{"tuning": {"max_delta_ms": -1, "pickup_drop_chance": 3.0, "starting_lives": 0,
                "hostile_min_cooldown_ms": 5000, "hostile_max_cooldown_ms": 1000},
                "audio": {"master_volume": 7}}"#,
        )
        .expect("settings parse");
        assert_eq!(settings.tuning.max_delta_ms, 40.0);
        assert_eq!(settings.tuning.pickup_drop_chance, 1.0);
        assert_eq!(settings.tuning.starting_lives, 1);
        assert_eq!(settings.tuning.hostile_min_cooldown_ms, 1000.0);
        assert_eq!(settings.tuning.hostile_max_cooldown_ms, 5000.0);
        assert_eq!(settings.audio.master_volume, 1.0);
    }

    #[test]
    fn test_non_positive_double_gun_duration_falls_back() {
        for raw in ["0", "-250"] {
            let json = format!(r#"{{"tuning": {{"double_gun_duration_ms": {raw}}}}}"#);
            let settings = Settings::from_json(&json).expect("settings parse");
            assert_eq!(settings.tuning.double_gun_duration_ms, 10_000.0);
        }
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let err = Settings::from_json("{not json").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Settings::load_from("/nonexistent/neon-raid/settings.json").unwrap_err();
        assert!(matches!(err, SettingsError::Io { path: Some(_), .. }));
    }

    #[test]
    fn test_json_round_trip() {
        let mut settings = Settings::default();
        settings.tuning.level_interval_ms = 15_000.0;
        let json = settings.to_json().expect("serializes");
        assert_eq!(Settings::from_json(&json).expect("parses"), settings);
    }
}
