use std::time::Duration;

use huddle_ui_reveal::{
    DEFAULT_CLOSE_THRESHOLD, DEFAULT_MIN_DISTANCE, DEFAULT_OPEN_THRESHOLD,
    DEFAULT_SETTLE_DURATION, RevealConfig,
};
use serde::{Deserialize, Serialize};

use super::errors::SettingsError;

/// How wide the revealed panel is.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub(crate) enum PanelMode {
    /// Spaces rail only.
    Rail,
    /// Spaces rail plus a fixed-width rooms list.
    #[default]
    Menu,
    /// Everything except a strip of content the width of the rail.
    FullWidth,
}

/// Typed settings payload used for persistence and startup configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct SettingsData {
    panel_mode: PanelMode,
    open_threshold: f32,
    close_threshold: f32,
    settle_duration_ms: u64,
    drag_min_distance: f32,
}

impl Default for SettingsData {
    fn default() -> Self {
        Self {
            panel_mode: PanelMode::default(),
            open_threshold: DEFAULT_OPEN_THRESHOLD,
            close_threshold: DEFAULT_CLOSE_THRESHOLD,
            settle_duration_ms: DEFAULT_SETTLE_DURATION.as_millis() as u64,
            drag_min_distance: DEFAULT_MIN_DISTANCE,
        }
    }
}

impl SettingsData {
    pub(crate) fn panel_mode(&self) -> PanelMode {
        self.panel_mode
    }

    pub(crate) fn drag_min_distance(&self) -> f32 {
        self.drag_min_distance
    }

    /// Build the reveal controller configuration from these settings.
    pub(crate) fn reveal_config(&self) -> RevealConfig {
        RevealConfig {
            open_threshold: self.open_threshold,
            close_threshold: self.close_threshold,
            settle_duration: Duration::from_millis(self.settle_duration_ms),
        }
    }

    /// Parse settings leniently, keeping defaults for missing or bad fields.
    pub(crate) fn from_json(value: &serde_json::Value) -> Self {
        let mut settings = SettingsData::default();

        if let Some(raw) = value.get("panel_mode") {
            match PanelMode::deserialize(raw) {
                Ok(mode) => settings.panel_mode = mode,
                Err(err) => {
                    log::warn!("settings: ignoring panel_mode {raw}: {err}")
                },
            }
        }

        if let Some(threshold) = read_distance(value, "open_threshold") {
            settings.open_threshold = threshold;
        }
        if let Some(threshold) = read_distance(value, "close_threshold") {
            settings.close_threshold = threshold;
        }
        if let Some(distance) = read_distance(value, "drag_min_distance") {
            settings.drag_min_distance = distance;
        }

        if let Some(raw) = value.get("settle_duration_ms") {
            match raw.as_u64() {
                Some(millis) => settings.settle_duration_ms = millis,
                None => log::warn!(
                    "settings: ignoring settle_duration_ms {raw}: expected a non-negative integer"
                ),
            }
        }

        settings
    }

    /// Reject values that would be replaced with defaults on the next load.
    pub(crate) fn validate(&self) -> Result<(), SettingsError> {
        for (name, value) in [
            ("open_threshold", self.open_threshold),
            ("close_threshold", self.close_threshold),
            ("drag_min_distance", self.drag_min_distance),
        ] {
            if !is_valid_distance(value) {
                return Err(SettingsError::Validation {
                    message: format!(
                        "{name} must be a finite non-negative number, got {value}"
                    ),
                });
            }
        }

        Ok(())
    }
}

fn read_distance(value: &serde_json::Value, key: &str) -> Option<f32> {
    let raw = value.get(key)?;
    let parsed = raw.as_f64().map(|number| number as f32);

    match parsed {
        Some(number) if is_valid_distance(number) => Some(number),
        _ => {
            log::warn!(
                "settings: ignoring {key} {raw}: expected a finite non-negative number"
            );
            None
        },
    }
}

fn is_valid_distance(value: f32) -> bool {
    value.is_finite() && value >= 0.0
}
