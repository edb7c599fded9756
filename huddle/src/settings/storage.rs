use std::fs;
use std::path::{Path, PathBuf};

use super::errors::SettingsError;
use super::model::SettingsData;

/// Status describing how settings were loaded from disk.
#[derive(Debug, Clone)]
pub(crate) enum SettingsLoadStatus {
    Loaded,
    Missing,
    Invalid(String),
}

/// Result of loading settings from disk.
#[derive(Debug, Clone)]
pub(crate) struct SettingsLoad {
    settings: SettingsData,
    status: SettingsLoadStatus,
}

impl SettingsLoad {
    pub(crate) fn new(
        settings: SettingsData,
        status: SettingsLoadStatus,
    ) -> Self {
        Self { settings, status }
    }

    /// Consume the value and return both payload and status.
    pub(crate) fn into_parts(self) -> (SettingsData, SettingsLoadStatus) {
        (self.settings, self.status)
    }
}

pub(crate) fn load_settings() -> Result<SettingsLoad, SettingsError> {
    load_settings_from_path(&settings_path())
}

pub(crate) fn save_settings(
    settings: &SettingsData,
) -> Result<(), SettingsError> {
    save_settings_to_path(&settings_path(), settings)
}

/// Location of the settings file, for log messages.
pub(crate) fn settings_path() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        return Path::new(&home)
            .join(".config")
            .join("huddle")
            .join("settings.json");
    }

    std::env::temp_dir().join("huddle").join("settings.json")
}

fn load_settings_from_path(path: &Path) -> Result<SettingsLoad, SettingsError> {
    let data = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(SettingsLoad::new(
                SettingsData::default(),
                SettingsLoadStatus::Missing,
            ));
        },
        Err(err) => return Err(err.into()),
    };

    let parsed = match serde_json::from_str::<serde_json::Value>(&data) {
        Ok(value) if value.is_object() => value,
        Ok(_) => {
            return Ok(SettingsLoad::new(
                SettingsData::default(),
                SettingsLoadStatus::Invalid(String::from(
                    "top-level value is not an object",
                )),
            ));
        },
        Err(err) => {
            return Ok(SettingsLoad::new(
                SettingsData::default(),
                SettingsLoadStatus::Invalid(format!("{err}")),
            ));
        },
    };

    Ok(SettingsLoad::new(
        SettingsData::from_json(&parsed),
        SettingsLoadStatus::Loaded,
    ))
}

fn save_settings_to_path(
    path: &Path,
    settings: &SettingsData,
) -> Result<(), SettingsError> {
    settings.validate()?;

    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }

    let payload = serde_json::to_string_pretty(settings)?;
    write_atomic(path, payload.as_bytes())?;

    Ok(())
}

fn write_atomic(path: &Path, payload: &[u8]) -> Result<(), std::io::Error> {
    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, payload)?;
    fs::rename(tmp_path, path)?;
    Ok(())
}
