mod errors;
mod model;
mod storage;

pub(crate) use errors::SettingsError;
pub(crate) use model::{PanelMode, SettingsData};
use storage::{SettingsLoadStatus, load_settings, save_settings, settings_path};

/// Load startup settings, falling back to defaults on any failure.
///
/// A missing file is seeded with the defaults so there is something to edit.
pub(crate) fn load_or_default() -> SettingsData {
    match load_settings() {
        Ok(load) => {
            let (data, status) = load.into_parts();
            match status {
                SettingsLoadStatus::Loaded => {
                    log::info!(
                        "settings loaded from {}",
                        settings_path().display()
                    );
                },
                SettingsLoadStatus::Missing => seed_defaults(&data),
                SettingsLoadStatus::Invalid(message) => {
                    log::warn!("settings file invalid: {message}");
                },
            }
            data
        },
        Err(err) => {
            log::warn!("settings read failed: {err}");
            SettingsData::default()
        },
    }
}

fn seed_defaults(data: &SettingsData) {
    match save_settings(data) {
        Ok(()) => log::info!(
            "settings file created at {}",
            settings_path().display()
        ),
        Err(err) => log::warn!("settings write failed: {}", describe(&err)),
    }
}

fn describe(err: &SettingsError) -> String {
    match err {
        SettingsError::Io(source) => format!("{err}: {source}"),
        SettingsError::Json(source) => format!("{err}: {source}"),
        SettingsError::Validation { .. } => err.to_string(),
    }
}
