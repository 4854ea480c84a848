use std::path::{Path, PathBuf};

use super::errors::SettingsError;
use super::model::DashboardSettings;

/// Return the path to the settings JSON file.
fn settings_path() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        return Path::new(&home)
            .join(".config")
            .join("pharmconnect")
            .join("settings.json");
    }
    std::env::temp_dir()
        .join("pharmconnect")
        .join("settings.json")
}

/// Load and validate settings from `path`. A missing file yields defaults.
pub(crate) fn load_settings_from(
    path: &Path,
) -> Result<DashboardSettings, SettingsError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(DashboardSettings::default());
        },
        Err(err) => return Err(err.into()),
    };
    let settings: DashboardSettings = serde_json::from_str(&content)?;
    settings.validate()?;
    Ok(settings)
}

/// Load startup settings from disk, falling back to defaults on error.
pub(crate) fn load_initial_settings() -> DashboardSettings {
    let path = settings_path();
    match load_settings_from(&path) {
        Ok(settings) => settings,
        Err(err) => {
            log::warn!(
                "Failed to load settings from {}, using defaults: {err}",
                path.display()
            );
            DashboardSettings::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::load_settings_from;
    use crate::settings::{DashboardSettings, SettingsError};

    fn scratch_file(name: &str, content: &str) -> PathBuf {
        let dir = std::env::temp_dir()
            .join(format!("pharmconnect-settings-{}", std::process::id()));
        std::fs::create_dir_all(&dir).expect("should create scratch dir");
        let path = dir.join(name);
        std::fs::write(&path, content).expect("should write scratch file");
        path
    }

    #[test]
    fn given_missing_file_when_loaded_then_defaults_are_returned() {
        let path = std::env::temp_dir().join("pharmconnect-does-not-exist.json");

        let settings = load_settings_from(&path).expect("should load");

        assert_eq!(settings, DashboardSettings::default());
    }

    #[test]
    fn given_valid_file_when_loaded_then_fields_are_applied() {
        let path = scratch_file(
            "valid.json",
            r##"{ "landing_route": "/orders/new", "accent_color": "#10B981" }"##,
        );

        let settings = load_settings_from(&path).expect("should load");

        assert_eq!(settings.landing_route, "/orders/new");
        assert_eq!(settings.accent_color, "#10B981");
        assert_eq!(settings.unread_notifications, 6);
    }

    #[test]
    fn given_malformed_json_when_loaded_then_json_error_is_returned() {
        let path = scratch_file("broken.json", "{ not json");

        let result = load_settings_from(&path);

        assert!(matches!(result, Err(SettingsError::Json(_))));
    }

    #[test]
    fn given_invalid_route_when_loaded_then_validation_error_is_returned() {
        let path =
            scratch_file("invalid.json", r#"{ "landing_route": "orders" }"#);

        let result = load_settings_from(&path);

        assert!(matches!(result, Err(SettingsError::Validation { .. })));
    }
}
