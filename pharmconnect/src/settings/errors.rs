use thiserror::Error;

/// Reasons the settings file could not be used at startup.
#[derive(Debug, Error)]
pub(crate) enum SettingsError {
    #[error("cannot read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("settings file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// A field parsed but holds an unusable value.
    #[error("invalid setting: {message}")]
    Validation { message: String },
}
