use std::path::PathBuf;

/// Result type for scene operations
pub type SceneResult<T> = Result<T, SceneError>;

/// Errors surfaced by the scene engine's configuration and clock boundaries.
///
/// Per-tick animation math has no failure modes; everything here happens at
/// load time or at the wall clock seam.
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    #[error("Failed to read settings from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse settings: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to parse render config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid settings field {field}: {reason}")]
    InvalidSettings { field: String, reason: String },

    #[error("Wall clock unavailable: {0}")]
    ClockUnavailable(String),
}

impl SceneError {
    pub(crate) fn invalid(field: &str, reason: impl Into<String>) -> Self {
        SceneError::InvalidSettings {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}
