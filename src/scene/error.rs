use std::path::PathBuf;

use thiserror::Error;

/// Reasons a scene file cannot be used. All of them abort startup.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("failed to read scene file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse scene file {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid scene: {0}")]
    Invalid(String),
}

impl SceneError {
    pub(crate) fn invalid_object(name: &str, reason: impl std::fmt::Display) -> Self {
        SceneError::Invalid(format!("object '{name}': {reason}"))
    }
}
