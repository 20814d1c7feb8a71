use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DuckfetchError>;

#[derive(Error, Debug)]
pub enum DuckfetchError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown platform: '{name}'")]
    UnknownPlatform { name: String },

    #[error("Invalid release tag: '{tag}'")]
    InvalidRelease { tag: String },

    #[error("Cannot create destination directory: {path}")]
    Destination { path: PathBuf },

    #[error("Download failed: {url}")]
    Download { url: String },

    #[error("Not a valid zip archive: {path}")]
    ArchiveFormat { path: PathBuf },

    #[error("Archive has no entry named '{name}'")]
    MissingEntry { name: String },

    #[error("GitHub API error: {message}")]
    GitHub { message: String },
}

impl DuckfetchError {
    pub fn github_error<S: Into<String>>(message: S) -> Self {
        DuckfetchError::GitHub {
            message: message.into(),
        }
    }
}
