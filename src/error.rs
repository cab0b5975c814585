use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse JSON from {origin}: {source}")]
    Json {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Request to {url} failed: {message}")]
    Http { url: String, message: String },

    #[error("Server error {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("Invalid URL {0:?}: {1}")]
    InvalidUrl(String, url::ParseError),

    #[error("File not found: {0:?}")]
    NotFound(PathBuf),

    #[error("No weekly digest post found")]
    NoPost,
}

impl TrackerError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TrackerError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn json(origin: impl ToString, source: serde_json::Error) -> Self {
        TrackerError::Json {
            origin: origin.to_string(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, TrackerError>;
