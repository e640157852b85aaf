//! Error handling for tubegrab

use thiserror::Error;

/// Main error type for tubegrab
#[derive(Debug, Error)]
pub enum TubegrabError {
    #[error("yt-dlp not found. Please install yt-dlp")]
    YtDlpNotFound,

    #[error("Failed to extract video info: {0}")]
    ExtractionError(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Format not found: {0}")]
    FormatNotFound(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error(transparent)]
    Upstream(#[from] anyhow::Error),

    #[error("Operation failed: {0}")]
    OperationFailed(String),
}

impl TubegrabError {
    /// True when the caller sent something unusable (400), false for
    /// upstream or server-side failures (500).
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            TubegrabError::InvalidUrl(_) | TubegrabError::FormatNotFound(_)
        )
    }
}
