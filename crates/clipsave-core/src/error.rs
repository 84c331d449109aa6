//! Error kinds surfaced by save operations.

use thiserror::Error;

/// Why a save did not reach the download manager (or was rejected by it).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SaveError {
    /// No base directory is stored yet; the caller should open the options page.
    #[error("no save directory configured")]
    NotConfigured,

    /// Link save with an unparseable or non-http(s) URL.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The download collaborator refused the request.
    #[error("download failed: {0}")]
    DownloadFailure(String),

    /// The configuration store could not be read.
    #[error("configuration store: {0}")]
    Config(String),
}

impl SaveError {
    /// Whether this outcome is reported to the user as a failure notification.
    pub fn is_notified(&self) -> bool {
        !matches!(self, SaveError::NotConfigured)
    }
}
