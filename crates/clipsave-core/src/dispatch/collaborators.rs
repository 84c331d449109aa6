//! Boundary traits for the platform download manager and notification area.

use async_trait::async_trait;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// Icon shown with every notification.
pub const NOTIFICATION_ICON: &str = "icons/icon48.png";

/// What the download manager does when the destination already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConflictAction {
    /// Append a counter suffix instead of overwriting.
    #[default]
    Uniquify,
    Overwrite,
    Prompt,
}

/// Handle returned by the download manager for an accepted request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct DownloadId(pub u64);

impl fmt::Display for DownloadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One request to the download manager. Field names follow the browser download API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadRequest {
    /// Remote URL or `data:` URI.
    pub url: String,
    /// Destination relative to the download root.
    pub filename: String,
    pub conflict_action: ConflictAction,
    /// Whether to show a "save as" dialog.
    pub save_as: bool,
}

impl DownloadRequest {
    /// Non-interactive request with the uniquify conflict policy.
    pub fn new(url: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            filename: filename.into(),
            conflict_action: ConflictAction::Uniquify,
            save_as: false,
        }
    }
}

/// Platform download manager.
///
/// `Err` carries the platform's human-readable message.
#[async_trait]
pub trait DownloadService: Send + Sync {
    async fn download(&self, request: &DownloadRequest) -> Result<DownloadId, String>;
}

#[async_trait]
impl<T: DownloadService + ?Sized> DownloadService for Arc<T> {
    async fn download(&self, request: &DownloadRequest) -> Result<DownloadId, String> {
        (**self).download(request).await
    }
}

/// User-visible alert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub icon_url: String,
}

impl Notification {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            icon_url: NOTIFICATION_ICON.to_string(),
        }
    }
}

/// Fire-and-forget notification sink.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: &Notification);
}

impl<T: Notifier + ?Sized> Notifier for Arc<T> {
    fn notify(&self, notification: &Notification) {
        (**self).notify(notification)
    }
}
