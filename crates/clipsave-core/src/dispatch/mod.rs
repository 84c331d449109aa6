//! Save dispatch: hands resolved destinations to the platform download
//! manager and reports the outcome through the notifier.
//!
//! The download manager, notifier and configuration store are injected
//! collaborators, so nothing here touches the filesystem or the network.

mod collaborators;
mod dispatcher;
mod payload;

pub use collaborators::{
    ConflictAction, DownloadId, DownloadRequest, DownloadService, Notification, Notifier,
    NOTIFICATION_ICON,
};
pub use dispatcher::{SaveDispatcher, SaveOutcome, SaveReceipt};
pub use payload::{local_timestamp, text_content, text_data_uri};
