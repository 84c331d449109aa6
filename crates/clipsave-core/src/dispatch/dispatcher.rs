//! The save pipeline: config snapshot, destination, download call, notification.

use serde::Serialize;

use super::collaborators::{DownloadId, DownloadRequest, DownloadService, Notification, Notifier};
use super::payload::{local_timestamp, text_content, text_data_uri};
use crate::config::ConfigStore;
use crate::error::SaveError;
use crate::path;
use crate::request::{ResolvedDestination, SaveKind, SaveRequest};

/// An accepted save: the download id and where it will land.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SaveReceipt {
    pub download_id: DownloadId,
    pub destination: ResolvedDestination,
}

pub type SaveOutcome = Result<SaveReceipt, SaveError>;

/// Issues saves against injected collaborators.
///
/// Each call reads a fresh config snapshot; no other state is shared between saves.
pub struct SaveDispatcher<C, D, N> {
    config: C,
    downloads: D,
    notifier: N,
}

impl<C, D, N> SaveDispatcher<C, D, N>
where
    C: ConfigStore,
    D: DownloadService,
    N: Notifier,
{
    pub fn new(config: C, downloads: D, notifier: N) -> Self {
        Self {
            config,
            downloads,
            notifier,
        }
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    pub fn downloads(&self) -> &D {
        &self.downloads
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Saves selected text as a timestamped snippet in `saved_text.txt`.
    pub async fn save_text(&self, text: &str) -> SaveOutcome {
        self.save(&SaveRequest::text(text)).await
    }

    /// Saves an image by handing its source URL to the download manager.
    pub async fn save_image(&self, image_url: &str) -> SaveOutcome {
        self.save(&SaveRequest::image(image_url)).await
    }

    /// Saves a linked file. Non-http(s) URLs fail before any download call.
    pub async fn save_link(&self, file_url: &str) -> SaveOutcome {
        self.save(&SaveRequest::file(file_url)).await
    }

    /// Runs one save and reports the outcome.
    pub async fn save(&self, request: &SaveRequest) -> SaveOutcome {
        let outcome = self.issue(request).await;
        self.report(request.kind, &outcome);
        outcome
    }

    async fn issue(&self, request: &SaveRequest) -> SaveOutcome {
        let config = self
            .config
            .load()
            .await
            .map_err(|e| SaveError::Config(format!("{e:#}")))?;
        let base = config.configured_directory().ok_or(SaveError::NotConfigured)?;

        let source = match request.kind {
            SaveKind::Text => {
                text_data_uri(&text_content(&request.payload, &local_timestamp()))
            }
            SaveKind::Image => request.payload.clone(),
            SaveKind::File => path::validate_link_url(&request.payload)?.to_string(),
        };
        let destination = path::resolve(base, request)?;

        let download = DownloadRequest::new(source, destination.path());
        tracing::debug!(kind = %request.kind, filename = %download.filename, "requesting download");
        let download_id = self
            .downloads
            .download(&download)
            .await
            .map_err(SaveError::DownloadFailure)?;

        tracing::info!(kind = %request.kind, id = %download_id, "download started: {}", destination);
        Ok(SaveReceipt {
            download_id,
            destination,
        })
    }

    fn report(&self, kind: SaveKind, outcome: &SaveOutcome) {
        let notification = match outcome {
            Ok(receipt) => Notification::new(
                "Saved",
                format!("{} saved to {}", kind.label(), receipt.destination),
            ),
            Err(err) if !err.is_notified() => {
                tracing::info!(kind = %kind, "{}", err);
                return;
            }
            Err(err) => {
                tracing::error!(kind = %kind, "save failed: {}", err);
                let detail = match err {
                    SaveError::DownloadFailure(msg) | SaveError::Config(msg) => msg.clone(),
                    other => other.to_string(),
                };
                Notification::new("Save failed", format!("{} save failed: {}", kind.label(), detail))
            }
        };
        self.notifier.notify(&notification);
    }
}
