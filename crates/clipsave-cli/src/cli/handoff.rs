//! Terminal-side collaborators.
//!
//! Downloads are handed off as one JSON object per line (browser download
//! API field names) for the platform download manager to pick up; nothing is
//! fetched or written here.

use async_trait::async_trait;
use clipsave_core::dispatch::{DownloadId, DownloadRequest, DownloadService, Notification, Notifier};
use clipsave_core::menu::OptionsLauncher;
use std::io::Write;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

pub struct JsonLinesDownloads<W> {
    out: Mutex<W>,
    next_id: AtomicU64,
}

impl<W: Write + Send> JsonLinesDownloads<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
            next_id: AtomicU64::new(1),
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl<W: Write + Send> DownloadService for JsonLinesDownloads<W> {
    async fn download(&self, request: &DownloadRequest) -> Result<DownloadId, String> {
        let line = serde_json::to_string(request).map_err(|e| e.to_string())?;
        let mut out = self.out.lock().map_err(|_| "hand-off writer poisoned".to_string())?;
        writeln!(out, "{line}")
            .and_then(|_| out.flush())
            .map_err(|e| e.to_string())?;
        Ok(DownloadId(self.next_id.fetch_add(1, Ordering::Relaxed)))
    }
}

/// Prints notifications to stderr and mirrors them into the log.
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn notify(&self, n: &Notification) {
        tracing::info!(title = %n.title, icon = %n.icon_url, "{}", n.message);
        eprintln!("{}: {}", n.title, n.message);
    }
}

/// There is no options page in a terminal; point at `set-dir` instead.
pub struct SetDirHint;

impl OptionsLauncher for SetDirHint {
    fn open_options_page(&self) {
        eprintln!("No save directory configured. Run `clipsave set-dir <DIR>` first.");
    }
}
