//! Recording stand-ins for the platform download manager, notifier and options launcher.

use clipsave_core::dispatch::{DownloadId, DownloadRequest, DownloadService, Notification, Notifier};
use clipsave_core::menu::OptionsLauncher;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Default)]
pub struct RecordingDownloads {
    pub requests: Mutex<Vec<DownloadRequest>>,
    /// Platform error returned for every request when set.
    pub reject_with: Mutex<Option<String>>,
}

impl RecordingDownloads {
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn requests(&self) -> Vec<DownloadRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl DownloadService for RecordingDownloads {
    async fn download(&self, request: &DownloadRequest) -> Result<DownloadId, String> {
        let mut requests = self.requests.lock().unwrap();
        requests.push(request.clone());
        if let Some(msg) = self.reject_with.lock().unwrap().clone() {
            return Err(msg);
        }
        Ok(DownloadId(requests.len() as u64))
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub sent: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn sent(&self) -> Vec<Notification> {
        self.sent.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: &Notification) {
        self.sent.lock().unwrap().push(notification.clone());
    }
}

#[derive(Default)]
pub struct CountingLauncher(pub AtomicUsize);

impl CountingLauncher {
    pub fn opened(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

impl OptionsLauncher for CountingLauncher {
    fn open_options_page(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}
