use crate::{ConversionBackend, ConversionResult};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Opens a download URL. In a browser this is a new tab or window.
pub trait Navigator {
    fn open(&self, url: &str);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledDownload {
    pub file_id: String,
    pub title: String,
    /// Offset from the moment the batch is dispatched.
    pub delay: Duration,
}

/// One download per downloadable result, in result order, each `stagger`
/// later than the previous one.
pub fn plan_downloads(results: &[ConversionResult], stagger: Duration) -> Vec<ScheduledDownload> {
    results
        .iter()
        .filter(|result| result.is_downloadable())
        .enumerate()
        .map(|(index, result)| ScheduledDownload {
            file_id: result.id.clone(),
            title: result.display_title().to_string(),
            delay: stagger * index as u32,
        })
        .collect()
}

pub struct DownloadDispatcher {
    navigator: Arc<dyn Navigator + Send + Sync>,
    backend: Arc<dyn ConversionBackend + Send + Sync>,
    cancellation: CancellationToken,
}

impl DownloadDispatcher {
    pub fn new(
        navigator: Arc<dyn Navigator + Send + Sync>,
        backend: Arc<dyn ConversionBackend + Send + Sync>,
    ) -> Self {
        Self {
            navigator,
            backend,
            cancellation: CancellationToken::new(),
        }
    }

    /// A lone download opens right away. Several are opened from one
    /// background task at their scheduled offsets; the returned handle
    /// finishes once the last one opened or the dispatcher was cancelled.
    pub fn dispatch(&self, downloads: Vec<ScheduledDownload>) -> Option<JoinHandle<()>> {
        match downloads.as_slice() {
            [] => None,
            [download] => {
                self.open(download);
                None
            }
            _ => {
                info!(count = downloads.len(), "Starting staggered downloads");

                let navigator = self.navigator.clone();
                let backend = self.backend.clone();
                let cancellation = self.cancellation.child_token();
                let started_at = Instant::now();

                Some(tokio::spawn(async move {
                    for download in downloads {
                        tokio::select! {
                            _ = cancellation.cancelled() => {
                                debug!("Pending downloads cancelled");
                                return;
                            }
                            _ = sleep_until(started_at + download.delay) => {
                                navigator.open(&backend.download_url(&download.file_id));
                            }
                        }
                    }
                }))
            }
        }
    }

    fn open(&self, download: &ScheduledDownload) {
        info!(file_id = %download.file_id, "Downloading {}.mp3", download.title);
        self.navigator
            .open(&self.backend.download_url(&download.file_id));
    }

    /// Stops every pending staggered download. Later dispatches still run.
    pub fn cancel(&mut self) {
        self.cancellation.cancel();
        self.cancellation = CancellationToken::new();
    }
}

impl Drop for DownloadDispatcher {
    fn drop(&mut self) {
        self.cancellation.cancel();
    }
}
