use crate::services::LinkRegistry;
use actix_rt::task::JoinHandle;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Evicts expired download links right away and then once per `interval`,
/// until `shutdown` is cancelled.
pub(crate) fn spawn_link_sweeper(
    registry: Arc<LinkRegistry>,
    interval: Duration,
    shutdown: CancellationToken,
) -> JoinHandle<()> {
    info!(
        ttl_hours = registry.ttl().as_secs_f64() / 3600.0,
        interval_secs = interval.as_secs(),
        "Download link sweeper started"
    );

    actix_rt::spawn(async move {
        let mut ticker = tokio::time::interval(interval);

        loop {
            tokio::select! {
                _ = shutdown.cancelled() => break,
                _ = ticker.tick() => {
                    let evicted = registry.evict_expired();
                    debug!(evicted, "Download link sweep complete");
                }
            }
        }

        info!("Download link sweeper stopped");
    })
}
