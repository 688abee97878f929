use conversion_processors::{DownloadLink, DownloadRegistryTrait, FileId};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};
use tracing::{debug, info};

struct RegisteredLink {
    link: DownloadLink,
    registered_at: Instant,
}

/// Short-lived map from issued file ids to provider download links.
pub(crate) struct LinkRegistry {
    storage: Mutex<HashMap<FileId, RegisteredLink>>,
    ttl: Duration,
}

impl LinkRegistry {
    pub(crate) fn new(ttl: Duration) -> Self {
        Self {
            storage: Mutex::new(HashMap::new()),
            ttl,
        }
    }

    pub(crate) fn ttl(&self) -> Duration {
        self.ttl
    }

    pub(crate) fn resolve(&self, file_id: &str) -> Option<DownloadLink> {
        self.resolve_at(file_id, Instant::now())
    }

    pub(crate) fn evict_expired(&self) -> usize {
        self.evict_expired_at(Instant::now())
    }

    pub(crate) fn len(&self) -> usize {
        self.lock().len()
    }

    fn resolve_at(&self, file_id: &str, now: Instant) -> Option<DownloadLink> {
        let guard = self.lock();

        guard
            .get(&FileId::from(file_id.to_string()))
            .filter(|entry| !self.is_expired(entry, now))
            .map(|entry| entry.link.clone())
    }

    fn evict_expired_at(&self, now: Instant) -> usize {
        let mut guard = self.lock();
        let before = guard.len();

        guard.retain(|file_id, entry| {
            let expired = self.is_expired(entry, now);
            if expired {
                debug!(%file_id, filename = %entry.link.filename, "Evicting expired download link");
            }
            !expired
        });

        let evicted = before - guard.len();
        if evicted > 0 {
            info!(evicted, remaining = guard.len(), "Expired download links evicted");
        }

        evicted
    }

    fn is_expired(&self, entry: &RegisteredLink, now: Instant) -> bool {
        entry.registered_at + self.ttl <= now
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<FileId, RegisteredLink>> {
        self.storage.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl DownloadRegistryTrait for LinkRegistry {
    fn register(&self, link: DownloadLink) -> FileId {
        let file_id = FileId::generate();

        self.lock().insert(
            file_id.clone(),
            RegisteredLink {
                link,
                registered_at: Instant::now(),
            },
        );

        file_id
    }
}
