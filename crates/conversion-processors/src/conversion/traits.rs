use crate::{DownloadLink, FileId, MediaId, ProviderTrack};
use async_trait::async_trait;
use std::fmt::Formatter;

#[derive(Debug, thiserror::Error)]
pub struct MediaConverterError(pub Box<dyn std::error::Error + Send + Sync>);

impl std::fmt::Display for MediaConverterError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[async_trait]
pub trait MediaConverterTrait {
    /// False when the converter cannot serve any request, e.g. a missing credential.
    fn is_ready(&self) -> bool;
    async fn convert(
        &self,
        media_id: &MediaId,
        quality: &str,
    ) -> Result<ProviderTrack, MediaConverterError>;
}

#[derive(Debug, thiserror::Error)]
pub struct MediaSearchError(pub Box<dyn std::error::Error + Send + Sync>);

impl std::fmt::Display for MediaSearchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[async_trait]
pub trait MediaSearchTrait {
    async fn resolve(&self, query: &str) -> Result<Option<MediaId>, MediaSearchError>;
}

pub trait DownloadRegistryTrait {
    fn register(&self, link: DownloadLink) -> FileId;
}
