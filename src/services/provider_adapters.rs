use async_trait::async_trait;
use conversion_processors::{
    MediaConverterError, MediaConverterTrait, MediaId, MediaSearchError, MediaSearchTrait,
    ProviderTrack,
};
use media_providers::{RapidApiMp3Client, YouTubeSearchClient};
use std::sync::Arc;

pub(crate) struct Mp3Converter(pub(crate) Arc<RapidApiMp3Client>);

#[async_trait]
impl MediaConverterTrait for Mp3Converter {
    fn is_ready(&self) -> bool {
        self.0.is_configured()
    }

    async fn convert(
        &self,
        media_id: &MediaId,
        quality: &str,
    ) -> Result<ProviderTrack, MediaConverterError> {
        self.0
            .convert(media_id, quality)
            .await
            .map_err(|error| MediaConverterError(Box::new(error)))
    }
}

pub(crate) struct VideoSearch(pub(crate) Arc<YouTubeSearchClient>);

#[async_trait]
impl MediaSearchTrait for VideoSearch {
    async fn resolve(&self, query: &str) -> Result<Option<MediaId>, MediaSearchError> {
        self.0
            .search_first(query)
            .await
            .map_err(|error| MediaSearchError(Box::new(error)))
    }
}
