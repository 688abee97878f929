use crate::conversion::types::make_filename;
use crate::{
    ConversionResult, ConversionSummary, ConvertRequest, ConvertResponse, DownloadLink,
    DownloadRegistryTrait, MediaConverterTrait, MediaId, MediaSearchTrait, DEFAULT_QUALITY,
};
use futures_util::future::join_all;
use futures_util::FutureExt;
use media_providers::extract_media_id;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub const INVALID_URL_FORMAT: &str = "Invalid video URL format";
pub const NO_SEARCH_RESULTS: &str = "No results found for search query";
const PROCESSING_FAILED: &str = "Processing failed";

#[derive(Debug, thiserror::Error)]
pub enum ProcessingError {
    #[error("At least one URL or search query must be provided")]
    EmptyRequest,
    #[error("Conversion provider is not configured")]
    ProviderNotConfigured,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum ItemKind {
    Url,
    Search,
}

pub struct ConversionProcessor {
    converter: Arc<dyn MediaConverterTrait + Send + Sync>,
    search: Arc<dyn MediaSearchTrait + Send + Sync>,
    registry: Arc<dyn DownloadRegistryTrait + Send + Sync>,
    default_quality: String,
}

impl ConversionProcessor {
    pub fn new(
        converter: Arc<dyn MediaConverterTrait + Send + Sync>,
        search: Arc<dyn MediaSearchTrait + Send + Sync>,
        registry: Arc<dyn DownloadRegistryTrait + Send + Sync>,
    ) -> Self {
        Self {
            converter,
            search,
            registry,
            default_quality: DEFAULT_QUALITY.to_string(),
        }
    }

    pub fn with_default_quality(mut self, quality: &str) -> Self {
        self.default_quality = quality.to_string();
        self
    }

    pub fn is_ready(&self) -> bool {
        self.converter.is_ready()
    }

    /// Converts every URL and search query of the request concurrently.
    ///
    /// Results come back URLs first, then search queries, each list in
    /// submission order. A failing item is reported in its own result and
    /// never affects its siblings.
    pub async fn process(
        &self,
        request: &ConvertRequest,
    ) -> Result<ConvertResponse, ProcessingError> {
        if request.is_empty() {
            return Err(ProcessingError::EmptyRequest);
        }

        if !self.converter.is_ready() {
            return Err(ProcessingError::ProviderNotConfigured);
        }

        let quality = request
            .quality
            .as_deref()
            .filter(|quality| !quality.trim().is_empty())
            .unwrap_or(&self.default_quality);

        info!(
            urls = request.urls.len(),
            searches = request.search_queries.len(),
            quality,
            "Processing conversion request"
        );

        let items = request
            .urls
            .iter()
            .map(|url| (ItemKind::Url, url.as_str()))
            .chain(
                request
                    .search_queries
                    .iter()
                    .map(|query| (ItemKind::Search, query.as_str())),
            );

        let results = join_all(items.map(|(kind, input)| async move {
            AssertUnwindSafe(self.process_item(kind, input, quality))
                .catch_unwind()
                .await
                .unwrap_or_else(|_| {
                    warn!(input, "Item processing panicked");
                    ConversionResult::failed(input, kind == ItemKind::Search, PROCESSING_FAILED)
                })
        }))
        .await;

        let successful = results.iter().filter(|r| r.success).count();
        let summary = ConversionSummary {
            total: request.total_items(),
            successful,
            failed: results.len() - successful,
            urls_processed: request.urls.len(),
            searches_processed: request.search_queries.len(),
        };

        info!(successful, total = summary.total, "Conversion complete");

        Ok(ConvertResponse { results, summary })
    }

    async fn process_item(&self, kind: ItemKind, input: &str, quality: &str) -> ConversionResult {
        let was_search = kind == ItemKind::Search;

        let media_id = match self.resolve_media_id(kind, input).await {
            Ok(media_id) => media_id,
            Err(error) => {
                warn!(input, %error, "Unable to resolve media identifier");
                return ConversionResult::failed(input, was_search, error);
            }
        };

        debug!(input, %media_id, "Converting media");

        match self.converter.convert(&media_id, quality).await {
            Ok(track) => {
                let filename = make_filename(&track.title);
                let id = self.registry.register(DownloadLink {
                    link: track.link,
                    filename: filename.clone(),
                });

                ConversionResult {
                    id: id.to_string(),
                    filename,
                    title: track.title,
                    size: track.filesize,
                    duration: track.duration,
                    success: true,
                    error: None,
                    was_search,
                    original_input: input.to_string(),
                }
            }
            Err(error) => {
                warn!(input, %media_id, %error, "Provider failed to convert media");
                ConversionResult::failed(input, was_search, error.to_string())
            }
        }
    }

    async fn resolve_media_id(&self, kind: ItemKind, input: &str) -> Result<MediaId, String> {
        match kind {
            ItemKind::Url => extract_media_id(input).ok_or_else(|| INVALID_URL_FORMAT.to_string()),
            ItemKind::Search => match self.search.resolve(input.trim()).await {
                Ok(Some(media_id)) => Ok(media_id),
                Ok(None) => Err(NO_SEARCH_RESULTS.to_string()),
                Err(error) => Err(format!("Search failed: {}", error)),
            },
        }
    }
}
