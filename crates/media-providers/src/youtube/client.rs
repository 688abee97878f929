use crate::youtube::parser::{parse_first_video_id, ParseError};
use crate::MediaId;
use reqwest::Client;
use serde::Serialize;
use tracing::debug;

pub const DEFAULT_SEARCH_ENDPOINT: &str = "https://www.youtube.com";

#[derive(Debug, thiserror::Error)]
pub enum SearchProviderError {
    #[error(transparent)]
    ReqwestError(#[from] reqwest::Error),
    #[error(transparent)]
    ParseError(#[from] ParseError),
}

/// Resolves free-text queries to the first matching video.
pub struct YouTubeSearchClient {
    client: Client,
    endpoint: String,
}

impl YouTubeSearchClient {
    pub fn create(endpoint: &str) -> Result<Self, SearchProviderError> {
        let client = Client::builder().build()?;

        Ok(Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
        })
    }

    pub async fn search_first(&self, query_str: &str) -> Result<Option<MediaId>, SearchProviderError> {
        #[derive(Serialize)]
        struct Query<'a> {
            search_query: &'a str,
        }

        let response = self
            .client
            .get(format!("{}/results", self.endpoint))
            .header("Accept-Language", "en-US,en;q=0.8")
            .query(&Query {
                search_query: query_str,
            })
            .send()
            .await?
            .error_for_status()?;

        let raw_html = response.text().await?;
        let media_id = parse_first_video_id(&raw_html)?;

        debug!(query = query_str, ?media_id, "Search query resolved");

        Ok(media_id)
    }
}
