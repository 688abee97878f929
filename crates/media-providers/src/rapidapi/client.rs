use crate::rapidapi::types::{format_duration, parse_filesize, ConversionResponse, STATUS_OK};
use crate::{MediaId, ProviderTrack};
use reqwest::Client;
use serde::Serialize;
use tracing::debug;

pub const DEFAULT_RAPIDAPI_HOST: &str = "youtube-mp36.p.rapidapi.com";

const UNKNOWN_TITLE: &str = "Unknown Title";
const CONVERSION_FAILED: &str = "Conversion failed";

#[derive(Debug, thiserror::Error)]
pub enum MediaProviderError {
    #[error(transparent)]
    ReqwestError(#[from] reqwest::Error),
    #[error("Unexpected provider response: {0}")]
    MalformedResponse(#[from] serde_json::Error),
    #[error("{0}")]
    Rejected(String),
}

/// Client of the RapidAPI "YouTube MP3" extraction service.
pub struct RapidApiMp3Client {
    client: Client,
    endpoint: String,
    api_key: String,
    api_host: String,
}

impl RapidApiMp3Client {
    pub fn create(
        endpoint: &str,
        api_key: &str,
        api_host: &str,
    ) -> Result<Self, MediaProviderError> {
        let client = Client::builder().build()?;

        Ok(Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            api_host: api_host.to_string(),
        })
    }

    pub fn is_configured(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    pub async fn convert(
        &self,
        media_id: &MediaId,
        quality: &str,
    ) -> Result<ProviderTrack, MediaProviderError> {
        #[derive(Serialize)]
        struct Query<'a> {
            id: &'a str,
            quality: &'a str,
        }

        let response = self
            .client
            .get(format!("{}/dl", self.endpoint))
            .header("X-RapidAPI-Key", &self.api_key)
            .header("X-RapidAPI-Host", &self.api_host)
            .query(&Query {
                id: media_id,
                quality,
            })
            .send()
            .await?;

        let status = response.status();
        let raw_body = response.text().await?;

        debug!(%media_id, %status, "Received provider response");

        let data = match serde_json::from_str::<ConversionResponse>(&raw_body) {
            Ok(data) => data,
            Err(_) if !status.is_success() => {
                return Err(MediaProviderError::Rejected(format!(
                    "Provider responded with HTTP {}",
                    status.as_u16()
                )));
            }
            Err(error) => return Err(error.into()),
        };

        let link = match (data.status.as_deref(), &data.link) {
            (Some(STATUS_OK), Some(link)) if status.is_success() && !link.is_empty() => {
                link.clone()
            }
            _ => {
                let message = data
                    .failure_message()
                    .unwrap_or_else(|| CONVERSION_FAILED.to_string());
                return Err(MediaProviderError::Rejected(message));
            }
        };

        Ok(ProviderTrack {
            title: data
                .title
                .filter(|title| !title.trim().is_empty())
                .unwrap_or_else(|| UNKNOWN_TITLE.to_string()),
            link,
            duration: data.duration.as_ref().and_then(format_duration),
            filesize: data.filesize.as_ref().and_then(parse_filesize),
        })
    }
}
