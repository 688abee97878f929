use crate::{ConversionRequest, ConversionResult};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, error, info};

const GENERIC_FAILURE: &str = "An unexpected error occurred";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    /// The backend could not be reached at all (DNS, refused connection,
    /// timeout).
    #[error("Could not reach the conversion backend at {api_url}. Is the backend running?")]
    BackendUnreachable { api_url: String, reason: String },
    #[error("{0}")]
    ConversionRequestFailed(String),
    #[error("The conversion backend returned an unexpected response: {0}")]
    InvalidResponse(String),
}

#[async_trait]
pub trait ConversionBackend {
    async fn convert(
        &self,
        request: &ConversionRequest,
    ) -> Result<Vec<ConversionResult>, ClientError>;
    fn download_url(&self, file_id: &str) -> String;
    fn api_url(&self) -> &str;
}

pub struct ConversionClient {
    client: Client,
    api_url: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<String>,
    error: Option<String>,
}

#[derive(Deserialize)]
struct SuccessBody {
    results: Option<Vec<ConversionResult>>,
}

#[derive(Deserialize)]
struct HealthBody {
    status: Option<String>,
}

impl ConversionClient {
    pub fn create(api_url: &str) -> Result<Self, ClientError> {
        let client = Client::builder()
            .build()
            .map_err(|error| ClientError::BackendUnreachable {
                api_url: api_url.to_string(),
                reason: error.to_string(),
            })?;

        Ok(Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
        })
    }

    pub async fn check_health(&self) -> bool {
        let response = match self
            .client
            .get(format!("{}/api/health", self.api_url))
            .send()
            .await
        {
            Ok(response) => response,
            Err(error) => {
                error!(%error, "API health check failed");
                return false;
            }
        };

        match response.json::<HealthBody>().await {
            Ok(body) => body.status.as_deref() == Some("healthy"),
            Err(error) => {
                error!(%error, "API health check returned an unreadable body");
                false
            }
        }
    }

    fn unreachable(&self, error: reqwest::Error) -> ClientError {
        ClientError::BackendUnreachable {
            api_url: self.api_url.clone(),
            reason: error.to_string(),
        }
    }
}

#[async_trait]
impl ConversionBackend for ConversionClient {
    async fn convert(
        &self,
        request: &ConversionRequest,
    ) -> Result<Vec<ConversionResult>, ClientError> {
        info!(
            urls = request.urls.len(),
            searches = request.search_queries.len(),
            "Sending conversion request"
        );

        let response = self
            .client
            .post(format!("{}/api/convert", self.api_url))
            .json(request)
            .send()
            .await
            .map_err(|error| self.unreachable(error))?;

        let status = response.status();
        let raw_body = response.text().await.map_err(|error| self.unreachable(error))?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&raw_body)
                .ok()
                .and_then(|body| body.detail.or(body.error))
                .filter(|message| !message.trim().is_empty())
                .unwrap_or_else(|| GENERIC_FAILURE.to_string());

            debug!(%status, %message, "Conversion request rejected");

            return Err(ClientError::ConversionRequestFailed(message));
        }

        let body = serde_json::from_str::<SuccessBody>(&raw_body)
            .map_err(|error| ClientError::InvalidResponse(error.to_string()))?;

        Ok(body.results.unwrap_or_default())
    }

    fn download_url(&self, file_id: &str) -> String {
        format!("{}/api/download/{}", self.api_url, file_id)
    }

    fn api_url(&self) -> &str {
        &self.api_url
    }
}
