use crate::Reported;
use serde::{Deserialize, Serialize};

/// One row of the backend's `results` array. Everything except `success`
/// is optional on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionResult {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub filename: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub size: Reported<u64>,
    #[serde(default)]
    pub duration: Reported<String>,
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub was_search: bool,
    #[serde(default)]
    pub original_input: String,
}

impl ConversionResult {
    pub fn display_title(&self) -> &str {
        self.title
            .as_deref()
            .filter(|title| !title.trim().is_empty())
            .unwrap_or("audio")
    }

    /// Successful rows with an empty id have nothing to download.
    pub fn is_downloadable(&self) -> bool {
        self.success && !self.id.is_empty()
    }
}
