use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

pub const DEFAULT_QUALITY: &str = "320";

/// Body of `POST /api/convert`. The legacy shape `{urls, quality}` is
/// accepted as well, with `searchQueries` defaulting to empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertRequest {
    #[serde(default)]
    pub urls: Vec<String>,
    #[serde(default)]
    pub search_queries: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality: Option<String>,
}

impl ConvertRequest {
    pub fn is_empty(&self) -> bool {
        self.urls.is_empty() && self.search_queries.is_empty()
    }

    pub fn total_items(&self) -> usize {
        self.urls.len() + self.search_queries.len()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionResult {
    pub id: String,
    pub filename: String,
    pub title: String,
    pub size: Option<u64>,
    pub duration: Option<String>,
    pub success: bool,
    pub error: Option<String>,
    pub was_search: bool,
    pub original_input: String,
}

impl ConversionResult {
    pub(crate) fn failed(original_input: &str, was_search: bool, error: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            filename: String::new(),
            title: original_input.to_string(),
            size: None,
            duration: None,
            success: false,
            error: Some(error.into()),
            was_search,
            original_input: original_input.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionSummary {
    pub total: usize,
    pub successful: usize,
    pub failed: usize,
    pub urls_processed: usize,
    pub searches_processed: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConvertResponse {
    pub results: Vec<ConversionResult>,
    pub summary: ConversionSummary,
}

/// What the download endpoint needs to serve a converted file.
#[derive(Debug, Clone, PartialEq)]
pub struct DownloadLink {
    pub link: String,
    pub filename: String,
}

static FORBIDDEN_FILENAME_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[\\/:*?"<>|\x00-\x1f]"#).expect("Invalid filename pattern"));

pub(crate) fn make_filename(title: &str) -> String {
    let stem = FORBIDDEN_FILENAME_CHARS.replace_all(title, "_");
    let stem = stem.trim().trim_matches('.');

    if stem.is_empty() {
        return "audio.mp3".to_string();
    }

    format!("{}.mp3", stem)
}
