use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static URL_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^https?://").expect("Invalid URL prefix pattern"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    #[default]
    Single,
    Batch,
    Search,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputItem {
    Url(String),
    SearchQuery(String),
}

impl InputItem {
    pub fn text(&self) -> &str {
        match self {
            InputItem::Url(text) | InputItem::SearchQuery(text) => text,
        }
    }
}

/// A line is a URL iff, once trimmed, it starts with `http://` or
/// `https://` in any letter case. Nothing else about the URL is checked.
pub fn classify(text: &str) -> InputItem {
    let text = text.trim();

    if URL_PREFIX.is_match(text) {
        InputItem::Url(text.to_string())
    } else {
        InputItem::SearchQuery(text.to_string())
    }
}

/// Splits raw widget input into trimmed, non-empty items. Single mode
/// treats the whole input as one item.
pub fn split_items(mode: InputMode, raw_input: &str) -> Vec<String> {
    match mode {
        InputMode::Single => {
            let item = raw_input.trim();
            if item.is_empty() {
                vec![]
            } else {
                vec![item.to_string()]
            }
        }
        InputMode::Batch | InputMode::Search => raw_input
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(ToOwned::to_owned)
            .collect(),
    }
}
