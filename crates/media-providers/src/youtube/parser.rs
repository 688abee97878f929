use crate::MediaId;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{Html, Selector};

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Invalid selector: {0}")]
    SelectorError(String),
}

const INITIAL_DATA_MARKER: &str = "ytInitialData";

static VIDEO_ID_IN_DATA: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#""videoRenderer"\s*:\s*\{\s*"videoId"\s*:\s*"([a-zA-Z0-9_-]{11})""#)
        .expect("Invalid video renderer pattern")
});

static VIDEO_ID_IN_LINK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"/watch\?v=([a-zA-Z0-9_-]{11})"#).expect("Invalid watch link pattern")
});

/// Picks the first video of a search results page. Results are read from
/// the embedded `ytInitialData` blob; plain watch links are the fallback
/// for pages rendered without it.
pub(crate) fn parse_first_video_id(raw_html: &str) -> Result<Option<MediaId>, ParseError> {
    let html = Html::parse_document(raw_html);

    let script_selector = selector(r#"script"#)?;

    let from_initial_data = html
        .select(&script_selector)
        .map(|el| el.text().collect::<String>())
        .filter(|text| text.contains(INITIAL_DATA_MARKER))
        .find_map(|text| first_capture(&VIDEO_ID_IN_DATA, &text));

    if from_initial_data.is_some() {
        return Ok(from_initial_data);
    }

    let link_selector = selector(r#"a[href]"#)?;

    Ok(html
        .select(&link_selector)
        .filter_map(|el| el.value().attr("href"))
        .find_map(|href| first_capture(&VIDEO_ID_IN_LINK, href)))
}

fn first_capture(pattern: &Regex, haystack: &str) -> Option<MediaId> {
    pattern
        .captures(haystack)
        .and_then(|captures| captures.get(1))
        .map(|id| MediaId(id.as_str().to_string()))
}

fn selector(css: &'static str) -> Result<Selector, ParseError> {
    Selector::parse(css).map_err(|error| ParseError::SelectorError(format!("{:?}", error)))
}
