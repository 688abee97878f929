use crate::MediaId;
use once_cell::sync::Lazy;
use regex::Regex;

static MEDIA_ID_PATTERNS: Lazy<[Regex; 2]> = Lazy::new(|| {
    [
        Regex::new(
            r"(?:youtube\.com/watch\?v=|youtu\.be/|youtube\.com/embed/|youtube\.com/v/|youtube\.com/shorts/)([a-zA-Z0-9_-]{11})",
        )
        .expect("Invalid media URL pattern"),
        Regex::new(r"^([a-zA-Z0-9_-]{11})$").expect("Invalid bare media id pattern"),
    ]
});

/// Extracts the video identifier from the known URL shapes
/// (`watch?v=`, `youtu.be/`, `embed/`, `v/`, `shorts/`) or from a bare
/// 11-character identifier.
pub fn extract_media_id(url: &str) -> Option<MediaId> {
    let url = url.trim();

    MEDIA_ID_PATTERNS.iter().find_map(|pattern| {
        pattern
            .captures(url)
            .and_then(|captures| captures.get(1))
            .map(|id| MediaId(id.as_str().to_string()))
    })
}
