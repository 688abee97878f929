use serde::Deserialize;

pub(crate) const STATUS_OK: &str = "ok";

/// Numbers arrive either as JSON numbers or as numeric strings depending on
/// the provider revision.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub(crate) enum NumberOrText {
    Number(f64),
    Text(String),
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ConversionResponse {
    pub(crate) status: Option<String>,
    pub(crate) link: Option<String>,
    pub(crate) title: Option<String>,
    pub(crate) duration: Option<NumberOrText>,
    pub(crate) filesize: Option<NumberOrText>,
    pub(crate) msg: Option<String>,
    /// Gateway-level errors (quota, auth) use `message` instead of `msg`.
    pub(crate) message: Option<String>,
}

impl ConversionResponse {
    pub(crate) fn failure_message(&self) -> Option<String> {
        self.msg.clone().or_else(|| self.message.clone())
    }
}

pub(crate) fn format_duration(value: &NumberOrText) -> Option<String> {
    match value {
        NumberOrText::Number(seconds) if seconds.is_finite() && *seconds >= 0.0 => {
            let total = seconds.round() as u64;
            let (hours, minutes, seconds) = (total / 3600, (total % 3600) / 60, total % 60);

            Some(match hours {
                0 => format!("{}:{:02}", minutes, seconds),
                _ => format!("{}:{:02}:{:02}", hours, minutes, seconds),
            })
        }
        NumberOrText::Number(_) => None,
        NumberOrText::Text(text) if text.trim().is_empty() => None,
        NumberOrText::Text(text) => Some(text.trim().to_string()),
    }
}

pub(crate) fn parse_filesize(value: &NumberOrText) -> Option<u64> {
    match value {
        NumberOrText::Number(size) if size.is_finite() && *size >= 0.0 => Some(*size as u64),
        NumberOrText::Number(_) => None,
        NumberOrText::Text(text) => text.trim().parse::<u64>().ok(),
    }
}
