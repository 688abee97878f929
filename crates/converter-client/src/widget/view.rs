use crate::{ConversionResult, ConversionState, InputMode, Reported, Widget};

const UNKNOWN_SIZE: &str = "Unknown size";
const UNKNOWN_DURATION: &str = "--:--";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrimaryAction {
    Convert { label: String },
    /// Validating or processing; nothing to click.
    Busy,
    DownloadOne { index: usize },
    DownloadAll { count: usize },
    ConvertAnother,
    TryAgain,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRow {
    pub title: String,
    pub original_input: String,
    pub was_search: bool,
    pub success: bool,
    /// Size and duration for successes, the failure reason otherwise.
    pub detail: String,
}

impl From<&ConversionResult> for ResultRow {
    fn from(result: &ConversionResult) -> Self {
        let detail = if result.success {
            format!(
                "{} • {}",
                format_size(&result.size),
                result
                    .duration
                    .value()
                    .map(String::as_str)
                    .unwrap_or(UNKNOWN_DURATION)
            )
        } else {
            result
                .error
                .clone()
                .unwrap_or_else(|| "Conversion failed".to_string())
        };

        Self {
            title: result.display_title().to_string(),
            original_input: result.original_input.clone(),
            was_search: result.was_search,
            success: result.success,
            detail,
        }
    }
}

fn format_size(size: &Reported<u64>) -> String {
    match size {
        Reported::Value(bytes) => format!("{:.1} MB", *bytes as f64 / (1024.0 * 1024.0)),
        Reported::Unknown => UNKNOWN_SIZE.to_string(),
    }
}

impl Widget {
    /// Number of items the current input would submit.
    pub fn item_count(&self) -> usize {
        crate::split_items(self.mode, &self.input).len()
    }

    pub fn rows(&self) -> Vec<ResultRow> {
        self.results.iter().map(ResultRow::from).collect()
    }

    pub fn primary_action(&self) -> PrimaryAction {
        match self.state {
            ConversionState::Idle => PrimaryAction::Convert {
                label: self.convert_label(),
            },
            ConversionState::Validating | ConversionState::Processing => PrimaryAction::Busy,
            ConversionState::Ready => {
                let mut downloadable = self
                    .results
                    .iter()
                    .enumerate()
                    .filter(|(_, result)| result.is_downloadable());

                match (downloadable.next(), downloadable.count()) {
                    (None, _) => PrimaryAction::ConvertAnother,
                    (Some((index, _)), 0) => PrimaryAction::DownloadOne { index },
                    (Some(_), rest) => PrimaryAction::DownloadAll { count: rest + 1 },
                }
            }
            ConversionState::Error => PrimaryAction::TryAgain,
        }
    }

    fn convert_label(&self) -> String {
        match (self.mode, self.item_count()) {
            (InputMode::Single, _) | (_, 0 | 1) => "Convert to MP3".to_string(),
            (_, count) => format!("Convert {} Items to MP3", count),
        }
    }
}
