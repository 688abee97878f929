use crate::{ClientConfig, ConversionResult, InputMode, RequestPlan};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConversionState {
    #[default]
    Idle,
    Validating,
    Processing,
    Ready,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetSettings {
    pub validation_delay: Duration,
    pub download_stagger: Duration,
}

impl Default for WidgetSettings {
    fn default() -> Self {
        Self {
            validation_delay: Duration::from_millis(500),
            download_stagger: Duration::from_millis(500),
        }
    }
}

impl From<&ClientConfig> for WidgetSettings {
    fn from(config: &ClientConfig) -> Self {
        Self {
            validation_delay: config.validation_delay(),
            download_stagger: config.download_stagger(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// Input was rejected before anything was sent.
    Validation,
    Success,
    PartialSuccess,
    Failure,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub description: String,
}

impl Notice {
    pub(crate) fn new(kind: NoticeKind, title: &str, description: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.to_string(),
            description: description.into(),
        }
    }
}

/// Everything one widget session owns. Nothing outlives a reset.
#[derive(Debug, Clone, PartialEq)]
pub struct Widget {
    pub(crate) input: String,
    pub(crate) mode: InputMode,
    pub(crate) state: ConversionState,
    pub(crate) results: Vec<ConversionResult>,
    pub(crate) notice: Option<Notice>,
    pub(crate) order_mismatch: bool,
    pub(crate) plan: Option<RequestPlan>,
    pub(crate) settings: WidgetSettings,
}

impl Default for Widget {
    fn default() -> Self {
        Self::new(WidgetSettings::default())
    }
}

impl Widget {
    pub fn new(settings: WidgetSettings) -> Self {
        Self {
            input: String::new(),
            mode: InputMode::default(),
            state: ConversionState::Idle,
            results: vec![],
            notice: None,
            order_mismatch: false,
            plan: None,
            settings,
        }
    }

    /// A fresh session that keeps the chosen mode.
    pub(crate) fn reset(&self) -> Self {
        Self {
            mode: self.mode,
            ..Self::new(self.settings)
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    pub fn state(&self) -> ConversionState {
        self.state
    }

    pub fn results(&self) -> &[ConversionResult] {
        &self.results
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// True when the results could not be put back in input order.
    pub fn order_mismatch(&self) -> bool {
        self.order_mismatch
    }

    pub fn settings(&self) -> WidgetSettings {
        self.settings
    }

    /// Input is editable only while idle.
    pub fn is_input_enabled(&self) -> bool {
        self.state == ConversionState::Idle
    }

    pub fn success_count(&self) -> usize {
        self.results.iter().filter(|result| result.success).count()
    }
}
