use crate::{ClientError, ConversionResult, InputMode};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// User edited the input box.
    InputChanged(String),
    ModeSelected(InputMode),
    ConvertClicked,
    /// The cosmetic validation delay is over.
    ValidationElapsed,
    ConversionFinished(Result<Vec<ConversionResult>, ClientError>),
    /// Download a single result by its row index.
    DownloadClicked(usize),
    DownloadAllClicked,
    /// "Convert another" and "try again" both land here.
    ResetClicked,
}
