use crate::{ConversionRequest, ScheduledDownload};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Deliver [`crate::Msg::ValidationElapsed`] after the delay.
    ScheduleValidation(Duration),
    /// Send the request and deliver [`crate::Msg::ConversionFinished`].
    SendRequest(ConversionRequest),
    OpenDownloads(Vec<ScheduledDownload>),
    /// Drop every pending timer, in-flight request and staggered download.
    CancelTimers,
}
