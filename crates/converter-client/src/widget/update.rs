use crate::{
    build_plan, plan_downloads, split_items, ClientError, ConversionResult, ConversionState,
    Effect, InputMode, Msg, Notice, NoticeKind, ScheduledDownload, Widget,
};
use std::time::Duration;
use tracing::{debug, warn};

const ZERO_SUCCESS_MESSAGE: &str =
    "Could not convert the provided input. Please check the URLs or search queries are valid.";

/// Pure update function: applies a message to the widget and returns the
/// effects to run.
pub fn update(mut widget: Widget, msg: Msg) -> (Widget, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(input) => {
            if widget.is_input_enabled() {
                widget.input = input;
                widget.notice = None;
            }
            vec![]
        }
        Msg::ModeSelected(mode) => {
            if widget.is_input_enabled() {
                widget.mode = mode;
            }
            vec![]
        }
        Msg::ConvertClicked => return start_conversion(widget),
        Msg::ValidationElapsed => {
            if widget.state != ConversionState::Validating {
                return (widget, vec![]);
            }
            send_request(&mut widget)
        }
        Msg::ConversionFinished(outcome) => {
            if widget.state != ConversionState::Processing {
                debug!("Ignoring conversion outcome outside of processing");
                return (widget, vec![]);
            }
            match outcome {
                Ok(results) => finish_with_results(&mut widget, results),
                Err(error) => fail_with_error(&mut widget, &error),
            }
            vec![]
        }
        Msg::DownloadClicked(index) => {
            match widget.results.get(index) {
                Some(result)
                    if widget.state == ConversionState::Ready && result.is_downloadable() =>
                {
                    let download = ScheduledDownload {
                        file_id: result.id.clone(),
                        title: result.display_title().to_string(),
                        delay: Duration::ZERO,
                    };
                    widget.notice = Some(Notice::new(
                        NoticeKind::Info,
                        "Download started",
                        format!("Downloading {}.mp3", download.title),
                    ));
                    vec![Effect::OpenDownloads(vec![download])]
                }
                _ => vec![],
            }
        }
        Msg::DownloadAllClicked => {
            if widget.state != ConversionState::Ready {
                return (widget, vec![]);
            }
            let downloads = plan_downloads(&widget.results, widget.settings.download_stagger);
            if downloads.is_empty() {
                return (widget, vec![]);
            }
            widget.notice = Some(Notice::new(
                NoticeKind::Info,
                "Downloads started",
                format!("Downloading {} file(s)", downloads.len()),
            ));
            vec![Effect::OpenDownloads(downloads)]
        }
        Msg::ResetClicked => {
            widget = widget.reset();
            vec![Effect::CancelTimers]
        }
    };

    (widget, effects)
}

fn start_conversion(mut widget: Widget) -> (Widget, Vec<Effect>) {
    if widget.state != ConversionState::Idle {
        return (widget, vec![]);
    }

    let items = split_items(widget.mode, &widget.input);
    if items.is_empty() {
        widget.notice = Some(empty_input_notice(widget.mode));
        return (widget, vec![]);
    }

    widget.results.clear();
    widget.order_mismatch = false;
    widget.notice = None;
    widget.plan = Some(build_plan(widget.mode, &items));

    if widget.settings.validation_delay.is_zero() {
        let effects = send_request(&mut widget);
        return (widget, effects);
    }

    widget.state = ConversionState::Validating;
    let delay = widget.settings.validation_delay;

    (widget, vec![Effect::ScheduleValidation(delay)])
}

fn send_request(widget: &mut Widget) -> Vec<Effect> {
    match &widget.plan {
        Some(plan) => {
            widget.state = ConversionState::Processing;
            vec![Effect::SendRequest(plan.request.clone())]
        }
        None => {
            warn!("No pending request to send");
            widget.state = ConversionState::Idle;
            vec![]
        }
    }
}

fn empty_input_notice(mode: InputMode) -> Notice {
    let description = match mode {
        InputMode::Single => "Paste a video URL or type a song name to convert to MP3",
        InputMode::Batch => "Paste one or more video URLs or search queries (one per line)",
        InputMode::Search => "Type one or more search queries (one per line)",
    };

    Notice::new(
        NoticeKind::Validation,
        "Please enter a URL or search query",
        description,
    )
}

fn finish_with_results(widget: &mut Widget, results: Vec<ConversionResult>) {
    let (results, order_mismatch, item_count) = match widget.plan.take() {
        Some(plan) => {
            let reconciled = plan.reconcile(results);
            (reconciled.results, reconciled.order_mismatch, plan.item_count())
        }
        None => {
            let count = results.len();
            (results, true, count)
        }
    };

    widget.results = results;
    widget.order_mismatch = order_mismatch;

    let success_count = widget.success_count();

    let (state, notice) = if success_count == 0 {
        (
            ConversionState::Error,
            Notice::new(NoticeKind::Failure, "Conversion failed", ZERO_SUCCESS_MESSAGE),
        )
    } else if success_count == item_count {
        let description = if success_count > 1 {
            format!("{} MP3 files are ready to download", success_count)
        } else {
            format!("{} MP3 file is ready to download", success_count)
        };
        (
            ConversionState::Ready,
            Notice::new(NoticeKind::Success, "Conversion complete!", description),
        )
    } else {
        (
            ConversionState::Ready,
            Notice::new(
                NoticeKind::PartialSuccess,
                "Conversion complete!",
                format!("{} of {} conversions succeeded", success_count, item_count),
            ),
        )
    };

    widget.state = state;
    widget.notice = Some(notice);
}

fn fail_with_error(widget: &mut Widget, error: &ClientError) {
    widget.plan = None;
    widget.results.clear();
    widget.state = ConversionState::Error;
    widget.notice = Some(Notice::new(
        NoticeKind::Failure,
        "Conversion failed",
        error.to_string(),
    ));
}
