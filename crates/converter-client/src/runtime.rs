use crate::{
    update, ConversionBackend, ConversionState, DownloadDispatcher, Effect, Msg, Navigator,
    Widget, WidgetSettings,
};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Owns a [`Widget`] and runs its effects: the validation timer, the
/// conversion request and staggered downloads. Dropping the runtime cancels
/// everything still pending.
pub struct WidgetRuntime {
    widget: Widget,
    backend: Arc<dyn ConversionBackend + Send + Sync>,
    dispatcher: DownloadDispatcher,
    sender: mpsc::UnboundedSender<Msg>,
    receiver: mpsc::UnboundedReceiver<Msg>,
    cancellation: CancellationToken,
}

impl WidgetRuntime {
    pub fn new(
        settings: WidgetSettings,
        backend: Arc<dyn ConversionBackend + Send + Sync>,
        navigator: Arc<dyn Navigator + Send + Sync>,
    ) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();

        Self {
            widget: Widget::new(settings),
            dispatcher: DownloadDispatcher::new(navigator, backend.clone()),
            backend,
            sender,
            receiver,
            cancellation: CancellationToken::new(),
        }
    }

    pub fn widget(&self) -> &Widget {
        &self.widget
    }

    /// Applies a message and starts whatever it asks for.
    pub fn send(&mut self, msg: Msg) {
        let widget = std::mem::take(&mut self.widget);
        let (widget, effects) = update(widget, msg);
        self.widget = widget;

        for effect in effects {
            self.run_effect(effect);
        }
    }

    /// Waits for the next timer or request outcome and applies it.
    pub async fn next_event(&mut self) {
        if let Some(msg) = self.receiver.recv().await {
            self.send(msg);
        }
    }

    /// Applies messages that already arrived without waiting for more.
    pub fn process_pending(&mut self) -> usize {
        let mut processed = 0;
        while let Ok(msg) = self.receiver.try_recv() {
            self.send(msg);
            processed += 1;
        }
        processed
    }

    /// Drives the widget until it leaves the validating and processing
    /// phases.
    pub async fn settle(&mut self) -> ConversionState {
        while matches!(
            self.widget.state(),
            ConversionState::Validating | ConversionState::Processing
        ) {
            self.next_event().await;
        }
        self.widget.state()
    }

    fn run_effect(&mut self, effect: Effect) {
        match effect {
            Effect::ScheduleValidation(delay) => {
                let sender = self.sender.clone();
                let cancellation = self.cancellation.child_token();

                tokio::spawn(async move {
                    tokio::select! {
                        _ = cancellation.cancelled() => {}
                        _ = tokio::time::sleep(delay) => {
                            let _ = sender.send(Msg::ValidationElapsed);
                        }
                    }
                });
            }
            Effect::SendRequest(request) => {
                let sender = self.sender.clone();
                let backend = self.backend.clone();
                let cancellation = self.cancellation.child_token();

                info!(items = request.item_count(), api_url = backend.api_url(), "Converting");

                tokio::spawn(async move {
                    tokio::select! {
                        _ = cancellation.cancelled() => {
                            debug!("Conversion request abandoned");
                        }
                        outcome = backend.convert(&request) => {
                            if let Err(error) = &outcome {
                                warn!(%error, "Conversion request failed");
                            }
                            let _ = sender.send(Msg::ConversionFinished(outcome));
                        }
                    }
                });
            }
            Effect::OpenDownloads(downloads) => {
                let _ = self.dispatcher.dispatch(downloads);
            }
            Effect::CancelTimers => {
                self.cancellation.cancel();
                self.cancellation = CancellationToken::new();
                self.dispatcher.cancel();
                while self.receiver.try_recv().is_ok() {}
            }
        }
    }
}

impl Drop for WidgetRuntime {
    fn drop(&mut self) {
        self.cancellation.cancel();
    }
}
