//! Client side of the converter: turns raw widget input into conversion
//! requests, talks to the backend and drives the widget through its phases.
mod client;
mod config;
mod dispatcher;
mod input;
mod reported;
mod request;
mod runtime;
mod types;
mod widget;

pub use client::{ClientError, ConversionBackend, ConversionClient};
pub use config::ClientConfig;
pub use dispatcher::{plan_downloads, DownloadDispatcher, Navigator, ScheduledDownload};
pub use input::{classify, split_items, InputItem, InputMode};
pub use reported::Reported;
pub use request::{build_plan, build_request, ConversionRequest, Reconciled, RequestPlan};
pub use runtime::WidgetRuntime;
pub use types::ConversionResult;
pub use widget::{
    update, ConversionState, Effect, Msg, Notice, NoticeKind, PrimaryAction, ResultRow, Widget,
    WidgetSettings,
};
