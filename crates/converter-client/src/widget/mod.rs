//! The conversion widget as a pure state machine: [`update`] folds a [`Msg`]
//! into a [`Widget`] and hands back the [`Effect`]s the runtime has to carry
//! out.
mod effect;
mod msg;
mod state;
mod update;
mod view;

pub use effect::Effect;
pub use msg::Msg;
pub use state::{ConversionState, Notice, NoticeKind, Widget, WidgetSettings};
pub use update::update;
pub use view::{PrimaryAction, ResultRow};
