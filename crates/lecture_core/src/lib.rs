//! Lecture simplifier core: pure state machine and view-model helpers.
mod effect;
mod format;
mod mode;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::{Effect, ExportTarget, Submission};
pub use format::{format_for_display, word_count};
pub use mode::{Mode, ParseModeError};
pub use msg::Msg;
pub use state::{AppState, Notice, Outcome, Phase, RequestId, TRANSPORT_ERROR_MESSAGE};
pub use update::update;
pub use view_model::{AppViewModel, ResultView};
