use crate::{Mode, Notice, Phase};

/// What the result panel shows: the output verbatim, or the fixed error text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultView {
    pub mode: Mode,
    pub text: String,
    pub is_error: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub mode: Mode,
    pub mode_label: String,
    pub input: String,
    pub input_words: usize,
    pub phase: Phase,
    pub submit_enabled: bool,
    pub result: Option<ResultView>,
    pub notes: String,
    pub notice: Option<Notice>,
    /// Changes whenever a notice is raised, even if its text repeats.
    pub notice_seq: u64,
}
