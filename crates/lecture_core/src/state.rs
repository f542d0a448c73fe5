use crate::format::word_count;
use crate::view_model::{AppViewModel, ResultView};
use crate::{Mode, Submission};

pub type RequestId = u64;

/// Shown in place of a result whenever the processing request fails.
pub const TRANSPORT_ERROR_MESSAGE: &str = "Error: Could not process text. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
}

/// Transient message produced by the last user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Info(String),
    Error(String),
}

/// How the most recent submission ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success { mode: Mode, output: String },
    Failure { mode: Mode },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct InFlight {
    request_id: RequestId,
    mode: Mode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    input: String,
    mode: Mode,
    phase: Phase,
    in_flight: Option<InFlight>,
    next_request_id: RequestId,
    outcome: Option<Outcome>,
    notes: String,
    notice: Option<Notice>,
    notice_seq: u64,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            input: String::new(),
            mode: Mode::default(),
            phase: Phase::Idle,
            in_flight: None,
            next_request_id: 1,
            outcome: None,
            notes: String::new(),
            notice: None,
            notice_seq: 0,
            dirty: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mode(mode: Mode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn view(&self) -> AppViewModel {
        let result = self.outcome.as_ref().map(|outcome| match outcome {
            Outcome::Success { mode, output } => ResultView {
                mode: *mode,
                text: output.clone(),
                is_error: false,
            },
            Outcome::Failure { mode } => ResultView {
                mode: *mode,
                text: TRANSPORT_ERROR_MESSAGE.to_string(),
                is_error: true,
            },
        });
        AppViewModel {
            mode: self.mode,
            mode_label: self.mode.label(),
            input: self.input.clone(),
            input_words: word_count(&self.input),
            phase: self.phase,
            submit_enabled: self.phase == Phase::Idle,
            result,
            notes: self.notes.clone(),
            notice: self.notice.clone(),
            notice_seq: self.notice_seq,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    /// The latest successful output, if any. Failures never count as a result.
    pub fn result(&self) -> Option<&str> {
        match &self.outcome {
            Some(Outcome::Success { output, .. }) => Some(output),
            _ => None,
        }
    }

    pub fn in_flight(&self) -> Option<RequestId> {
        self.in_flight.map(|f| f.request_id)
    }

    /// Returns whether the state changed since the last call, and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn set_input(&mut self, input: String) {
        self.input = input;
        self.mark_dirty();
    }

    pub(crate) fn append_input(&mut self, line: &str) {
        if !self.input.is_empty() {
            self.input.push('\n');
        }
        self.input.push_str(line);
        self.mark_dirty();
    }

    pub(crate) fn set_mode(&mut self, mode: Mode) {
        if self.mode != mode {
            self.mode = mode;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_notes(&mut self, notes: String) {
        self.notes = notes;
        self.mark_dirty();
    }

    pub(crate) fn append_note(&mut self, line: &str) {
        if !self.notes.is_empty() {
            self.notes.push('\n');
        }
        self.notes.push_str(line);
        self.mark_dirty();
    }

    /// Every notice bumps the sequence, so a repeat of the same text still
    /// counts as new.
    pub(crate) fn set_notice(&mut self, notice: Notice) {
        self.notice = Some(notice);
        self.notice_seq += 1;
        self.mark_dirty();
    }

    /// Moves Idle -> Submitting and returns the submission to send.
    pub(crate) fn begin_submission(&mut self) -> Submission {
        let request_id = self.next_request_id;
        self.next_request_id += 1;
        self.phase = Phase::Submitting;
        self.in_flight = Some(InFlight {
            request_id,
            mode: self.mode,
        });
        self.outcome = None;
        self.notice = None;
        self.mark_dirty();
        Submission {
            request_id,
            text: self.input.clone(),
            mode: self.mode,
        }
    }

    /// Moves Submitting -> Idle; a `None` output records a failure. Returns
    /// false when `request_id` is not the request currently in flight.
    pub(crate) fn finish_submission(
        &mut self,
        request_id: RequestId,
        output: Option<String>,
    ) -> bool {
        let Some(in_flight) = self.in_flight else {
            return false;
        };
        if in_flight.request_id != request_id {
            return false;
        }
        self.outcome = Some(match output {
            Some(output) => Outcome::Success {
                mode: in_flight.mode,
                output,
            },
            None => Outcome::Failure {
                mode: in_flight.mode,
            },
        });
        self.phase = Phase::Idle;
        self.in_flight = None;
        self.mark_dirty();
        true
    }

    pub(crate) fn clear(&mut self) {
        self.input.clear();
        self.outcome = None;
        self.notice = None;
        self.mark_dirty();
    }
}
