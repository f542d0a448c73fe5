use std::path::PathBuf;

use crate::{Mode, RequestId};

/// One request handed to the processing service. Immutable once emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub request_id: RequestId,
    pub text: String,
    pub mode: Mode,
}

/// What an export writes: the latest output (tagged with its mode) or the notes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportTarget {
    Output { mode: Mode },
    Notes,
}

impl ExportTarget {
    pub fn label(self) -> &'static str {
        match self {
            ExportTarget::Output { .. } => "output",
            ExportTarget::Notes => "notes",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Submit(Submission),
    ReadFile {
        path: PathBuf,
    },
    CopyToClipboard {
        content: String,
    },
    ExportText {
        target: ExportTarget,
        content: String,
        /// User-chosen name; the runner picks a default when absent.
        filename: Option<String>,
    },
}
