use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User replaced the input text.
    InputChanged(String),
    /// User typed another line of input (interactive sessions).
    InputAppended(String),
    /// User picked a transformation mode.
    ModeSelected(crate::Mode),
    /// User submitted the current input.
    SubmitClicked,
    /// Processing service answered (or failed) for a submission.
    ResponseReceived {
        request_id: crate::RequestId,
        result: Result<String, String>,
    },
    /// User asked to load a local file into the input.
    LoadFileRequested { path: PathBuf },
    /// File was read and decoded as plain text.
    FileLoaded { name: String, contents: String },
    /// File was refused; the input stays as it was.
    FileRejected { name: String, reason: String },
    /// User clicked Copy.
    CopyClicked,
    /// Clipboard write finished.
    CopyFinished(Result<(), String>),
    /// User clicked Download on the output.
    ExportOutputClicked { filename: Option<String> },
    /// User replaced the notes text.
    NotesChanged(String),
    /// User added a line to the notes.
    NoteAppended(String),
    /// User clicked Download on the notes.
    ExportNotesClicked { filename: Option<String> },
    /// Export finished writing (or failed).
    ExportFinished {
        target: crate::ExportTarget,
        result: Result<PathBuf, String>,
    },
    /// User cleared input and result.
    ClearClicked,
}
