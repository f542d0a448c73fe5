use lecture_logging::{lecture_debug, lecture_warn};

use crate::{AppState, Effect, ExportTarget, Msg, Notice, Phase};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(text) => {
            state.set_input(text);
            Vec::new()
        }
        Msg::InputAppended(line) => {
            state.append_input(&line);
            Vec::new()
        }
        Msg::ModeSelected(mode) => {
            state.set_mode(mode);
            Vec::new()
        }
        Msg::SubmitClicked => {
            // The submit control is disabled while a request is pending.
            if state.phase() == Phase::Submitting {
                return (state, Vec::new());
            }
            if state.input().trim().is_empty() {
                state.set_notice(Notice::Error(
                    "Please enter some text before submitting.".to_string(),
                ));
                return (state, Vec::new());
            }
            let submission = state.begin_submission();
            lecture_debug!(
                "Submitting request_id={} mode={} text_len={}",
                submission.request_id,
                submission.mode,
                submission.text.len()
            );
            vec![Effect::Submit(submission)]
        }
        Msg::ResponseReceived { request_id, result } => {
            let output = match result {
                Ok(output) => Some(output),
                Err(reason) => {
                    lecture_warn!("Request {} failed: {}", request_id, reason);
                    None
                }
            };
            if !state.finish_submission(request_id, output) {
                lecture_warn!("Ignoring response for stale request {}", request_id);
            }
            Vec::new()
        }
        Msg::LoadFileRequested { path } => vec![Effect::ReadFile { path }],
        Msg::FileLoaded { name, contents } => {
            state.set_input(contents);
            state.set_notice(Notice::Info(format!("Loaded {name}")));
            Vec::new()
        }
        Msg::FileRejected { name, reason } => {
            state.set_notice(Notice::Error(format!("Cannot load {name}: {reason}")));
            Vec::new()
        }
        Msg::CopyClicked => match state.result() {
            Some(output) => vec![Effect::CopyToClipboard {
                content: output.to_string(),
            }],
            None => {
                state.set_notice(Notice::Info("Nothing to copy yet.".to_string()));
                Vec::new()
            }
        },
        Msg::CopyFinished(result) => {
            let notice = match result {
                Ok(()) => Notice::Info("Copied to clipboard!".to_string()),
                Err(err) => Notice::Error(format!("Copy failed: {err}")),
            };
            state.set_notice(notice);
            Vec::new()
        }
        Msg::ExportOutputClicked { filename } => match state.outcome() {
            Some(crate::Outcome::Success { mode, output }) => vec![Effect::ExportText {
                target: ExportTarget::Output { mode: *mode },
                content: output.clone(),
                filename,
            }],
            _ => {
                state.set_notice(Notice::Info("Nothing to download yet.".to_string()));
                Vec::new()
            }
        },
        Msg::NotesChanged(notes) => {
            state.set_notes(notes);
            Vec::new()
        }
        Msg::NoteAppended(line) => {
            state.append_note(&line);
            Vec::new()
        }
        Msg::ExportNotesClicked { filename } => {
            if state.notes().trim().is_empty() {
                state.set_notice(Notice::Info("Notes are empty.".to_string()));
                Vec::new()
            } else {
                vec![Effect::ExportText {
                    target: ExportTarget::Notes,
                    content: state.notes().to_string(),
                    filename,
                }]
            }
        }
        Msg::ExportFinished { target, result } => {
            let notice = match result {
                Ok(path) => Notice::Info(format!("Saved {} to {}", target.label(), path.display())),
                Err(err) => Notice::Error(format!("Could not save {}: {err}", target.label())),
            };
            state.set_notice(notice);
            Vec::new()
        }
        Msg::ClearClicked => {
            if state.phase() == Phase::Idle {
                state.clear();
            }
            Vec::new()
        }
    };

    (state, effects)
}
