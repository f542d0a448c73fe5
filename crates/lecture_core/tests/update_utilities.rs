use std::path::PathBuf;

use lecture_core::{update, AppState, Effect, ExportTarget, Mode, Msg, Notice, Phase};
use pretty_assertions::assert_eq;

fn init_logging() {
    lecture_logging::initialize_for_tests();
}

fn with_result(output: &str) -> AppState {
    let (state, _) = update(AppState::new(), Msg::ModeSelected(Mode::Summarize));
    let (state, _) = update(state, Msg::InputChanged("input".to_string()));
    let (state, _) = update(state, Msg::SubmitClicked);
    let (state, _) = update(
        state,
        Msg::ResponseReceived {
            request_id: 1,
            result: Ok(output.to_string()),
        },
    );
    state
}

#[test]
fn load_file_request_becomes_read_effect() {
    init_logging();
    let path = PathBuf::from("lecture.txt");
    let (_state, effects) = update(
        AppState::new(),
        Msg::LoadFileRequested { path: path.clone() },
    );

    assert_eq!(effects, vec![Effect::ReadFile { path }]);
}

#[test]
fn loaded_file_replaces_input() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::InputChanged("old".to_string()));
    let (state, _) = update(
        state,
        Msg::FileLoaded {
            name: "lecture.txt".to_string(),
            contents: "new text".to_string(),
        },
    );

    assert_eq!(state.input(), "new text");
    assert_eq!(
        state.notice(),
        Some(&Notice::Info("Loaded lecture.txt".to_string()))
    );
}

#[test]
fn rejected_file_never_mutates_input() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::InputChanged("keep me".to_string()));
    let (state, effects) = update(
        state,
        Msg::FileRejected {
            name: "slides.pdf".to_string(),
            reason: "only plain-text (.txt) files are supported".to_string(),
        },
    );

    assert!(effects.is_empty());
    assert_eq!(state.input(), "keep me");
    assert!(matches!(state.notice(), Some(Notice::Error(msg)) if msg.contains("slides.pdf")));
}

#[test]
fn copy_uses_current_result() {
    init_logging();
    let state = with_result("short summary");
    let (state, effects) = update(state, Msg::CopyClicked);

    assert_eq!(
        effects,
        vec![Effect::CopyToClipboard {
            content: "short summary".to_string(),
        }]
    );

    let (state, _) = update(state, Msg::CopyFinished(Ok(())));
    assert_eq!(
        state.notice(),
        Some(&Notice::Info("Copied to clipboard!".to_string()))
    );
}

#[test]
fn copy_without_result_does_not_touch_clipboard() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::CopyClicked);

    assert!(effects.is_empty());
    assert!(matches!(state.notice(), Some(Notice::Info(_))));
}

#[test]
fn copy_after_failure_has_nothing_to_copy() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::InputChanged("x".to_string()));
    let (state, _) = update(state, Msg::SubmitClicked);
    let (state, _) = update(
        state,
        Msg::ResponseReceived {
            request_id: 1,
            result: Err("network error".to_string()),
        },
    );
    let (_state, effects) = update(state, Msg::CopyClicked);

    assert!(effects.is_empty());
}

#[test]
fn export_output_carries_mode_and_exact_content() {
    init_logging();
    let state = with_result("hello");
    let (_state, effects) = update(
        state,
        Msg::ExportOutputClicked {
            filename: Some("out.txt".to_string()),
        },
    );

    assert_eq!(
        effects,
        vec![Effect::ExportText {
            target: ExportTarget::Output {
                mode: Mode::Summarize
            },
            content: "hello".to_string(),
            filename: Some("out.txt".to_string()),
        }]
    );
}

#[test]
fn notes_are_independent_of_submissions() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::NoteAppended("first".to_string()));
    let (state, _) = update(state, Msg::NoteAppended("second".to_string()));
    let (state, _) = update(state, Msg::InputChanged("lecture".to_string()));
    let (state, effects) = update(state, Msg::SubmitClicked);

    assert_eq!(state.notes(), "first\nsecond");
    match &effects[..] {
        [Effect::Submit(submission)] => assert_eq!(submission.text, "lecture"),
        other => panic!("unexpected effects: {other:?}"),
    }

    let (state, _) = update(state, Msg::ClearClicked);
    assert_eq!(state.phase(), Phase::Submitting);
    assert_eq!(state.input(), "lecture");
}

#[test]
fn export_notes_requires_content() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::ExportNotesClicked { filename: None });
    assert!(effects.is_empty());

    let (state, _) = update(state, Msg::NotesChanged("remember ATP".to_string()));
    let (state, effects) = update(state, Msg::ExportNotesClicked { filename: None });
    assert_eq!(
        effects,
        vec![Effect::ExportText {
            target: ExportTarget::Notes,
            content: "remember ATP".to_string(),
            filename: None,
        }]
    );

    let (state, _) = update(
        state,
        Msg::ExportFinished {
            target: ExportTarget::Notes,
            result: Ok(PathBuf::from("exports/notes.txt")),
        },
    );
    assert!(matches!(state.notice(), Some(Notice::Info(msg)) if msg.starts_with("Saved notes")));
}

#[test]
fn clear_resets_input_and_result_but_keeps_notes() {
    init_logging();
    let state = with_result("output");
    let (state, _) = update(state, Msg::NotesChanged("mine".to_string()));
    let (mut state, _) = update(state, Msg::ClearClicked);

    assert!(state.consume_dirty());
    assert_eq!(state.input(), "");
    assert_eq!(state.result(), None);
    assert_eq!(state.notes(), "mine");
    assert_eq!(state.mode(), Mode::Summarize);
}
