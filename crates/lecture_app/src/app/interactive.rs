use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use lecture_core::{Mode, Msg};
use lecture_logging::lecture_debug;

use super::session::Session;

pub const HELP: &str = "\
Type or paste text; each line is added to the input.
  :mode NAME        choose a mode (see :modes)
  :modes            list modes
  :load PATH        replace the input with a .txt file
  :submit           send the input for processing
  :copy             copy the output to the clipboard
  :save [NAME]      save the output as a .txt file
  :note TEXT        add a line to your notes
  :notes            show your notes
  :set-notes [TEXT] replace your notes (no text clears them)
  :save-notes [NAME] save your notes as a .txt file
  :clear            clear input and output (notes are kept)
  :show             show mode, input, output and notes
  :help             show this help
  :quit             leave
Start a line with '::' to add a line that begins with ':'.";

/// One parsed line of interactive input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Text(String),
    Mode(Mode),
    Modes,
    Load(PathBuf),
    Submit,
    Copy,
    Save(Option<String>),
    Note(String),
    Notes,
    SetNotes(String),
    SaveNotes(Option<String>),
    Clear,
    Show,
    Help,
    Quit,
}

pub fn parse_line(raw: &str) -> Result<Line, String> {
    let line = raw.trim_end_matches(['\r', '\n']);
    if let Some(escaped) = line.strip_prefix("::") {
        return Ok(Line::Text(format!(":{escaped}")));
    }
    let Some(command) = line.strip_prefix(':') else {
        return Ok(Line::Text(line.to_string()));
    };

    let (name, arg) = match command.trim().split_once(char::is_whitespace) {
        Some((name, arg)) => (name, Some(arg.trim()).filter(|a| !a.is_empty())),
        None => (command.trim(), None),
    };
    match (name, arg) {
        ("mode", Some(arg)) => arg.parse().map(Line::Mode).map_err(|err| format!("{err}")),
        ("mode", None) => Err("usage: :mode NAME".to_string()),
        ("modes", _) => Ok(Line::Modes),
        ("load", Some(arg)) => Ok(Line::Load(PathBuf::from(arg))),
        ("load", None) => Err("usage: :load PATH".to_string()),
        ("submit" | "s", _) => Ok(Line::Submit),
        ("copy", _) => Ok(Line::Copy),
        ("save", arg) => Ok(Line::Save(arg.map(str::to_string))),
        ("note", Some(arg)) => Ok(Line::Note(arg.to_string())),
        ("note", None) => Err("usage: :note TEXT".to_string()),
        ("notes", _) => Ok(Line::Notes),
        ("set-notes", arg) => Ok(Line::SetNotes(arg.unwrap_or_default().to_string())),
        ("save-notes", arg) => Ok(Line::SaveNotes(arg.map(str::to_string))),
        ("clear", _) => Ok(Line::Clear),
        ("show", _) => Ok(Line::Show),
        ("help" | "h" | "?", _) => Ok(Line::Help),
        ("quit" | "q" | "exit", _) => Ok(Line::Quit),
        (other, _) => Err(format!("unknown command :{other} (try :help)")),
    }
}

/// Reads lines from `input` until EOF or `:quit`.
pub fn run<R: BufRead, O: Write, E: Write>(
    session: &mut Session<O, E>,
    input: R,
) -> io::Result<()> {
    session.renderer().write_line(HELP)?;
    for raw in input.lines() {
        let raw = raw?;
        let line = match parse_line(&raw) {
            Ok(line) => line,
            Err(message) => {
                session.renderer().write_line(&message)?;
                continue;
            }
        };
        lecture_debug!("Interactive line {:?}", line);
        let msg = match line {
            Line::Text(text) => Msg::InputAppended(text),
            Line::Mode(mode) => {
                session.renderer().write_line(&format!("Mode: {}", mode.label()))?;
                Msg::ModeSelected(mode)
            }
            Line::Load(path) => Msg::LoadFileRequested { path },
            Line::Submit => Msg::SubmitClicked,
            Line::Copy => Msg::CopyClicked,
            Line::Save(filename) => Msg::ExportOutputClicked { filename },
            Line::Note(text) => Msg::NoteAppended(text),
            Line::SetNotes(text) => Msg::NotesChanged(text),
            Line::SaveNotes(filename) => Msg::ExportNotesClicked { filename },
            Line::Clear => Msg::ClearClicked,
            Line::Modes => {
                session.renderer().write_modes()?;
                continue;
            }
            Line::Notes => {
                let notes = session.state().notes().to_string();
                session.renderer().write_notes(&notes)?;
                continue;
            }
            Line::Show => {
                session.show()?;
                continue;
            }
            Line::Help => {
                session.renderer().write_line(HELP)?;
                continue;
            }
            Line::Quit => break,
        };
        session.dispatch(msg)?;
    }
    Ok(())
}
