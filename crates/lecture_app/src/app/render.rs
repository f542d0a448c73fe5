use std::io::{self, Write};

use lecture_core::{format_for_display, word_count, AppViewModel, Mode, Notice, Phase, ResultView};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderStyle {
    /// Raw result on `out`, everything else on `err`. Suits piping.
    Plain,
    /// Headings, progress lines and light formatting, all on `out`.
    Decorated,
}

/// Prints what changed between successive view models.
pub struct Renderer<O: Write, E: Write> {
    out: O,
    err: E,
    style: RenderStyle,
    last: AppViewModel,
}

impl<O: Write, E: Write> Renderer<O, E> {
    pub fn new(out: O, err: E, style: RenderStyle) -> Self {
        Self {
            out,
            err,
            style,
            last: AppViewModel::default(),
        }
    }

    pub fn render(&mut self, view: &AppViewModel) -> io::Result<()> {
        if view.notice_seq != self.last.notice_seq {
            if let Some(notice) = &view.notice {
                self.write_notice(notice)?;
            }
        }
        if view.phase != self.last.phase
            && view.phase == Phase::Submitting
            && self.style == RenderStyle::Decorated
        {
            writeln!(self.out, "Processing ({})...", view.mode_label)?;
        }
        if view.result != self.last.result {
            if let Some(result) = &view.result {
                self.write_result(result)?;
            }
        }
        self.last = view.clone();
        self.out.flush()
    }

    /// Full dump of the current view, regardless of what changed.
    pub fn show(&mut self, view: &AppViewModel) -> io::Result<()> {
        writeln!(self.out, "Mode: {} ({})", view.mode_label, view.mode)?;
        writeln!(self.out, "Input ({} words):", view.input_words)?;
        if view.input.is_empty() {
            writeln!(self.out, "  (empty)")?;
        } else {
            writeln!(self.out, "{}", view.input)?;
        }
        match &view.result {
            Some(result) => self.write_result(result)?,
            None => writeln!(self.out, "No output yet.")?,
        }
        self.write_notes(&view.notes)?;
        self.out.flush()
    }

    pub fn write_notes(&mut self, notes: &str) -> io::Result<()> {
        writeln!(self.out, "Notes ({} words):", word_count(notes))?;
        if notes.is_empty() {
            writeln!(self.out, "  (empty)")
        } else {
            writeln!(self.out, "{notes}")
        }
    }

    pub fn write_modes(&mut self) -> io::Result<()> {
        for mode in Mode::ALL {
            writeln!(self.out, "{:<18} {}", mode.as_str(), mode.label())?;
        }
        self.out.flush()
    }

    pub fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.out, "{line}")?;
        self.out.flush()
    }

    fn write_notice(&mut self, notice: &Notice) -> io::Result<()> {
        let (prefix, text) = match notice {
            Notice::Info(text) => ("info", text),
            Notice::Error(text) => ("error", text),
        };
        match self.style {
            RenderStyle::Plain => writeln!(self.err, "lecsimp: {prefix}: {text}"),
            RenderStyle::Decorated => writeln!(self.out, "[{prefix}] {text}"),
        }
    }

    fn write_result(&mut self, result: &ResultView) -> io::Result<()> {
        match self.style {
            RenderStyle::Plain if result.is_error => writeln!(self.err, "{}", result.text),
            RenderStyle::Plain => {
                self.out.write_all(result.text.as_bytes())?;
                if !result.text.ends_with('\n') {
                    writeln!(self.out)?;
                }
                Ok(())
            }
            RenderStyle::Decorated if result.is_error => writeln!(self.out, "{}", result.text),
            RenderStyle::Decorated => {
                writeln!(
                    self.out,
                    "== Output: {} ({} words) ==",
                    result.mode.label(),
                    word_count(&result.text)
                )?;
                writeln!(self.out, "{}", format_for_display(result.mode, &result.text))
            }
        }
    }

    #[cfg(test)]
    pub fn into_parts(self) -> (O, E) {
        (self.out, self.err)
    }
}
