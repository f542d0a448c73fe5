use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
#[cfg(all(
    unix,
    not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
))]
use std::time::Instant;

use lecture_logging::lecture_debug;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("clipboard write failed: {0}")]
    Write(String),
}

/// Write-only view of a clipboard.
pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// The desktop clipboard. Opened lazily on first use, since a headless
/// session may never need it.
///
/// On X11 and Wayland the copied text lives in this process. A short-lived
/// caller should use [`SystemClipboard::holding`] so the text stays pasteable
/// after it exits, or until a clipboard manager takes it over.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
    hold: Option<Duration>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Blocks each copy for up to `hold` until another program owns the text.
    /// Has no effect outside Linux/BSD desktops.
    pub fn holding(hold: Duration) -> Self {
        Self {
            inner: None,
            hold: Some(hold).filter(|hold| !hold.is_zero()),
        }
    }

    fn clipboard(&mut self) -> Result<&mut arboard::Clipboard, ClipboardError> {
        if self.inner.is_none() {
            let clipboard = arboard::Clipboard::new()
                .map_err(|err| ClipboardError::Unavailable(err.to_string()))?;
            self.inner = Some(clipboard);
        }
        self.inner
            .as_mut()
            .ok_or_else(|| ClipboardError::Unavailable("not initialized".to_string()))
    }
}

#[cfg(all(
    unix,
    not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
))]
fn write_text(
    clipboard: &mut arboard::Clipboard,
    text: &str,
    hold: Option<Duration>,
) -> Result<(), arboard::Error> {
    use arboard::SetExtLinux;

    let set = clipboard.set();
    match hold.and_then(|hold| Instant::now().checked_add(hold)) {
        Some(deadline) => {
            lecture_debug!("Holding clipboard selection for up to {:?}", hold);
            set.wait_until(deadline).text(text)
        }
        None => set.text(text),
    }
}

#[cfg(not(all(
    unix,
    not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
)))]
fn write_text(
    clipboard: &mut arboard::Clipboard,
    text: &str,
    _hold: Option<Duration>,
) -> Result<(), arboard::Error> {
    clipboard.set_text(text)
}

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let hold = self.hold;
        let clipboard = self.clipboard()?;
        write_text(clipboard, text, hold).map_err(|err| ClipboardError::Write(err.to_string()))?;
        lecture_debug!("Copied {} bytes to system clipboard", text.len());
        Ok(())
    }
}

/// In-process clipboard; clones share the same contents.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    contents: Arc<Mutex<Option<String>>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Option<String> {
        self.contents
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl ClipboardSink for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        *self.contents.lock().unwrap_or_else(PoisonError::into_inner) = Some(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{ClipboardSink, MemoryClipboard, SystemClipboard};
    use std::time::Duration;

    #[test]
    fn zero_hold_means_no_hold() {
        assert_eq!(SystemClipboard::holding(Duration::ZERO).hold, None);
        assert_eq!(
            SystemClipboard::holding(Duration::from_secs(3)).hold,
            Some(Duration::from_secs(3))
        );
    }

    #[test]
    fn memory_clipboard_shares_contents_between_clones() {
        let reader = MemoryClipboard::new();
        let mut writer = reader.clone();
        assert_eq!(reader.contents(), None);

        writer.set_text("copied").unwrap();
        writer.set_text("latest").unwrap();
        assert_eq!(reader.contents().as_deref(), Some("latest"));
    }
}
