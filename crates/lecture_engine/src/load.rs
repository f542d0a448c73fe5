use std::fs;
use std::io;
use std::path::Path;

use lecture_logging::lecture_info;
use thiserror::Error;

use crate::decode::{decode_text, DecodeError};

/// Default upper bound for a loaded input file.
pub const DEFAULT_MAX_INPUT_BYTES: u64 = 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedText {
    pub name: String,
    pub contents: String,
    pub encoding_label: String,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("only plain-text (.txt) files are supported")]
    UnsupportedType,
    #[error("file is too large (max {max_bytes} bytes, actual {actual})")]
    TooLarge { max_bytes: u64, actual: u64 },
    #[error("{0}")]
    Decode(#[from] DecodeError),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Display name used in notices: the file name without its directories.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Read a `.txt` file into a string. Anything else is refused before any
/// bytes are read.
pub fn load_text_file(path: &Path, max_bytes: u64) -> Result<LoadedText, LoadError> {
    if !has_text_extension(path) {
        return Err(LoadError::UnsupportedType);
    }

    let meta = fs::metadata(path)?;
    if !meta.is_file() {
        return Err(LoadError::UnsupportedType);
    }
    if meta.len() > max_bytes {
        return Err(LoadError::TooLarge {
            max_bytes,
            actual: meta.len(),
        });
    }

    let bytes = fs::read(path)?;
    let decoded = decode_text(&bytes)?;
    lecture_info!(
        "Loaded {:?} ({} bytes, {})",
        path,
        bytes.len(),
        decoded.encoding_label
    );
    Ok(LoadedText {
        name: display_name(path),
        contents: decoded.text,
        encoding_label: decoded.encoding_label,
    })
}

fn has_text_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("txt"))
}
