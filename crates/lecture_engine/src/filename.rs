use sha2::{Digest, Sha256};

const MAX_STEM_LEN: usize = 80;
const EXTENSION: &str = ".txt";

/// Default name for an exported result: `{prefix}--{short_hash(content)}.txt`.
///
/// The same content always maps to the same file, so re-exporting replaces
/// rather than piles up copies.
pub fn default_export_name(prefix: &str, content: &str) -> String {
    let stem = sanitize_stem(prefix);
    let hash = short_hash(content);
    format!("{stem}--{hash}{EXTENSION}")
}

/// Windows-safe `.txt` filename built from whatever the user typed.
///
/// Directory separators are replaced, so the result always names a file
/// directly inside the export directory.
pub fn sanitize_filename(input: &str) -> String {
    let trimmed = input.trim();
    let stem = match trimmed.len().checked_sub(EXTENSION.len()) {
        Some(split)
            if trimmed.is_char_boundary(split)
                && trimmed[split..].eq_ignore_ascii_case(EXTENSION) =>
        {
            &trimmed[..split]
        }
        _ => trimmed,
    };
    format!("{}{EXTENSION}", sanitize_stem(stem))
}

fn sanitize_stem(input: &str) -> String {
    let cleaned: String = input
        .chars()
        .map(|c| if is_forbidden(c) { '_' } else { c })
        .collect();
    let cleaned = cleaned.trim_matches(&['_', ' ', '.'][..]);
    if cleaned.is_empty() {
        return "untitled".to_string();
    }

    let mut compacted = String::with_capacity(cleaned.len());
    let mut prev_underscore = false;
    for c in cleaned.chars() {
        if c == '_' && prev_underscore {
            continue;
        }
        prev_underscore = c == '_';
        compacted.push(c);
    }

    if compacted.len() > MAX_STEM_LEN {
        let mut end = MAX_STEM_LEN;
        while !compacted.is_char_boundary(end) {
            end -= 1;
        }
        compacted.truncate(end);
    }
    if is_reserved_windows_name(&compacted) {
        compacted.push('_');
    }
    compacted
}

fn is_forbidden(c: char) -> bool {
    matches!(c,
        '\\' | '/' | ':' | '*' | '?' | '"' | '<' | '>' | '|' | '\0'..='\u{1F}'
    )
}

fn is_reserved_windows_name(name: &str) -> bool {
    const RESERVED: &[&str] = &[
        "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
        "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
    ];
    RESERVED.iter().any(|r| r.eq_ignore_ascii_case(name))
}

fn short_hash(input: &str) -> String {
    let digest = Sha256::digest(input.as_bytes());
    let mut hex = String::with_capacity(8);
    for byte in digest.iter().take(4) {
        use std::fmt::Write;
        let _ = write!(&mut hex, "{byte:02x}");
    }
    hex
}
