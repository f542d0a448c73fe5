use crate::Mode;

const BULLET_MARKERS: [&str; 3] = ["•", "*", "-"];

/// Light clean-up applied when printing a result.
///
/// The stored result is never modified; this only shapes what gets rendered.
pub fn format_for_display(mode: Mode, text: &str) -> String {
    let normalized = text.replace("\r\n", "\n");
    let lines = normalized.trim_end().lines().map(str::trim_end);
    let formatted: Vec<String> = if mode == Mode::Bullet {
        lines.map(normalize_bullet).collect()
    } else {
        lines.map(ToOwned::to_owned).collect()
    };
    formatted.join("\n")
}

fn normalize_bullet(line: &str) -> String {
    let trimmed = line.trim_start();
    for marker in BULLET_MARKERS {
        if let Some(rest) = trimmed.strip_prefix(marker) {
            // `**bold**` is emphasis, not a bullet.
            if marker == "*" && rest.starts_with('*') {
                break;
            }
            return format!("- {}", rest.trim_start());
        }
    }
    line.to_string()
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
