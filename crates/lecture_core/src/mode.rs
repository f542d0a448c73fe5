use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Transformation requested from the processing service.
///
/// Serialized names are the exact strings the service expects in the `mode`
/// field of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Mode {
    #[default]
    #[serde(rename = "simplify")]
    Simplify,
    #[serde(rename = "summarize")]
    Summarize,
    #[serde(rename = "bullet")]
    Bullet,
    #[serde(rename = "complexify")]
    Complexify,
    #[serde(rename = "question")]
    Question,
    #[serde(rename = "define", alias = "definition")]
    Define,
    #[serde(rename = "explain_like_im_5", alias = "eli5")]
    ExplainLikeIm5,
}

impl Mode {
    pub const ALL: [Mode; 7] = [
        Mode::Simplify,
        Mode::Summarize,
        Mode::Bullet,
        Mode::Complexify,
        Mode::Question,
        Mode::Define,
        Mode::ExplainLikeIm5,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Simplify => "simplify",
            Mode::Summarize => "summarize",
            Mode::Bullet => "bullet",
            Mode::Complexify => "complexify",
            Mode::Question => "question",
            Mode::Define => "define",
            Mode::ExplainLikeIm5 => "explain_like_im_5",
        }
    }

    /// Human-readable label: first letter upper-cased, underscores as spaces.
    pub fn label(self) -> String {
        let spaced = self.as_str().replace('_', " ");
        let mut chars = spaced.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown mode `{0}`")]
pub struct ParseModeError(pub String);

impl FromStr for Mode {
    type Err = ParseModeError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.trim().to_ascii_lowercase().replace([' ', '-'], "_");
        match normalized.as_str() {
            "eli5" => return Ok(Mode::ExplainLikeIm5),
            "definition" => return Ok(Mode::Define),
            _ => {}
        }
        Mode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == normalized)
            .ok_or_else(|| ParseModeError(raw.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::Mode;

    #[test]
    fn labels_capitalize_and_space() {
        assert_eq!(Mode::Simplify.label(), "Simplify");
        assert_eq!(Mode::ExplainLikeIm5.label(), "Explain like im 5");
    }

    #[test]
    fn parse_accepts_wire_names_labels_and_aliases() {
        for mode in Mode::ALL {
            assert_eq!(mode.as_str().parse::<Mode>(), Ok(mode));
            assert_eq!(mode.label().parse::<Mode>(), Ok(mode));
        }
        assert_eq!("ELI5".parse::<Mode>(), Ok(Mode::ExplainLikeIm5));
        assert_eq!("definition".parse::<Mode>(), Ok(Mode::Define));
        assert!("paraphrase".parse::<Mode>().is_err());
    }
}
