use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use lecture_core::Mode;
use lecture_engine::{ProcessorSettings, DEFAULT_BASE_URL, DEFAULT_MAX_INPUT_BYTES};
use lecture_logging::{lecture_debug, lecture_info};
use serde::{Deserialize, Serialize};

use super::logging::LogDestination;

/// Looked up in the working directory when `--config` is not given.
pub const CONFIG_FILENAME: &str = "lecsimp.ron";

const RESPONSE_GRACE_SECS: u64 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub base_url: String,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    pub max_response_bytes: u64,
    pub max_input_bytes: u64,
    pub export_dir: PathBuf,
    /// How long `process --copy` keeps the copied text alive on X11/Wayland.
    pub clipboard_hold_secs: u64,
    pub default_mode: Mode,
    pub log_level: String,
    pub log_destination: LogDestination,
}

impl Default for AppConfig {
    fn default() -> Self {
        let processor = ProcessorSettings::default();
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout_secs: processor.connect_timeout.as_secs(),
            request_timeout_secs: processor.request_timeout.as_secs(),
            max_response_bytes: processor.max_response_bytes,
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
            export_dir: PathBuf::from("exports"),
            clipboard_hold_secs: 10,
            default_mode: Mode::default(),
            log_level: "info".to_string(),
            log_destination: LogDestination::default(),
        }
    }
}

impl AppConfig {
    pub fn processor_settings(&self) -> ProcessorSettings {
        ProcessorSettings {
            base_url: self.base_url.clone(),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            max_response_bytes: self.max_response_bytes,
        }
    }

    pub fn clipboard_hold(&self) -> Duration {
        Duration::from_secs(self.clipboard_hold_secs)
    }

    /// How long the client waits for the engine before giving up on a request.
    pub fn response_wait(&self) -> Duration {
        Duration::from_secs(
            self.connect_timeout_secs
                .saturating_add(self.request_timeout_secs)
                .saturating_add(RESPONSE_GRACE_SECS),
        )
    }
}

/// Loads the config from `explicit`, or from `./lecsimp.ron` when present.
///
/// An explicit path must exist; the implicit one falls back to defaults.
/// A file that exists but does not parse is always an error.
pub fn load_config(explicit: Option<&Path>) -> Result<AppConfig> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let path = PathBuf::from(CONFIG_FILENAME);
            if !path.exists() {
                lecture_debug!("No {} found; using defaults", CONFIG_FILENAME);
                return Ok(AppConfig::default());
            }
            path
        }
    };

    let content = fs::read_to_string(&path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config = parse_config(&content)
        .with_context(|| format!("failed to parse config {}", path.display()))?;
    lecture_info!("Loaded config from {:?}", path);
    Ok(config)
}

pub fn parse_config(content: &str) -> Result<AppConfig> {
    Ok(ron::from_str(content)?)
}
