#![deny(missing_docs)]
//! Logging for the lecture simplifier workspace.
//!
//! Every crate logs through the `lecture_*` macros, which tag records with
//! [`TARGET`]. Loggers built from [`logger_config`] keep those records and
//! drop the chatter of the HTTP stack unless tracing is on.

use log::LevelFilter;
use simplelog::{Config, ConfigBuilder};

#[doc(hidden)]
pub use log as __log;

/// Log target shared by all workspace crates.
pub const TARGET: &str = "lecsimp";

/// Logs a trace-level message under [`TARGET`].
#[macro_export]
macro_rules! lecture_trace {
    ($($arg:tt)*) => {
        $crate::__log::trace!(target: $crate::TARGET, $($arg)*)
    };
}

/// Logs a debug-level message under [`TARGET`].
#[macro_export]
macro_rules! lecture_debug {
    ($($arg:tt)*) => {
        $crate::__log::debug!(target: $crate::TARGET, $($arg)*)
    };
}

/// Logs an info-level message under [`TARGET`].
#[macro_export]
macro_rules! lecture_info {
    ($($arg:tt)*) => {
        $crate::__log::info!(target: $crate::TARGET, $($arg)*)
    };
}

/// Logs a warn-level message under [`TARGET`].
#[macro_export]
macro_rules! lecture_warn {
    ($($arg:tt)*) => {
        $crate::__log::warn!(target: $crate::TARGET, $($arg)*)
    };
}

/// Logs an error-level message under [`TARGET`].
#[macro_export]
macro_rules! lecture_error {
    ($($arg:tt)*) => {
        $crate::__log::error!(target: $crate::TARGET, $($arg)*)
    };
}

/// Parses a level name such as `"debug"` or `"WARN"`. Unknown names give `Info`.
pub fn parse_level(name: &str) -> LevelFilter {
    name.trim().parse().unwrap_or(LevelFilter::Info)
}

/// Resolves the level from command-line flags and the configured name.
///
/// `quiet` wins, then each `-v` raises the level one step above the
/// configured one (`-v` is at least `Debug`, `-vv` is `Trace`).
pub fn effective_level(configured: &str, verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Error;
    }
    let configured = parse_level(configured);
    match verbose {
        0 => configured,
        1 => configured.max(LevelFilter::Debug),
        _ => LevelFilter::Trace,
    }
}

/// Builds the simplelog config for a logger running at `level`.
///
/// Below `Trace` only records tagged with [`TARGET`] pass.
pub fn logger_config(level: LevelFilter) -> Config {
    let mut builder = ConfigBuilder::new();
    builder
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error);
    if level < LevelFilter::Trace {
        builder.add_filter_allow_str(TARGET);
    }
    builder.build()
}

/// Installs a stderr logger for tests. A no-op once any logger is installed.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, TermLogger, TerminalMode};

    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let _ = TermLogger::init(
        level,
        logger_config(level),
        TerminalMode::Stderr,
        ColorChoice::Never,
    );
}

#[cfg(test)]
mod tests {
    use super::{effective_level, parse_level};
    use log::LevelFilter;

    #[test]
    fn level_names_are_case_insensitive() {
        assert_eq!(parse_level("debug"), LevelFilter::Debug);
        assert_eq!(parse_level(" WARN "), LevelFilter::Warn);
        assert_eq!(parse_level("off"), LevelFilter::Off);
        assert_eq!(parse_level("chatty"), LevelFilter::Info);
    }

    #[test]
    fn flags_override_configured_level() {
        assert_eq!(effective_level("warn", 0, false), LevelFilter::Warn);
        assert_eq!(effective_level("warn", 1, false), LevelFilter::Debug);
        assert_eq!(effective_level("trace", 1, false), LevelFilter::Trace);
        assert_eq!(effective_level("warn", 3, false), LevelFilter::Trace);
        assert_eq!(effective_level("trace", 2, true), LevelFilter::Error);
    }

    #[test]
    fn macros_log_under_workspace_target() {
        // Expands without `log` in scope at the call site.
        lecture_debug!("value {}", 1);
        lecture_info!("plain");
        assert_eq!(super::TARGET, "lecsimp");
    }
}
