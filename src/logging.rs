//! Structured logging through `tracing`.
//!
//! The terminal is owned by the UI while the app runs, so events are only
//! ever written to a log file. Without one no subscriber is installed.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::error::{AppError, AppResult};

pub const LOG_ENV: &str = "CUED_LOG";

/// Installs the global subscriber writing to `path`. Returns whether logging
/// is active.
pub fn init_logging(path: Option<&Path>, fallback_filter: &str) -> AppResult<bool> {
    let Some(path) = path else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| {
            AppError::io_with_context(source, format!("failed to open log file: {}", path.display()))
        })?;

    let directive = filter_directive(
        std::env::var(LOG_ENV).ok(),
        std::env::var("RUST_LOG").ok(),
        fallback_filter,
    );
    let filter = EnvFilter::try_new(&directive)
        .map_err(|err| AppError::config(format!("invalid log filter {directive:?}: {err}")))?;

    let layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .map_err(|err| AppError::config(format!("failed to install logger: {err}")))?;
    Ok(true)
}

fn filter_directive(app_env: Option<String>, rust_env: Option<String>, fallback: &str) -> String {
    [app_env, rust_env]
        .into_iter()
        .flatten()
        .find(|value| !value.trim().is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

#[cfg(test)]
mod tests {
    use super::{filter_directive, init_logging};

    #[test]
    fn app_variable_wins_over_rust_log() {
        let directive = filter_directive(
            Some("cued=debug".to_string()),
            Some("warn".to_string()),
            "info",
        );
        assert_eq!(directive, "cued=debug");
    }

    #[test]
    fn blank_variables_fall_back_to_config() {
        assert_eq!(filter_directive(Some(" ".to_string()), None, "info"), "info");
        assert_eq!(filter_directive(None, Some("trace".to_string()), "info"), "trace");
    }

    #[test]
    fn no_log_file_installs_nothing() {
        assert!(!init_logging(None, "info").expect("skipping logging should succeed"));
    }
}
