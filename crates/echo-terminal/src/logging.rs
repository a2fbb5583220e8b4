//! Log setup.
//!
//! The TUI owns stdout, so tracing output goes to a plain-text file.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;
use crate::error::{Result, TerminalError};

/// Default log file name
pub const LOG_FILE_NAME: &str = "echo.log";

/// `<cache_dir>/echo/echo.log`, or `./echo.log` when no cache dir exists
pub fn default_log_path() -> PathBuf {
    dirs::cache_dir()
        .map(|dir| dir.join("echo").join(LOG_FILE_NAME))
        .unwrap_or_else(|| PathBuf::from(LOG_FILE_NAME))
}

/// Pick the log file: CLI override, then config, then the default
pub fn resolve_log_path(cli_override: Option<&Path>, config: &LoggingConfig) -> PathBuf {
    cli_override
        .map(Path::to_path_buf)
        .or_else(|| config.file.clone())
        .unwrap_or_else(default_log_path)
}

/// Filter directive: `RUST_LOG` wins, `--verbose` forces debug, else the config level
pub fn build_filter(config: &LoggingConfig, verbose: bool) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    let directive = if verbose { "debug" } else { config.level.as_str() };
    EnvFilter::try_new(directive)
        .map_err(|e| TerminalError::Logging(format!("invalid level {directive:?}: {e}")))
}

/// Install the global subscriber writing to `path`.
pub fn init(path: &Path, filter: EnvFilter) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| TerminalError::Logging(e.to_string()))?;

    tracing::info!(path = %path.display(), "logging initialised");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_override_wins() {
        let config = LoggingConfig {
            level: "info".to_string(),
            file: Some(PathBuf::from("/tmp/from-config.log")),
        };
        let path = resolve_log_path(Some(Path::new("/tmp/cli.log")), &config);
        assert_eq!(path, PathBuf::from("/tmp/cli.log"));

        let path = resolve_log_path(None, &config);
        assert_eq!(path, PathBuf::from("/tmp/from-config.log"));
    }

    #[test]
    fn test_default_log_path_name() {
        assert!(default_log_path().ends_with(LOG_FILE_NAME));
    }

    #[test]
    fn test_invalid_level_is_rejected() {
        if std::env::var("RUST_LOG").is_ok() {
            return;
        }
        let config = LoggingConfig {
            level: "echo_app=loudest".to_string(),
            file: None,
        };
        assert!(matches!(
            build_filter(&config, false),
            Err(TerminalError::Logging(_))
        ));
        assert!(build_filter(&config, true).is_ok());
    }
}
