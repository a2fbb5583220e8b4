//! # Configuration
//!
//! TOML configuration read once at start-up. Every section has defaults, so an
//! empty or partial file is valid.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{Result, TerminalError};

/// File name used under the platform config dir
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// File name checked in the working directory
pub const LOCAL_CONFIG_FILE_NAME: &str = "echo.toml";

/// Top-level configuration
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EchoConfig {
    /// Rendering and input
    pub ui: UiConfig,
    /// Voice call simulation
    pub call: CallConfig,
    /// Log output
    pub logging: LoggingConfig,
}

/// `[ui]` section
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// UI tick period in milliseconds; ages toasts
    pub tick_rate_ms: u64,
    /// Start with the dark palette
    pub dark_mode: bool,
    /// Number of UI ticks a toast stays on screen
    pub toast_ticks: u32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 250,
            dark_mode: true,
            toast_ticks: 12,
        }
    }
}

/// `[call]` section
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CallConfig {
    /// Call timer period in milliseconds
    pub tick_interval_ms: u64,
}

impl Default for CallConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 1000,
        }
    }
}

/// `[logging]` section
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Env-filter directive, e.g. `info` or `echo_app=debug`
    pub level: String,
    /// Log file; defaults to the platform cache dir
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

impl EchoConfig {
    /// Load and validate a config file
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config: EchoConfig = toml::from_str(&raw)?;
        config.validate_at(path)?;
        tracing::info!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Resolve and load the config.
    ///
    /// An explicit path must exist. Otherwise the platform config dir and then
    /// `./echo.toml` are tried, falling back to defaults.
    pub fn discover(explicit: Option<&Path>) -> Result<(Self, Option<PathBuf>)> {
        if let Some(path) = explicit {
            return Ok((Self::load(path)?, Some(path.to_path_buf())));
        }
        for candidate in Self::search_paths() {
            if candidate.is_file() {
                let config = Self::load(&candidate)?;
                return Ok((config, Some(candidate)));
            }
        }
        Ok((Self::default(), None))
    }

    /// Implicit lookup locations, in priority order
    pub fn search_paths() -> Vec<PathBuf> {
        let mut paths = Vec::with_capacity(2);
        if let Some(path) = Self::default_path() {
            paths.push(path);
        }
        paths.push(PathBuf::from(LOCAL_CONFIG_FILE_NAME));
        paths
    }

    /// `<config_dir>/echo/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("echo").join(CONFIG_FILE_NAME))
    }

    /// Write the config as TOML, creating parent directories
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let rendered = toml::to_string_pretty(self)?;
        std::fs::write(path, rendered)?;
        Ok(())
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<()> {
        self.validate_at(Path::new("<defaults>"))
    }

    fn validate_at(&self, path: &Path) -> Result<()> {
        let invalid = |message: &str| {
            tracing::warn!(path = %path.display(), message, "rejected configuration");
            Err(TerminalError::Config {
                path: path.to_path_buf(),
                message: message.to_string(),
            })
        };

        if self.ui.tick_rate_ms == 0 {
            return invalid("ui.tick_rate_ms cannot be zero");
        }
        if self.ui.tick_rate_ms > 1000 {
            return invalid("ui.tick_rate_ms cannot exceed 1000");
        }
        if self.ui.toast_ticks == 0 {
            return invalid("ui.toast_ticks cannot be zero");
        }
        if self.call.tick_interval_ms == 0 {
            return invalid("call.tick_interval_ms cannot be zero");
        }
        Ok(())
    }

    /// UI tick period
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.ui.tick_rate_ms)
    }

    /// Call timer period
    pub fn call_period(&self) -> Duration {
        Duration::from_millis(self.call.tick_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = EchoConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.tick_rate(), Duration::from_millis(250));
        assert_eq!(config.call_period(), Duration::from_secs(1));
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: EchoConfig = toml::from_str("[ui]\ndark_mode = false\n").unwrap();
        assert!(!config.ui.dark_mode);
        assert_eq!(config.ui.tick_rate_ms, 250);
        assert_eq!(config.call.tick_interval_ms, 1000);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_validation_rejects_zero_and_large_values() {
        let mut config = EchoConfig::default();
        config.ui.tick_rate_ms = 0;
        assert!(matches!(config.validate(), Err(TerminalError::Config { .. })));

        config.ui.tick_rate_ms = 1001;
        assert!(config.validate().is_err());

        let mut config = EchoConfig::default();
        config.ui.toast_ticks = 0;
        assert!(config.validate().is_err());

        let mut config = EchoConfig::default();
        config.call.tick_interval_ms = 0;
        assert!(config.validate().is_err());
    }
}
