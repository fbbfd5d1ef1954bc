//! Configuration structures for tracer_log.

use crate::error::{Result, TracerLogError};
use crate::severity::{Severity, SeverityMask};
use crate::tracer::{TracerKind, DEFAULT_LOG_FILE};
use serde::Deserialize;
use std::path::{Path, PathBuf};

// --- default value helpers ---
fn default_true() -> bool {
    true
}
fn default_false() -> bool {
    false
}
fn default_levels() -> Vec<Severity> {
    vec![Severity::Info]
}
fn default_file_path() -> PathBuf {
    PathBuf::from(DEFAULT_LOG_FILE)
}

/// Top-level logger configuration.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LoggerConfig {
    /// Backend to install.
    #[serde(default)]
    pub tracer: TracerKind,
    /// Severities enabled at startup.
    #[serde(default = "default_levels")]
    pub levels: Vec<Severity>,
    /// Target of the file tracer.
    #[serde(default = "default_file_path")]
    pub file_path: PathBuf,
    #[serde(default)]
    pub console: ConsoleConfig,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            tracer: TracerKind::default(),
            levels: default_levels(),
            file_path: default_file_path(),
            console: ConsoleConfig::default(),
        }
    }
}

impl LoggerConfig {
    /// The enabled severities as a mask.
    pub fn mask(&self) -> SeverityMask {
        self.levels.iter().copied().collect()
    }

    /// Defaults with environment overrides applied.
    ///
    /// Malformed variables are reported and ignored so that the process-wide
    /// logger can always be built.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        match crate::env_config::EnvConfig::apply(defaults.clone()) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring logger environment overrides: {}", e);
                defaults
            }
        }
    }
}

/// Console tracer settings.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConsoleConfig {
    /// Allow ANSI colours. This permits colour but does not force it:
    /// `colored` still applies its own global check (stdout being a TTY,
    /// `NO_COLOR`, `CLICOLOR_FORCE`), even for an injected writer. Use
    /// `colored::control::set_override` to force it.
    #[serde(default = "default_true")]
    pub color_enabled: bool,
    /// Prefix console lines with the same timestamp the file tracer uses.
    #[serde(default = "default_false")]
    pub timestamps: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            color_enabled: default_true(),
            timestamps: default_false(),
        }
    }
}

/// Load a `LoggerConfig` from a TOML file.
pub fn load_config_from_file(path: &Path) -> Result<LoggerConfig> {
    if !path.exists() {
        return Err(TracerLogError::ConfigFileMissing(
            path.to_string_lossy().into_owned(),
        ));
    }

    let config_str = std::fs::read_to_string(path)?;
    load_config_from_str(&config_str)
}

/// Load a `LoggerConfig` from a TOML string.
pub fn load_config_from_str(config_str: &str) -> Result<LoggerConfig> {
    let config: LoggerConfig = toml::from_str(config_str)?;
    Ok(config)
}

/// Check a configuration before it is used to build a facade.
pub fn validate_config(config: &LoggerConfig) -> Result<()> {
    if !config.tracer.is_supported() {
        return Err(TracerLogError::unsupported(config.tracer.as_str()));
    }

    if config.tracer == TracerKind::File && config.file_path.as_os_str().is_empty() {
        return Err(TracerLogError::config("file tracer needs a non-empty file_path"));
    }

    Ok(())
}
