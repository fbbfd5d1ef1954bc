//! Environment variable overrides
//!
//! | Variable            | Effect                                   |
//! |---------------------|------------------------------------------|
//! | `TRACER_LOG_KIND`   | backend kind (`console`, `file`, `void`) |
//! | `TRACER_LOG_LEVELS` | enabled severities (`info,debug`, `all`) |
//! | `TRACER_LOG_FILE`   | file tracer path                         |
//! | `TRACER_LOG_COLOR`  | console colour (`true`/`false`/`1`/`0`)  |

use crate::config::LoggerConfig;
use crate::error::{Result, TracerLogError};
use crate::severity::SeverityMask;
use crate::tracer::TracerKind;
use std::env;
use std::path::PathBuf;

pub const KIND_VAR: &str = "TRACER_LOG_KIND";
pub const LEVELS_VAR: &str = "TRACER_LOG_LEVELS";
pub const FILE_VAR: &str = "TRACER_LOG_FILE";
pub const COLOR_VAR: &str = "TRACER_LOG_COLOR";

/// Environment configuration reader
pub struct EnvConfig;

impl EnvConfig {
    /// Apply overrides from the process environment.
    pub fn apply(config: LoggerConfig) -> Result<LoggerConfig> {
        Self::apply_from(config, |name| env::var(name).ok())
    }

    /// Apply overrides using `lookup` in place of the process environment.
    /// Empty values count as unset.
    pub fn apply_from<F>(mut config: LoggerConfig, lookup: F) -> Result<LoggerConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(kind) = get(KIND_VAR) {
            config.tracer = kind.parse::<TracerKind>()?;
        }
        if let Some(levels) = get(LEVELS_VAR) {
            config.levels = levels.parse::<SeverityMask>()?.iter().collect();
        }
        if let Some(path) = get(FILE_VAR) {
            config.file_path = PathBuf::from(path);
        }
        if let Some(color) = get(COLOR_VAR) {
            config.console.color_enabled = parse_bool(COLOR_VAR, &color)?;
        }

        Ok(config)
    }
}

fn parse_bool(name: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(TracerLogError::config(format!(
            "{} must be a boolean, got {:?}",
            name, other
        ))),
    }
}
