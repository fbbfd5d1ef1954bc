//! Error types for tracer_log
//!
//! Backends never return errors across the [`Tracer`](crate::tracer::Tracer)
//! boundary; the errors defined here are surfaced at construction,
//! configuration and formatting time only.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for tracer_log operations
#[derive(Error, Debug)]
pub enum TracerLogError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Configuration file not found
    #[error("Configuration file not found: {0}")]
    ConfigFileMissing(String),

    /// Unknown severity name
    #[error("Invalid severity: {0}")]
    InvalidSeverity(String),

    /// Unknown tracer kind name
    #[error("Invalid tracer kind: {0}")]
    InvalidTracerKind(String),

    /// The tracer kind is recognised but has no backend on this build
    #[error("Unsupported tracer kind: {0}")]
    UnsupportedTracer(String),

    /// A backend could not acquire its output resource
    #[error("Backend unavailable ({}): {source}", .path.display())]
    BackendUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A `Display` implementation failed while rendering a message
    #[error("Format error: {source}")]
    Format {
        #[from]
        source: std::fmt::Error,
    },

    /// I/O errors
    #[error("I/O error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },

    /// TOML parsing errors
    #[error("TOML parsing error: {source}")]
    TomlError {
        #[from]
        source: toml::de::Error,
    },
}

/// Result type alias for tracer_log operations
pub type Result<T> = std::result::Result<T, TracerLogError>;

impl TracerLogError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::ConfigError(msg.into())
    }

    /// Create a new invalid severity error
    pub fn invalid_severity<S: Into<String>>(name: S) -> Self {
        Self::InvalidSeverity(name.into())
    }

    /// Create a new invalid tracer kind error
    pub fn invalid_tracer_kind<S: Into<String>>(name: S) -> Self {
        Self::InvalidTracerKind(name.into())
    }

    /// Create a new unsupported tracer error
    pub fn unsupported<S: Into<String>>(name: S) -> Self {
        Self::UnsupportedTracer(name.into())
    }

    /// Create a backend-unavailable error for `path`
    pub fn backend_unavailable<P: Into<PathBuf>>(path: P, source: std::io::Error) -> Self {
        Self::BackendUnavailable {
            path: path.into(),
            source,
        }
    }

    /// Check if this error is recoverable
    ///
    /// A recoverable error leaves the facade usable with a fallback backend.
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::BackendUnavailable { .. } => true,
            Self::UnsupportedTracer(_) => true,
            Self::IoError { .. } => true,
            Self::Format { .. } => true,
            _ => false,
        }
    }

    /// Get the error category for logging purposes
    pub fn category(&self) -> &'static str {
        match self {
            Self::ConfigError(_)
            | Self::ConfigFileMissing(_)
            | Self::InvalidSeverity(_)
            | Self::InvalidTracerKind(_) => "config",
            Self::UnsupportedTracer(_) | Self::BackendUnavailable { .. } => "backend",
            Self::Format { .. } => "format",
            Self::IoError { .. } => "io",
            Self::TomlError { .. } => "toml",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_error_creation() {
        let config_err = TracerLogError::config("Invalid configuration");
        assert!(matches!(config_err, TracerLogError::ConfigError(_)));
        assert_eq!(
            config_err.to_string(),
            "Configuration error: Invalid configuration"
        );

        let sev_err = TracerLogError::invalid_severity("loud");
        assert_eq!(sev_err.to_string(), "Invalid severity: loud");
    }

    #[test]
    fn test_error_from_conversions() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let err: TracerLogError = io_error.into();
        assert!(matches!(err, TracerLogError::IoError { .. }));

        let err: TracerLogError = std::fmt::Error.into();
        assert!(matches!(err, TracerLogError::Format { .. }));
    }

    #[test]
    fn test_backend_unavailable_mentions_path() {
        let err = TracerLogError::backend_unavailable(
            "/no/such/dir/log.txt",
            io::Error::new(io::ErrorKind::NotFound, "missing"),
        );
        let msg = err.to_string();
        assert!(msg.contains("/no/such/dir/log.txt"));
        assert!(msg.contains("missing"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_error_recoverability() {
        assert!(TracerLogError::unsupported("rtt").is_recoverable());
        assert!(TracerLogError::from(std::fmt::Error).is_recoverable());
        assert!(!TracerLogError::config("bad").is_recoverable());
        assert!(!TracerLogError::invalid_tracer_kind("pipe").is_recoverable());
    }

    #[test]
    fn test_error_categories() {
        assert_eq!(TracerLogError::config("x").category(), "config");
        assert_eq!(TracerLogError::invalid_severity("x").category(), "config");
        assert_eq!(TracerLogError::unsupported("x").category(), "backend");
        assert_eq!(TracerLogError::from(std::fmt::Error).category(), "format");
    }
}
