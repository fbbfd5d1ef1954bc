//! Tracer trait and backend selector
//!
//! A [`Tracer`] is the sink that renders a message. The facade owns exactly
//! one boxed tracer at a time and forwards each enabled message to the
//! operation matching its severity.
//!
//! # Implementing a tracer
//!
//! Only [`Tracer::info`] and [`Tracer::name`] are required. Every other
//! severity operation prefixes its label and forwards to `info` unless the
//! backend overrides it.
//!
//! ```rust
//! use std::sync::Mutex;
//! use tracer_log::tracer::Tracer;
//!
//! #[derive(Debug, Default)]
//! struct Collecting {
//!     lines: Mutex<Vec<String>>,
//! }
//!
//! impl Tracer for Collecting {
//!     fn info(&self, message: &str) {
//!         if let Ok(mut lines) = self.lines.lock() {
//!             lines.push(message.to_string());
//!         }
//!     }
//!
//!     fn name(&self) -> &'static str {
//!         "collecting"
//!     }
//! }
//!
//! let tracer = Collecting::default();
//! tracer.warning("disk almost full");
//! assert_eq!(tracer.lines.lock().unwrap()[0], "Warning: disk almost full");
//! ```

use crate::error::{Result, TracerLogError};
use crate::severity::Severity;
use serde::Deserialize;
use std::fmt::{self, Debug};
use std::str::FromStr;

/// Backend capability: one write operation per severity.
///
/// Operations return nothing and must not panic. A backend that fails to
/// write reports the failure through `tracing` and carries on.
pub trait Tracer: Send + Sync + Debug {
    /// Base write; the message is rendered as-is with no label.
    fn info(&self, message: &str);

    fn debug(&self, message: &str) {
        self.info(&labelled(Severity::Debug, message));
    }

    fn warning(&self, message: &str) {
        self.info(&labelled(Severity::Warning, message));
    }

    fn error(&self, message: &str) {
        self.info(&labelled(Severity::Error, message));
    }

    fn critical(&self, message: &str) {
        self.info(&labelled(Severity::Critical, message));
    }

    fn fatal(&self, message: &str) {
        self.info(&labelled(Severity::Fatal, message));
    }

    fn verbose(&self, message: &str) {
        self.info(&labelled(Severity::Verbose, message));
    }

    /// Short backend name, used in diagnostics.
    fn name(&self) -> &'static str;

    /// Push any buffered output to the underlying resource.
    fn flush(&self) {}

    /// Route `message` to the operation matching `severity`.
    fn trace(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Info => self.info(message),
            Severity::Debug => self.debug(message),
            Severity::Warning => self.warning(message),
            Severity::Error => self.error(message),
            Severity::Critical => self.critical(message),
            Severity::Fatal => self.fatal(message),
            Severity::Verbose => self.verbose(message),
        }
    }
}

/// `label + message` for `severity`.
pub fn labelled(severity: Severity, message: &str) -> String {
    let label = severity.label();
    let mut line = String::with_capacity(label.len() + message.len());
    line.push_str(label);
    line.push_str(message);
    line
}

/// Which backend the facade should build.
///
/// The hardware-trace kinds are recognised so configuration can name them,
/// but no backend for them ships with this crate.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(try_from = "String")]
pub enum TracerKind {
    /// Discard everything.
    Void,
    Console,
    File,
    Uart,
    Swd,
    Rtt,
}

impl TracerKind {
    /// Default kind when nothing is configured: the file tracer for builds
    /// with the `loaded-library` feature, the console otherwise.
    pub const fn platform_default() -> Self {
        if cfg!(feature = "loaded-library") {
            TracerKind::File
        } else {
            TracerKind::Console
        }
    }

    /// Whether this crate can build a backend for the kind.
    pub const fn is_supported(self) -> bool {
        matches!(self, TracerKind::Void | TracerKind::Console | TracerKind::File)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            TracerKind::Void => "void",
            TracerKind::Console => "console",
            TracerKind::File => "file",
            TracerKind::Uart => "uart",
            TracerKind::Swd => "swd",
            TracerKind::Rtt => "rtt",
        }
    }
}

impl Default for TracerKind {
    fn default() -> Self {
        Self::platform_default()
    }
}

impl fmt::Display for TracerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TracerKind {
    type Err = TracerLogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "void" | "devnull" | "discard" | "null" => Ok(TracerKind::Void),
            "console" | "stdout" => Ok(TracerKind::Console),
            "file" => Ok(TracerKind::File),
            "uart" => Ok(TracerKind::Uart),
            "swd" => Ok(TracerKind::Swd),
            "rtt" => Ok(TracerKind::Rtt),
            _ => Err(TracerLogError::invalid_tracer_kind(s)),
        }
    }
}

impl TryFrom<String> for TracerKind {
    type Error = TracerLogError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}
