//! Console tracer
//!
//! Writes each message to standard output (or an injected writer) in one
//! locked `write_all`, optionally coloured per severity.

use super::traits::{labelled, Tracer};
use crate::config::ConsoleConfig;
use crate::severity::Severity;
use crate::timestamp;
use colored::{Color, Colorize};
use std::fmt;
use std::io::{self, Write};
use std::sync::Mutex;

/// Console output tracer
pub struct ConsoleTracer {
    config: ConsoleConfig,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleTracer {
    /// Console tracer on the process's standard output.
    pub fn new(config: ConsoleConfig) -> Self {
        Self::with_writer(config, Box::new(io::stdout()))
    }

    /// Console tracer on any writer; used to capture output.
    pub fn with_writer(config: ConsoleConfig, writer: Box<dyn Write + Send>) -> Self {
        Self {
            config,
            writer: Mutex::new(writer),
        }
    }

    pub fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    fn render(&self, severity: Severity, message: &str) -> String {
        let mut line = labelled(severity, message);
        if self.config.timestamps {
            line = timestamp::stamp(&line);
        }
        if !self.config.color_enabled {
            return line;
        }

        // The reset goes before the line ending so the next line starts neutral.
        let (body, ending) = split_line_ending(&line);
        let colored = body.color(severity_color(severity));
        let painted = match severity {
            Severity::Fatal => colored.on_color(Color::Red),
            _ => colored,
        };
        format!("{}{}", painted, ending)
    }

    fn emit(&self, severity: Severity, message: &str) {
        let line = self.render(severity, message);
        let mut writer = match self.writer.lock() {
            Ok(writer) => writer,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Err(e) = writer
            .write_all(line.as_bytes())
            .and_then(|_| writer.flush())
        {
            tracing::warn!("ConsoleTracer write failed: {}", e);
        }
    }
}

/// Splits a trailing `\n` or `\r\n` off `line`.
fn split_line_ending(line: &str) -> (&str, &str) {
    if let Some(body) = line.strip_suffix("\r\n") {
        (body, "\r\n")
    } else if let Some(body) = line.strip_suffix('\n') {
        (body, "\n")
    } else {
        (line, "")
    }
}

/// Foreground colour for each severity.
pub fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Info => Color::BrightCyan,
        Severity::Debug => Color::BrightGreen,
        Severity::Warning => Color::BrightYellow,
        Severity::Error => Color::BrightRed,
        Severity::Critical => Color::BrightMagenta,
        Severity::Fatal => Color::BrightRed,
        Severity::Verbose => Color::White,
    }
}

impl fmt::Debug for ConsoleTracer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleTracer")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Tracer for ConsoleTracer {
    fn info(&self, message: &str) {
        self.emit(Severity::Info, message);
    }

    fn debug(&self, message: &str) {
        self.emit(Severity::Debug, message);
    }

    fn warning(&self, message: &str) {
        self.emit(Severity::Warning, message);
    }

    fn error(&self, message: &str) {
        self.emit(Severity::Error, message);
    }

    fn critical(&self, message: &str) {
        self.emit(Severity::Critical, message);
    }

    fn fatal(&self, message: &str) {
        self.emit(Severity::Fatal, message);
    }

    fn verbose(&self, message: &str) {
        self.emit(Severity::Verbose, message);
    }

    fn name(&self) -> &'static str {
        "console"
    }

    fn flush(&self) {
        let mut writer = match self.writer.lock() {
            Ok(writer) => writer,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Err(e) = writer.flush() {
            tracing::warn!("ConsoleTracer flush failed: {}", e);
        }
    }
}
