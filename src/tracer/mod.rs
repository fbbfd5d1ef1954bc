//! Tracer backends
//!
//! - [`VoidTracer`]: discards everything
//! - [`ConsoleTracer`]: standard output, optionally coloured
//! - [`FileTracer`]: timestamped appends to a file
//!
//! [`build`] turns a [`TracerKind`] plus settings into a boxed backend.

pub mod console;
pub mod file;
pub mod traits;
pub mod void;

pub use console::ConsoleTracer;
pub use file::{FileTracer, DEFAULT_LOG_FILE};
pub use traits::{labelled, Tracer, TracerKind};
pub use void::VoidTracer;

use crate::config::ConsoleConfig;
use crate::error::{Result, TracerLogError};
use std::path::Path;

/// Build the backend for `kind`.
///
/// `file_path` is only consulted for [`TracerKind::File`], `console` only for
/// [`TracerKind::Console`].
pub fn build(kind: TracerKind, file_path: &Path, console: &ConsoleConfig) -> Result<Box<dyn Tracer>> {
    match kind {
        TracerKind::Void => Ok(Box::new(VoidTracer::new())),
        TracerKind::Console => Ok(Box::new(ConsoleTracer::new(console.clone()))),
        TracerKind::File => Ok(Box::new(FileTracer::open(file_path)?)),
        TracerKind::Uart | TracerKind::Swd | TracerKind::Rtt => {
            Err(TracerLogError::unsupported(kind.as_str()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_build_supported_kinds() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("build.log");
        let console = ConsoleConfig::default();

        assert_eq!(build(TracerKind::Void, &path, &console).unwrap().name(), "void");
        assert_eq!(build(TracerKind::Console, &path, &console).unwrap().name(), "console");
        assert_eq!(build(TracerKind::File, &path, &console).unwrap().name(), "file");
        assert!(path.exists());
    }

    #[test]
    fn test_build_hardware_kinds_unsupported() {
        let console = ConsoleConfig::default();
        for kind in [TracerKind::Uart, TracerKind::Swd, TracerKind::Rtt] {
            let err = build(kind, Path::new(DEFAULT_LOG_FILE), &console).unwrap_err();
            assert!(matches!(err, TracerLogError::UnsupportedTracer(_)));
        }
    }
}
