//! File tracer
//!
//! Appends `[YYYY-MM-DD HH:MM:SS] label message` to a file opened once at
//! construction. Every write happens under a mutex and is flushed before
//! the lock is released.

use super::traits::Tracer;
use crate::error::{Result, TracerLogError};
use crate::timestamp;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Default log file, relative to the working directory.
pub const DEFAULT_LOG_FILE: &str = "log.txt";

/// Append-only file tracer
#[derive(Debug)]
pub struct FileTracer {
    path: PathBuf,
    file: Mutex<File>,
}

impl FileTracer {
    /// Open `path` for appending, creating it if missing.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| TracerLogError::backend_unavailable(&path, e))?;

        tracing::debug!("FileTracer opened {}", path.display());
        Ok(Self {
            path,
            file: Mutex::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Tracer for FileTracer {
    fn info(&self, message: &str) {
        let line = timestamp::stamp(message);
        let mut file = match self.file.lock() {
            Ok(file) => file,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Err(e) = file.write_all(line.as_bytes()).and_then(|_| file.flush()) {
            tracing::error!("FileTracer failed to write {}: {}", self.path.display(), e);
        }
    }

    fn name(&self) -> &'static str {
        "file"
    }

    fn flush(&self) {
        let file = match self.file.lock() {
            Ok(file) => file,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Err(e) = file.sync_data() {
            tracing::warn!("FileTracer failed to sync {}: {}", self.path.display(), e);
        }
    }
}
