//! The `Log` facade
//!
//! Holds the enabled-severity mask and the active backend. The mask is an
//! atomic, so level changes never block logging. The backend sits behind a
//! reader-writer lock: every log call takes the read side, reconfiguration
//! takes the write side, so swapping backends is safe while other threads
//! log.

use crate::config::{ConsoleConfig, LoggerConfig};
use crate::diagnostics::{Diagnostics, DiagnosticsSnapshot};
use crate::error::{Result, TracerLogError};
use crate::severity::{Severity, SeverityMask};
use crate::tracer::{self, Tracer, TracerKind, VoidTracer};
use std::fmt::{self, Write as _};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{PoisonError, RwLock, RwLockReadGuard};

/// The active backend together with the kind it was built from.
/// `kind` is `None` for tracers installed directly.
#[derive(Debug)]
struct ActiveBackend {
    kind: Option<TracerKind>,
    tracer: Box<dyn Tracer>,
}

/// Severity-filtered dispatcher over one active [`Tracer`].
#[derive(Debug)]
pub struct Log {
    mask: AtomicU32,
    backend: RwLock<ActiveBackend>,
    file_path: PathBuf,
    console: ConsoleConfig,
    diagnostics: Diagnostics,
}

impl Log {
    /// Facade with only `info` enabled and a backend of `kind` built from
    /// default settings. If the backend cannot be built the void tracer is
    /// installed instead.
    pub fn new(kind: TracerKind) -> Self {
        Self::from_config(&LoggerConfig {
            tracer: kind,
            ..Default::default()
        })
    }

    /// Like [`Log::new`], but a backend that fails to build is an error.
    pub fn try_new(kind: TracerKind) -> Result<Self> {
        Self::try_from_config(&LoggerConfig {
            tracer: kind,
            ..Default::default()
        })
    }

    /// Facade with only `info` enabled around an already built tracer.
    pub fn with_tracer(tracer: Box<dyn Tracer>) -> Self {
        Self::assemble(&LoggerConfig::default(), None, tracer)
    }

    /// Build from a configuration, falling back to the void tracer when the
    /// configured backend is unavailable.
    pub fn from_config(config: &LoggerConfig) -> Self {
        match tracer::build(config.tracer, &config.file_path, &config.console) {
            Ok(tracer) => Self::assemble(config, Some(config.tracer), tracer),
            Err(e) => {
                tracing::warn!(
                    "{} tracer unavailable, discarding output: {}",
                    config.tracer,
                    e
                );
                let log = Self::assemble(config, Some(TracerKind::Void), Box::new(VoidTracer));
                log.diagnostics.increment_fallbacks();
                log
            }
        }
    }

    /// Build from a configuration, returning the backend error if any.
    pub fn try_from_config(config: &LoggerConfig) -> Result<Self> {
        crate::config::validate_config(config)?;
        let tracer = tracer::build(config.tracer, &config.file_path, &config.console)?;
        Ok(Self::assemble(config, Some(config.tracer), tracer))
    }

    fn assemble(config: &LoggerConfig, kind: Option<TracerKind>, tracer: Box<dyn Tracer>) -> Self {
        Self {
            mask: AtomicU32::new(config.mask().bits()),
            backend: RwLock::new(ActiveBackend { kind, tracer }),
            file_path: config.file_path.clone(),
            console: config.console.clone(),
            diagnostics: Diagnostics::new(),
        }
    }

    /// Render `args` and hand it to the backend if `severity` is enabled.
    ///
    /// Disabled severities are dropped without rendering. A `Display`
    /// implementation that fails yields [`TracerLogError::Format`] and
    /// nothing is written.
    pub fn log(&self, severity: Severity, args: fmt::Arguments<'_>) -> Result<()> {
        if !self.is_severity_enabled(severity) {
            self.diagnostics.increment_suppressed();
            return Ok(());
        }

        let message = match args.as_str() {
            Some(literal) => std::borrow::Cow::Borrowed(literal),
            None => {
                let mut rendered = String::new();
                if let Err(e) = rendered.write_fmt(args) {
                    self.diagnostics.increment_format_errors();
                    return Err(TracerLogError::from(e));
                }
                std::borrow::Cow::Owned(rendered)
            }
        };

        self.dispatch(severity, &message);
        Ok(())
    }

    /// Hand an already rendered message to the backend if `severity` is enabled.
    pub fn log_str(&self, severity: Severity, message: &str) {
        if !self.is_severity_enabled(severity) {
            self.diagnostics.increment_suppressed();
            return;
        }
        self.dispatch(severity, message);
    }

    fn dispatch(&self, severity: Severity, message: &str) {
        self.read_backend().tracer.trace(severity, message);
        self.diagnostics.increment_dispatched();
    }

    pub fn is_severity_enabled(&self, severity: Severity) -> bool {
        self.mask().contains(severity)
    }

    /// Enable `severity` in addition to the ones already enabled.
    pub fn set_level(&self, severity: Severity) {
        self.mask.fetch_or(severity.bit(), Ordering::AcqRel);
    }

    pub fn clear_level(&self, severity: Severity) {
        self.mask.fetch_and(!severity.bit(), Ordering::AcqRel);
    }

    /// Mute every severity.
    pub fn reset_levels(&self) {
        self.mask.store(0, Ordering::Release);
    }

    pub fn set_mask(&self, mask: SeverityMask) {
        self.mask.store(mask.bits(), Ordering::Release);
    }

    pub fn mask(&self) -> SeverityMask {
        SeverityMask::from_bits_truncate(self.mask.load(Ordering::Acquire))
    }

    /// Replace the backend with a new one of `kind`.
    ///
    /// On failure the void tracer becomes active and the error is returned.
    pub fn configure(&self, kind: TracerKind) -> Result<()> {
        let built = tracer::build(kind, &self.file_path, &self.console);
        self.install_built(kind, built)
    }

    /// Replace the backend with a file tracer appending to `path`.
    pub fn configure_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let built = tracer::FileTracer::open(path).map(|t| Box::new(t) as Box<dyn Tracer>);
        self.install_built(TracerKind::File, built)
    }

    /// Make a caller-provided tracer the active backend.
    pub fn install(&self, tracer: Box<dyn Tracer>) {
        self.swap(ActiveBackend { kind: None, tracer });
    }

    fn install_built(&self, kind: TracerKind, built: Result<Box<dyn Tracer>>) -> Result<()> {
        match built {
            Ok(tracer) => {
                self.swap(ActiveBackend {
                    kind: Some(kind),
                    tracer,
                });
                Ok(())
            }
            Err(e) => {
                tracing::warn!("{} tracer unavailable, discarding output: {}", kind, e);
                self.swap(ActiveBackend {
                    kind: Some(TracerKind::Void),
                    tracer: Box::new(VoidTracer),
                });
                self.diagnostics.increment_fallbacks();
                Err(e)
            }
        }
    }

    fn swap(&self, next: ActiveBackend) {
        let previous = {
            let mut active = self.backend.write().unwrap_or_else(PoisonError::into_inner);
            std::mem::replace(&mut *active, next)
        };
        // The old backend is flushed and released outside the lock.
        previous.tracer.flush();
        tracing::debug!("tracer {} replaced", previous.tracer.name());
        drop(previous);
        self.diagnostics.increment_reconfigurations();
    }

    /// Kind of the active backend; `None` for tracers installed directly.
    pub fn active_kind(&self) -> Option<TracerKind> {
        self.read_backend().kind
    }

    pub fn backend_name(&self) -> &'static str {
        self.read_backend().tracer.name()
    }

    pub fn flush(&self) {
        self.read_backend().tracer.flush();
    }

    pub fn diagnostics(&self) -> DiagnosticsSnapshot {
        self.diagnostics.snapshot()
    }

    fn read_backend(&self) -> RwLockReadGuard<'_, ActiveBackend> {
        self.backend.read().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Report a failed macro-path log call through `tracing`.
#[doc(hidden)]
pub fn report(result: Result<()>) {
    if let Err(e) = result {
        tracing::error!(category = e.category(), "log call failed: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Debug, Default, Clone)]
    struct Recorder {
        lines: Arc<Mutex<Vec<String>>>,
    }

    impl Recorder {
        fn lines(&self) -> Vec<String> {
            self.lines.lock().unwrap().clone()
        }
    }

    impl Tracer for Recorder {
        fn info(&self, message: &str) {
            self.lines.lock().unwrap().push(message.to_string());
        }

        fn name(&self) -> &'static str {
            "recorder"
        }
    }

    struct Failing;

    impl fmt::Display for Failing {
        fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
            Err(fmt::Error)
        }
    }

    fn recording_log() -> (Log, Recorder) {
        let recorder = Recorder::default();
        (Log::with_tracer(Box::new(recorder.clone())), recorder)
    }

    #[test]
    fn test_default_mask_is_info_only() {
        let (log, _) = recording_log();
        assert_eq!(log.mask(), SeverityMask::from(Severity::Info));
        assert!(log.is_severity_enabled(Severity::Info));
        assert!(!log.is_severity_enabled(Severity::Debug));
    }

    #[test]
    fn test_enabled_severity_dispatches_with_label() {
        let (log, recorder) = recording_log();
        log.set_level(Severity::Critical);

        log.log(Severity::Info, format_args!("hello {}", 42)).unwrap();
        log.log(Severity::Critical, format_args!("core {}", "meltdown")).unwrap();

        assert_eq!(recorder.lines(), vec!["hello 42", "CRITICAL: core meltdown"]);
        assert_eq!(log.diagnostics().messages_dispatched, 2);
    }

    #[test]
    fn test_every_severity_is_routed() {
        let (log, recorder) = recording_log();
        log.set_mask(SeverityMask::all());
        for severity in Severity::ALL {
            log.log(severity, format_args!("x")).unwrap();
        }
        let lines = recorder.lines();
        assert_eq!(lines.len(), Severity::ALL.len());
        assert!(lines.contains(&"ERROR: x".to_string()));
        assert!(lines.contains(&"*** FATAL ***: x".to_string()));
    }

    #[test]
    fn test_disabled_severity_is_dropped() {
        let (log, recorder) = recording_log();
        log.log(Severity::Debug, format_args!("hidden")).unwrap();
        log.log_str(Severity::Warning, "hidden too");

        assert!(recorder.lines().is_empty());
        assert_eq!(log.diagnostics().messages_suppressed, 2);
    }

    #[test]
    fn test_reset_levels_mutes_everything() {
        let (log, recorder) = recording_log();
        log.set_mask(SeverityMask::all());
        log.reset_levels();
        for severity in Severity::ALL {
            log.log(severity, format_args!("muted")).unwrap();
        }
        assert!(recorder.lines().is_empty());
        assert!(log.mask().is_empty());
    }

    #[test]
    fn test_set_then_clear_restores_status() {
        let (log, _) = recording_log();
        let before = log.mask();
        for severity in Severity::ALL.into_iter().filter(|s| !before.contains(*s)) {
            log.set_level(severity);
            assert!(log.is_severity_enabled(severity));
            log.clear_level(severity);
            assert!(!log.is_severity_enabled(severity));
            assert_eq!(log.mask(), before);
        }
    }

    #[test]
    fn test_format_failure_is_reported() {
        let (log, recorder) = recording_log();
        let err = log.log(Severity::Info, format_args!("value: {}", Failing)).unwrap_err();
        assert!(matches!(err, TracerLogError::Format { .. }));
        assert!(recorder.lines().is_empty());
        assert_eq!(log.diagnostics().format_errors, 1);
    }

    #[test]
    fn test_format_failure_of_disabled_severity_is_not_rendered() {
        let (log, _) = recording_log();
        assert!(log.log(Severity::Debug, format_args!("{}", Failing)).is_ok());
    }

    #[test]
    fn test_configure_replaces_backend() {
        let (log, recorder) = recording_log();
        assert_eq!(log.active_kind(), None);

        log.configure(TracerKind::Void).unwrap();
        assert_eq!(log.active_kind(), Some(TracerKind::Void));
        assert_eq!(log.backend_name(), "void");

        log.log(Severity::Info, format_args!("gone")).unwrap();
        assert!(recorder.lines().is_empty());
        assert_eq!(log.diagnostics().reconfigurations, 1);
    }

    #[test]
    fn test_configure_unsupported_falls_back_to_void() {
        let (log, recorder) = recording_log();
        let err = log.configure(TracerKind::Rtt).unwrap_err();
        assert!(matches!(err, TracerLogError::UnsupportedTracer(_)));
        assert_eq!(log.active_kind(), Some(TracerKind::Void));
        assert_eq!(log.diagnostics().fallbacks, 1);

        log.log(Severity::Info, format_args!("dropped")).unwrap();
        assert!(recorder.lines().is_empty());
    }

    #[test]
    fn test_mask_survives_reconfiguration() {
        let (log, _) = recording_log();
        log.set_level(Severity::Debug);
        log.configure(TracerKind::Void).unwrap();
        assert!(log.is_severity_enabled(Severity::Debug));
    }

    #[test]
    fn test_try_new_reports_unsupported() {
        assert!(matches!(
            Log::try_new(TracerKind::Uart),
            Err(TracerLogError::UnsupportedTracer(_))
        ));
        let log = Log::new(TracerKind::Uart);
        assert_eq!(log.active_kind(), Some(TracerKind::Void));
        assert_eq!(log.diagnostics().fallbacks, 1);
    }

    #[test]
    fn test_install_during_concurrent_logging() {
        let (log, first) = recording_log();
        let log = Arc::new(log);
        let second = Recorder::default();

        let writers: Vec<_> = (0..4)
            .map(|t| {
                let log = Arc::clone(&log);
                std::thread::spawn(move || {
                    for i in 0..200 {
                        log.log(Severity::Info, format_args!("{}-{}", t, i)).unwrap();
                    }
                })
            })
            .collect();
        log.install(Box::new(second.clone()));
        for writer in writers {
            writer.join().unwrap();
        }

        assert_eq!(first.lines().len() + second.lines().len(), 800);
    }
}
