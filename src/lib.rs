//! tracer_log - severity-filtered logging with pluggable tracers
//!
//! A [`Log`] facade holds a bitmask of enabled [`Severity`] levels and one
//! active [`Tracer`] backend: discard, console or file. Messages whose
//! severity is enabled are rendered and routed to the backend operation for
//! that severity.
//!
//! # Quick start
//!
//! ```rust
//! use tracer_log::{log_debug, log_info, Severity};
//!
//! tracer_log::get().set_level(Severity::Debug);
//! log_info!("Application started\n");
//! log_debug!("{} workers ready\n", 4);
//! ```
//!
//! # Explicit construction
//!
//! Components that should not reach for process-wide state can own a
//! facade instead:
//!
//! ```rust
//! use tracer_log::{Log, Severity, TracerKind};
//!
//! let log = Log::new(TracerKind::Void);
//! log.set_level(Severity::Warning);
//! log.log(Severity::Warning, format_args!("disk {}% full", 91))?;
//! # Ok::<(), tracer_log::TracerLogError>(())
//! ```

pub mod config;
pub mod diagnostics;
pub mod env_config;
pub mod error;
pub mod facade;
mod macros;
pub mod severity;
pub mod timestamp;
pub mod tracer;

pub use config::{load_config_from_file, load_config_from_str, ConsoleConfig, LoggerConfig};
pub use diagnostics::DiagnosticsSnapshot;
pub use error::{Result, TracerLogError};
pub use facade::Log;
pub use severity::{Severity, SeverityMask};
pub use tracer::{ConsoleTracer, FileTracer, Tracer, TracerKind, VoidTracer};

use once_cell::sync::Lazy;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Process-wide facade, built on first use from [`LoggerConfig::from_env`].
static GLOBAL_LOG: Lazy<Log> = Lazy::new(|| Log::from_config(&LoggerConfig::from_env()));

/// The process-wide [`Log`].
///
/// Built on first call with only `info` enabled (unless `TRACER_LOG_LEVELS`
/// says otherwise) and the backend named by `TRACER_LOG_KIND`, or
/// [`TracerKind::platform_default`] when unset. Lives until process exit.
///
/// ```rust
/// use tracer_log::{get, Severity};
///
/// assert!(std::ptr::eq(get(), get()));
/// let _ = get().is_severity_enabled(Severity::Info);
/// ```
pub fn get() -> &'static Log {
    &GLOBAL_LOG
}
