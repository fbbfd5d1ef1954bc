//! Logging macros on the process-wide facade.
//!
//! Failures are reported through `tracing` rather than returned; call
//! [`Log::log`](crate::Log::log) directly to handle them.

/// Log at `severity` on [`get()`](crate::get).
///
/// ```rust
/// tracer_log::tlog!(tracer_log::Severity::Info, "{} + {} = {}\n", 1, 1, 2);
/// ```
#[macro_export]
macro_rules! tlog {
    ($severity:expr, $($arg:tt)+) => {
        $crate::facade::report($crate::get().log($severity, ::std::format_args!($($arg)+)))
    };
}

#[macro_export]
macro_rules! log_info {
    ($($arg:tt)+) => { $crate::tlog!($crate::Severity::Info, $($arg)+) };
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)+) => { $crate::tlog!($crate::Severity::Debug, $($arg)+) };
}

#[macro_export]
macro_rules! log_warning {
    ($($arg:tt)+) => { $crate::tlog!($crate::Severity::Warning, $($arg)+) };
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)+) => { $crate::tlog!($crate::Severity::Error, $($arg)+) };
}

#[macro_export]
macro_rules! log_critical {
    ($($arg:tt)+) => { $crate::tlog!($crate::Severity::Critical, $($arg)+) };
}

#[macro_export]
macro_rules! log_fatal {
    ($($arg:tt)+) => { $crate::tlog!($crate::Severity::Fatal, $($arg)+) };
}

#[macro_export]
macro_rules! log_verbose {
    ($($arg:tt)+) => { $crate::tlog!($crate::Severity::Verbose, $($arg)+) };
}
