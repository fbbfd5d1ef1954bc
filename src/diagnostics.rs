//! Runtime counters of a [`Log`](crate::Log) facade.
//!
//! Counters use relaxed atomics; a snapshot is not a consistent cut across
//! counters while other threads are logging.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Per-facade counters.
#[derive(Debug)]
pub struct Diagnostics {
    start_time: Instant,

    /// Messages handed to the backend
    messages_dispatched: AtomicU64,

    /// Messages dropped because their severity was disabled
    messages_suppressed: AtomicU64,

    /// Messages whose rendering failed
    format_errors: AtomicU64,

    /// Successful backend replacements
    reconfigurations: AtomicU64,

    /// Times the void tracer was installed because a backend failed to build
    fallbacks: AtomicU64,
}

/// Point-in-time copy of [`Diagnostics`].
#[derive(Debug, Clone, PartialEq)]
pub struct DiagnosticsSnapshot {
    pub uptime: Duration,
    pub messages_dispatched: u64,
    pub messages_suppressed: u64,
    pub format_errors: u64,
    pub reconfigurations: u64,
    pub fallbacks: u64,
}

impl Default for Diagnostics {
    fn default() -> Self {
        Self::new()
    }
}

impl Diagnostics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            messages_dispatched: AtomicU64::new(0),
            messages_suppressed: AtomicU64::new(0),
            format_errors: AtomicU64::new(0),
            reconfigurations: AtomicU64::new(0),
            fallbacks: AtomicU64::new(0),
        }
    }

    pub fn increment_dispatched(&self) {
        self.messages_dispatched.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_suppressed(&self) {
        self.messages_suppressed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_format_errors(&self) {
        self.format_errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_reconfigurations(&self) {
        self.reconfigurations.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_fallbacks(&self) {
        self.fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> DiagnosticsSnapshot {
        DiagnosticsSnapshot {
            uptime: self.start_time.elapsed(),
            messages_dispatched: self.messages_dispatched.load(Ordering::Relaxed),
            messages_suppressed: self.messages_suppressed.load(Ordering::Relaxed),
            format_errors: self.format_errors.load(Ordering::Relaxed),
            reconfigurations: self.reconfigurations.load(Ordering::Relaxed),
            fallbacks: self.fallbacks.load(Ordering::Relaxed),
        }
    }

    /// Zero every counter (mainly for tests).
    pub fn reset(&self) {
        self.messages_dispatched.store(0, Ordering::Relaxed);
        self.messages_suppressed.store(0, Ordering::Relaxed);
        self.format_errors.store(0, Ordering::Relaxed);
        self.reconfigurations.store(0, Ordering::Relaxed);
        self.fallbacks.store(0, Ordering::Relaxed);
    }
}
