//! Severity levels and the bitmask of enabled severities.

use crate::error::{Result, TracerLogError};
use serde::Deserialize;
use std::fmt;
use std::ops::{BitOr, BitOrAssign};
use std::str::FromStr;

/// A single log severity. Each variant owns one distinct bit.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(try_from = "String")]
#[repr(u32)]
pub enum Severity {
    Info = 1 << 0,
    Debug = 1 << 1,
    Warning = 1 << 2,
    Error = 1 << 3,
    Critical = 1 << 4,
    Fatal = 1 << 5,
    Verbose = 1 << 6,
}

impl Severity {
    /// All severities, in bit order.
    pub const ALL: [Severity; 7] = [
        Severity::Info,
        Severity::Debug,
        Severity::Warning,
        Severity::Error,
        Severity::Critical,
        Severity::Fatal,
        Severity::Verbose,
    ];

    /// The bit this severity occupies in a [`SeverityMask`].
    #[inline]
    pub const fn bit(self) -> u32 {
        self as u32
    }

    /// Literal prefix written in front of the message. `Info` has none.
    pub const fn label(self) -> &'static str {
        match self {
            Severity::Info => "",
            Severity::Debug => "Debug: ",
            Severity::Warning => "Warning: ",
            Severity::Error => "ERROR: ",
            Severity::Critical => "CRITICAL: ",
            Severity::Fatal => "*** FATAL ***: ",
            Severity::Verbose => "Verbose: ",
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Debug => "debug",
            Severity::Warning => "warning",
            Severity::Error => "error",
            Severity::Critical => "critical",
            Severity::Fatal => "fatal",
            Severity::Verbose => "verbose",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = TracerLogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "info" => Ok(Severity::Info),
            "debug" => Ok(Severity::Debug),
            "warning" | "warn" => Ok(Severity::Warning),
            "error" => Ok(Severity::Error),
            "critical" => Ok(Severity::Critical),
            "fatal" => Ok(Severity::Fatal),
            "verbose" => Ok(Severity::Verbose),
            _ => Err(TracerLogError::invalid_severity(s)),
        }
    }
}

impl TryFrom<String> for Severity {
    type Error = TracerLogError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

/// Set of enabled severities, stored as OR-ed bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SeverityMask(u32);

impl SeverityMask {
    const VALID_BITS: u32 = (1 << 7) - 1;

    /// No severity enabled.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Every severity enabled.
    pub const fn all() -> Self {
        Self(Self::VALID_BITS)
    }

    /// Build a mask from raw bits, dropping bits that name no severity.
    pub const fn from_bits_truncate(bits: u32) -> Self {
        Self(bits & Self::VALID_BITS)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn contains(self, severity: Severity) -> bool {
        self.0 & severity.bit() != 0
    }

    pub fn insert(&mut self, severity: Severity) {
        self.0 |= severity.bit();
    }

    pub fn remove(&mut self, severity: Severity) {
        self.0 &= !severity.bit();
    }

    /// Enabled severities in bit order.
    pub fn iter(self) -> impl Iterator<Item = Severity> {
        Severity::ALL.into_iter().filter(move |s| self.contains(*s))
    }
}

impl From<Severity> for SeverityMask {
    fn from(severity: Severity) -> Self {
        Self(severity.bit())
    }
}

impl FromIterator<Severity> for SeverityMask {
    fn from_iter<I: IntoIterator<Item = Severity>>(iter: I) -> Self {
        let mut mask = SeverityMask::empty();
        for severity in iter {
            mask.insert(severity);
        }
        mask
    }
}

impl BitOr for SeverityMask {
    type Output = SeverityMask;

    fn bitor(self, rhs: SeverityMask) -> SeverityMask {
        SeverityMask(self.0 | rhs.0)
    }
}

impl BitOr<Severity> for SeverityMask {
    type Output = SeverityMask;

    fn bitor(self, rhs: Severity) -> SeverityMask {
        SeverityMask(self.0 | rhs.bit())
    }
}

impl BitOr for Severity {
    type Output = SeverityMask;

    fn bitor(self, rhs: Severity) -> SeverityMask {
        SeverityMask(self.bit() | rhs.bit())
    }
}

impl BitOrAssign<Severity> for SeverityMask {
    fn bitor_assign(&mut self, rhs: Severity) {
        self.insert(rhs);
    }
}

impl fmt::Display for SeverityMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("none");
        }
        let names: Vec<&str> = self.iter().map(Severity::as_str).collect();
        f.write_str(&names.join(","))
    }
}

/// Parses `"info,debug"`, `"all"` or `"none"`.
impl FromStr for SeverityMask {
    type Err = TracerLogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "all" => return Ok(SeverityMask::all()),
            "none" | "" => return Ok(SeverityMask::empty()),
            _ => {}
        }
        s.split(',')
            .filter(|part| !part.trim().is_empty())
            .map(str::parse::<Severity>)
            .collect()
    }
}
