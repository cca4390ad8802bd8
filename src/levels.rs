use core::fmt::{self, Display, Formatter};
use core::str::FromStr;

use crate::error::LoggerError;
use crate::streams::Destination;

/// Ordered logging severity.
///
/// A message is emitted when its rank is lower than or equal to the rank of the
/// logger's threshold. `Off` is only meaningful as a threshold: it silences
/// every message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Severity {
    Off = 0,
    Critical = 1,
    Error = 2,
    Warning = 3,
    Info = 4,
    Verbose = 5,
    Debug = 6,
    Trace = 7,
}

/// Highest severity whose call sites survive compilation.
///
/// Selected with the `max-level-*` cargo features; the lowest enabled feature
/// wins. Without any of them every severity is compiled in.
pub const MAX_COMPILED_SEVERITY: Severity = compiled_ceiling();

const fn compiled_ceiling() -> Severity {
    if cfg!(feature = "max-level-off") {
        Severity::Off
    } else if cfg!(feature = "max-level-critical") {
        Severity::Critical
    } else if cfg!(feature = "max-level-error") {
        Severity::Error
    } else if cfg!(feature = "max-level-warning") {
        Severity::Warning
    } else if cfg!(feature = "max-level-info") {
        Severity::Info
    } else if cfg!(feature = "max-level-verbose") {
        Severity::Verbose
    } else if cfg!(feature = "max-level-debug") {
        Severity::Debug
    } else {
        Severity::Trace
    }
}

impl Severity {
    /// Every severity, from `Off` to `Trace`.
    pub const ALL: [Severity; 8] = [
        Severity::Off,
        Severity::Critical,
        Severity::Error,
        Severity::Warning,
        Severity::Info,
        Severity::Verbose,
        Severity::Debug,
        Severity::Trace,
    ];

    #[inline]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Const-friendly comparison, used by the macros to strip call sites above
    /// [`MAX_COMPILED_SEVERITY`].
    #[inline]
    pub const fn is_compiled(self) -> bool {
        self as u8 <= MAX_COMPILED_SEVERITY as u8
    }

    /// Bracketed tag padded so message bodies line up in a column.
    pub const fn tag(self) -> &'static str {
        match self {
            Severity::Off => "",
            Severity::Critical => "[CRITICAL] ",
            Severity::Error => "[ERROR]    ",
            Severity::Warning => "[WARNING]  ",
            Severity::Info => "[INFO]     ",
            Severity::Verbose => "[VERBOSE]  ",
            Severity::Debug => "[DEBUG]    ",
            Severity::Trace => "[TRACE]    ",
        }
    }

    /// Stream receiving messages of this severity.
    pub const fn destination(self) -> Destination {
        match self {
            Severity::Info => Destination::Output,
            Severity::Error | Severity::Critical => Destination::Error,
            Severity::Off
            | Severity::Warning
            | Severity::Verbose
            | Severity::Debug
            | Severity::Trace => Destination::Diagnostic,
        }
    }

    pub(crate) const fn from_rank(rank: u8) -> Option<Severity> {
        match rank {
            0 => Some(Severity::Off),
            1 => Some(Severity::Critical),
            2 => Some(Severity::Error),
            3 => Some(Severity::Warning),
            4 => Some(Severity::Info),
            5 => Some(Severity::Verbose),
            6 => Some(Severity::Debug),
            7 => Some(Severity::Trace),
            _ => None,
        }
    }

    const fn name(self) -> &'static str {
        match self {
            Severity::Off => "OFF",
            Severity::Critical => "CRITICAL",
            Severity::Error => "ERROR",
            Severity::Warning => "WARNING",
            Severity::Info => "INFO",
            Severity::Verbose => "VERBOSE",
            Severity::Debug => "DEBUG",
            Severity::Trace => "TRACE",
        }
    }
}

impl Display for Severity {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for Severity {
    type Error = LoggerError;

    fn try_from(rank: u8) -> Result<Self, LoggerError> {
        Severity::from_rank(rank).ok_or_else(|| LoggerError::InvalidSeverity(rank.to_string()))
    }
}

impl FromStr for Severity {
    type Err = LoggerError;

    /// Accepts a case-insensitive name (`warn` is an alias of `warning`) or a
    /// decimal rank between 0 and 7.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(rank) = trimmed.parse::<u8>() {
            return Severity::try_from(rank);
        }

        match trimmed.to_ascii_lowercase().as_str() {
            "off" => Ok(Severity::Off),
            "critical" => Ok(Severity::Critical),
            "error" => Ok(Severity::Error),
            "warning" | "warn" => Ok(Severity::Warning),
            "info" => Ok(Severity::Info),
            "verbose" => Ok(Severity::Verbose),
            "debug" => Ok(Severity::Debug),
            "trace" => Ok(Severity::Trace),
            _ => Err(LoggerError::InvalidSeverity(s.to_string())),
        }
    }
}
