//! Logging macros.
//!
//! Each macro takes comma-separated [`Display`](core::fmt::Display) parts that
//! are concatenated without separators, prefixed by the call-site
//! [`Context`](crate::context::Context). An optional leading `logger: <expr>;`
//! selects the logger; otherwise the global one from [`logger()`](crate::logger)
//! is used.
//!
//! Call sites whose severity is above
//! [`MAX_COMPILED_SEVERITY`](crate::MAX_COMPILED_SEVERITY) are guarded by a
//! constant `false` and compiled away. Below the ceiling, nothing is formatted
//! unless the runtime threshold lets the message through.

#[doc(hidden)]
#[macro_export]
macro_rules! __emit {
    ($logger:expr, $severity:expr, $method:ident, $($part:expr),+) => {{
        if $severity.is_compiled() {
            let logger: &$crate::Logger = &$logger;
            if logger.enabled($severity) {
                logger.$method(&[&$crate::__context!(), $(&$part),+]);
            }
        }
    }};
}

/// Logs at a severity chosen at run time.
///
/// With `Severity::Critical` this terminates the process, unless the threshold
/// is `Off`.
#[macro_export]
macro_rules! log {
    (logger: $logger:expr; $severity:expr, $($part:expr),+ $(,)?) => {{
        let severity: $crate::Severity = $severity;
        if severity.is_compiled() {
            let logger: &$crate::Logger = &$logger;
            logger.log(severity, &[&$crate::__context!(), $(&$part),+]);
        }
    }};
    ($severity:expr, $($part:expr),+ $(,)?) => {
        $crate::log!(logger: $crate::logger(); $severity, $($part),+)
    };
}

#[macro_export]
macro_rules! trace {
    (logger: $logger:expr; $($part:expr),+ $(,)?) => {
        $crate::__emit!($logger, $crate::Severity::Trace, trace, $($part),+)
    };
    ($($part:expr),+ $(,)?) => {
        $crate::trace!(logger: $crate::logger(); $($part),+)
    };
}

#[macro_export]
macro_rules! debug {
    (logger: $logger:expr; $($part:expr),+ $(,)?) => {
        $crate::__emit!($logger, $crate::Severity::Debug, debug, $($part),+)
    };
    ($($part:expr),+ $(,)?) => {
        $crate::debug!(logger: $crate::logger(); $($part),+)
    };
}

#[macro_export]
macro_rules! verbose {
    (logger: $logger:expr; $($part:expr),+ $(,)?) => {
        $crate::__emit!($logger, $crate::Severity::Verbose, verbose, $($part),+)
    };
    ($($part:expr),+ $(,)?) => {
        $crate::verbose!(logger: $crate::logger(); $($part),+)
    };
}

#[macro_export]
macro_rules! info {
    (logger: $logger:expr; $($part:expr),+ $(,)?) => {
        $crate::__emit!($logger, $crate::Severity::Info, info, $($part),+)
    };
    ($($part:expr),+ $(,)?) => {
        $crate::info!(logger: $crate::logger(); $($part),+)
    };
}

#[macro_export]
macro_rules! warning {
    (logger: $logger:expr; $($part:expr),+ $(,)?) => {
        $crate::__emit!($logger, $crate::Severity::Warning, warning, $($part),+)
    };
    ($($part:expr),+ $(,)?) => {
        $crate::warning!(logger: $crate::logger(); $($part),+)
    };
}

#[macro_export]
macro_rules! error {
    (logger: $logger:expr; $($part:expr),+ $(,)?) => {
        $crate::__emit!($logger, $crate::Severity::Error, error, $($part),+)
    };
    ($($part:expr),+ $(,)?) => {
        $crate::error!(logger: $crate::logger(); $($part),+)
    };
}

/// Logs at critical severity and **exits the process** with status 1.
///
/// Gated like the other levels: with the threshold at `Off`, or a compiled
/// ceiling of `Off`, the call does nothing and returns.
#[macro_export]
macro_rules! critical {
    (logger: $logger:expr; $($part:expr),+ $(,)?) => {
        $crate::__emit!($logger, $crate::Severity::Critical, critical, $($part),+)
    };
    ($($part:expr),+ $(,)?) => {
        $crate::critical!(logger: $crate::logger(); $($part),+)
    };
}
