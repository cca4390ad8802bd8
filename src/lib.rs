#![cfg_attr(docsrs, feature(doc_cfg))]

#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]
//! <br><br>
//!
//! ## You're probably looking for:
//! * [`Logger`](Logger)
//! * [`info!`], [`warning!`], [`error!`] and the other macros
//! * [`logger()`] (feature "singleton")

pub mod prelude;
pub mod error;
pub mod context;
pub(crate) mod levels;
pub(crate) mod streams;
pub(crate) mod format;
pub(crate) mod progress;
pub(crate) mod flags;
pub(crate) mod sync;
mod macros;
#[cfg(feature = "log")]
pub mod facade;

pub use prelude::{
    Logger, LoggerBuilder, LoggerError, Severity, Streams, Destination,
    LEVEL_ENV_VAR, MAX_COMPILED_SEVERITY,
};
pub use format::Seconds;

#[cfg(all(feature = "singleton", not(all(test, feature = "loom"))))]
pub use sync::logger;

#[cfg(all(feature = "log", feature = "singleton", not(all(test, feature = "loom"))))]
pub use facade::install_global_facade;
