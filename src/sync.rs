#[cfg(not(all(test, feature = "loom")))]
pub(crate) use std::sync::{
    atomic::{AtomicU8, Ordering},
    Mutex, MutexGuard,
};

#[cfg(all(test, feature = "loom"))]
pub(crate) use loom::sync::{
    atomic::{AtomicU8, Ordering},
    Mutex, MutexGuard,
};

use std::sync::PoisonError;

#[cfg(all(feature = "singleton", not(all(test, feature = "loom"))))]
use lazy_static::lazy_static;

#[cfg(all(feature = "singleton", not(all(test, feature = "loom"))))]
use crate::prelude::Logger;

/// Locks `mutex`, recovering the data if a panicking thread poisoned it.
///
/// Every critical section in this crate leaves its data consistent between
/// statements, so a poisoned lock is still safe to reuse.
#[inline]
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(all(feature = "singleton", not(all(test, feature = "loom"))))]
lazy_static! {
    static ref LOGGER: Logger = Logger::from_env();
}

/// The process-wide logger used by the macros when no explicit logger is given.
///
/// Built on first use from [`LEVEL_ENV_VAR`](crate::LEVEL_ENV_VAR). Requires the
/// "singleton" feature.
#[cfg(all(feature = "singleton", not(all(test, feature = "loom"))))]
#[cfg_attr(docsrs, doc(cfg(feature = "singleton")))]
#[inline]
pub fn logger() -> &'static Logger {
    &LOGGER
}
