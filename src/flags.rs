use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::format::Seconds;
use crate::levels::Severity;
use crate::prelude::Logger;
use crate::sync::lock;

/// Start times of the flags currently running, keyed by name.
#[derive(Debug, Default)]
pub(crate) struct FlagTable {
    started: HashMap<String, Instant>,
}

impl FlagTable {
    /// Starts `name` at `now`. Returns `true` if a running flag was restarted.
    pub(crate) fn start(&mut self, name: &str, now: Instant) -> bool {
        self.started.insert(name.to_owned(), now).is_some()
    }

    /// Stops and forgets `name`, returning how long it ran.
    pub(crate) fn stop(&mut self, name: &str, now: Instant) -> Option<Duration> {
        self.started
            .remove(name)
            .map(|started| now.saturating_duration_since(started))
    }

    pub(crate) fn len(&self) -> usize {
        self.started.len()
    }
}

impl Logger {
    /// Starts a named timer.
    ///
    /// Starting a flag that is already running restarts it and logs a warning.
    /// Flag reports are written whatever the threshold.
    pub fn add_flag(&self, name: &str) {
        let restarted = {
            let mut flags = lock(&self.flags);
            flags.start(name, Instant::now())
        };

        if restarted {
            self.emit(
                Severity::Warning,
                &[&"Flag '", &name, &"' already exists and will be overwritten."],
            );
        }
    }

    /// Stops a named timer and logs how long it ran, at info level.
    ///
    /// The flag is removed, so the same name can be started again. Releasing a
    /// flag that is not running logs an error and returns `None`.
    pub fn release_flag(&self, name: &str) -> Option<Duration> {
        let elapsed = {
            let mut flags = lock(&self.flags);
            flags.stop(name, Instant::now())
        };

        match elapsed {
            Some(elapsed) => self.emit(
                Severity::Info,
                &[
                    &"Flag '",
                    &name,
                    &"' released after ",
                    &Seconds(elapsed),
                    &" seconds.",
                ],
            ),
            None => self.emit(
                Severity::Error,
                &[&"Flag '", &name, &"' could not be found in memory."],
            ),
        }

        elapsed
    }

    /// Number of flags currently running.
    pub fn active_flags(&self) -> usize {
        lock(&self.flags).len()
    }
}
