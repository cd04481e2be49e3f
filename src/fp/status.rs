use std::time::{Duration, Instant};

use log::debug;

/// Receives free-text progress notes while a mining run is underway.
pub trait StatusUpdater {
    fn update(&mut self, status: &str);
}

/// Discards every note.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentStatus;

impl StatusUpdater for SilentStatus {
    fn update(&mut self, _status: &str) {}
}

const DEFAULT_PERIOD: Duration = Duration::from_secs(10);

/// Forwards notes to the `log` facade, at most one per period.
#[derive(Debug, Clone)]
pub struct LoggingStatus {
    prefix: String,
    period: Duration,
    last_emit: Option<Instant>,
}

impl LoggingStatus {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self::with_period(prefix, DEFAULT_PERIOD)
    }

    pub fn with_period(prefix: impl Into<String>, period: Duration) -> Self {
        Self { prefix: prefix.into(), period, last_emit: None }
    }
}

impl Default for LoggingStatus {
    fn default() -> Self {
        Self::new("")
    }
}

impl StatusUpdater for LoggingStatus {
    fn update(&mut self, status: &str) {
        let now = Instant::now();
        if self.last_emit.map_or(true, |last| now.duration_since(last) >= self.period) {
            debug!("{} {}", self.prefix, status);
            self.last_emit = Some(now);
        }
    }
}

impl<S: StatusUpdater + ?Sized> StatusUpdater for &mut S {
    fn update(&mut self, status: &str) {
        (**self).update(status);
    }
}
