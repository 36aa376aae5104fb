use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Source of elapsed time used to stamp time-axis labels.
pub trait TimeSource {
    /// Time elapsed since the source was created.
    fn elapsed(&self) -> Duration;

    /// Elapsed seconds rounded to one decimal place.
    fn elapsed_label(&self) -> f32 {
        let tenths = (self.elapsed().as_millis() as f64 / 100.0).round();
        (tenths / 10.0) as f32
    }
}

/// Wall-clock source backed by [`Instant`].
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    start: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self { start: Instant::now() }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for MonotonicClock {
    fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

/// Hand-driven clock for replays and tests.
///
/// Clones share the same reading, so a caller can keep one handle and
/// advance the copy owned by a plot.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    pub fn set(&self, to: Duration) {
        self.now.set(to);
    }
}

impl TimeSource for ManualClock {
    fn elapsed(&self) -> Duration {
        self.now.get()
    }
}
