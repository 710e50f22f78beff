//! Pausable animation clock.
//!
//! Stopping freezes `elapsed`; starting again continues from the frozen value,
//! so time spent hidden never reaches the periodic functions.

use instant::Instant;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct Clock {
    accumulated: f64,
    started_at: Option<Instant>,
}

impl Clock {
    /// A running clock with zero elapsed time.
    pub fn new() -> Self {
        Self::started_at(Instant::now())
    }

    pub fn started_at(now: Instant) -> Self {
        Self {
            accumulated: 0.0,
            started_at: Some(now),
        }
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed_at(Instant::now())
    }

    pub fn elapsed_at(&self, now: Instant) -> f64 {
        match self.started_at {
            Some(t0) => self.accumulated + since(now, t0).as_secs_f64(),
            None => self.accumulated,
        }
    }

    pub fn start(&mut self) {
        self.start_at(Instant::now());
    }

    /// No-op when already running.
    pub fn start_at(&mut self, now: Instant) {
        if self.started_at.is_none() {
            self.started_at = Some(now);
        }
    }

    pub fn stop(&mut self) {
        self.stop_at(Instant::now());
    }

    /// No-op when already stopped.
    pub fn stop_at(&mut self, now: Instant) {
        if let Some(t0) = self.started_at.take() {
            self.accumulated += since(now, t0).as_secs_f64();
        }
    }
}

#[inline]
fn since(now: Instant, earlier: Instant) -> Duration {
    if now > earlier {
        now - earlier
    } else {
        Duration::ZERO
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}
