//! Round stopwatch

use std::time::{Duration, Instant};

/// Time source, swappable so rounds can be timed deterministically.
pub trait Clock {
    fn now(&self) -> Instant;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

pub struct Stopwatch<C> {
    clock: C,
    started: Option<Instant>,
}

impl<C: Clock> Stopwatch<C> {
    pub fn new(clock: C) -> Self {
        Self { clock, started: None }
    }

    pub fn start(&mut self) {
        self.started = Some(self.clock.now());
    }

    /// Elapsed time since `start`, truncated to whole seconds.
    /// Zero if the stopwatch never started.
    pub fn stop(&mut self) -> Duration {
        let Some(started) = self.started.take() else {
            return Duration::ZERO;
        };
        let elapsed = self.clock.now().saturating_duration_since(started);
        Duration::from_secs(elapsed.as_secs())
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Instant {
        (**self).now()
    }
}
