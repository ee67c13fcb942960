//! Blocking delays.
//!
//! The player's settle delays and the loop's debounce pause go through the
//! `Delay` trait so tests can record them instead of sleeping.

use std::time::Duration;

/// Something that can block the current thread for a while.
pub trait Delay {
    fn delay(&mut self, duration: Duration);
}

impl<D: Delay + ?Sized> Delay for &mut D {
    fn delay(&mut self, duration: Duration) {
        (**self).delay(duration)
    }
}

impl<D: Delay + ?Sized> Delay for Box<D> {
    fn delay(&mut self, duration: Duration) {
        (**self).delay(duration)
    }
}

/// `thread::sleep` backed delay. Zero durations return immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdDelay;

impl Delay for StdDelay {
    fn delay(&mut self, duration: Duration) {
        if !duration.is_zero() {
            std::thread::sleep(duration);
        }
    }
}

/// Delay for unit tests. It records every requested duration and returns
/// immediately.
#[derive(Debug, Clone, Default)]
pub struct RecordingDelay {
    pub delays: Vec<Duration>,
}

impl RecordingDelay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sum of all recorded delays.
    pub fn total(&self) -> Duration {
        self.delays.iter().sum()
    }
}

impl Delay for RecordingDelay {
    fn delay(&mut self, duration: Duration) {
        self.delays.push(duration);
    }
}
