//! Timing for the simulator loop.
//!
//! These use `std::time` which is not available in `no_std` environments, so
//! they live here rather than in the common crate.

use std::time::{Duration, Instant};

/// Target frame time (~50 FPS). The main loop sleeps if frame completes early.
pub const FRAME_TIME: Duration = Duration::from_millis(20);

/// Fixed-interval timer polled once per frame.
#[derive(Debug)]
pub struct Ticker {
    interval: Duration,
    next: Instant,
}

impl Ticker {
    /// First tick is due immediately.
    pub fn new(
        interval: Duration,
        now: Instant,
    ) -> Self {
        Self { interval, next: now }
    }

    /// True once per elapsed interval. Missed ticks are not replayed.
    pub fn due(
        &mut self,
        now: Instant,
    ) -> bool {
        if now < self.next {
            return false;
        }
        self.next = now + self.interval;
        true
    }
}
