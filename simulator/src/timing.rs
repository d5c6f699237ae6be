//! Timing for the simulator loop.
//!
//! These use `std::time` which is not available in `no_std`, so they live
//! here rather than in the common crate.

use std::time::{Duration, Instant};

use today_common::MonotonicClock;

/// Target frame time (~50 FPS). The main loop sleeps if a frame completes early.
pub const FRAME_TIME: Duration = Duration::from_millis(20);

/// Milliseconds since the simulator started, standing in for the board's uptime counter.
#[derive(Clone, Copy, Debug)]
pub struct SimClock {
    started: Instant,
}

impl SimClock {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
        }
    }
}

impl Default for SimClock {
    fn default() -> Self { Self::new() }
}

impl MonotonicClock for SimClock {
    fn now_ms(&self) -> u64 { self.started.elapsed().as_millis() as u64 }
}

/// Fires once per `interval`, starting immediately.
#[derive(Clone, Copy, Debug)]
pub struct Cadence {
    interval_ms: u64,
    last_ms: Option<u64>,
}

impl Cadence {
    pub const fn new(interval: Duration) -> Self {
        Self {
            interval_ms: interval.as_millis() as u64,
            last_ms: None,
        }
    }

    /// True when due; the next deadline is counted from `now_ms`.
    pub fn due(
        &mut self,
        now_ms: u64,
    ) -> bool {
        if let Some(last) = self.last_ms
            && now_ms.saturating_sub(last) < self.interval_ms
        {
            return false;
        }
        self.last_ms = Some(now_ms);
        true
    }
}
