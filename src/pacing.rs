/// Tick-rate schedulers.  The loop calls `wait_for_next_tick` once at the
/// end of every tick.

use std::thread;
use std::time::{Duration, Instant};

pub trait TickScheduler {
    fn wait_for_next_tick(&mut self);
}

/// Sleeps a fixed period regardless of how long the tick took.
#[derive(Clone, Copy, Debug)]
pub struct FixedSleep {
    period: Duration,
}

impl FixedSleep {
    pub fn new(period: Duration) -> Self {
        Self { period }
    }
}

impl TickScheduler for FixedSleep {
    fn wait_for_next_tick(&mut self) {
        thread::sleep(self.period);
    }
}

/// Keeps ticks on a monotonic grid: time spent inside the tick is deducted
/// from the sleep.  When a tick overruns, the next one starts immediately and
/// the grid is re-anchored rather than bursting to catch up.
#[derive(Clone, Copy, Debug)]
pub struct MonotonicTicker {
    period: Duration,
    deadline: Option<Instant>,
}

impl MonotonicTicker {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            deadline: None,
        }
    }

    /// Time left until the current deadline, if one is pending.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }
}

impl TickScheduler for MonotonicTicker {
    fn wait_for_next_tick(&mut self) {
        let now = Instant::now();
        let deadline = match self.deadline {
            Some(deadline) => deadline,
            None => now + self.period,
        };

        if deadline > now {
            thread::sleep(deadline - now);
            self.deadline = Some(deadline + self.period);
        } else {
            tracing::debug!(behind = ?(now - deadline), "tick overran");
            self.deadline = Some(now + self.period);
        }
    }
}
