//! Session timing
//!
//! `SessionClock` counts ticks and knows nothing about wall time. The host
//! owns scheduling; `Ticker` is the cancellable schedule hosts use to turn
//! wall time into ticks.

use std::time::{Duration, Instant};

/// Nominal length of one tick
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

const MIN_INTERVAL: Duration = Duration::from_nanos(1);

/// Elapsed-time counter for one session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionClock {
    ticks: u64,
    running: bool,
}

impl SessionClock {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            ticks: 0,
            running: false,
        }
    }

    /// Zero the counter and start counting
    pub const fn start(&mut self) {
        self.ticks = 0;
        self.running = true;
    }

    /// Freeze the counter
    pub const fn stop(&mut self) {
        self.running = false;
    }

    /// Advance by one tick; returns false if stopped
    pub const fn tick(&mut self) -> bool {
        if self.running {
            self.ticks += 1;
        }
        self.running
    }

    #[must_use]
    pub const fn ticks(&self) -> u64 {
        self.ticks
    }

    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Elapsed time in whole ticks
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        TICK_INTERVAL * u32::try_from(self.ticks).unwrap_or(u32::MAX)
    }
}

/// Cancellable periodic schedule driven by the host's event loop
///
/// Each interval boundary is reported exactly once, in order. Once
/// cancelled, no further ticks are reported.
#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,
    next: Option<Instant>,
}

impl Ticker {
    /// Start a schedule with the default interval
    #[must_use]
    pub fn start(now: Instant) -> Self {
        Self::with_interval(now, TICK_INTERVAL)
    }

    /// Start a schedule with a custom interval, at least one nanosecond
    #[must_use]
    pub fn with_interval(now: Instant, interval: Duration) -> Self {
        let interval = interval.max(MIN_INTERVAL);
        Self {
            interval,
            next: Some(now + interval),
        }
    }

    /// Number of ticks due at `now`, consuming them
    pub fn due(&mut self, now: Instant) -> u32 {
        let Some(next) = self.next else {
            return 0;
        };
        if now < next {
            return 0;
        }

        let behind = now.duration_since(next).as_nanos() / self.interval.as_nanos();
        let count = u32::try_from(behind + 1).unwrap_or(u32::MAX);
        self.next = Some(next + self.interval * count);
        count
    }

    /// Time until the next tick, or `None` once cancelled
    #[must_use]
    pub fn until_next(&self, now: Instant) -> Option<Duration> {
        self.next.map(|next| next.saturating_duration_since(now))
    }

    /// Stop delivering ticks
    pub const fn cancel(&mut self) {
        self.next = None;
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.next.is_some()
    }
}
