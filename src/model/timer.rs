//! Elapsed-time counter and the one-second tick gate

use std::time::{Duration, Instant};

use super::wage::Wage;

/// Minimum time between two recorded ticks
pub const TICK_INTERVAL: Duration = Duration::from_millis(1000);

/// Elapsed time split into clock fields, plus the cumulative second count
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimerState {
    /// Unbounded
    pub hours: u64,
    /// 0..=59
    pub minutes: u8,
    /// 0..=59
    pub seconds: u8,
    pub elapsed_secs: u64,
}

impl TimerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one elapsed second, rolling seconds into minutes and minutes into hours
    pub fn tick(&mut self) {
        self.elapsed_secs += 1;
        self.seconds += 1;
        if self.seconds == 60 {
            self.seconds = 0;
            self.minutes += 1;
        }
        if self.minutes == 60 {
            self.minutes = 0;
            self.hours += 1;
        }
    }

    /// `HH:MM:SS | $<amount>` for the given wage
    pub fn display(&self, wage: &Wage) -> String {
        format!(
            "{:02}:{:02}:{:02} | ${:.2}",
            self.hours,
            self.minutes,
            self.seconds,
            wage.earned(self.elapsed_secs)
        )
    }
}

/// Decides when a second has passed on the monotonic clock.
///
/// The first poll only records a starting instant. After that a tick is due
/// once `interval` has passed since the last recorded tick, and the tick is
/// recorded at the polling instant (lateness is not carried over).
#[derive(Debug, Clone, Copy)]
pub struct Ticker {
    interval: Duration,
    last: Option<Instant>,
}

impl Ticker {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: None,
        }
    }

    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(last) = self.last else {
            self.last = Some(now);
            return false;
        };

        if now.saturating_duration_since(last) >= self.interval {
            self.last = Some(now);
            true
        } else {
            false
        }
    }

    /// Time until the next tick would be due, if the ticker has started
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.last
            .map(|last| self.interval.saturating_sub(now.saturating_duration_since(last)))
    }
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new(TICK_INTERVAL)
    }
}
