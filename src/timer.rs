//! Scheduled wakeups for the single-threaded event loop.
//!
//! A timer is a plain value owned by the component that armed it. Arming an
//! armed timer replaces its deadline instead of adding a second one, and
//! dropping the owner drops the wakeup with it.

use std::time::{Duration, Instant};

/// Smallest period a repeating timer accepts.
const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Fires every `period` while armed.
#[derive(Debug, Clone)]
pub struct RepeatingTimer {
    period: Duration,
    next_due: Option<Instant>,
}

impl RepeatingTimer {
    /// Create a disarmed timer.
    pub fn new(period: Duration) -> Self {
        Self {
            period: period.max(MIN_PERIOD),
            next_due: None,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_armed(&self) -> bool {
        self.next_due.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.next_due
    }

    /// Start counting a full period from `now`, discarding any previous deadline.
    pub fn arm(&mut self, now: Instant) {
        self.next_due = Some(now + self.period);
    }

    /// Arm only when currently disarmed so an in-flight cadence is kept.
    pub fn ensure_armed(&mut self, now: Instant) -> bool {
        if self.is_armed() {
            return false;
        }
        self.arm(now);
        true
    }

    pub fn disarm(&mut self) {
        self.next_due = None;
    }

    /// Number of periods that elapsed by `now`; advances the deadline past `now`.
    ///
    /// A loop that wakes up late (suspended process, slow redraw) gets every
    /// missed period reported at once instead of drifting.
    pub fn poll(&mut self, now: Instant) -> u32 {
        let Some(due) = self.next_due else {
            return 0;
        };
        if now < due {
            return 0;
        }
        let behind = now.duration_since(due).as_nanos();
        let missed = behind / self.period.as_nanos().max(1);
        let fired = u32::try_from(missed.saturating_add(1)).unwrap_or(u32::MAX);
        let advance = self.period.saturating_mul(fired);
        self.next_due = Some(due.checked_add(advance).unwrap_or(now + self.period));
        fired
    }
}

/// Fires once, `delay` after the last arm.
#[derive(Debug, Clone)]
pub struct OneShotTimer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl OneShotTimer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// (Re)arm relative to `now`; the previous deadline is cancelled.
    pub fn arm(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    pub fn disarm(&mut self) {
        self.deadline = None;
    }

    /// True exactly once when the deadline has passed; the timer disarms itself.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

/// Earliest of a set of optional deadlines.
pub fn earliest_deadline<I>(deadlines: I) -> Option<Instant>
where
    I: IntoIterator<Item = Option<Instant>>,
{
    deadlines.into_iter().flatten().min()
}
