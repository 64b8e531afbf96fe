use std::time::{Duration, Instant};

use crate::timer::OneShotTimer;

/// Fades the chrome after a quiet spell. Exactly one deadline is live at a
/// time: every bit of activity replaces it.
#[derive(Debug, Clone)]
pub struct IdleTracker {
    timer: OneShotTimer,
    idle: bool,
}

impl IdleTracker {
    /// Start active with the window already counting.
    pub fn new(after: Duration, now: Instant) -> Self {
        let mut timer = OneShotTimer::new(after);
        timer.arm(now);
        Self { timer, idle: false }
    }

    pub fn is_idle(&self) -> bool {
        self.idle
    }

    pub fn window(&self) -> Duration {
        self.timer.delay()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.timer.deadline()
    }

    /// Input arrived. Returns true when this woke the UI from idle.
    pub fn note_activity(&mut self, now: Instant) -> bool {
        self.timer.arm(now);
        std::mem::replace(&mut self.idle, false)
    }

    /// Returns true on the poll that turns the UI idle.
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.timer.poll(now) {
            self.idle = true;
            return true;
        }
        false
    }
}
