//! Wall-clock view: samples local time once per second and exposes the
//! two-digit hour and minute groups for the tiles.

use chrono::{Local, Timelike};
use std::time::{Duration, Instant};

use crate::timer::RepeatingTimer;

pub const SAMPLE_PERIOD: Duration = Duration::from_secs(1);

/// Hours (00-23) and minutes (00-59) of one sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockSample {
    pub hours: u32,
    pub minutes: u32,
}

impl ClockSample {
    pub fn from_time<T: Timelike>(time: &T) -> Self {
        Self {
            hours: time.hour(),
            minutes: time.minute(),
        }
    }

    pub fn now() -> Self {
        Self::from_time(&Local::now())
    }

    pub fn hours_text(&self) -> String {
        format!("{:02}", self.hours)
    }

    pub fn minutes_text(&self) -> String {
        format!("{:02}", self.minutes)
    }
}

pub type ClockSource = fn() -> ClockSample;

#[derive(Debug)]
pub struct ClockView {
    sample: ClockSample,
    sampler: RepeatingTimer,
    source: ClockSource,
}

impl ClockView {
    /// Take a first sample and start the once-per-second sampler.
    pub fn mount(now: Instant) -> Self {
        Self::mount_with(now, ClockSample::now)
    }

    pub fn mount_with(now: Instant, source: ClockSource) -> Self {
        let mut sampler = RepeatingTimer::new(SAMPLE_PERIOD);
        sampler.arm(now);
        Self {
            sample: source(),
            sampler,
            source,
        }
    }

    pub fn sample(&self) -> ClockSample {
        self.sample
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.sampler.deadline()
    }

    /// Resample when the sampler is due. Returns whether the displayed time changed.
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.sampler.poll(now) == 0 {
            return false;
        }
        let next = (self.source)();
        let changed = next != self.sample;
        self.sample = next;
        changed
    }
}
