//! A mounted Pomodoro view: the state machine plus the one-second ticker
//! that drives it.

use std::time::{Duration, Instant};

use super::machine::{Countdown, Mode, PhaseCompleted, PomodoroMachine, TimerConfig, TimerState};
use crate::audio::AlertSink;
use crate::log_debug;
use crate::timer::RepeatingTimer;

pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// What a poll of the session did.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SessionPoll {
    pub ticks: u32,
    pub completed: Vec<PhaseCompleted>,
}

impl SessionPoll {
    pub fn changed(&self) -> bool {
        self.ticks > 0
    }
}

#[derive(Debug)]
pub struct PomodoroSession {
    machine: PomodoroMachine,
    ticker: RepeatingTimer,
}

impl PomodoroSession {
    /// New paused session seeded from `config`; the ticker stays disarmed
    /// until the user starts the countdown.
    pub fn mount(config: TimerConfig) -> Self {
        Self {
            machine: PomodoroMachine::new(config),
            ticker: RepeatingTimer::new(TICK_PERIOD),
        }
    }

    pub fn state(&self) -> TimerState {
        self.machine.state()
    }

    pub fn config(&self) -> TimerConfig {
        self.machine.config()
    }

    pub fn mode(&self) -> Mode {
        self.machine.mode()
    }

    pub fn is_running(&self) -> bool {
        self.machine.is_running()
    }

    pub fn countdown(&self) -> Countdown {
        self.machine.countdown()
    }

    pub fn status_label(&self) -> &'static str {
        self.machine.status_label()
    }

    pub fn ticker_armed(&self) -> bool {
        self.ticker.is_armed()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.ticker.deadline()
    }

    pub fn toggle_run(&mut self, now: Instant) -> bool {
        let running = self.machine.toggle_run();
        self.sync_ticker(now);
        log_debug(&format!(
            "pomodoro {} ({} {}s left)",
            if running { "started" } else { "paused" },
            self.machine.mode().label(),
            self.machine.seconds_remaining()
        ));
        running
    }

    pub fn reset(&mut self, now: Instant) {
        self.machine.reset();
        self.sync_ticker(now);
    }

    pub fn apply_config(&mut self, config: TimerConfig) {
        self.machine.apply_config(config);
    }

    /// Deliver due ticks. Each phase completion rings `alert` exactly once; a
    /// failed alert is logged and never blocks the transition.
    pub fn poll(&mut self, now: Instant, alert: &mut dyn AlertSink) -> SessionPoll {
        let fired = self.ticker.poll(now);
        let mut outcome = SessionPoll::default();
        for _ in 0..fired {
            if !self.machine.is_running() {
                break;
            }
            outcome.ticks += 1;
            if let Some(done) = self.machine.tick() {
                ring(alert, done);
                outcome.completed.push(done);
            }
        }
        self.sync_ticker(now);
        outcome
    }

    /// Keep exactly one ticker armed while running and none while paused.
    fn sync_ticker(&mut self, now: Instant) {
        if self.machine.is_running() {
            self.ticker.ensure_armed(now);
        } else {
            self.ticker.disarm();
        }
    }
}

fn ring(alert: &mut dyn AlertSink, done: PhaseCompleted) {
    tracing::info!(
        finished = done.finished.label(),
        next = done.next.label(),
        auto_continue = done.auto_continue,
        "phase completed"
    );
    if let Err(err) = alert.play_alert() {
        log_debug(&format!("{} alert failed: {err:#}", alert.label()));
        tracing::warn!(alert = alert.label(), error = %format!("{err:#}"), "alert failed");
    }
}
