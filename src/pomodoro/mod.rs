//! Pomodoro countdown: focus and break phases, start/pause, reset, and live
//! length edits.

mod machine;
mod session;
#[cfg(test)]
mod tests;

pub use machine::{
    Countdown, Mode, PhaseCompleted, PomodoroMachine, TimerConfig, TimerState, SECONDS_PER_MINUTE,
};
pub use session::{PomodoroSession, SessionPoll, TICK_PERIOD};
