//! Focus/break countdown state machine.
//!
//! ```text
//! Focus,Paused <-> Focus,Running --0--> Break,Running <-> Break,Paused
//!      ^                                      |
//!      +------------------0-------------------+
//! ```
//!
//! The machine is driven from outside: the owner calls `tick()` once per
//! second while running and turns each returned [`PhaseCompleted`] into an
//! alert.

pub const SECONDS_PER_MINUTE: u64 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Focus,
    Break,
}

impl Mode {
    pub fn label(self) -> &'static str {
        match self {
            Mode::Focus => "FOCUS",
            Mode::Break => "BREAK",
        }
    }
}

/// Focus and break lengths in whole minutes, never below one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerConfig {
    focus_minutes: u32,
    break_minutes: u32,
}

impl TimerConfig {
    pub const MIN_MINUTES: u32 = 1;

    pub fn new(focus_minutes: u32, break_minutes: u32) -> Self {
        Self {
            focus_minutes: focus_minutes.max(Self::MIN_MINUTES),
            break_minutes: break_minutes.max(Self::MIN_MINUTES),
        }
    }

    pub fn focus_minutes(&self) -> u32 {
        self.focus_minutes
    }

    pub fn break_minutes(&self) -> u32 {
        self.break_minutes
    }

    pub fn minutes_for(&self, mode: Mode) -> u32 {
        match mode {
            Mode::Focus => self.focus_minutes,
            Mode::Break => self.break_minutes,
        }
    }

    pub fn seconds_for(&self, mode: Mode) -> u64 {
        u64::from(self.minutes_for(mode)) * SECONDS_PER_MINUTE
    }

    /// Step one length by `delta` minutes; clamps at the one-minute floor.
    pub fn adjust(&mut self, mode: Mode, delta: i32) {
        let slot = match mode {
            Mode::Focus => &mut self.focus_minutes,
            Mode::Break => &mut self.break_minutes,
        };
        *slot = step_minutes(*slot, delta);
    }
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self::new(25, 5)
    }
}

fn step_minutes(current: u32, delta: i32) -> u32 {
    let stepped = if delta >= 0 {
        current.saturating_add(delta.unsigned_abs())
    } else {
        current.saturating_sub(delta.unsigned_abs())
    };
    stepped.max(TimerConfig::MIN_MINUTES)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerState {
    pub mode: Mode,
    pub seconds_remaining: u64,
    pub running: bool,
}

/// Emitted by the tick that brings a phase to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseCompleted {
    pub finished: Mode,
    pub next: Mode,
    /// Whether the next phase started counting on its own.
    pub auto_continue: bool,
}

/// Zero-padded `MM` / `SS` pair for the digit tiles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    pub minutes: String,
    pub seconds: String,
}

impl Countdown {
    pub fn from_seconds(total: u64) -> Self {
        Self {
            minutes: format!("{:02}", total / SECONDS_PER_MINUTE),
            seconds: format!("{:02}", total % SECONDS_PER_MINUTE),
        }
    }

    pub fn text(&self) -> String {
        format!("{}:{}", self.minutes, self.seconds)
    }
}

#[derive(Debug, Clone)]
pub struct PomodoroMachine {
    config: TimerConfig,
    state: TimerState,
}

impl PomodoroMachine {
    /// Fresh machine: focus phase, paused, full focus length.
    pub fn new(config: TimerConfig) -> Self {
        Self {
            config,
            state: TimerState {
                mode: Mode::Focus,
                seconds_remaining: config.seconds_for(Mode::Focus),
                running: false,
            },
        }
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn config(&self) -> TimerConfig {
        self.config
    }

    pub fn mode(&self) -> Mode {
        self.state.mode
    }

    pub fn seconds_remaining(&self) -> u64 {
        self.state.seconds_remaining
    }

    pub fn is_running(&self) -> bool {
        self.state.running
    }

    pub fn countdown(&self) -> Countdown {
        Countdown::from_seconds(self.state.seconds_remaining)
    }

    pub fn status_label(&self) -> &'static str {
        if self.state.running {
            "Running"
        } else {
            "Paused"
        }
    }

    /// One second elapsed. Ignored while paused.
    pub fn tick(&mut self) -> Option<PhaseCompleted> {
        if !self.state.running {
            return None;
        }
        self.state.seconds_remaining = self.state.seconds_remaining.saturating_sub(1);
        if self.state.seconds_remaining > 0 {
            return None;
        }
        Some(self.complete_phase())
    }

    /// Flip running/paused; mode and remaining time are left alone.
    pub fn toggle_run(&mut self) -> bool {
        self.state.running = !self.state.running;
        self.state.running
    }

    /// Pause and refill the current phase from the configuration.
    pub fn reset(&mut self) {
        self.state.running = false;
        self.state.seconds_remaining = self.config.seconds_for(self.state.mode);
    }

    /// Take a new configuration. A paused countdown shows the new length right
    /// away; a running one keeps counting and picks it up at the next reset or
    /// phase change.
    pub fn apply_config(&mut self, config: TimerConfig) {
        self.config = config;
        if !self.state.running {
            self.state.seconds_remaining = config.seconds_for(self.state.mode);
        }
    }

    fn complete_phase(&mut self) -> PhaseCompleted {
        let finished = self.state.mode;
        let (next, auto_continue) = match finished {
            Mode::Focus => (Mode::Break, true),
            Mode::Break => (Mode::Focus, false),
        };
        self.state = TimerState {
            mode: next,
            seconds_remaining: self.config.seconds_for(next),
            running: auto_continue,
        };
        PhaseCompleted {
            finished,
            next,
            auto_continue,
        }
    }
}
