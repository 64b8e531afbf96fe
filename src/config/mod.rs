//! Command-line parsing and validation helpers.

mod defaults;
mod validation;

use clap::{Parser, ValueEnum};

pub use defaults::{
    DEFAULT_ALERT_PITCH_HZ, DEFAULT_ALERT_VOLUME, DEFAULT_BREAK_MINUTES, DEFAULT_FOCUS_MINUTES,
    DEFAULT_IDLE_MS,
};

/// CLI options for the flip clock. Validated values keep the UI and audio setup sane.
#[derive(Debug, Parser, Clone)]
#[command(about = "Flip clock and Pomodoro timer for the terminal", author, version)]
pub struct AppConfig {
    /// Focus phase length (minutes)
    #[arg(
        long = "focus-minutes",
        env = "FLIPCLOCK_FOCUS_MINUTES",
        default_value_t = DEFAULT_FOCUS_MINUTES
    )]
    pub focus_minutes: u32,

    /// Break phase length (minutes)
    #[arg(
        long = "break-minutes",
        env = "FLIPCLOCK_BREAK_MINUTES",
        default_value_t = DEFAULT_BREAK_MINUTES
    )]
    pub break_minutes: u32,

    /// View shown at startup
    #[arg(long, value_enum, default_value_t = ViewArg::Clock)]
    pub view: ViewArg,

    /// Inactivity before the controls fade (milliseconds)
    #[arg(long = "idle-ms", default_value_t = DEFAULT_IDLE_MS)]
    pub idle_ms: u64,

    /// Start in fullscreen
    #[arg(long, default_value_t = false)]
    pub fullscreen: bool,

    /// Sound played when a phase ends
    #[arg(long, env = "FLIPCLOCK_ALERT", value_enum, default_value_t = AlertKind::Tone)]
    pub alert: AlertKind,

    /// Peak amplitude of the alert tone (0.0-1.0)
    #[arg(long = "alert-volume", default_value_t = DEFAULT_ALERT_VOLUME)]
    pub alert_volume: f32,

    /// Pitch of the alert tone (Hz)
    #[arg(long = "alert-pitch-hz", default_value_t = DEFAULT_ALERT_PITCH_HZ)]
    pub alert_pitch_hz: f32,

    /// Preferred audio output device name
    #[arg(long = "output-device")]
    pub output_device: Option<String>,

    /// Print detected audio output devices and exit
    #[arg(long = "list-output-devices", default_value_t = false)]
    pub list_output_devices: bool,

    /// Print environment diagnostics and exit
    #[arg(long = "doctor", default_value_t = false)]
    pub doctor: bool,

    /// Enable file logging (debug)
    #[arg(long = "logs", env = "FLIPCLOCK_LOGS", default_value_t = false)]
    pub logs: bool,

    /// Disable all file logging (overrides --logs and log env vars)
    #[arg(long = "no-logs", env = "FLIPCLOCK_NO_LOGS", default_value_t = false)]
    pub no_logs: bool,

    /// Include panic payloads and other free-form text in the debug log
    #[arg(
        long = "log-content",
        env = "FLIPCLOCK_LOG_CONTENT",
        default_value_t = false
    )]
    pub log_content: bool,
}

/// Selectable phase-completion alerts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AlertKind {
    Tone,
    Bell,
    Off,
}

impl AlertKind {
    pub fn label(self) -> &'static str {
        match self {
            AlertKind::Tone => "tone",
            AlertKind::Bell => "bell",
            AlertKind::Off => "off",
        }
    }
}

/// Startup view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ViewArg {
    Clock,
    Pomodoro,
}

impl ViewArg {
    pub fn label(self) -> &'static str {
        match self {
            ViewArg::Clock => "clock",
            ViewArg::Pomodoro => "pomodoro",
        }
    }
}
