mod app;
pub mod audio;
pub mod clock;
pub mod config;
pub mod doctor;
pub mod pomodoro;
pub mod shell;
mod telemetry;
pub mod terminal_restore;
pub mod timer;
pub mod ui;

pub use app::*;
pub use shell::{Shell, ShellSettings, View};
