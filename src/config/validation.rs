use super::defaults::{
    MAX_ALERT_PITCH_HZ, MAX_DEVICE_NAME_CHARS, MAX_IDLE_MS, MAX_SESSION_MINUTES,
    MIN_ALERT_PITCH_HZ, MIN_IDLE_MS,
};
use super::{AppConfig, ViewArg};
use crate::audio::{AlertSettings, ToneEnvelope};
use crate::pomodoro::TimerConfig;
use crate::shell::{ShellSettings, View};
use anyhow::{bail, Result};
use std::time::Duration;

impl AppConfig {
    /// Check CLI values and normalize the device name.
    pub fn validate(&mut self) -> Result<()> {
        if !(1..=MAX_SESSION_MINUTES).contains(&self.focus_minutes) {
            bail!(
                "--focus-minutes must be between 1 and {MAX_SESSION_MINUTES}, got {}",
                self.focus_minutes
            );
        }
        if !(1..=MAX_SESSION_MINUTES).contains(&self.break_minutes) {
            bail!(
                "--break-minutes must be between 1 and {MAX_SESSION_MINUTES}, got {}",
                self.break_minutes
            );
        }
        if !(MIN_IDLE_MS..=MAX_IDLE_MS).contains(&self.idle_ms) {
            bail!(
                "--idle-ms must be between {MIN_IDLE_MS} and {MAX_IDLE_MS}, got {}",
                self.idle_ms
            );
        }
        // `contains` also rejects NaN.
        if !(0.0..=1.0).contains(&self.alert_volume) {
            bail!(
                "--alert-volume must be between 0.0 and 1.0, got {}",
                self.alert_volume
            );
        }
        if !(MIN_ALERT_PITCH_HZ..=MAX_ALERT_PITCH_HZ).contains(&self.alert_pitch_hz) {
            bail!(
                "--alert-pitch-hz must be between {MIN_ALERT_PITCH_HZ} and {MAX_ALERT_PITCH_HZ}, got {}",
                self.alert_pitch_hz
            );
        }

        if let Some(device) = self.output_device.take() {
            let trimmed = device.trim();
            if trimmed.chars().count() > MAX_DEVICE_NAME_CHARS
                || trimmed.chars().any(char::is_control)
            {
                bail!(
                    "--output-device must be <={MAX_DEVICE_NAME_CHARS} characters with no control characters"
                );
            }
            if !trimmed.is_empty() {
                self.output_device = Some(trimmed.to_string());
            }
        }

        Ok(())
    }

    /// Whether any file logging is on; `--no-logs` always wins.
    pub fn logging_enabled(&self) -> bool {
        self.logs && !self.no_logs
    }

    pub fn timer_config(&self) -> TimerConfig {
        TimerConfig::new(self.focus_minutes, self.break_minutes)
    }

    pub fn shell_settings(&self) -> ShellSettings {
        ShellSettings {
            timer: self.timer_config(),
            initial_view: match self.view {
                ViewArg::Clock => View::Clock,
                ViewArg::Pomodoro => View::Pomodoro,
            },
            idle_after: Duration::from_millis(self.idle_ms),
        }
    }

    pub fn alert_settings(&self) -> AlertSettings {
        AlertSettings {
            kind: self.alert,
            envelope: ToneEnvelope::default()
                .with_pitch(self.alert_pitch_hz)
                .with_peak(self.alert_volume),
            output_device: self.output_device.clone(),
        }
    }
}
