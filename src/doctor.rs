use crate::telemetry::tracing_log_path;
use crate::{audio, config::AppConfig, crash_log_path, log_file_path};
use crossterm::terminal::size as terminal_size;
use std::{env, fmt::Display};

pub struct DoctorReport {
    lines: Vec<String>,
}

impl DoctorReport {
    pub fn new(title: &str) -> Self {
        Self {
            lines: vec![title.to_string()],
        }
    }

    pub fn section(&mut self, title: &str) {
        self.lines.push(String::new());
        self.lines.push(format!("{title}:"));
    }

    pub fn push_kv(&mut self, key: &str, value: impl Display) {
        self.lines.push(format!("  {key}: {value}"));
    }

    pub fn push_line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn render(&self) -> String {
        self.lines.join("\n")
    }
}

pub fn base_doctor_report(config: &AppConfig, binary_name: &str) -> DoctorReport {
    let mut report = DoctorReport::new("Flipclock Doctor");
    report.push_kv("version", env!("CARGO_PKG_VERSION"));
    report.push_kv("binary", binary_name);
    report.push_kv("os", format!("{}/{}", env::consts::OS, env::consts::ARCH));

    let mut validated = config.clone();
    let validation_result = validated.validate();
    let resolved = validation_result
        .as_ref()
        .map(|_| &validated)
        .unwrap_or(config);

    report.section("Terminal");
    match terminal_size() {
        Ok((cols, rows)) => report.push_kv("size", format!("{cols}x{rows}")),
        Err(err) => report.push_kv("size", format!("error: {err}")),
    }
    if let Ok(term) = env::var("TERM") {
        report.push_kv("term", term);
    }
    if let Ok(term_program) = env::var("TERM_PROGRAM") {
        let version = env::var("TERM_PROGRAM_VERSION").unwrap_or_else(|_| "unknown".to_string());
        report.push_kv("term_program", format!("{term_program} ({version})"));
    }
    report.push_kv("color_mode", detect_color_mode());
    report.push_kv("unicode", detect_unicode_support());
    report.push_kv("mouse_capture", "enabled while running (idle detection)");

    report.section("Config");
    match validation_result {
        Ok(()) => report.push_kv("validation", "ok"),
        Err(err) => report.push_kv("validation", format!("error: {err}")),
    }
    report.push_kv("view", resolved.view.label());
    report.push_kv(
        "pomodoro",
        format!(
            "{}m focus / {}m break",
            resolved.focus_minutes, resolved.break_minutes
        ),
    );
    report.push_kv("idle_ms", resolved.idle_ms);
    report.push_kv("fullscreen", if resolved.fullscreen { "on" } else { "off" });
    report.push_kv(
        "logs",
        if resolved.logging_enabled() {
            "enabled"
        } else {
            "disabled"
        },
    );
    report.push_kv(
        "log_content",
        if resolved.log_content {
            "enabled"
        } else {
            "disabled"
        },
    );
    report.push_kv("log_file", log_file_path().display());
    report.push_kv("crash_log", crash_log_path().display());
    report.push_kv("trace_log", tracing_log_path().display());

    report.section("Audio");
    report.push_kv("alert", resolved.alert.label());
    report.push_kv(
        "alert_tone",
        format!(
            "{:.2} Hz at {:.2} peak",
            resolved.alert_pitch_hz, resolved.alert_volume
        ),
    );
    report.push_kv("tone_support", tone_support());
    report.push_kv(
        "output_device",
        resolved.output_device.as_deref().unwrap_or("default"),
    );
    match audio::available_output_devices() {
        Ok(devices) => {
            report.push_kv("device_count", devices.len());
            if devices.is_empty() {
                report.push_kv("devices", "none");
            } else {
                report.push_line("  devices:");
                for name in devices {
                    report.push_line(format!("    - {name}"));
                }
            }
        }
        Err(err) => report.push_kv("devices", format!("error: {err}")),
    }

    report
}

fn tone_support() -> &'static str {
    if cfg!(feature = "tone-alert") {
        "compiled in"
    } else {
        "not compiled (bell fallback)"
    }
}

fn detect_color_mode() -> String {
    if env::var("NO_COLOR").is_ok() {
        return "none (NO_COLOR)".to_string();
    }
    if let Ok(colorterm) = env::var("COLORTERM") {
        let value = colorterm.to_lowercase();
        if value == "truecolor" || value == "24bit" {
            return format!("truecolor (COLORTERM={colorterm})");
        }
    }
    if let Ok(term) = env::var("TERM") {
        let value = term.to_lowercase();
        if value.contains("256color") || value.contains("256-color") {
            return format!("256 (TERM={term})");
        }
        if value.contains("color") || value.contains("xterm") || value.contains("screen") {
            return format!("ansi (TERM={term})");
        }
        if value == "dumb" {
            return "none (TERM=dumb)".to_string();
        }
    }
    "ansi (default)".to_string()
}

fn detect_unicode_support() -> String {
    for key in ["LC_ALL", "LC_CTYPE", "LANG"] {
        if let Ok(value) = env::var(key) {
            let upper = value.to_ascii_uppercase();
            if upper.contains("UTF-8") || upper.contains("UTF8") {
                return format!("likely ({key}={value})");
            }
            return format!("unknown ({key}={value})");
        }
    }
    "unknown (locale env not set)".to_string()
}
