use anyhow::Result;
use clap::Parser;
use flipclock::{
    audio, config::AppConfig, doctor::base_doctor_report, init_logging, log_debug, log_file_path,
    ui, Shell,
};
use std::env;
use std::time::Instant;

#[cfg(not(test))]
fn main() -> Result<()> {
    run_with_args(env::args_os())
}

#[cfg_attr(test, allow(dead_code))]
fn run_with_args<I, T>(args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let mut config = AppConfig::parse_from(args);
    if config.doctor {
        let report = base_doctor_report(&config, "flipclock");
        println!("{}", report.render());
        return Ok(());
    }

    if config.list_output_devices {
        let output = list_output_devices()?;
        print!("{output}");
        return Ok(());
    }

    config.validate()?;
    init_logging(&config);
    let log_path = log_file_path();
    log_debug("=== Flipclock Started ===");
    log_debug(&format!("Log file: {log_path:?}"));

    let alert = audio::build_alert(&config.alert_settings());
    log_debug(&format!("Alert: {}", alert.label()));
    let mut shell = Shell::new(config.shell_settings(), alert, Instant::now());
    let result = ui::run_app(&mut shell, config.fullscreen);

    log_debug("=== Flipclock Exiting ===");
    if let Err(ref e) = result {
        log_debug(&format!("Exit with error: {e:#}"));
    }

    result
}

fn list_output_devices() -> Result<String> {
    let devices = audio::available_output_devices()?;
    let mut output = String::new();
    if devices.is_empty() {
        output.push_str("No audio output devices detected.\n");
    } else {
        output.push_str("Available audio output devices:\n");
        for name in devices {
            output.push_str(&format!("  - {name}\n"));
        }
    }
    Ok(output)
}
