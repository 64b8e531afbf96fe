use std::process::Command;

fn combined_output(output: &std::process::Output) -> String {
    let mut combined = String::new();
    combined.push_str(&String::from_utf8_lossy(&output.stdout));
    combined.push_str(&String::from_utf8_lossy(&output.stderr));
    combined
}

fn flipclock_bin() -> &'static str {
    option_env!("CARGO_BIN_EXE_flipclock").expect("flipclock test binary not built")
}

#[test]
fn flipclock_help_lists_pomodoro_flags() {
    let output = Command::new(flipclock_bin())
        .arg("--help")
        .output()
        .expect("run flipclock --help");
    assert!(output.status.success());
    let combined = combined_output(&output);
    assert!(combined.contains("Pomodoro"));
    assert!(combined.contains("--focus-minutes"));
    assert!(combined.contains("--break-minutes"));
}

#[test]
fn flipclock_list_output_devices_uses_test_devices() {
    let output = Command::new(flipclock_bin())
        .arg("--list-output-devices")
        .env("FLIPCLOCK_TEST_DEVICES", "Desk Speakers")
        .output()
        .expect("run flipclock --list-output-devices");
    assert!(output.status.success());
    let combined = combined_output(&output);
    assert!(combined.contains("Available audio output devices:"));
    assert!(combined.contains("Desk Speakers"));
}

#[test]
fn flipclock_doctor_reports_config() {
    let output = Command::new(flipclock_bin())
        .args(["--doctor", "--focus-minutes", "50"])
        .env("FLIPCLOCK_TEST_DEVICES", "")
        .output()
        .expect("run flipclock --doctor");
    assert!(output.status.success());
    let combined = combined_output(&output);
    assert!(combined.contains("Flipclock Doctor"));
    assert!(combined.contains("pomodoro: 50m focus / 5m break"));
    assert!(combined.contains("devices: none"));
}

#[test]
fn flipclock_rejects_invalid_lengths() {
    let output = Command::new(flipclock_bin())
        .args(["--break-minutes", "0"])
        .output()
        .expect("run flipclock --break-minutes 0");
    assert!(!output.status.success());
    assert!(combined_output(&output).contains("--break-minutes"));
}
