use super::set_logging_for_tests;
use super::{init_logging, log_debug, log_debug_content, log_file_path};
use crate::config::AppConfig;
use clap::Parser;
use std::env;
use std::sync::{Mutex, OnceLock};

static LOG_TEST_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn with_log_lock(action: impl FnOnce()) {
    let _guard = LOG_TEST_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    action();
    set_logging_for_tests(false, false);
}

fn clear_log_env() {
    env::remove_var("FLIPCLOCK_LOGS");
    env::remove_var("FLIPCLOCK_NO_LOGS");
    env::remove_var("FLIPCLOCK_LOG_CONTENT");
}

#[test]
fn logging_disabled_by_default() {
    with_log_lock(|| {
        clear_log_env();
        let log_path = log_file_path();
        let _ = std::fs::remove_file(&log_path);
        let config = AppConfig::parse_from(["flipclock-tests"]);
        init_logging(&config);
        log_debug("should-not-write");
        assert!(std::fs::metadata(&log_path).is_err());
    });
}

#[test]
fn logging_enabled_writes_log() {
    with_log_lock(|| {
        clear_log_env();
        let log_path = log_file_path();
        let _ = std::fs::remove_file(&log_path);
        set_logging_for_tests(true, false);
        log_debug("log-enabled");
        let contents = std::fs::read_to_string(&log_path).expect("log file should be created");
        assert!(contents.contains("log-enabled"));
    });
}

#[test]
fn no_logs_flag_wins() {
    with_log_lock(|| {
        clear_log_env();
        let log_path = log_file_path();
        let _ = std::fs::remove_file(&log_path);
        let config = AppConfig::parse_from(["flipclock-tests", "--logs", "--no-logs"]);
        init_logging(&config);
        log_debug("suppressed");
        assert!(std::fs::metadata(&log_path).is_err());
    });
}

#[test]
fn log_content_requires_flag() {
    with_log_lock(|| {
        clear_log_env();
        let log_path = log_file_path();
        let _ = std::fs::remove_file(&log_path);
        set_logging_for_tests(true, false);
        log_debug_content("secret");
        let contents = std::fs::read_to_string(&log_path).unwrap_or_default();
        assert!(
            !contents.contains("secret"),
            "content should not be logged without --log-content"
        );
    });
}
