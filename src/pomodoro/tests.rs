use super::*;
use crate::audio::testing::CountingAlert;
use std::time::{Duration, Instant};

fn run_ticks(machine: &mut PomodoroMachine, ticks: u64) -> Vec<PhaseCompleted> {
    (0..ticks).filter_map(|_| machine.tick()).collect()
}

#[test]
fn fresh_machine_is_paused_focus_at_full_length() {
    let machine = PomodoroMachine::new(TimerConfig::new(25, 5));
    assert_eq!(
        machine.state(),
        TimerState {
            mode: Mode::Focus,
            seconds_remaining: 25 * 60,
            running: false,
        }
    );
    assert_eq!(machine.countdown().text(), "25:00");
    assert_eq!(machine.status_label(), "Paused");
}

#[test]
fn start_then_one_tick_shows_24_59() {
    let mut machine = PomodoroMachine::new(TimerConfig::new(25, 5));
    assert!(machine.toggle_run());
    assert_eq!(machine.tick(), None);
    assert_eq!(machine.countdown().text(), "24:59");
    assert_eq!(machine.status_label(), "Running");
}

#[test]
fn ticks_are_ignored_while_paused() {
    let mut machine = PomodoroMachine::new(TimerConfig::new(1, 1));
    assert_eq!(machine.tick(), None);
    assert_eq!(machine.seconds_remaining(), 60);
}

#[test]
fn focus_runs_out_into_running_break() {
    for (focus, brk) in [(1, 1), (2, 3), (25, 5), (7, 11)] {
        let mut machine = PomodoroMachine::new(TimerConfig::new(focus, brk));
        machine.toggle_run();
        let completed = run_ticks(&mut machine, u64::from(focus) * 60);
        assert_eq!(
            completed,
            vec![PhaseCompleted {
                finished: Mode::Focus,
                next: Mode::Break,
                auto_continue: true,
            }]
        );
        assert_eq!(machine.mode(), Mode::Break);
        assert!(machine.is_running());
        assert_eq!(machine.seconds_remaining(), u64::from(brk) * 60);
    }
}

#[test]
fn break_runs_out_into_paused_focus() {
    for (focus, brk) in [(1, 1), (25, 5), (3, 2)] {
        let mut machine = PomodoroMachine::new(TimerConfig::new(focus, brk));
        machine.toggle_run();
        run_ticks(&mut machine, u64::from(focus) * 60);
        let completed = run_ticks(&mut machine, u64::from(brk) * 60);
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].finished, Mode::Break);
        assert!(!completed[0].auto_continue);
        assert_eq!(machine.mode(), Mode::Focus);
        assert!(!machine.is_running());
        assert_eq!(machine.seconds_remaining(), u64::from(focus) * 60);

        // The cycle waits for an explicit start.
        assert!(run_ticks(&mut machine, 600).is_empty());
        assert_eq!(machine.seconds_remaining(), u64::from(focus) * 60);
    }
}

#[test]
fn toggle_run_always_flips_and_keeps_time() {
    let mut machine = PomodoroMachine::new(TimerConfig::new(25, 5));
    machine.toggle_run();
    run_ticks(&mut machine, 42);
    let before = machine.state();
    assert!(!machine.toggle_run());
    assert_eq!(machine.mode(), before.mode);
    assert_eq!(machine.seconds_remaining(), before.seconds_remaining);
    assert!(machine.toggle_run());
    assert_eq!(machine.seconds_remaining(), before.seconds_remaining);
}

#[test]
fn reset_pauses_and_refills_current_mode() {
    let mut machine = PomodoroMachine::new(TimerConfig::new(2, 4));
    machine.toggle_run();
    run_ticks(&mut machine, 2 * 60 + 30);
    assert_eq!(machine.mode(), Mode::Break);
    machine.reset();
    assert!(!machine.is_running());
    assert_eq!(machine.mode(), Mode::Break);
    assert_eq!(machine.seconds_remaining(), 4 * 60);
}

#[test]
fn config_edit_while_paused_updates_display() {
    let mut machine = PomodoroMachine::new(TimerConfig::new(25, 5));
    let mut config = machine.config();
    config.adjust(Mode::Focus, 1);
    machine.apply_config(config);
    assert_eq!(machine.countdown().text(), "26:00");
}

#[test]
fn config_edit_while_running_waits_for_reset() {
    let mut machine = PomodoroMachine::new(TimerConfig::new(25, 5));
    machine.toggle_run();
    machine.tick();
    let mut config = machine.config();
    config.adjust(Mode::Focus, -5);
    machine.apply_config(config);
    assert_eq!(machine.countdown().text(), "24:59");
    machine.reset();
    assert_eq!(machine.countdown().text(), "20:00");
}

#[test]
fn config_edit_while_running_applies_at_zero_crossing() {
    let mut machine = PomodoroMachine::new(TimerConfig::new(1, 5));
    machine.toggle_run();
    let mut config = machine.config();
    config.adjust(Mode::Break, 2);
    machine.apply_config(config);
    run_ticks(&mut machine, 60);
    assert_eq!(machine.seconds_remaining(), 7 * 60);
}

#[test]
fn lengths_clamp_at_one_minute() {
    let mut config = TimerConfig::new(2, 1);
    config.adjust(Mode::Focus, -1);
    config.adjust(Mode::Focus, -1);
    config.adjust(Mode::Focus, -1);
    config.adjust(Mode::Break, -1);
    assert_eq!(config.focus_minutes(), 1);
    assert_eq!(config.break_minutes(), 1);
    assert_eq!(TimerConfig::new(0, 0), TimerConfig::new(1, 1));
}

#[test]
fn lengths_have_no_upper_bound() {
    let mut config = TimerConfig::new(99, 5);
    config.adjust(Mode::Focus, 1);
    assert_eq!(config.focus_minutes(), 100);
    assert_eq!(Countdown::from_seconds(config.seconds_for(Mode::Focus)).text(), "100:00");

    let mut config = TimerConfig::new(u32::MAX, 5);
    config.adjust(Mode::Focus, 1);
    assert_eq!(config.focus_minutes(), u32::MAX);
}

#[test]
fn countdown_pads_both_fields() {
    assert_eq!(Countdown::from_seconds(0).text(), "00:00");
    assert_eq!(Countdown::from_seconds(61).text(), "01:01");
    assert_eq!(Countdown::from_seconds(299).text(), "04:59");
}

#[test]
fn session_ticker_is_armed_only_while_running() {
    let start = Instant::now();
    let mut session = PomodoroSession::mount(TimerConfig::default());
    assert!(!session.ticker_armed());
    session.toggle_run(start);
    assert!(session.ticker_armed());
    assert_eq!(session.deadline(), Some(start + TICK_PERIOD));
    session.toggle_run(start + Duration::from_millis(300));
    assert!(!session.ticker_armed());
    session.toggle_run(start + Duration::from_millis(500));
    session.reset(start + Duration::from_millis(700));
    assert!(!session.ticker_armed());
    assert_eq!(session.countdown().text(), "25:00");
}

#[test]
fn session_poll_ticks_once_per_second() {
    let start = Instant::now();
    let mut alert = CountingAlert::default();
    let mut session = PomodoroSession::mount(TimerConfig::new(25, 5));
    session.toggle_run(start);
    assert!(!session.poll(start + Duration::from_millis(900), &mut alert).changed());
    let poll = session.poll(start + TICK_PERIOD, &mut alert);
    assert_eq!(poll.ticks, 1);
    assert_eq!(session.countdown().text(), "24:59");
}

#[test]
fn session_rings_once_per_zero_crossing() {
    let start = Instant::now();
    let mut alert = CountingAlert::default();
    let mut session = PomodoroSession::mount(TimerConfig::new(1, 1));
    session.toggle_run(start);

    let poll = session.poll(start + TICK_PERIOD * 60, &mut alert);
    assert_eq!(poll.completed.len(), 1);
    assert_eq!(alert.count(), 1);
    assert_eq!(session.mode(), Mode::Break);
    assert!(session.ticker_armed());

    let poll = session.poll(start + TICK_PERIOD * 120, &mut alert);
    assert_eq!(poll.completed.len(), 1);
    assert_eq!(alert.count(), 2);
    assert_eq!(session.mode(), Mode::Focus);
    assert!(!session.is_running());
    assert!(!session.ticker_armed());
}

#[test]
fn late_poll_stops_at_break_end() {
    let start = Instant::now();
    let mut alert = CountingAlert::default();
    let mut session = PomodoroSession::mount(TimerConfig::new(1, 1));
    session.toggle_run(start);
    // Far more time than focus + break: the cycle must stop paused at focus.
    let poll = session.poll(start + TICK_PERIOD * 500, &mut alert);
    assert_eq!(poll.ticks, 120);
    assert_eq!(poll.completed.len(), 2);
    assert_eq!(alert.count(), 2);
    assert_eq!(session.countdown().text(), "01:00");
    assert!(!session.is_running());
}

#[test]
fn failed_alert_does_not_stall_transition() {
    let start = Instant::now();
    let mut alert = CountingAlert::failing();
    let mut session = PomodoroSession::mount(TimerConfig::new(1, 3));
    session.toggle_run(start);
    let poll = session.poll(start + TICK_PERIOD * 60, &mut alert);
    assert_eq!(poll.completed.len(), 1);
    assert_eq!(alert.count(), 1);
    assert_eq!(session.mode(), Mode::Break);
    assert_eq!(session.countdown().text(), "03:00");
    assert!(session.is_running());
}
