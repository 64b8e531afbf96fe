//! `ratatui` front-end: the event loop, key handling, and drawing.

pub mod digits;
mod keys;
mod render;
mod screen;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind, MouseEventKind};
use std::time::{Duration, Instant};

use crate::log_debug;
use crate::shell::{FullscreenHost, Shell};

pub use keys::{command_for_key, Command};
pub use render::{draw, WINDOWED_HEIGHT};
pub use screen::ScreenHost;

/// Longest the loop sleeps without input, even with no timer armed.
const MAX_POLL: Duration = Duration::from_millis(250);

/// Configure the terminal, run the event loop, and tear everything down.
pub fn run_app(shell: &mut Shell, start_fullscreen: bool) -> Result<()> {
    let mut screen = ScreenHost::open(WINDOWED_HEIGHT)?;
    // Draw once windowed so the container has a home to return to.
    let mut result = screen.draw(shell);
    if result.is_ok() {
        if start_fullscreen {
            shell.toggle_fullscreen(&mut screen);
        }
        result = app_loop(&mut screen, shell);
    }
    screen.finish();
    result
}

fn app_loop(screen: &mut ScreenHost, shell: &mut Shell) -> Result<()> {
    screen.draw(shell)?;

    loop {
        let timeout = poll_timeout(shell.next_deadline(), Instant::now());
        let mut should_draw = false;

        if event::poll(timeout)? {
            let now = Instant::now();
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    shell.note_activity(now);
                    if handle_key_event(shell, screen, key, now) {
                        break;
                    }
                    should_draw = true;
                }
                Event::Mouse(mouse) if is_pointer_activity(mouse.kind) => {
                    should_draw |= shell.note_activity(now);
                }
                Event::Paste(_) => should_draw |= shell.note_activity(now),
                Event::Resize(_, _) => should_draw = true,
                _ => {}
            }
        }

        should_draw |= shell.poll(Instant::now());
        if should_draw {
            screen.draw(shell)?;
        }
    }
    Ok(())
}

/// Sleep until the earliest timer is due, never longer than `MAX_POLL`.
fn poll_timeout(deadline: Option<Instant>, now: Instant) -> Duration {
    deadline
        .map(|due| due.saturating_duration_since(now))
        .unwrap_or(MAX_POLL)
        .min(MAX_POLL)
}

fn is_pointer_activity(kind: MouseEventKind) -> bool {
    matches!(
        kind,
        MouseEventKind::Moved | MouseEventKind::Down(_) | MouseEventKind::Drag(_)
    )
}

/// Apply one key press to the shell. Returns true when the app should quit.
fn handle_key_event(
    shell: &mut Shell,
    host: &mut dyn FullscreenHost,
    key: KeyEvent,
    now: Instant,
) -> bool {
    log_debug(&format!(
        "Key event: {:?} with modifiers: {:?}",
        key.code, key.modifiers
    ));

    let Some(command) = command_for_key(key, shell.view_state().menu_open) else {
        return false;
    };
    match command {
        Command::Quit => return true,
        Command::ToggleRun => {
            shell.toggle_run(now);
        }
        Command::Reset => {
            shell.reset_timer(now);
        }
        Command::ToggleView => shell.toggle_view(now),
        Command::ToggleFullscreen => shell.toggle_fullscreen(host),
        Command::ToggleMenu => shell.toggle_menu(),
        Command::Back => {
            if host.is_fullscreen() {
                shell.exit_fullscreen(host);
            } else {
                shell.close_menu();
            }
        }
        Command::MenuUp => shell.menu_move(-1),
        Command::MenuDown => shell.menu_move(1),
        Command::MenuActivate => shell.activate_menu_item(now, host),
        Command::Adjust(delta) => {
            shell.adjust_selected(delta);
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::SilentAlert;
    use crate::pomodoro::TimerConfig;
    use crate::shell::{MountedView, ShellSettings, View};
    use crossterm::event::{KeyCode, KeyModifiers};

    #[derive(Default)]
    struct FakeHost {
        fullscreen: bool,
    }

    impl FullscreenHost for FakeHost {
        fn request_fullscreen(&mut self) -> Result<()> {
            self.fullscreen = true;
            Ok(())
        }

        fn exit_fullscreen(&mut self) -> Result<()> {
            self.fullscreen = false;
            Ok(())
        }

        fn is_fullscreen(&self) -> bool {
            self.fullscreen
        }
    }

    fn pomodoro_shell(now: Instant) -> Shell {
        Shell::new(
            ShellSettings {
                timer: TimerConfig::new(25, 5),
                initial_view: View::Pomodoro,
                idle_after: Duration::from_secs(3),
            },
            Box::new(SilentAlert),
            now,
        )
    }

    fn press(
        shell: &mut Shell,
        host: &mut FakeHost,
        code: KeyCode,
        now: Instant,
    ) -> bool {
        handle_key_event(shell, host, KeyEvent::new(code, KeyModifiers::NONE), now)
    }

    fn running(shell: &Shell) -> bool {
        match shell.mounted() {
            MountedView::Pomodoro(session) => session.is_running(),
            MountedView::Clock(_) => false,
        }
    }

    #[test]
    fn poll_timeout_tracks_nearest_deadline() {
        let now = Instant::now();
        assert_eq!(poll_timeout(None, now), MAX_POLL);
        assert_eq!(
            poll_timeout(Some(now + Duration::from_millis(40)), now),
            Duration::from_millis(40)
        );
        assert_eq!(poll_timeout(Some(now + Duration::from_secs(5)), now), MAX_POLL);
        assert_eq!(poll_timeout(Some(now), now + Duration::from_secs(1)), Duration::ZERO);
    }

    #[test]
    fn pointer_activity_kinds() {
        assert!(is_pointer_activity(MouseEventKind::Moved));
        assert!(is_pointer_activity(MouseEventKind::Down(
            crossterm::event::MouseButton::Left
        )));
        assert!(!is_pointer_activity(MouseEventKind::ScrollUp));
    }

    #[test]
    fn space_toggles_and_q_quits() {
        let now = Instant::now();
        let mut shell = pomodoro_shell(now);
        let mut host = FakeHost::default();
        assert!(!press(&mut shell, &mut host, KeyCode::Char(' '), now));
        assert!(running(&shell));
        assert!(!press(&mut shell, &mut host, KeyCode::Char('p'), now));
        assert!(!running(&shell));
        assert!(press(&mut shell, &mut host, KeyCode::Char('q'), now));
    }

    #[test]
    fn esc_leaves_fullscreen_before_closing_menu() {
        let now = Instant::now();
        let mut shell = pomodoro_shell(now);
        let mut host = FakeHost::default();
        press(&mut shell, &mut host, KeyCode::Char('f'), now);
        press(&mut shell, &mut host, KeyCode::Char('m'), now);
        assert!(shell.view_state().fullscreen);
        assert!(shell.view_state().menu_open);

        press(&mut shell, &mut host, KeyCode::Esc, now);
        assert!(!shell.view_state().fullscreen);
        assert!(shell.view_state().menu_open);

        press(&mut shell, &mut host, KeyCode::Esc, now);
        assert!(!shell.view_state().menu_open);
    }

    #[test]
    fn menu_keys_edit_lengths() {
        let now = Instant::now();
        let mut shell = pomodoro_shell(now);
        let mut host = FakeHost::default();
        press(&mut shell, &mut host, KeyCode::Tab, now);
        press(&mut shell, &mut host, KeyCode::Down, now);
        press(&mut shell, &mut host, KeyCode::Down, now);
        press(&mut shell, &mut host, KeyCode::Right, now);
        press(&mut shell, &mut host, KeyCode::Right, now);
        assert_eq!(shell.config().focus_minutes(), 27);
        press(&mut shell, &mut host, KeyCode::Down, now);
        press(&mut shell, &mut host, KeyCode::Left, now);
        assert_eq!(shell.config().break_minutes(), 4);
    }

    #[test]
    fn view_key_switches_view() {
        let now = Instant::now();
        let mut shell = pomodoro_shell(now);
        let mut host = FakeHost::default();
        press(&mut shell, &mut host, KeyCode::Char('v'), now);
        assert_eq!(shell.view_state().active_view, View::Clock);
    }
}
