//! Application shell: view selection, idle fade, fullscreen, and the global
//! settings menu.
//!
//! The shell owns the Pomodoro configuration and the only state that
//! survives a view switch. Whatever view is mounted owns its own timers;
//! switching views drops the old one, and its timers with it.

mod idle;
mod menu;

use anyhow::Result;
use std::time::{Duration, Instant};

use crate::audio::AlertSink;
use crate::clock::{ClockSample, ClockSource, ClockView};
use crate::config::DEFAULT_IDLE_MS;
use crate::log_debug;
use crate::pomodoro::{Mode, PomodoroSession, TimerConfig};
use crate::timer::earliest_deadline;

pub use idle::IdleTracker;
pub use menu::{menu_items, MenuItem, MenuState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Clock,
    Pomodoro,
}

impl View {
    pub fn toggled(self) -> Self {
        match self {
            View::Clock => View::Pomodoro,
            View::Pomodoro => View::Clock,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            View::Clock => "clock",
            View::Pomodoro => "pomodoro",
        }
    }
}

/// Expands the application's container to the whole screen and back.
pub trait FullscreenHost {
    fn request_fullscreen(&mut self) -> Result<()>;

    fn exit_fullscreen(&mut self) -> Result<()>;

    fn is_fullscreen(&self) -> bool;
}

/// Snapshot of the shell's view-level flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    pub active_view: View,
    pub idle: bool,
    pub fullscreen: bool,
    pub menu_open: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellSettings {
    pub timer: TimerConfig,
    pub initial_view: View,
    pub idle_after: Duration,
}

impl Default for ShellSettings {
    fn default() -> Self {
        Self {
            timer: TimerConfig::default(),
            initial_view: View::Clock,
            idle_after: Duration::from_millis(DEFAULT_IDLE_MS),
        }
    }
}

/// The view currently on screen, with its ephemeral state.
#[derive(Debug)]
pub enum MountedView {
    Clock(ClockView),
    Pomodoro(PomodoroSession),
}

impl MountedView {
    fn mount(view: View, config: TimerConfig, now: Instant, clock_source: ClockSource) -> Self {
        match view {
            View::Clock => MountedView::Clock(ClockView::mount_with(now, clock_source)),
            View::Pomodoro => MountedView::Pomodoro(PomodoroSession::mount(config)),
        }
    }

    pub fn view(&self) -> View {
        match self {
            MountedView::Clock(_) => View::Clock,
            MountedView::Pomodoro(_) => View::Pomodoro,
        }
    }

    fn deadline(&self) -> Option<Instant> {
        match self {
            MountedView::Clock(clock) => clock.deadline(),
            MountedView::Pomodoro(session) => session.deadline(),
        }
    }
}

pub struct Shell {
    config: TimerConfig,
    mounted: MountedView,
    idle: IdleTracker,
    fullscreen: bool,
    menu: MenuState,
    alert: Box<dyn AlertSink>,
    clock_source: ClockSource,
}

impl Shell {
    pub fn new(settings: ShellSettings, alert: Box<dyn AlertSink>, now: Instant) -> Self {
        Self::with_clock_source(settings, alert, now, ClockSample::now)
    }

    pub fn with_clock_source(
        settings: ShellSettings,
        alert: Box<dyn AlertSink>,
        now: Instant,
        clock_source: ClockSource,
    ) -> Self {
        Self {
            config: settings.timer,
            mounted: MountedView::mount(settings.initial_view, settings.timer, now, clock_source),
            idle: IdleTracker::new(settings.idle_after, now),
            fullscreen: false,
            menu: MenuState::default(),
            alert,
            clock_source,
        }
    }

    pub fn view_state(&self) -> ViewState {
        ViewState {
            active_view: self.mounted.view(),
            idle: self.idle.is_idle(),
            fullscreen: self.fullscreen,
            menu_open: self.menu.is_open(),
        }
    }

    pub fn config(&self) -> TimerConfig {
        self.config
    }

    pub fn mounted(&self) -> &MountedView {
        &self.mounted
    }

    pub fn menu(&self) -> &MenuState {
        &self.menu
    }

    pub fn menu_items(&self) -> &'static [MenuItem] {
        menu_items(self.mounted.view())
    }

    pub fn selected_menu_item(&self) -> Option<MenuItem> {
        self.menu_items().get(self.menu.selected()).copied()
    }

    /// Earliest wakeup any live timer needs.
    pub fn next_deadline(&self) -> Option<Instant> {
        earliest_deadline([self.idle.deadline(), self.mounted.deadline()])
    }

    /// Key, mouse, or paste input. Returns true when the chrome comes back.
    pub fn note_activity(&mut self, now: Instant) -> bool {
        self.idle.note_activity(now)
    }

    /// Fire due timers. Returns true when anything on screen changed.
    pub fn poll(&mut self, now: Instant) -> bool {
        let mut changed = self.idle.poll(now);
        match &mut self.mounted {
            MountedView::Clock(clock) => changed |= clock.poll(now),
            MountedView::Pomodoro(session) => {
                changed |= session.poll(now, self.alert.as_mut()).changed();
            }
        }
        changed
    }

    /// Unmount the current view and mount the other one fresh.
    pub fn toggle_view(&mut self, now: Instant) {
        let next = self.mounted.view().toggled();
        self.mounted = MountedView::mount(next, self.config, now, self.clock_source);
        self.menu.clamp(self.menu_items().len());
        log_debug(&format!("view switched to {}", next.label()));
        tracing::info!(view = next.label(), "view switched");
    }

    /// Enter or leave fullscreen. A refused enter is logged and leaves the
    /// flag untouched; a failed exit re-reads the flag from the host.
    pub fn toggle_fullscreen(&mut self, host: &mut dyn FullscreenHost) {
        let (entering, outcome) = if host.is_fullscreen() {
            (false, host.exit_fullscreen())
        } else {
            (true, host.request_fullscreen())
        };
        match outcome {
            Ok(()) => {
                self.sync_fullscreen(host);
                tracing::info!(fullscreen = self.fullscreen, "fullscreen changed");
            }
            Err(err) => {
                let action = if entering { "enter" } else { "exit" };
                log_debug(&format!("failed to {action} fullscreen: {err:#}"));
                tracing::warn!(action, error = %format!("{err:#}"), "fullscreen request failed");
                if !entering {
                    self.sync_fullscreen(host);
                }
            }
        }
    }

    /// Leave fullscreen from outside the toggle (Esc). The flag is re-read
    /// from the host whether or not the exit succeeded.
    pub fn exit_fullscreen(&mut self, host: &mut dyn FullscreenHost) {
        if !host.is_fullscreen() {
            self.sync_fullscreen(host);
            return;
        }
        if let Err(err) = host.exit_fullscreen() {
            log_debug(&format!("failed to exit fullscreen: {err:#}"));
            tracing::warn!(error = %format!("{err:#}"), "fullscreen exit failed");
        }
        self.sync_fullscreen(host);
    }

    pub fn sync_fullscreen(&mut self, host: &dyn FullscreenHost) {
        self.fullscreen = host.is_fullscreen();
    }

    pub fn toggle_menu(&mut self) {
        if self.menu.is_open() {
            self.menu.close();
        } else {
            self.menu.open();
        }
    }

    pub fn close_menu(&mut self) {
        self.menu.close();
    }

    pub fn menu_move(&mut self, delta: i32) {
        if self.menu.is_open() {
            self.menu.move_by(delta, self.menu_items().len());
        }
    }

    /// Run the selected row. Length rows step up by one minute.
    pub fn activate_menu_item(&mut self, now: Instant, host: &mut dyn FullscreenHost) {
        if !self.menu.is_open() {
            return;
        }
        match self.selected_menu_item() {
            Some(MenuItem::SwitchView) => self.toggle_view(now),
            Some(MenuItem::Fullscreen) => self.toggle_fullscreen(host),
            Some(MenuItem::FocusLength) => {
                self.adjust_length(Mode::Focus, 1);
            }
            Some(MenuItem::BreakLength) => {
                self.adjust_length(Mode::Break, 1);
            }
            Some(MenuItem::Close) => self.menu.close(),
            None => {}
        }
    }

    /// Step the selected length row. Other rows ignore it.
    pub fn adjust_selected(&mut self, delta: i32) -> bool {
        if !self.menu.is_open() {
            return false;
        }
        match self.selected_menu_item().and_then(MenuItem::length_mode) {
            Some(mode) => self.adjust_length(mode, delta),
            None => false,
        }
    }

    /// Edit one phase length and pass the new configuration down. Only
    /// offered while the Pomodoro view is mounted.
    pub fn adjust_length(&mut self, mode: Mode, delta: i32) -> bool {
        let MountedView::Pomodoro(session) = &mut self.mounted else {
            return false;
        };
        self.config.adjust(mode, delta);
        session.apply_config(self.config);
        log_debug(&format!(
            "pomodoro lengths: focus={}m break={}m",
            self.config.focus_minutes(),
            self.config.break_minutes()
        ));
        true
    }

    pub fn toggle_run(&mut self, now: Instant) -> bool {
        match &mut self.mounted {
            MountedView::Pomodoro(session) => {
                session.toggle_run(now);
                true
            }
            MountedView::Clock(_) => false,
        }
    }

    pub fn reset_timer(&mut self, now: Instant) -> bool {
        match &mut self.mounted {
            MountedView::Pomodoro(session) => {
                session.reset(now);
                true
            }
            MountedView::Clock(_) => false,
        }
    }
}
