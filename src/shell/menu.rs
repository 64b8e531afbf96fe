use super::View;
use crate::pomodoro::Mode;

/// One row of the settings overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    SwitchView,
    Fullscreen,
    FocusLength,
    BreakLength,
    Close,
}

const CLOCK_ITEMS: &[MenuItem] = &[MenuItem::SwitchView, MenuItem::Fullscreen, MenuItem::Close];
const POMODORO_ITEMS: &[MenuItem] = &[
    MenuItem::SwitchView,
    MenuItem::Fullscreen,
    MenuItem::FocusLength,
    MenuItem::BreakLength,
    MenuItem::Close,
];

/// Rows offered for the active view; length controls exist only next to a
/// mounted Pomodoro.
pub fn menu_items(view: View) -> &'static [MenuItem] {
    match view {
        View::Clock => CLOCK_ITEMS,
        View::Pomodoro => POMODORO_ITEMS,
    }
}

impl MenuItem {
    pub fn label(self) -> &'static str {
        match self {
            MenuItem::SwitchView => "Switch view",
            MenuItem::Fullscreen => "Fullscreen",
            MenuItem::FocusLength => "Focus length",
            MenuItem::BreakLength => "Break length",
            MenuItem::Close => "Close menu",
        }
    }

    /// The phase whose length this row edits, if any.
    pub fn length_mode(self) -> Option<Mode> {
        match self {
            MenuItem::FocusLength => Some(Mode::Focus),
            MenuItem::BreakLength => Some(Mode::Break),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
    selected: usize,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Open with the first row selected.
    pub fn open(&mut self) {
        self.open = true;
        self.selected = 0;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Move the selection, wrapping at both ends.
    pub fn move_by(&mut self, delta: i32, len: usize) {
        if len == 0 {
            self.selected = 0;
            return;
        }
        let len = len as i64;
        let next = (self.selected as i64 + i64::from(delta)).rem_euclid(len);
        self.selected = next as usize;
    }

    /// Keep the selection inside a list that may have shrunk.
    pub fn clamp(&mut self, len: usize) {
        self.selected = self.selected.min(len.saturating_sub(1));
    }
}
