use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a keystroke asks the shell to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    ToggleRun,
    Reset,
    ToggleView,
    ToggleFullscreen,
    ToggleMenu,
    /// Esc: leave fullscreen first, otherwise close the menu.
    Back,
    MenuUp,
    MenuDown,
    MenuActivate,
    Adjust(i32),
}

/// Map a key press to a command. Navigation keys only mean something while
/// the menu is open.
pub fn command_for_key(key: KeyEvent, menu_open: bool) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Command::Quit),
            _ => None,
        };
    }

    let command = match key.code {
        KeyCode::Char('q') => Command::Quit,
        KeyCode::Char(' ') | KeyCode::Char('p') => Command::ToggleRun,
        KeyCode::Char('r') => Command::Reset,
        KeyCode::Char('v') => Command::ToggleView,
        KeyCode::Char('f') => Command::ToggleFullscreen,
        KeyCode::Char('m') | KeyCode::Tab => Command::ToggleMenu,
        KeyCode::Esc => Command::Back,
        KeyCode::Up if menu_open => Command::MenuUp,
        KeyCode::Down if menu_open => Command::MenuDown,
        KeyCode::Enter if menu_open => Command::MenuActivate,
        KeyCode::Left | KeyCode::Char('-') if menu_open => Command::Adjust(-1),
        KeyCode::Right | KeyCode::Char('+') | KeyCode::Char('=') if menu_open => {
            Command::Adjust(1)
        }
        _ => return None,
    };
    Some(command)
}
