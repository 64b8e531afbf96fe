//! The real fullscreen host: an inline ratatui viewport on the main screen,
//! swapped for a fullscreen viewport on the alternate screen.

use anyhow::{Context, Result};
use ratatui::{
    backend::CrosstermBackend,
    layout::Rect,
    Terminal, TerminalOptions, Viewport,
};
use std::io::{self, Stdout, Write};

use super::render;
use crate::log_debug;
use crate::shell::{FullscreenHost, Shell};
use crate::terminal_restore::TerminalRestoreGuard;

type Backend = CrosstermBackend<Stdout>;

pub struct ScreenHost {
    terminal: Terminal<Backend>,
    guard: TerminalRestoreGuard,
    inline_rows: u16,
    /// Where the windowed container sits on the main screen.
    viewport_area: Rect,
}

fn open_terminal(viewport: Viewport) -> Result<Terminal<Backend>> {
    Terminal::with_options(
        CrosstermBackend::new(io::stdout()),
        TerminalOptions { viewport },
    )
    .context("failed to create terminal")
}

impl ScreenHost {
    /// Raw mode, mouse/paste capture, and an inline viewport of `inline_rows`.
    pub fn open(inline_rows: u16) -> Result<Self> {
        let guard = TerminalRestoreGuard::new();
        guard
            .enable_raw_mode()
            .context("failed to enable raw mode")?;
        guard
            .enable_mouse_capture(&mut io::stdout())
            .context("failed to enable mouse capture")?;
        let terminal = open_terminal(Viewport::Inline(inline_rows))?;
        Ok(Self {
            terminal,
            guard,
            inline_rows,
            viewport_area: Rect::default(),
        })
    }

    pub fn draw(&mut self, shell: &Shell) -> Result<()> {
        let area = self
            .terminal
            .draw(|frame| render::draw(frame, shell))
            .context("failed to draw frame")?
            .area;
        if !self.is_fullscreen() {
            self.viewport_area = area;
        }
        Ok(())
    }

    /// Leave the last windowed frame on screen with the cursor below it,
    /// then undo every terminal mode we switched on.
    pub fn finish(mut self) {
        if self.is_fullscreen() {
            if let Err(err) = self.exit_fullscreen() {
                log_debug(&format!("failed to leave fullscreen on exit: {err:#}"));
            }
        }
        let bottom = self.viewport_area.bottom().saturating_sub(1);
        if let Err(err) = self.terminal.set_cursor(0, bottom) {
            log_debug(&format!("failed to park cursor on exit: {err}"));
        }
        let mut stdout = io::stdout();
        let _ = stdout.write_all(b"\r\n");
        let _ = stdout.flush();
        self.guard.restore();
    }
}

impl FullscreenHost for ScreenHost {
    fn request_fullscreen(&mut self) -> Result<()> {
        if self.is_fullscreen() {
            return Ok(());
        }
        // The alternate screen saves the cursor; parking it on the container
        // origin brings the inline viewport back to the same rows later.
        self.terminal
            .set_cursor(self.viewport_area.x, self.viewport_area.y)
            .context("failed to park cursor")?;
        let mut stdout = io::stdout();
        self.guard
            .enter_alt_screen(&mut stdout)
            .context("failed to enter the alternate screen")?;
        match open_terminal(Viewport::Fullscreen) {
            Ok(mut terminal) => {
                if let Err(err) = terminal.clear() {
                    log_debug(&format!("failed to clear the alternate screen: {err}"));
                }
                self.terminal = terminal;
                log_debug("entered fullscreen");
                Ok(())
            }
            Err(err) => {
                let _ = self.guard.leave_alt_screen(&mut stdout);
                Err(err)
            }
        }
    }

    fn exit_fullscreen(&mut self) -> Result<()> {
        if !self.is_fullscreen() {
            return Ok(());
        }
        let mut stdout = io::stdout();
        self.guard
            .leave_alt_screen(&mut stdout)
            .context("failed to leave the alternate screen")?;
        match open_terminal(Viewport::Inline(self.inline_rows)) {
            Ok(terminal) => {
                self.terminal = terminal;
                log_debug("left fullscreen");
                Ok(())
            }
            Err(err) => {
                // The fullscreen terminal is still current; keep it on the
                // alternate screen it was built for.
                if let Err(reenter) = self.guard.enter_alt_screen(&mut stdout) {
                    log_debug(&format!("failed to return to the alternate screen: {reenter}"));
                } else if let Err(clear) = self.terminal.clear() {
                    log_debug(&format!("failed to clear the alternate screen: {clear}"));
                }
                Err(err)
            }
        }
    }

    fn is_fullscreen(&self) -> bool {
        self.guard.in_alt_screen()
    }
}
