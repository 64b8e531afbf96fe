//! Drawing: the container, the digit tiles, the dock, and the menu overlay.
//!
//! Everything here reads a `&Shell` and nothing else, so a frame is a pure
//! function of the shell's state.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::digits::{card_lines, card_width, FlipCard, CARD_HEIGHT};
use crate::pomodoro::Mode;
use crate::shell::{MenuItem, MountedView, Shell, View, ViewState};

/// Rows the windowed container needs: border, tiles, dock.
pub const WINDOWED_HEIGHT: u16 = CARD_HEIGHT + DOCK_HEIGHT + 2;
const DOCK_HEIGHT: u16 = 2;
const SEPARATOR_WIDTH: u16 = 7;
const MENU_WIDTH: u16 = 34;

const ACCENT: Color = Color::Rgb(255, 90, 90);
const BREAK_ACCENT: Color = Color::Rgb(110, 210, 150);
const DIM_BORDER: Color = Color::Rgb(130, 70, 70);
const GLYPH: Color = Color::Rgb(235, 230, 225);
const CARD_FRAME: Color = Color::Rgb(90, 90, 100);
const SEAM: Color = Color::Rgb(55, 55, 62);
const STATUS_TEXT: Color = Color::Rgb(160, 150, 150);
const HINT_KEY: Color = Color::Rgb(255, 220, 100);

pub fn draw(frame: &mut Frame<'_>, shell: &Shell) {
    let state = shell.view_state();
    let chrome = !state.idle;
    let area = frame.size();

    let body = if state.fullscreen {
        area
    } else {
        let mut container = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(if chrome { ACCENT } else { DIM_BORDER }));
        if chrome {
            container = container.title(Span::styled(
                format!(" flipclock · {} ", state.active_view.label()),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ));
        }
        let inner = container.inner(area);
        frame.render_widget(container, area);
        inner
    };

    let dock_height = if chrome { DOCK_HEIGHT } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(dock_height)])
        .split(body);

    draw_tiles(frame, chunks[0], shell);
    if chrome {
        draw_dock(frame, chunks[1], shell, state);
    }
    if state.menu_open {
        draw_menu(frame, area, shell, state);
    }
}

/// Two digit groups for the mounted view.
fn tile_groups(shell: &Shell) -> (String, String, Color) {
    match shell.mounted() {
        MountedView::Clock(clock) => {
            let sample = clock.sample();
            (sample.hours_text(), sample.minutes_text(), ACCENT)
        }
        MountedView::Pomodoro(session) => {
            let countdown = session.countdown();
            let accent = match session.mode() {
                Mode::Focus => ACCENT,
                Mode::Break => BREAK_ACCENT,
            };
            (countdown.minutes, countdown.seconds, accent)
        }
    }
}

fn draw_tiles(frame: &mut Frame<'_>, area: Rect, shell: &Shell) {
    let (left, right, accent) = tile_groups(shell);
    let left_width = card_width(&left);
    let right_width = card_width(&right);
    let total = left_width + SEPARATOR_WIDTH + right_width;

    let x = area.x + area.width.saturating_sub(total) / 2;
    let y = area.y + area.height.saturating_sub(CARD_HEIGHT) / 2;
    let height = CARD_HEIGHT.min(area.height);

    let left_area = Rect::new(x, y, left_width, height).intersection(area);
    frame.render_widget(styled_card(&left), left_area);

    let colon: Vec<Line> = card_lines(":").into_iter().map(Line::from).collect();
    let colon_area = Rect::new(
        x + left_width + 1,
        y + 1,
        SEPARATOR_WIDTH - 2,
        height.saturating_sub(2),
    )
    .intersection(area);
    frame.render_widget(
        Paragraph::new(colon).style(Style::default().fg(accent)),
        colon_area,
    );

    let right_area = Rect::new(x + left_width + SEPARATOR_WIDTH, y, right_width, height)
        .intersection(area);
    frame.render_widget(styled_card(&right), right_area);
}

fn styled_card(text: &str) -> FlipCard<'_> {
    FlipCard::new(text)
        .glyph_style(Style::default().fg(GLYPH).add_modifier(Modifier::BOLD))
        .frame_style(Style::default().fg(CARD_FRAME))
        .seam_style(Style::default().fg(SEAM))
}

fn draw_dock(frame: &mut Frame<'_>, area: Rect, shell: &Shell, state: ViewState) {
    let status = match shell.mounted() {
        MountedView::Clock(_) => Line::from(Span::styled(
            "LOCAL TIME",
            Style::default().fg(STATUS_TEXT).add_modifier(Modifier::BOLD),
        )),
        MountedView::Pomodoro(session) => {
            let accent = match session.mode() {
                Mode::Focus => ACCENT,
                Mode::Break => BREAK_ACCENT,
            };
            Line::from(vec![
                Span::styled(
                    session.mode().label(),
                    Style::default().fg(accent).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" · ", Style::default().fg(STATUS_TEXT)),
                Span::styled(session.status_label(), Style::default().fg(STATUS_TEXT)),
            ])
        }
    };

    let mut hints: Vec<(&str, &str)> = Vec::new();
    if state.active_view == View::Pomodoro {
        hints.push(("space", "start/pause"));
        hints.push(("r", "reset"));
    }
    hints.push(("v", "view"));
    hints.push(("f", if state.fullscreen { "window" } else { "fullscreen" }));
    hints.push(("m", "menu"));
    hints.push(("q", "quit"));

    let mut spans = Vec::new();
    for (key, action) in hints {
        spans.push(Span::styled(
            format!(" {key} "),
            Style::default().fg(HINT_KEY).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!("{action} "),
            Style::default().fg(STATUS_TEXT),
        ));
    }

    let lines = vec![centered(status, area.width), centered(Line::from(spans), area.width)];
    frame.render_widget(Paragraph::new(lines), area);
}

/// Left-pad a line so it sits in the middle of `width` columns.
fn centered(line: Line<'_>, width: u16) -> Line<'_> {
    let used: usize = line
        .spans
        .iter()
        .map(|span| UnicodeWidthStr::width(span.content.as_ref()))
        .sum();
    let pad = (width as usize).saturating_sub(used) / 2;
    let mut spans = vec![Span::raw(" ".repeat(pad))];
    spans.extend(line.spans);
    Line::from(spans)
}

fn menu_label(item: MenuItem, shell: &Shell, state: ViewState) -> String {
    let config = shell.config();
    match item {
        MenuItem::SwitchView => match state.active_view.toggled() {
            View::Clock => "Switch to clock".to_string(),
            View::Pomodoro => "Switch to pomodoro".to_string(),
        },
        MenuItem::Fullscreen => {
            if state.fullscreen {
                "Exit fullscreen".to_string()
            } else {
                "Enter fullscreen".to_string()
            }
        }
        MenuItem::FocusLength => format!("{}  ‹ {} min ›", item.label(), config.focus_minutes()),
        MenuItem::BreakLength => format!("{}  ‹ {} min ›", item.label(), config.break_minutes()),
        MenuItem::Close => item.label().to_string(),
    }
}

fn draw_menu(frame: &mut Frame<'_>, area: Rect, shell: &Shell, state: ViewState) {
    let items = shell.menu_items();
    let height = (items.len() as u16 + 2).min(area.height);
    let width = MENU_WIDTH.min(area.width);
    let popup = Rect::new(
        area.x + area.width.saturating_sub(width) / 2,
        area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    );

    let selected = shell.menu().selected();
    let lines: Vec<Line> = items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let label = menu_label(*item, shell, state);
            if index == selected {
                Line::from(Span::styled(
                    format!("▸ {label}"),
                    Style::default().fg(HINT_KEY).add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(Span::styled(
                    format!("  {label}"),
                    Style::default().fg(STATUS_TEXT),
                ))
            }
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(ACCENT))
        .title(Span::styled(
            " Menu ",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ));
    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}
