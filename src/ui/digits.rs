//! Flip-card digit tiles drawn from 5x5 block glyphs.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Block, BorderType, Borders, Widget},
};

pub const GLYPH_WIDTH: u16 = 5;
pub const GLYPH_HEIGHT: u16 = 5;
/// Glyph rows plus the top and bottom border.
pub const CARD_HEIGHT: u16 = GLYPH_HEIGHT + 2;
const GLYPH_GAP: u16 = 1;
/// Blank column between the border and the first/last glyph.
const CARD_PADDING: u16 = 1;
const SEAM_ROW: u16 = GLYPH_HEIGHT / 2;

type Glyph = [&'static str; GLYPH_HEIGHT as usize];

static BLANK: Glyph = ["     ", "     ", "     ", "     ", "     "];
static COLON: Glyph = ["     ", "  █  ", "     ", "  █  ", "     "];
static DIGITS: [Glyph; 10] = [
    ["█████", "█   █", "█   █", "█   █", "█████"],
    ["  █  ", " ██  ", "  █  ", "  █  ", " ███ "],
    ["█████", "    █", "█████", "█    ", "█████"],
    ["█████", "    █", " ████", "    █", "█████"],
    ["█   █", "█   █", "█████", "    █", "    █"],
    ["█████", "█    ", "█████", "    █", "█████"],
    ["█████", "█    ", "█████", "█   █", "█████"],
    ["█████", "    █", "   █ ", "  █  ", "  █  "],
    ["█████", "█   █", "█████", "█   █", "█████"],
    ["█████", "█   █", "█████", "    █", "█████"],
];

fn glyph(ch: char) -> &'static Glyph {
    match ch {
        ':' => &COLON,
        _ => match ch.to_digit(10) {
            Some(digit) => &DIGITS[digit as usize],
            None => &BLANK,
        },
    }
}

/// The five glyph rows for `text`; unsupported characters render blank.
pub fn card_lines(text: &str) -> Vec<String> {
    let gap = " ".repeat(GLYPH_GAP as usize);
    (0..GLYPH_HEIGHT as usize)
        .map(|row| {
            text.chars()
                .map(|ch| glyph(ch)[row])
                .collect::<Vec<_>>()
                .join(&gap)
        })
        .collect()
}

/// Outer width of the card for `text`, border included.
pub fn card_width(text: &str) -> u16 {
    let glyphs = u16::try_from(text.chars().count()).unwrap_or(u16::MAX);
    if glyphs == 0 {
        return 2 + 2 * CARD_PADDING;
    }
    glyphs
        .saturating_mul(GLYPH_WIDTH + GLYPH_GAP)
        .saturating_sub(GLYPH_GAP)
        .saturating_add(2 * CARD_PADDING + 2)
}

/// One digit group framed as a split-flap card.
pub struct FlipCard<'a> {
    text: &'a str,
    glyph_style: Style,
    frame_style: Style,
    seam_style: Style,
}

impl<'a> FlipCard<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            glyph_style: Style::default(),
            frame_style: Style::default(),
            seam_style: Style::default(),
        }
    }

    pub fn glyph_style(mut self, style: Style) -> Self {
        self.glyph_style = style;
        self
    }

    pub fn frame_style(mut self, style: Style) -> Self {
        self.frame_style = style;
        self
    }

    pub fn seam_style(mut self, style: Style) -> Self {
        self.seam_style = style;
        self
    }
}

impl Widget for FlipCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = area.intersection(buf.area);
        if area.width < 2 || area.height < 2 {
            return;
        }
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.frame_style);
        let inner = block.inner(area);
        block.render(area, buf);

        let content_x = inner.x.saturating_add(CARD_PADDING);
        let content_width = inner.width.saturating_sub(CARD_PADDING) as usize;
        for (row, line) in card_lines(self.text).iter().enumerate() {
            let y = inner.y + row as u16;
            if y >= inner.bottom() {
                break;
            }
            buf.set_stringn(content_x, y, line, content_width, self.glyph_style);
        }

        let seam_y = inner.y + SEAM_ROW;
        if seam_y >= inner.bottom() {
            return;
        }
        buf.get_mut(area.x, seam_y)
            .set_symbol("├")
            .set_style(self.frame_style);
        buf.get_mut(area.right() - 1, seam_y)
            .set_symbol("┤")
            .set_style(self.frame_style);
        for x in inner.left()..inner.right() {
            let cell = buf.get_mut(x, seam_y);
            if cell.symbol() == " " {
                cell.set_symbol("─").set_style(self.seam_style);
            }
        }
    }
}
