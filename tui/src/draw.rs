//! Frame rendering: header, range sidebar, card panel, status line.
//!
//! The sidebar is the hover surface. Every rendered row records its screen
//! rect in [`HitRegions`] so mouse movement can be mapped back to the range
//! entry under the cursor.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthChar;

use datapad_engine::{App, Card};

use crate::theme::Palette;

const SIDEBAR_WIDTH: u16 = 22;

/// Screen rects of the hover targets rendered last frame.
#[derive(Debug, Clone, Default)]
pub struct HitRegions {
    rows: Vec<(Rect, usize)>,
}

impl HitRegions {
    fn reset(&mut self) {
        self.rows.clear();
    }

    fn push_row(&mut self, rect: Rect, index: usize) {
        self.rows.push((rect, index));
    }

    /// Range entry under the given screen cell, if any.
    #[must_use]
    pub fn range_at(&self, column: u16, row: u16) -> Option<usize> {
        let position = Position::new(column, row);
        self.rows
            .iter()
            .find(|(rect, _)| rect.contains(position))
            .map(|(_, index)| *index)
    }
}

/// Render one frame from the app state.
pub fn draw<S>(frame: &mut Frame, app: &App<S>, palette: &Palette, regions: &mut HitRegions) {
    regions.reset();

    let [header, body, status] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    let [sidebar, cards] =
        Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)]).areas(body);

    draw_header(frame, palette, header);
    draw_sidebar(frame, app, palette, sidebar, regions);
    draw_cards(frame, app, palette, cards);
    draw_status(frame, app, palette, status);
}

fn draw_header(frame: &mut Frame, palette: &Palette, area: Rect) {
    let title = Paragraph::new(" DATAPAD · personnel archive").style(palette.header_style());
    frame.render_widget(title, area);
}

fn draw_sidebar<S>(
    frame: &mut Frame,
    app: &App<S>,
    palette: &Palette,
    area: Rect,
    regions: &mut HitRegions,
) {
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(palette.border_style())
        .style(palette.panel_style())
        .title(" Ranges ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = Vec::with_capacity(app.ranges().len());
    for (index, label) in app.ranges().iter().enumerate() {
        let row = index as u16;
        if row >= inner.height {
            break;
        }

        let hovered = app.selected() == Some(index);
        let style = if hovered {
            palette.hovered_style()
        } else {
            palette.panel_style()
        };
        let marker = if hovered { "▸ " } else { "  " };
        lines.push(Line::styled(
            format!("{marker}{}", fit_width(label, inner.width.saturating_sub(2))),
            style,
        ));

        regions.push_row(Rect::new(inner.x, inner.y + row, inner.width, 1), index);
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn draw_cards<S>(frame: &mut Frame, app: &App<S>, palette: &Palette, area: Rect) {
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(palette.border_style())
        .style(palette.panel_style())
        .title(" Records ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cards = app.cards();
    if cards.is_empty() {
        let hint = if app.selected().is_some() {
            "Fetching records…"
        } else {
            "Hover a range to stream records."
        };
        frame.render_widget(
            Paragraph::new(Line::styled(hint, palette.hint_style())),
            inner,
        );
        return;
    }

    let mut lines = Vec::with_capacity(cards.len() * 3);
    for card in &cards {
        lines.extend(card_lines(card, palette, inner.width));
    }
    frame.render_widget(Paragraph::new(lines), inner);
}

fn card_lines(card: &Card, palette: &Palette, width: u16) -> [Line<'static>; 3] {
    let dot = match card.swatch {
        Some(swatch) => Span::styled("● ", Palette::swatch_color(swatch)),
        None => Span::styled("○ ", palette.hint_style()),
    };
    let name = Span::styled(
        fit_width(&card.record.name, width.saturating_sub(2)),
        palette.card_title_style(),
    );

    // Unit suffixes belong to the rendering, not the data.
    let details = Span::styled(
        format!(
            "  Height: {} cm, Mass: {} kg",
            card.record.height, card.record.mass
        ),
        palette.detail_style(),
    );

    [
        Line::from(vec![dot, name]),
        Line::from(details),
        Line::default(),
    ]
}

fn draw_status<S>(frame: &mut Frame, app: &App<S>, palette: &Palette, area: Rect) {
    let chime = if app.muted() { "chime off" } else { "chime on" };
    let line = Line::from(vec![
        Span::styled(" ↑/↓ hover · m chime · q quit", palette.hint_style()),
        Span::raw("   "),
        Span::styled(chime, palette.detail_style()),
    ]);
    frame.render_widget(Paragraph::new(line).style(palette.panel_style()), area);
}

/// Truncate `text` to at most `max` terminal columns, ellipsizing overflow.
fn fit_width(text: &str, max: u16) -> String {
    let max = usize::from(max);
    let total: usize = text.chars().map(|ch| ch.width().unwrap_or(0)).sum();
    if total <= max {
        return text.to_string();
    }

    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let width = ch.width().unwrap_or(0);
        if used + width > max.saturating_sub(1) {
            break;
        }
        out.push(ch);
        used += width;
    }
    out.push('…');
    out
}
