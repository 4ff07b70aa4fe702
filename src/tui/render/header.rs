//! Header bar: navigation labels, hamburger button and dropdown.
//!
//! Geometry helpers here are shared with mouse hit-testing so clicks land on
//! exactly what was drawn.

use super::colors;
use crate::app::App;
use crate::page::layout::MAX_CONTENT_WIDTH;
use crate::page::{NAV_LABELS, NavLayout};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

/// Columns between desktop navigation labels
const NAV_GAP: u16 = 3;
/// Columns between the header content and the screen edge
const EDGE_PADDING: u16 = 2;
/// Dropdown width including its border
pub const DROPDOWN_WIDTH: u16 = 24;
/// Hamburger glyph
const MENU_ICON: &str = "\u{2261}";
/// Close glyph shown while the menu is open
const CLOSE_ICON: &str = "\u{2715}";

/// Row the header content sits on, inset from the edges
fn content_row(header: Rect) -> Rect {
    let width = header.width.min(MAX_CONTENT_WIDTH);
    let x = header.x + (header.width - width) / 2;
    let inset = EDGE_PADDING.min(width / 2);
    Rect::new(
        x + inset,
        header.y + header.height / 2,
        width - inset * 2,
        1.min(header.height),
    )
}

/// Desktop navigation labels with the cell span each occupies, right aligned
#[must_use]
pub fn nav_item_rects(header: Rect) -> Vec<(Rect, &'static str)> {
    let row = content_row(header);
    let widths: Vec<u16> = NAV_LABELS
        .iter()
        .map(|label| u16::try_from(label.chars().count()).unwrap_or(u16::MAX))
        .collect();
    let gaps = NAV_GAP * u16::try_from(NAV_LABELS.len().saturating_sub(1)).unwrap_or(0);
    let total = widths.iter().sum::<u16>() + gaps;

    let mut x = row.right().saturating_sub(total).max(row.x);
    NAV_LABELS
        .iter()
        .zip(widths)
        .map(|(label, width)| {
            let rect = Rect::new(x, row.y, width, row.height).intersection(row);
            x = x.saturating_add(width + NAV_GAP);
            (rect, *label)
        })
        .collect()
}

/// Cell holding the hamburger button
#[must_use]
pub fn menu_button_rect(header: Rect) -> Rect {
    let row = content_row(header);
    Rect::new(row.right().saturating_sub(1), row.y, 1.min(row.width), row.height)
}

/// Dropdown area, hanging below the header at the right edge, clipped to `frame`
#[must_use]
pub fn dropdown_rect(header: Rect, frame: Rect) -> Rect {
    let row = content_row(header);
    let width = DROPDOWN_WIDTH.min(frame.width);
    let height = dropdown_height();
    let x = row.right().saturating_sub(width);
    Rect::new(x, header.bottom(), width, height).intersection(frame)
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "there are only a handful of navigation labels"
)]
const fn dropdown_height() -> u16 {
    // border + padding + items separated by blank rows + padding + border
    let items = NAV_LABELS.len() as u16;
    2 + 2 + items * 2 - 1
}

/// Dropdown items with the row each occupies, by index into [`NAV_LABELS`]
#[must_use]
pub fn dropdown_item_rects(header: Rect, frame: Rect) -> Vec<(Rect, usize)> {
    let area = dropdown_rect(header, frame);
    let inner = Rect::new(
        area.x.saturating_add(2),
        area.y.saturating_add(2),
        area.width.saturating_sub(4),
        area.height.saturating_sub(4),
    );
    (0..NAV_LABELS.len())
        .filter_map(|idx| {
            let offset = u16::try_from(idx * 2).ok()?;
            let rect = Rect::new(inner.x, inner.y.saturating_add(offset), inner.width, 1);
            (rect.y < inner.bottom() && !rect.is_empty()).then_some((rect, idx))
        })
        .collect()
}

/// Render the header bar
pub fn render_header(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let white = Style::default().bg(colors::WHITE.into());
    frame.render_widget(Block::default().style(white), area);

    match app.nav_layout() {
        NavLayout::Desktop => {
            let style = white.fg(app.ui.nav.into());
            for (rect, label) in nav_item_rects(area) {
                frame.render_widget(Paragraph::new(label).style(style), rect);
            }
        }
        NavLayout::Mobile => {
            let icon = if app.ui.menu.open {
                CLOSE_ICON
            } else {
                MENU_ICON
            };
            let style = white
                .fg(colors::BLACK.into())
                .add_modifier(Modifier::BOLD);
            frame.render_widget(Paragraph::new(icon).style(style), menu_button_rect(area));
        }
    }
}

/// Render the mobile dropdown over the page
pub fn render_dropdown(frame: &mut Frame<'_>, app: &App, header: Rect) {
    let area = dropdown_rect(header, frame.area());
    if area.is_empty() {
        return;
    }
    let white = Style::default().bg(colors::WHITE.into());
    frame.render_widget(Clear, area);
    frame.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(white.fg(colors::GRAY_300.into()))
            .style(white),
        area,
    );

    for (rect, idx) in dropdown_item_rects(header, frame.area()) {
        let highlighted = idx == app.ui.menu.highlighted;
        let (marker, color) = if highlighted {
            ("\u{203a} ", colors::BLUE_500)
        } else {
            ("  ", colors::GRAY_800)
        };
        let line = Line::from(vec![
            Span::styled(marker, white.fg(color.into())),
            Span::styled(NAV_LABELS[idx], white.fg(color.into())),
        ]);
        frame.render_widget(Paragraph::new(line), rect);
    }
}
