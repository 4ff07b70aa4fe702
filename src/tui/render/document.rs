//! Page rendering.
//!
//! The whole document is drawn into an off-screen buffer sized to the
//! computed layout, then the rows under the viewport are copied onto the frame.

use super::colors::{self, fade};
use crate::app::App;
use crate::color::Color;
use crate::content;
use crate::page::SectionId;
use crate::page::layout::{
    Card, ContactLayout, Entry, ExperienceLayout, PageLayout, Row, RowKind, Side,
};
use chrono::Datelike;
use ratatui::{
    Frame,
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, BorderType, Widget},
};
use std::time::Instant;

/// Glyph used for the snapshot background pattern
const PATTERN_GLYPH: &str = "\u{00b7}";
/// Samples taken along the pattern curve
const PATTERN_SAMPLES: u32 = 1800;

/// How a section blends into the page while it fades in
#[derive(Debug, Clone, Copy)]
struct Surface {
    page: Color,
    opacity: f64,
}

impl Surface {
    fn fg(self, color: Color) -> ratatui::style::Color {
        fade(self.page, color, self.opacity)
    }

    fn style(self, fg: Color, bg: Color) -> Style {
        Style::default().fg(self.fg(fg)).bg(self.fg(bg))
    }
}

/// Render the visible part of the page into `area`
pub fn render_page(frame: &mut Frame<'_>, app: &App, area: Rect, now: Instant) {
    let layout = app.layout();
    let doc = draw_document(&layout, app, now);
    let target = frame.buffer_mut();
    target.set_style(area, Style::default().bg(app.ui.background.into()));
    blit(&doc, target, area, app.viewport.scroll_y);
}

/// Draw the full document for the current colors and reveal state
#[must_use]
pub fn draw_document(layout: &PageLayout, app: &App, now: Instant) -> Buffer {
    let doc_area = Rect::new(0, 0, layout.width, layout.height);
    let mut buf = Buffer::empty(doc_area);
    let page = app.ui.background;
    buf.set_style(doc_area, Style::default().bg(page.into()));

    let surface = |section| Surface {
        page,
        opacity: app.reveal_opacity(section, now),
    };

    draw_snapshot(&mut buf, layout.snapshot, page);
    draw_card(&mut buf, &layout.about, surface(SectionId::About));
    draw_experience(&mut buf, &layout.experience, app.ui.nav, surface(SectionId::Experience));
    draw_contact(&mut buf, &layout.contact, surface(SectionId::Contact));

    let footer = content::footer(chrono::Local::now().year());
    draw_centered(
        &mut buf,
        layout.footer,
        &footer,
        Style::default().fg(colors::GRAY_500.into()),
    );

    buf
}

fn blit(doc: &Buffer, target: &mut Buffer, area: Rect, scroll_y: i32) {
    for row in 0..area.height {
        let Ok(doc_y) = u16::try_from(scroll_y + i32::from(row)) else {
            continue;
        };
        for col in 0..area.width {
            let Some(src) = doc.cell((col, doc_y)) else {
                continue;
            };
            if let Some(dst) = target.cell_mut((area.x + col, area.y + row)) {
                *dst = src.clone();
            }
        }
    }
}

fn draw_snapshot(buf: &mut Buffer, area: Rect, page: Color) {
    if area.is_empty() {
        return;
    }
    let pattern = Style::default().fg(fade(page, colors::WHITE, colors::PATTERN_OPACITY));
    for (x, y) in spirograph(area) {
        buf.set_string(x, y, PATTERN_GLYPH, pattern);
    }

    let title = Style::default()
        .fg(colors::WHITE.into())
        .add_modifier(Modifier::BOLD);
    let mid = area.y + area.height / 2;
    let headline_row = Rect::new(area.x, mid.saturating_sub(1), area.width, 1);
    let tagline_row = Rect::new(area.x, mid.saturating_add(1), area.width, 1);
    draw_centered(buf, headline_row, content::HEADLINE, title);
    draw_centered(
        buf,
        tagline_row,
        content::TAGLINE,
        Style::default().fg(colors::WHITE.into()),
    );
}

/// Cells on a hypotrochoid filling `area`; cells are about twice as tall as
/// they are wide, so the horizontal radius is doubled
#[expect(
    clippy::cast_possible_truncation,
    reason = "out-of-range coordinates are rejected by the u16 conversion"
)]
fn spirograph(area: Rect) -> Vec<(u16, u16)> {
    const FIXED: f64 = 5.0;
    const ROLLING: f64 = 3.0;
    const PEN: f64 = 5.0;
    let extent = FIXED - ROLLING + PEN;

    let rx = f64::from(area.width) / 2.0 - 1.0;
    let ry = f64::from(area.height) / 2.0 - 1.0;
    let radius_y = ry.min(rx / 2.0).max(0.0);
    let radius_x = radius_y * 2.0;
    let cx = f64::from(area.x) + f64::from(area.width) / 2.0;
    let cy = f64::from(area.y) + f64::from(area.height) / 2.0;

    let mut cells: Vec<(u16, u16)> = (0..PATTERN_SAMPLES)
        .filter_map(|i| {
            let t = f64::from(i) / f64::from(PATTERN_SAMPLES) * std::f64::consts::TAU * ROLLING;
            let ratio = (FIXED - ROLLING) / ROLLING;
            let x = (FIXED - ROLLING).mul_add(t.cos(), PEN * (ratio * t).cos()) / extent;
            let y = (FIXED - ROLLING).mul_add(t.sin(), -PEN * (ratio * t).sin()) / extent;
            let col = x.mul_add(radius_x, cx).floor();
            let row = y.mul_add(radius_y, cy).floor();
            let col = u16::try_from(col as i64).ok()?;
            let row = u16::try_from(row as i64).ok()?;
            (col < area.right() && row < area.bottom()).then_some((col, row))
        })
        .collect();
    cells.sort_unstable();
    cells.dedup();
    cells
}

fn card_block(surface: Surface) -> Block<'static> {
    Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(surface.style(colors::GRAY_300, colors::WHITE))
        .style(surface.style(colors::INK, colors::WHITE))
}

fn draw_card(buf: &mut Buffer, card: &Card, surface: Surface) {
    card_block(surface).render(card.area, buf);
    draw_rows(buf, card.inner(), &card.rows, surface);
}

fn draw_rows(buf: &mut Buffer, area: Rect, rows: &[Row], surface: Surface) {
    for (row, y) in rows.iter().zip(area.y..area.bottom()) {
        let line = Rect::new(area.x, y, area.width, 1);
        let style = row_style(row.kind, surface);
        match row.kind {
            RowKind::Blank => {}
            RowKind::HeadingCentered | RowKind::MutedCentered => {
                draw_centered(buf, line, &row.text, style);
            }
            _ => {
                buf.set_stringn(line.x, line.y, &row.text, usize::from(line.width), style);
            }
        }
    }
}

fn row_style(kind: RowKind, surface: Surface) -> Style {
    let base = surface.style(colors::INK, colors::WHITE);
    match kind {
        RowKind::Heading | RowKind::HeadingCentered | RowKind::Title => {
            base.add_modifier(Modifier::BOLD)
        }
        RowKind::Muted | RowKind::MutedCentered => base.fg(surface.fg(colors::GRAY_500)),
        RowKind::Subtitle => base.add_modifier(Modifier::ITALIC),
        RowKind::Body | RowKind::Blank => base,
    }
}

fn draw_experience(buf: &mut Buffer, experience: &ExperienceLayout, nav: Color, surface: Surface) {
    draw_card(buf, &experience.card, surface);
    let accent = Style::default()
        .fg(surface.fg(nav))
        .bg(surface.fg(colors::WHITE));

    if let Some(line) = experience.timeline {
        for y in line.top..line.bottom {
            buf.set_string(line.x, y, "\u{2502}", accent);
        }
    }

    for entry in &experience.entries {
        draw_entry(buf, entry, surface);
        if let Some(line) = experience.timeline {
            let y = entry.mid_y();
            buf.set_string(line.x, y, "\u{25cf}", accent);
            match entry.side {
                Side::Left => buf.set_string(line.x.saturating_sub(1), y, "\u{25b6}", accent),
                Side::Right => buf.set_string(line.x + 1, y, "\u{25c0}", accent),
                Side::Full => {}
            }
        }
    }
}

fn draw_entry(buf: &mut Buffer, entry: &Entry, surface: Surface) {
    card_block(surface).render(entry.area, buf);
    draw_rows(buf, entry.inner(), &entry.rows, surface);
}

fn draw_contact(buf: &mut Buffer, contact: &ContactLayout, surface: Surface) {
    draw_card(buf, &contact.card, surface);

    let tile = surface.style(colors::WHITE, colors::TILE);
    for (area, link) in &contact.tiles {
        buf.set_style(*area, tile);
        let icon_row = Rect::new(area.x, (area.y + area.height / 2).saturating_sub(1), area.width, 1);
        let label_row = Rect::new(area.x, icon_row.y + 1, area.width, 1);
        draw_centered(buf, icon_row, link.icon, tile.add_modifier(Modifier::BOLD));
        draw_centered(buf, label_row, link.label, tile);
    }

    draw_rows(buf, contact.links_area, &contact.links, surface);
}

fn draw_centered(buf: &mut Buffer, area: Rect, text: &str, style: Style) {
    if area.is_empty() {
        return;
    }
    let len = u16::try_from(text.chars().count()).unwrap_or(u16::MAX);
    let x = area.x + area.width.saturating_sub(len) / 2;
    buf.set_stringn(x, area.y, text, usize::from(area.right() - x), style);
}
