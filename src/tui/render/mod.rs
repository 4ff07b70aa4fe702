//! TUI rendering
//!
//! This module contains all rendering logic for the TUI, organized into:
//! - `colors`: Color palette definitions
//! - `header`: Navigation bar, hamburger button and dropdown
//! - `document`: The scrolling page itself
//! - `overlays`: Status bar and help overlay

pub mod colors;
pub mod document;
pub mod header;
pub mod overlays;


use crate::app::{App, HEADER_HEIGHT, STATUS_BAR_HEIGHT};
use crate::page::NavLayout;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};
use std::time::Instant;

/// Split the terminal into header, page and status bar
#[must_use]
pub fn chrome_layout(area: Rect) -> [Rect; 3] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2]]
}

/// Render the full application UI
pub fn render(frame: &mut Frame<'_>, app: &App, now: Instant) {
    let [header, page, status] = chrome_layout(frame.area());

    document::render_page(frame, app, page, now);
    header::render_header(frame, app, header);
    overlays::render_status_bar(frame, app, status);

    if app.ui.menu.open && app.nav_layout() == NavLayout::Mobile {
        header::render_dropdown(frame, app, header);
    }
    if app.show_help {
        overlays::render_help_overlay(frame, app);
    }
}
