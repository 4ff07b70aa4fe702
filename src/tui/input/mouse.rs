//! Mouse input handling (wheel scrolling and click-to-navigate).

use crate::app::App;
use crate::page::NavLayout;
use crate::tui::render::{chrome_layout, header};
use ratatui::{
    crossterm::event::{MouseButton, MouseEvent, MouseEventKind},
    layout::Rect,
};
use std::time::Instant;

/// Handle a mouse event.
///
/// The wheel scrolls the page; left clicks hit the navigation labels, the
/// hamburger button and the dropdown items.
pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent, now: Instant) {
    match mouse.kind {
        MouseEventKind::ScrollDown if !app.show_help => {
            app.scroll_by(app.config.wheel_lines, now);
        }
        MouseEventKind::ScrollUp if !app.show_help => {
            app.scroll_by(-app.config.wheel_lines, now);
        }
        MouseEventKind::Down(MouseButton::Left) => {
            handle_left_click(app, mouse.column, mouse.row, now);
        }
        _ => {}
    }
}

fn handle_left_click(app: &mut App, x: u16, y: u16, now: Instant) {
    if app.show_help {
        app.show_help = false;
        return;
    }

    let frame_area = app.frame_area();
    let [header_area, _, _] = chrome_layout(frame_area);

    if app.ui.menu.open {
        let hit = header::dropdown_item_rects(header_area, frame_area)
            .into_iter()
            .find(|(rect, _)| rect_contains(*rect, x, y));
        if let Some((_, idx)) = hit {
            app.select_menu_item(idx, now);
            return;
        }
        if !rect_contains(header::menu_button_rect(header_area), x, y) {
            // Clicking off the dropdown closes it
            app.ui.menu.close();
            return;
        }
    }

    match app.nav_layout() {
        NavLayout::Desktop => {
            let hit = header::nav_item_rects(header_area)
                .into_iter()
                .find(|(rect, _)| rect_contains(*rect, x, y));
            if let Some((_, label)) = hit {
                app.navigate(label, now);
            }
        }
        NavLayout::Mobile => {
            if rect_contains(header::menu_button_rect(header_area), x, y) {
                app.toggle_menu();
            }
        }
    }
}

const fn rect_contains(rect: Rect, x: u16, y: u16) -> bool {
    let within_x = x >= rect.x && x < rect.x.saturating_add(rect.width);
    let within_y = y >= rect.y && y < rect.y.saturating_add(rect.height);
    within_x && within_y
}
