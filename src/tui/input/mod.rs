//! Keyboard and mouse input handling

mod mouse;


pub use mouse::handle_mouse_event;

use crate::app::App;
use ratatui::crossterm::event::{KeyCode, KeyModifiers};
use std::time::Instant;
use tracing::debug;

/// Handle a key press by looking up its binding
pub fn handle_key_event(app: &mut App, code: KeyCode, modifiers: KeyModifiers, now: Instant) {
    match app.config.keys.get_action(code, modifiers) {
        Some(action) => app.handle_action(action, now),
        None if app.show_help => app.show_help = false,
        None => debug!(?code, ?modifiers, "Unbound key"),
    }
}
