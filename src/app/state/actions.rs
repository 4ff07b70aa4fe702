//! Keybinding actions applied to the application state.

use super::App;
use crate::config::Action;
use std::time::Instant;
use tracing::debug;

impl App {
    /// Apply a bound action.
    ///
    /// While help is showing any action closes it. While the menu is open the
    /// scroll actions move the highlight instead of the page.
    pub fn handle_action(&mut self, action: Action, now: Instant) {
        if self.show_help {
            self.show_help = false;
            if action == Action::Quit {
                self.should_quit = true;
            }
            return;
        }

        if self.ui.menu.open && self.handle_menu_action(action, now) {
            return;
        }

        match action {
            Action::ScrollDown => self.scroll_down(now),
            Action::ScrollUp => self.scroll_up(now),
            Action::PageDown => self.page_down(now),
            Action::PageUp => self.page_up(now),
            Action::ScrollTop => self.scroll_to_top(now),
            Action::ScrollBottom => self.scroll_to_bottom(now),
            Action::GoAbout | Action::GoExperience | Action::GoContact => {
                if let Some(label) = action.nav_label() {
                    self.ui.menu.close();
                    self.navigate(label, now);
                }
            }
            Action::ToggleMenu => {
                self.toggle_menu();
            }
            Action::Select | Action::Cancel => {}
            Action::Help => {
                self.ui.menu.close();
                self.show_help = true;
            }
            Action::Quit => {
                debug!("Quit requested");
                self.should_quit = true;
            }
        }
    }

    /// Menu-mode handling; returns whether the action was consumed
    fn handle_menu_action(&mut self, action: Action, now: Instant) -> bool {
        match action {
            Action::ScrollDown => self.ui.menu.next(),
            Action::ScrollUp => self.ui.menu.prev(),
            Action::Select => {
                let index = self.ui.menu.highlighted;
                self.select_menu_item(index, now);
            }
            Action::Cancel => self.ui.menu.close(),
            _ => return false,
        }
        true
    }
}
