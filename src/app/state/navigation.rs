//! Section navigation and the mobile menu.

use super::App;
use crate::page::{NavLayout, Navigator};
use std::time::Instant;
use tracing::debug;

impl App {
    fn navigator(&self) -> Navigator {
        Navigator::new(self.config.nav_offset)
    }

    /// Handle a click on a navigation label.
    ///
    /// Returns whether a scroll was requested.
    pub fn navigate(&mut self, label: &str, now: Instant) -> bool {
        let anchors = self.anchors();
        let before = self.viewport.scroll_y;
        let requested = self.navigator().navigate(label, &anchors, &mut self.viewport);
        if self.viewport.scroll_y != before {
            self.on_scroll(now);
        }
        requested
    }

    /// Scroll to the section named by `label`, leaving the configured offset
    /// above it. Unknown labels do nothing.
    pub fn scroll_to_section(&mut self, label: &str, now: Instant) -> bool {
        let anchors = self.anchors();
        let before = self.viewport.scroll_y;
        let requested = self
            .navigator()
            .scroll_to_section(label, &anchors, &mut self.viewport);
        if self.viewport.scroll_y != before {
            self.on_scroll(now);
        }
        requested
    }

    /// Scroll so the snapshot section ends at the top of the page area
    pub fn scroll_to_snapshot_end(&mut self, now: Instant) -> bool {
        let anchors = self.anchors();
        let before = self.viewport.scroll_y;
        let requested = self
            .navigator()
            .scroll_to_snapshot_end(&anchors, &mut self.viewport);
        if self.viewport.scroll_y != before {
            self.on_scroll(now);
        }
        requested
    }

    /// Open or close the mobile menu.
    ///
    /// The menu only exists in the mobile layout; returns whether it toggled.
    pub fn toggle_menu(&mut self) -> bool {
        if self.nav_layout() == NavLayout::Desktop {
            debug!("Ignoring menu toggle in desktop layout");
            return false;
        }
        self.ui.menu.toggle();
        debug!(open = self.ui.menu.open, "Toggled menu");
        true
    }

    /// Close the menu, then navigate to dropdown item `index`
    pub fn select_menu_item(&mut self, index: usize, now: Instant) -> bool {
        let Some(label) = self.ui.menu.select(index) else {
            return false;
        };
        debug!(label, "Selected menu item");
        self.navigate(label, now)
    }
}
