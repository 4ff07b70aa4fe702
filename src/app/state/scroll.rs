//! Manual scrolling helpers.

use super::App;
use crate::page::{ScrollBehavior, Scroller};
use std::time::Instant;

impl App {
    /// Scroll by `delta` rows (negative is up), cancelling any smooth scroll
    pub fn scroll_by(&mut self, delta: i32, now: Instant) {
        if self.viewport.scroll_by(delta) {
            self.on_scroll(now);
        }
    }

    /// Scroll down by the configured key step
    pub fn scroll_down(&mut self, now: Instant) {
        self.scroll_by(self.config.scroll_lines, now);
    }

    /// Scroll up by the configured key step
    pub fn scroll_up(&mut self, now: Instant) {
        self.scroll_by(-self.config.scroll_lines, now);
    }

    /// Scroll by a page, keeping one row of overlap
    pub fn page_down(&mut self, now: Instant) {
        self.scroll_by(self.page_step(), now);
    }

    /// Scroll back by a page, keeping one row of overlap
    pub fn page_up(&mut self, now: Instant) {
        self.scroll_by(-self.page_step(), now);
    }

    /// Return to the top of the page
    pub fn scroll_to_top(&mut self, now: Instant) {
        self.scroll_to(0, now);
    }

    /// Go to the bottom of the page
    pub fn scroll_to_bottom(&mut self, now: Instant) {
        self.scroll_to(self.viewport.max_scroll(), now);
    }

    fn scroll_to(&mut self, top: i32, now: Instant) {
        let before = self.viewport.scroll_y;
        self.viewport.scroll_to(top, ScrollBehavior::Smooth);
        if self.viewport.scroll_y != before {
            self.on_scroll(now);
        }
    }

    fn page_step(&self) -> i32 {
        (i32::from(self.viewport.height) - 1).max(1)
    }
}
