//! Mobile navigation menu state.

use crate::page::NAV_LABELS;

/// Dropdown navigation menu shown behind the hamburger button
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileMenu {
    /// Whether the dropdown is showing
    pub open: bool,
    /// Index into [`NAV_LABELS`] of the keyboard highlight
    pub highlighted: usize,
}

impl MobileMenu {
    /// Create a closed menu
    #[must_use]
    pub const fn new() -> Self {
        Self {
            open: false,
            highlighted: 0,
        }
    }

    /// Open a closed menu, close an open one
    pub const fn toggle(&mut self) {
        self.open = !self.open;
        if self.open {
            self.highlighted = 0;
        }
    }

    /// Close the menu
    pub const fn close(&mut self) {
        self.open = false;
    }

    /// Move the highlight down, wrapping at the end
    pub const fn next(&mut self) {
        self.highlighted = (self.highlighted + 1) % NAV_LABELS.len();
    }

    /// Move the highlight up, wrapping at the start
    pub const fn prev(&mut self) {
        self.highlighted = (self.highlighted + NAV_LABELS.len() - 1) % NAV_LABELS.len();
    }

    /// Label under the highlight
    #[must_use]
    pub const fn highlighted_label(&self) -> &'static str {
        NAV_LABELS[self.highlighted % NAV_LABELS.len()]
    }

    /// Close the menu and return the label of item `index`, if there is one.
    pub fn select(&mut self, index: usize) -> Option<&'static str> {
        self.close();
        NAV_LABELS.get(index).copied()
    }
}
