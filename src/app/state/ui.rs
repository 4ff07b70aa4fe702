//! UI-related state: page colors and the mobile menu

use super::MobileMenu;
use crate::color::{self, Color};
use crate::page::TrackerOutput;

/// View state derived from the scroll position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiState {
    /// Page background color
    pub background: Color,

    /// Navigation label and timeline color; always equal to `background`
    pub nav: Color,

    /// Whether the viewport has reached the contact section
    pub past_experience: bool,

    /// Mobile dropdown menu
    pub menu: MobileMenu,
}

impl UiState {
    /// Create the initial state: start colors, menu closed
    #[must_use]
    pub const fn new() -> Self {
        Self {
            background: color::START,
            nav: color::START,
            past_experience: false,
            menu: MobileMenu::new(),
        }
    }

    /// Store the result of a tracker evaluation
    pub const fn apply(&mut self, output: &TrackerOutput) {
        self.background = output.background;
        self.nav = output.nav;
        self.past_experience = output.past_experience;
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
