//! Color palette for the TUI
//!
//! Page colors come from the scroll tracker; these are the fixed ones around them.

use crate::color::Color;

/// Header, cards and dropdown surface
pub const WHITE: Color = Color::rgb(255, 255, 255);
/// Primary text on white surfaces
pub const INK: Color = Color::rgb(17, 24, 39);
/// Dropdown item text
pub const GRAY_800: Color = Color::rgb(31, 41, 55);
/// De-emphasized text (dates, link targets)
pub const GRAY_500: Color = Color::rgb(107, 114, 128);
/// Card borders
pub const GRAY_300: Color = Color::rgb(209, 213, 219);
/// Highlighted dropdown item
pub const BLUE_500: Color = Color::rgb(59, 130, 246);
/// Hamburger button
pub const BLACK: Color = Color::rgb(0, 0, 0);
/// Contact tile surface
pub const TILE: Color = crate::color::END;
/// Status bar surface
pub const STATUS_BG: Color = Color::rgb(30, 32, 40);
/// Status bar text
pub const STATUS_TEXT: Color = Color::rgb(130, 135, 150);
/// Help overlay surface
pub const MODAL_BG: Color = Color::rgb(25, 27, 35);
/// Help overlay text
pub const MODAL_TEXT: Color = Color::rgb(220, 220, 230);

/// Opacity of the snapshot background pattern
pub const PATTERN_OPACITY: f64 = 0.2;

/// Blend `color` over `background` at `opacity`
#[must_use]
pub fn fade(background: Color, color: Color, opacity: f64) -> ratatui::style::Color {
    background.interpolate(color, opacity.clamp(0.0, 1.0)).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fade_endpoints() {
        assert_eq!(fade(WHITE, INK, 0.0), WHITE.into());
        assert_eq!(fade(WHITE, INK, 1.0), INK.into());
        assert_eq!(fade(WHITE, INK, 7.0), INK.into());
    }
}
