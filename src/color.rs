//! RGB colors and linear interpolation between them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Background and navigation color before the transition starts.
pub const START: Color = Color::rgb(0x64, 0x95, 0xED);

/// Background and navigation color once the contact section is reached.
pub const END: Color = Color::rgb(0xCC, 0xCC, 0xFF);

/// Errors produced when parsing a hex color string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ColorParseError {
    /// The string (without `#`) was not exactly six characters long
    #[error("expected 6 hex digits, got {0} characters")]
    Length(usize),
    /// A character outside `0-9a-fA-F` was found
    #[error("invalid hex digit {0:?}")]
    Digit(char),
}

/// A 24-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Color {
    /// Create a color from its channels
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels as an `[r, g, b]` array
    #[must_use]
    pub const fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Blend `self` toward `other` by `factor`.
    ///
    /// Each channel is computed as `round(c1 + factor * (c2 - c1))`, rounding
    /// half away from zero. The factor is not clamped; callers keep it in
    /// `[0, 1]`. Channels are clamped to `0..=255` so the result is always a
    /// valid color.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "channel is clamped to the u8 range before the cast"
    )]
    pub fn interpolate(self, other: Self, factor: f64) -> Self {
        let mix = |a: u8, b: u8| -> u8 {
            let a = f64::from(a);
            let b = f64::from(b);
            (a + factor * (b - a)).round().clamp(0.0, 255.0) as u8
        };

        Self {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    /// Parse `#RRGGBB` (the leading `#` is optional, digits are case-insensitive)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        let count = digits.chars().count();
        if count != 6 {
            return Err(ColorParseError::Length(count));
        }

        let mut nibbles = [0_u8; 6];
        for (slot, ch) in nibbles.iter_mut().zip(digits.chars()) {
            let value = ch.to_digit(16).ok_or(ColorParseError::Digit(ch))?;
            *slot = u8::try_from(value).map_err(|_| ColorParseError::Digit(ch))?;
        }

        Ok(Self::rgb(
            nibbles[0] << 4 | nibbles[1],
            nibbles[2] << 4 | nibbles[3],
            nibbles[4] << 4 | nibbles[5],
        ))
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for ratatui::style::Color {
    fn from(color: Color) -> Self {
        Self::Rgb(color.r, color.g, color.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn channel_between(value: u8, a: u8, b: u8) -> bool {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        (lo..=hi).contains(&value)
    }

    #[test]
    fn test_parse_upper_and_lower_case() -> Result<(), ColorParseError> {
        assert_eq!("#6495ED".parse::<Color>()?, START);
        assert_eq!("#6495ed".parse::<Color>()?, START);
        assert_eq!("ccccff".parse::<Color>()?, END);
        Ok(())
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!("#fff".parse::<Color>(), Err(ColorParseError::Length(3)));
        assert_eq!(
            "#12345g".parse::<Color>(),
            Err(ColorParseError::Digit('g'))
        );
        assert_eq!("".parse::<Color>(), Err(ColorParseError::Length(0)));
    }

    #[test]
    fn test_parse_error_is_copied_out_of_results() {
        let results = ["#12", "#12345z"].map(|s| s.parse::<Color>());
        let errors: Vec<ColorParseError> =
            results.iter().copied().filter_map(Result::err).collect();
        assert_eq!(
            errors,
            [ColorParseError::Length(2), ColorParseError::Digit('z')]
        );
        assert_eq!(errors[1].to_string(), "invalid hex digit 'z'");
    }

    #[test]
    fn test_display_is_zero_padded_hex() {
        assert_eq!(Color::rgb(0, 10, 255).to_string(), "#000aff");
        assert_eq!(START.to_string(), "#6495ed");
    }

    #[test]
    fn test_endpoints_are_exact() {
        assert_eq!(START.interpolate(END, 0.0), START);
        assert_eq!(START.interpolate(END, 1.0), END);
    }

    #[test]
    fn test_midpoint_rounds_half_away_from_zero() {
        // green: 149 + 0.5 * 55 = 176.5 -> 177
        let mid = START.interpolate(END, 0.5);
        assert_eq!(mid, Color::rgb(152, 177, 246));
        assert_eq!(mid.to_string(), "#98b1f6");

        // descending blend: 177 - 0.5 * 55 = 149.5 -> 150
        let back = Color::rgb(0, 177, 0).interpolate(Color::rgb(0, 122, 0), 0.5);
        assert_eq!(back.g, 150);
    }

    #[test]
    fn test_out_of_range_factor_stays_valid() {
        assert_eq!(START.interpolate(END, 10.0), Color::rgb(255, 255, 255));
        assert_eq!(START.interpolate(END, -10.0), Color::rgb(0, 0, 57));
    }

    #[test]
    fn test_serde_uses_hex_string() -> Result<(), serde_json::Error> {
        let json = serde_json::to_string(&END)?;
        assert_eq!(json, "\"#ccccff\"");
        let parsed: Color = serde_json::from_str("\"#6495ED\"")?;
        assert_eq!(parsed, START);
        assert!(serde_json::from_str::<Color>("\"blue\"").is_err());
        Ok(())
    }

    #[test]
    fn test_into_ratatui_color() {
        let color: ratatui::style::Color = START.into();
        assert_eq!(color, ratatui::style::Color::Rgb(0x64, 0x95, 0xED));
    }

    proptest! {
        #[test]
        fn prop_blend_stays_between_endpoints(factor in 0.0_f64..=1.0) {
            let blended = START.interpolate(END, factor);
            for ((value, a), b) in blended
                .channels()
                .into_iter()
                .zip(START.channels())
                .zip(END.channels())
            {
                prop_assert!(channel_between(value, a, b));
            }
        }

        #[test]
        fn prop_blend_with_itself_is_identity(
            r in any::<u8>(),
            g in any::<u8>(),
            b in any::<u8>(),
            factor in -4.0_f64..=4.0,
        ) {
            let color = Color::rgb(r, g, b);
            prop_assert_eq!(color.interpolate(color, factor), color);
        }

        #[test]
        fn prop_display_parses_back(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
            let color = Color::rgb(r, g, b);
            prop_assert_eq!(color.to_string().parse::<Color>(), Ok(color));
        }
    }
}
