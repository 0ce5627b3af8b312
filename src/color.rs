// Copyright (C) 2025 Michael Wilson <mike@mdwn.dev>
//
// This program is free software: you can redistribute it and/or modify it under
// the terms of the GNU General Public License as published by the Free Software
// Foundation, version 3.
//
// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
// FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along with
// this program. If not, see <https://www.gnu.org/licenses/>.
//

use std::fmt;

/// Errors that can occur while parsing a hex color string.
#[derive(Debug, thiserror::Error)]
pub enum ColorError {
    #[error("invalid hex color '{0}': expected 6 or 8 hex digits")]
    Length(String),

    #[error("invalid hex color '{0}': {1}")]
    Digit(String, std::num::ParseIntError),
}

/// A normalized RGBW color. Each channel ranges from 0.0 to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub w: f64,
}

impl Color {
    /// All channels off.
    pub const OFF: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        w: 0.0,
    };

    /// Creates a new color. Channels outside of the 0.0 to 1.0 range are clamped.
    pub fn new(r: f64, g: f64, b: f64, w: f64) -> Color {
        Color { r, g, b, w }.clamped()
    }

    /// Parses a hex color string into a color. Leading # is accepted. The fourth
    /// byte indicates white and may be omitted, in which case the white channel
    /// is left off.
    pub fn from_hex(hex: &str) -> Result<Color, ColorError> {
        let digits = hex.trim_start_matches('#');
        if digits.len() != 6 && digits.len() != 8 {
            return Err(ColorError::Length(hex.to_string()));
        }

        let byte = |range: std::ops::Range<usize>| -> Result<f64, ColorError> {
            u8::from_str_radix(&digits[range], 16)
                .map(|value| f64::from(value) / f64::from(u8::MAX))
                .map_err(|e| ColorError::Digit(hex.to_string(), e))
        };

        Ok(Color {
            r: byte(0..2)?,
            g: byte(2..4)?,
            b: byte(4..6)?,
            w: if digits.len() == 8 { byte(6..8)? } else { 0.0 },
        })
    }

    /// Returns this color with every channel clamped to the 0.0 to 1.0 range.
    pub fn clamped(self) -> Color {
        Color {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
            w: self.w.clamp(0.0, 1.0),
        }
    }

    /// Scales every channel by the given factor and clamps the result.
    pub fn scaled(self, factor: f64) -> Color {
        Color {
            r: self.r * factor,
            g: self.g * factor,
            b: self.b * factor,
            w: self.w * factor,
        }
        .clamped()
    }

    /// The channels as an array, in RGBW order.
    pub fn channels(self) -> [f64; 4] {
        [self.r, self.g, self.b, self.w]
    }

    /// Builds a color from an array of channels in RGBW order.
    pub fn from_channels(channels: [f64; 4]) -> Color {
        Color {
            r: channels[0],
            g: channels[1],
            b: channels[2],
            w: channels[3],
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({:.3}, {:.3}, {:.3}, {:.3})",
            self.r, self.g, self.b, self.w
        )
    }
}

#[cfg(test)]
mod test {
    use super::{Color, ColorError};

    #[test]
    fn test_new_clamps_channels() {
        let color = Color::new(-0.5, 0.25, 1.5, 1.0);
        assert_eq!(color, Color::new(0.0, 0.25, 1.0, 1.0));
    }

    #[test]
    fn test_from_hex_rgb() {
        let color = Color::from_hex("#0000FF").expect("expected a color");
        assert_eq!(color, Color::new(0.0, 0.0, 1.0, 0.0));

        // A leading # is optional.
        let color = Color::from_hex("FF0000").expect("expected a color");
        assert_eq!(color, Color::new(1.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn test_from_hex_rgbw() {
        let color = Color::from_hex("#000000FF").expect("expected a color");
        assert_eq!(color, Color::new(0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn test_from_hex_invalid() {
        assert!(matches!(
            Color::from_hex("#00FF"),
            Err(ColorError::Length(_))
        ));
        assert!(matches!(
            Color::from_hex("#GG0000"),
            Err(ColorError::Digit(_, _))
        ));
    }

    #[test]
    fn test_scaled() {
        let color = Color::new(1.0, 0.5, 0.0, 1.0).scaled(0.5);
        assert_eq!(color, Color::new(0.5, 0.25, 0.0, 0.5));

        // Scaling cannot push channels out of range.
        let color = Color::new(0.8, 0.0, 0.0, 0.0).scaled(2.0);
        assert_eq!(color, Color::new(1.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn test_channels_round_trip() {
        let color = Color::new(0.1, 0.2, 0.3, 0.4);
        assert_eq!(color, Color::from_channels(color.channels()));
    }
}
