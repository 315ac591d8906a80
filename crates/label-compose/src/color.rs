//! Hex colors and the readable-foreground selector

use crate::constants::LIGHTNESS_THRESHOLD;
use crate::types::{LabelError, Result};
use std::fmt;

/// 8-bit RGBA color. Parsed from `RRGGBB` with an optional `#` marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const TRANSPARENT: Color = Color {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parse a six-digit hex color, with or without the leading `#`
    pub fn from_hex(value: &str) -> Result<Self> {
        let digits = value.strip_prefix('#').unwrap_or(value);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(LabelError::InvalidColor(value.to_string()));
        }

        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| LabelError::InvalidColor(value.to_string()))
        };

        Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Normalized `#RRGGBB` form
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    pub fn is_opaque(self) -> bool {
        self.a == 255
    }

    /// Perceived lightness used for contrast decisions.
    ///
    /// Averages red with green counted twice; blue does not contribute.
    pub fn lightness(self) -> u32 {
        (self.r as u32 + self.g as u32 + self.g as u32) / 3
    }

    /// Foreground color that stays legible on this background
    pub fn readable_foreground(self) -> Color {
        if self.lightness() < LIGHTNESS_THRESHOLD {
            Color::WHITE
        } else {
            Color::BLACK
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl std::str::FromStr for Color {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self> {
        Color::from_hex(s)
    }
}
