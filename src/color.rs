//! Color values shared by script rendering and image recoloring.
//!
//! Accepts hex strings in the `#RGB`, `#RGBA`, `#RRGGBB` and `#RRGGBBAA`
//! forms and renders them back as the script dialect's color literal.

use image::Rgba;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(pub Rgba<u8>);

impl Color {
    pub const BLACK: Color = Color(Rgba([0, 0, 0, 255]));
    pub const WHITE: Color = Color(Rgba([255, 255, 255, 255]));

    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color(Rgba([r, g, b, 255]))
    }

    pub fn rgba(&self) -> Rgba<u8> {
        self.0
    }

    /// Parses a hex color string.
    ///
    /// # Examples
    /// ```
    /// use guigen::color::Color;
    ///
    /// let accent = Color::parse("#00b8c3").unwrap();
    /// assert_eq!(accent, Color::rgb(0x00, 0xb8, 0xc3));
    /// assert_eq!(Color::parse("#f00").unwrap(), Color::rgb(255, 0, 0));
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        let hex = s
            .strip_prefix('#')
            .ok_or_else(|| Error::InvalidParameter(format!("color '{s}' must start with '#'")))?;

        if let Some(c) = hex.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(Error::InvalidParameter(format!(
                "color '{s}' contains invalid hex character '{c}'"
            )));
        }

        let digits: Vec<u8> = hex
            .chars()
            .filter_map(|c| c.to_digit(16))
            .map(|d| d as u8)
            .collect();

        let channels: Vec<u8> = match digits.len() {
            3 | 4 => digits.iter().map(|d| d * 17).collect(),
            6 | 8 => digits.chunks(2).map(|pair| pair[0] * 16 + pair[1]).collect(),
            n => {
                return Err(Error::InvalidParameter(format!(
                    "color '{s}' has {n} hex digits, expected 3, 4, 6, or 8"
                )))
            }
        };

        let alpha = channels.get(3).copied().unwrap_or(255);
        Ok(Color(Rgba([channels[0], channels[1], channels[2], alpha])))
    }

    /// Hex form, `#rrggbb` when opaque and `#rrggbbaa` otherwise.
    pub fn to_hex(&self) -> String {
        let [r, g, b, a] = self.0 .0;
        if a == 255 {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }

    /// The script dialect's color literal: a quoted hex string.
    pub fn to_literal(&self) -> String {
        format!("\"{}\"", self.to_hex())
    }

    /// Linear interpolation towards `other`; `fraction` of 0.0 keeps `self`.
    pub fn interpolate(&self, other: Color, fraction: f64) -> Color {
        let fraction = fraction.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| -> u8 {
            (f64::from(a) + (f64::from(b) - f64::from(a)) * fraction).round() as u8
        };
        let [r1, g1, b1, a1] = self.0 .0;
        let [r2, g2, b2, a2] = other.0 .0;
        Color(Rgba([mix(r1, r2), mix(g1, g2), mix(b1, b2), mix(a1, a2)]))
    }

    /// Mixes with white; `fraction` is the share of the original color kept.
    pub fn tint(&self, fraction: f64) -> Color {
        Color::WHITE.interpolate(*self, fraction)
    }

    /// Mixes with black; `fraction` is the share of the original color kept.
    pub fn shade(&self, fraction: f64) -> Color {
        Color::BLACK.interpolate(*self, fraction)
    }

    /// Channel inversion, alpha untouched.
    pub fn invert(&self) -> Color {
        let [r, g, b, a] = self.0 .0;
        Color(Rgba([255 - r, 255 - g, 255 - b, a]))
    }

    /// Replaces the alpha channel.
    pub fn with_alpha(&self, alpha: u8) -> Color {
        let [r, g, b, _] = self.0 .0;
        Color(Rgba([r, g, b, alpha]))
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Color::parse(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}
