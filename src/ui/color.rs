//! ARGB colour value.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors returned when parsing a hex colour.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseColorError {
    /// The text does not start with `#`.
    #[error("colour '{0}' must start with '#'")]
    MissingHash(String),

    /// A character is not a hex digit.
    #[error("colour '{text}' contains non-hex character '{found}'")]
    InvalidDigit {
        /// Parsed text.
        text: String,
        /// Offending character.
        found: char,
    },

    /// The digit count is not 3, 4, 6 or 8.
    #[error("colour '{0}' must have 3, 4, 6 or 8 hex digits")]
    InvalidLength(String),
}

/// Colour with alpha, red, green and blue channels.
///
/// Formats as `#AARRGGBB`. Parses `#RGB`, `#ARGB`, `#RRGGBB` and
/// `#AARRGGBB`; short forms repeat each digit and forms without alpha are
/// opaque.
///
/// ```
/// use winrt_shim::ui::Color;
///
/// let teal: Color = "#088".parse().expect("valid colour");
/// assert_eq!(teal, Color::from_argb(0xFF, 0x00, 0x88, 0x88));
/// assert_eq!(teal.to_hex(), "#FF008888");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    /// Alpha channel; `0` is transparent.
    pub a: u8,
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Color {
    /// Creates a colour from channel values.
    #[must_use]
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }

    /// Creates an opaque colour.
    #[must_use]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb(u8::MAX, r, g, b)
    }

    /// Returns the same colour with a different alpha.
    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Reports whether the colour is fully opaque.
    #[must_use]
    pub const fn is_opaque(self) -> bool {
        self.a == u8::MAX
    }

    /// Formats the colour as `#AARRGGBB`.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}{:02X}", self.a, self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let trimmed = text.trim();
        let Some(hex) = trimmed.strip_prefix('#') else {
            return Err(ParseColorError::MissingHash(text.to_owned()));
        };
        let mut digits = Vec::with_capacity(hex.len());
        for found in hex.chars() {
            let digit = found
                .to_digit(16)
                .and_then(|value| u8::try_from(value).ok())
                .ok_or_else(|| ParseColorError::InvalidDigit {
                    text: text.to_owned(),
                    found,
                })?;
            digits.push(digit);
        }

        match *digits.as_slice() {
            [r, g, b] => Ok(Self::from_rgb(repeat(r), repeat(g), repeat(b))),
            [a, r, g, b] => Ok(Self::from_argb(repeat(a), repeat(r), repeat(g), repeat(b))),
            [r1, r2, g1, g2, b1, b2] => Ok(Self::from_rgb(
                pair(r1, r2),
                pair(g1, g2),
                pair(b1, b2),
            )),
            [a1, a2, r1, r2, g1, g2, b1, b2] => Ok(Self::from_argb(
                pair(a1, a2),
                pair(r1, r2),
                pair(g1, g2),
                pair(b1, b2),
            )),
            _ => Err(ParseColorError::InvalidLength(text.to_owned())),
        }
    }
}

impl TryFrom<String> for Color {
    type Error = ParseColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

const fn repeat(nibble: u8) -> u8 {
    (nibble << 4) | nibble
}

const fn pair(high: u8, low: u8) -> u8 {
    (high << 4) | low
}

/// Named colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Colors;

impl Colors {
    /// Fully transparent white.
    pub const TRANSPARENT: Color = Color::from_argb(0x00, 0xFF, 0xFF, 0xFF);
    /// `#FF000000`.
    pub const BLACK: Color = Color::from_rgb(0x00, 0x00, 0x00);
    /// `#FFFFFFFF`.
    pub const WHITE: Color = Color::from_rgb(0xFF, 0xFF, 0xFF);
    /// `#FFFF0000`.
    pub const RED: Color = Color::from_rgb(0xFF, 0x00, 0x00);
    /// `#FF008000`.
    pub const GREEN: Color = Color::from_rgb(0x00, 0x80, 0x00);
    /// `#FF0000FF`.
    pub const BLUE: Color = Color::from_rgb(0x00, 0x00, 0xFF);
    /// `#FF808080`.
    pub const GRAY: Color = Color::from_rgb(0x80, 0x80, 0x80);
    /// `#FFFFA500`.
    pub const ORANGE: Color = Color::from_rgb(0xFF, 0xA5, 0x00);
    /// `#FF800080`.
    pub const PURPLE: Color = Color::from_rgb(0x80, 0x00, 0x80);
    /// `#FFFFFF00`.
    pub const YELLOW: Color = Color::from_rgb(0xFF, 0xFF, 0x00);
}
