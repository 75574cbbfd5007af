//! 8-bit device RGB color type
//!
//! This is the representation swatches are stored and queried in: three
//! gamma-encoded sRGB channels, written as six hex digits.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseColorError;

/// A color as three 8-bit sRGB channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Rgb {
    /// Create an Rgb color from 8-bit channel values.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Format as six uppercase hex digits without a leading `#`.
    ///
    /// # Example
    /// ```
    /// use lab_match::Rgb;
    /// assert_eq!(Rgb::new(255, 1, 171).to_hex(), "FF01AB");
    /// ```
    pub fn to_hex(self) -> String {
        self.to_string()
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Parse a color from exactly six hex digits.
    ///
    /// A single leading `#` is stripped first. Parsing is case-insensitive.
    /// Whitespace and the 3-digit shorthand are rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use lab_match::{ParseColorError, Rgb};
    ///
    /// let red: Rgb = "#ff0000".parse().unwrap();
    /// assert_eq!(red, Rgb::new(255, 0, 0));
    ///
    /// assert_eq!("F00".parse::<Rgb>(), Err(ParseColorError::InvalidLength(3)));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('#').unwrap_or(s);

        let count = digits.chars().count();
        if count != 6 {
            return Err(ParseColorError::InvalidLength(count));
        }

        let mut nibbles = [0u8; 6];
        for (position, found) in digits.chars().enumerate() {
            let value = found
                .to_digit(16)
                .ok_or(ParseColorError::InvalidHex { position, found })?;
            nibbles[position] = value as u8;
        }

        Ok(Self::new(
            nibbles[0] << 4 | nibbles[1],
            nibbles[2] << 4 | nibbles[3],
            nibbles[4] << 4 | nibbles[5],
        ))
    }
}
