use std::str::FromStr;

use crate::color::Rgb;
use crate::error::ParseColorError;

/// A catalog entry: an identifier, a measured color and optional display
/// metadata.
///
/// Swatches are created in bulk during a refresh and never mutated
/// afterwards. `id` is expected to be positive and unique within a set; the
/// producer of the set is responsible for that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Swatch {
    pub id: u32,
    pub color: Rgb,
    /// Display name, passed through unchanged
    pub name: Option<String>,
    /// Link to the swatch page, passed through unchanged
    pub url: Option<String>,
}

impl Swatch {
    pub fn new(id: u32, color: Rgb) -> Self {
        Self {
            id,
            color,
            name: None,
            url: None,
        }
    }

    /// Build a swatch from its stored hex color.
    ///
    /// # Example
    ///
    /// ```
    /// use lab_match::{Rgb, Swatch};
    ///
    /// let swatch = Swatch::parse(7, "#fe0101").unwrap();
    /// assert_eq!(swatch.color, Rgb::new(254, 1, 1));
    /// assert_eq!(swatch.hex_color(), "FE0101");
    /// ```
    pub fn parse(id: u32, hex_color: &str) -> Result<Self, ParseColorError> {
        Ok(Self::new(id, Rgb::from_str(hex_color)?))
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// The color as six uppercase hex digits.
    pub fn hex_color(&self) -> String {
        self.color.to_hex()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_sets_metadata() {
        let swatch = Swatch::new(3, Rgb::new(0, 0, 255))
            .with_name("Prusament Galaxy Blue")
            .with_url("https://example.test/swatch/3/");

        assert_eq!(swatch.id, 3);
        assert_eq!(swatch.name.as_deref(), Some("Prusament Galaxy Blue"));
        assert_eq!(swatch.url.as_deref(), Some("https://example.test/swatch/3/"));
        assert_eq!(swatch.hex_color(), "0000FF");
    }

    #[test]
    fn test_parse_rejects_bad_hex() {
        assert_eq!(
            Swatch::parse(1, "12345"),
            Err(ParseColorError::InvalidLength(5))
        );
    }
}
