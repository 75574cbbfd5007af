//! Linear RGB color type
//!
//! Linear RGB is proportional to physical light intensity. The sRGB to XYZ
//! matrix is only valid on linear values, so every Lab conversion passes
//! through this type.

use super::lut::srgb_to_linear;
use super::rgb::Rgb;

/// A color in linear RGB color space.
///
/// Values derived from an [`Rgb`] are always in 0.0..=1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    /// Red channel (linear light intensity)
    pub r: f64,
    /// Green channel (linear light intensity)
    pub g: f64,
    /// Blue channel (linear light intensity)
    pub b: f64,
}

impl LinearRgb {
    /// Create a new LinearRgb color from linear RGB values.
    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }
}

impl From<Rgb> for LinearRgb {
    /// Remove the sRGB gamma curve using the generated lookup table.
    fn from(rgb: Rgb) -> Self {
        Self {
            r: srgb_to_linear(rgb.r),
            g: srgb_to_linear(rgb.g),
            b: srgb_to_linear(rgb.b),
        }
    }
}
