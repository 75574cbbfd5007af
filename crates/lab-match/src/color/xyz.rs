//! CIE 1931 XYZ color type

use super::linear_rgb::LinearRgb;

/// Reference white used to normalise XYZ before the Lab transform.
///
/// CIE standard illuminant D65, 2° observer, scaled to Y = 100.
pub const D65: Xyz = Xyz {
    x: 95.047,
    y: 100.0,
    z: 108.883,
};

/// A color in CIE 1931 XYZ space, scaled so that sRGB white has Y = 100.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Xyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Xyz {
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl From<LinearRgb> for Xyz {
    /// Apply the sRGB (D65) primaries matrix.
    fn from(rgb: LinearRgb) -> Self {
        let r = rgb.r * 100.0;
        let g = rgb.g * 100.0;
        let b = rgb.b * 100.0;

        Self {
            x: 0.4124564 * r + 0.3575761 * g + 0.1804375 * b,
            y: 0.2126729 * r + 0.7151522 * g + 0.0721750 * b,
            z: 0.0193339 * r + 0.1191920 * g + 0.9503041 * b,
        }
    }
}
