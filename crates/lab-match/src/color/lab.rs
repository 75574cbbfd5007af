//! CIE L*a*b* color type
//!
//! Lab separates lightness (L) from two opponent chroma axes (a: green-red,
//! b: blue-yellow). Euclidean distance in Lab is the CIE76 color difference,
//! a reasonable approximation of perceived difference for swatch matching.

use super::linear_rgb::LinearRgb;
use super::rgb::Rgb;
use super::xyz::{Xyz, D65};

/// Threshold between the cube-root and linear segments of the Lab
/// nonlinearity: (6/29)^3.
const EPSILON: f64 = (6.0 / 29.0) * (6.0 / 29.0) * (6.0 / 29.0);

/// A color in CIE L*a*b* space relative to the D65 white point.
///
/// # Components
///
/// - `l`: Lightness, 0.0 (black) to 100.0 (white)
/// - `a`: Green-red axis (negative = green, positive = red)
/// - `b`: Blue-yellow axis (negative = blue, positive = yellow)
///
/// `a` and `b` are unbounded in principle; sRGB colors stay roughly within
/// -128..=127.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl Lab {
    /// Create a new Lab color.
    ///
    /// # Example
    ///
    /// ```
    /// use lab_match::Lab;
    ///
    /// let mid_gray = Lab::new(50.0, 0.0, 0.0);
    /// assert_eq!(mid_gray.l, 50.0);
    /// ```
    #[inline]
    pub fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Chroma magnitude `sqrt(a² + b²)`.
    #[inline]
    pub fn chroma(self) -> f64 {
        (self.a * self.a + self.b * self.b).sqrt()
    }
}

#[inline]
fn f(t: f64) -> f64 {
    if t > EPSILON {
        t.cbrt()
    } else {
        // 1 / (3 * (6/29)^2) = 841/108
        t * (841.0 / 108.0) + 4.0 / 29.0
    }
}

impl From<Xyz> for Lab {
    /// Normalise by the D65 white point and apply the CIE Lab transform.
    fn from(xyz: Xyz) -> Self {
        let fx = f(xyz.x / D65.x);
        let fy = f(xyz.y / D65.y);
        let fz = f(xyz.z / D65.z);

        Self {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }
}

impl From<LinearRgb> for Lab {
    fn from(rgb: LinearRgb) -> Self {
        Lab::from(Xyz::from(rgb))
    }
}

impl From<Rgb> for Lab {
    /// Full device RGB to Lab conversion. Total over all 8-bit inputs.
    ///
    /// # Example
    ///
    /// ```
    /// use lab_match::{Lab, Rgb};
    ///
    /// let white = Lab::from(Rgb::new(255, 255, 255));
    /// assert!((white.l - 100.0).abs() < 1e-3);
    /// assert!(white.a.abs() < 1e-3 && white.b.abs() < 1e-3);
    /// ```
    fn from(rgb: Rgb) -> Self {
        Lab::from(LinearRgb::from(rgb))
    }
}
