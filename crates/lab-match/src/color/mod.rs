//! Color types and conversion utilities
//!
//! Each stage of the RGB to Lab transform has its own type so that values
//! from different spaces cannot be mixed by accident.
//!
//! - **Rgb**: 8-bit gamma-encoded device color. Parsed from and printed as hex.
//! - **LinearRgb**: linear light intensity, 0.0..=1.0.
//! - **Xyz**: CIE 1931 tristimulus values, scaled so white has Y = 100.
//! - **Lab**: CIE 1976 L*a*b* relative to the D65 white point.
//!
//! # Example
//!
//! ```
//! use lab_match::{Lab, Rgb};
//!
//! let red: Rgb = "FF0000".parse().unwrap();
//! let lab = Lab::from(red);
//! assert!((lab.l - 53.24).abs() < 0.01);
//! ```

mod lab;
mod linear_rgb;
mod lut;
mod rgb;
mod xyz;

pub use lab::Lab;
pub use linear_rgb::LinearRgb;
pub use rgb::Rgb;
pub use xyz::{Xyz, D65};
