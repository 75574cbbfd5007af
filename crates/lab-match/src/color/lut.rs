//! Gamma lookup table access
//!
//! The table is generated at compile time by build.rs from the exact
//! IEC 61966-2-1 formula, one entry per 8-bit channel value.

include!(concat!(env!("OUT_DIR"), "/gamma_lut.rs"));

/// Decode an 8-bit sRGB channel to linear light.
#[inline]
pub fn srgb_to_linear(channel: u8) -> f64 {
    SRGB_TO_LINEAR[channel as usize]
}
