//! Perceptual distance between Lab colors
//!
//! Two methods are available, selected by [`DistanceMethod`]:
//!
//! - **Absolute**: plain Euclidean distance in Lab (CIE76 ΔE).
//! - **Hue**: Euclidean distance with the lightness delta damped, so that
//!   lighter or darker shades of the same hue stay close.

mod method;

pub use method::{distance, DistanceMethod, LightnessDamping, DEFAULT_LIGHTNESS_DAMPING};
