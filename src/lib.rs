//! swatchfinder - find the filament swatches closest to a color
//!
//! Keeps a local copy of a remote swatch catalog and ranks it against a
//! query color using `lab-match`. This library exposes modules for
//! integration testing.

pub mod error;
pub mod models;
pub mod services;
