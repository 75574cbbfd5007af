#![allow(clippy::excessive_precision, clippy::module_inception)]

//! lab-match: perceptual nearest-swatch ranking
//!
//! This library ranks a set of color swatches by how close they look to a
//! query color. Colors are compared in CIE Lab space, where Euclidean
//! distance roughly follows perceived difference.
//!
//! # Quick Start
//!
//! ```
//! use lab_match::{search, Rgb, SearchQuery, Swatch, DistanceMethod};
//!
//! let swatches = vec![
//!     Swatch::new(1, "FF0000".parse().unwrap()),
//!     Swatch::new(2, "FE0101".parse().unwrap()),
//!     Swatch::new(3, "0000FF".parse().unwrap()),
//! ];
//!
//! let query = SearchQuery::new("FF0000".parse::<Rgb>().unwrap())
//!     .with_method(DistanceMethod::Absolute);
//! let result = search(&query, &swatches).unwrap();
//!
//! assert_eq!(result.best().unwrap().swatch.id, 1);
//! ```
//!
//! For repeated searches over the same set, build a [`SwatchIndex`] once. It
//! converts every swatch to Lab up front and answers queries against the
//! cached values.
//!
//! # Color Pipeline
//!
//! ```text
//! "RRGGBB"            (catalog / user input)
//!     |
//!     v
//! Rgb                  (three 8-bit channels)
//!     |
//!     v
//! LinearRgb            (inverse sRGB gamma via 256-entry LUT)
//!     |
//!     v
//! Xyz                  (sRGB primaries matrix, Y = 100 for white)
//!     |
//!     v
//! Lab                  (CIE 1976 L*a*b*, D65 reference white)
//!     |
//!     v
//! distance()           (hue-weighted or absolute)
//! ```
//!
//! ## Distance Methods
//!
//! | Method | Formula | Use |
//! |--------|---------|-----|
//! | [`DistanceMethod::Absolute`] | `sqrt(dL² + da² + db²)` | closest overall color |
//! | [`DistanceMethod::Hue`] | `sqrt((k·dL)² + da² + db²)` | closest hue, brightness matters less |
//!
//! The hue method damps the lightness delta by `k`, a [`LightnessDamping`]
//! strictly between 0 and 1 (default [`DEFAULT_LIGHTNESS_DAMPING`]). A swatch that is a lighter or darker shade
//! of the query therefore ranks ahead of one with a similar brightness but a
//! different hue.
//!
//! ## Ranking
//!
//! [`search`] drops excluded ids, scores the rest, sorts ascending by distance
//! with ties broken by ascending swatch id, and keeps the requested number of
//! matches. An empty swatch set is reported as
//! [`SearchError::EmptyRepository`]; a non-empty set whose members are all
//! excluded yields an empty [`SearchResult`].

pub mod color;
pub mod distance;
pub mod error;
pub mod rank;


pub use color::{Lab, LinearRgb, Rgb, Xyz};
pub use distance::{distance, DistanceMethod, LightnessDamping, DEFAULT_LIGHTNESS_DAMPING};
pub use error::{InvalidLightnessDamping, ParseColorError, SearchError, UnknownDistanceMethod};
pub use rank::{search, Match, SearchQuery, SearchResult, Swatch, SwatchIndex};
