//! Swatch ranking
//!
//! This module provides the [`Swatch`] record, the [`SearchQuery`] that
//! describes what to look for, and the two entry points that rank swatches
//! against a query: the free function [`search`] and the precomputed
//! [`SwatchIndex`].

mod index;
mod query;
mod result;
mod swatch;

pub use index::{search, SwatchIndex};
pub use query::SearchQuery;
pub use result::{Match, SearchResult};
pub use swatch::Swatch;
