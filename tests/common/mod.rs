//! Common test infrastructure for swatchfinder integration tests.
//!
//! Each test file compiles its own copy of this module, so items may appear
//! unused from the perspective of a single test file even though they're
//! used elsewhere.

#![allow(dead_code)]
#![allow(unused_imports)]

pub mod fixtures;
pub mod mock_catalog;

pub use mock_catalog::MockCatalog;
