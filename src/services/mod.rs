pub mod catalog_client;
pub mod finder;
pub mod refresh;
pub mod report;
pub mod swatch_store;

pub use catalog_client::{CatalogSource, HttpCatalog};
pub use finder::{FindOutcome, SwatchFinder};
pub use refresh::{RefreshService, RefreshSummary};
pub use swatch_store::{InMemoryStore, JsonFileStore, SwatchRepository};
