pub mod catalog;
pub mod config;

pub use catalog::{CatalogPage, CatalogRecord, ManufacturerRecord};
pub use config::{AppConfig, CatalogConfig, SearchConfig, StoreConfig};
