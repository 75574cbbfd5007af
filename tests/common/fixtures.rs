//! Test fixtures and catalog payload builders.

use serde_json::{json, Value};
use swatchfinder::models::CatalogConfig;

/// The three-swatch reference catalog: two near-identical reds and a blue
pub const REFERENCE_SWATCHES: [(i64, &str); 3] = [(1, "FF0000"), (2, "FE0101"), (3, "0000FF")];

/// A catalog record as the remote API delivers it
pub fn record(id: i64, hex: &str) -> Value {
    json!({
        "id": id,
        "hex_color": hex,
        "color_name": format!("Color {id}"),
        "manufacturer": { "id": 1, "name": "Acme" },
        "filament_type": { "id": 2, "name": "PLA" },
        "td": 1.8
    })
}

/// One listing page; `next` is set when `has_next` is true
pub fn page(base_url: &str, number: u32, records: Vec<Value>, has_next: bool) -> Value {
    let next = has_next.then(|| format!("{base_url}/swatch/?page={}", number + 1));
    json!({
        "count": records.len(),
        "next": next,
        "previous": null,
        "results": records,
    })
}

/// Catalog config pointing at a mock server, with fast retries
pub fn catalog_config(base_url: &str) -> CatalogConfig {
    CatalogConfig {
        base_url: base_url.to_string(),
        timeout_secs: 5,
        max_retries: 2,
        retry_backoff_ms: 1,
        max_pages: 10,
        swatch_url_template: "https://catalog.test/swatch/{id}/".to_string(),
    }
}
