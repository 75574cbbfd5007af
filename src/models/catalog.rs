//! Wire format of the remote swatch catalog.
//!
//! The catalog is a paginated JSON API: each page carries a `results` array
//! and a `next` link that is null on the last page. Only the fields needed
//! to build a [`Swatch`] are modelled; everything else is ignored.

use lab_match::{Rgb, Swatch};
use serde::Deserialize;

use crate::error::InvalidRecord;

/// One page of the catalog's swatch listing
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct CatalogPage {
    /// Total number of swatches in the catalog, if reported
    #[serde(default)]
    pub count: Option<u64>,

    /// Link to the next page; absent or null on the last page
    #[serde(default)]
    pub next: Option<String>,

    #[serde(default)]
    pub results: Vec<CatalogRecord>,
}

impl CatalogPage {
    pub fn has_next(&self) -> bool {
        self.next.as_deref().is_some_and(|n| !n.is_empty())
    }
}

/// A single swatch as delivered by the catalog.
///
/// `id` and `hex_color` are optional here so that one malformed record
/// does not fail the whole page; [`CatalogRecord::to_swatch`] enforces them.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct CatalogRecord {
    #[serde(default)]
    pub id: Option<i64>,

    #[serde(default)]
    pub hex_color: Option<String>,

    #[serde(default)]
    pub color_name: Option<String>,

    #[serde(default)]
    pub manufacturer: Option<ManufacturerRecord>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct ManufacturerRecord {
    #[serde(default)]
    pub name: Option<String>,
}

impl CatalogRecord {
    /// Display name: "Manufacturer Color" when both are known.
    pub fn display_name(&self) -> Option<String> {
        let color = self.color_name.as_deref().map(str::trim).filter(|s| !s.is_empty());
        let maker = self
            .manufacturer
            .as_ref()
            .and_then(|m| m.name.as_deref())
            .map(str::trim)
            .filter(|s| !s.is_empty());

        match (maker, color) {
            (Some(maker), Some(color)) => Some(format!("{maker} {color}")),
            (None, Some(color)) => Some(color.to_string()),
            (Some(maker), None) => Some(maker.to_string()),
            (None, None) => None,
        }
    }

    /// Validate the record and convert it into a swatch.
    ///
    /// `url_for` builds the display link from the swatch id.
    pub fn to_swatch(&self, url_for: impl Fn(u32) -> String) -> Result<Swatch, InvalidRecord> {
        let raw_id = self.id.ok_or(InvalidRecord::MissingId)?;
        let id = u32::try_from(raw_id)
            .ok()
            .filter(|&id| id > 0)
            .ok_or(InvalidRecord::BadId(raw_id))?;

        let hex = self.hex_color.as_deref().unwrap_or_default();
        let color: Rgb = hex.parse().map_err(|source| InvalidRecord::BadColor {
            id,
            hex: hex.to_string(),
            source,
        })?;

        let mut swatch = Swatch::new(id, color).with_url(url_for(id));
        swatch.name = self.display_name();
        Ok(swatch)
    }
}
