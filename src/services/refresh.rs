//! Refresh orchestration: catalog pages in, one store replacement out.

use std::collections::HashMap;
use std::sync::Arc;

use lab_match::Swatch;

use crate::error::RefreshError;
use crate::models::CatalogConfig;
use crate::services::catalog_client::CatalogSource;
use crate::services::swatch_store::SwatchRepository;

/// Outcome of a completed refresh
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RefreshSummary {
    /// Catalog pages fetched
    pub pages: u32,
    /// Records delivered by the catalog
    pub fetched: usize,
    /// Records dropped because they were not valid swatches
    pub skipped: usize,
    /// Records whose id was already seen; the later record wins
    pub duplicates: usize,
    /// Swatches written to the store
    pub stored: usize,
}

/// Pages through the catalog and replaces the stored swatch set.
///
/// Nothing is written until every page has been fetched, so a failure part
/// way through leaves the previous set untouched. Ids are unique in the
/// stored set: when a record repeats an id, it replaces the earlier swatch in
/// place.
pub struct RefreshService {
    catalog: Arc<dyn CatalogSource>,
    store: Arc<dyn SwatchRepository>,
    config: CatalogConfig,
}

impl RefreshService {
    pub fn new(
        catalog: Arc<dyn CatalogSource>,
        store: Arc<dyn SwatchRepository>,
        config: CatalogConfig,
    ) -> Self {
        Self {
            catalog,
            store,
            config,
        }
    }

    pub async fn refresh(&self) -> Result<RefreshSummary, RefreshError> {
        let mut summary = RefreshSummary::default();
        let mut swatches: Vec<Swatch> = Vec::new();
        let mut positions: HashMap<u32, usize> = HashMap::new();
        let mut page_number = 1;

        loop {
            if page_number > self.config.max_pages {
                return Err(RefreshError::TooManyPages(self.config.max_pages));
            }

            let page = self.catalog.fetch_page(page_number).await?;
            summary.pages += 1;
            summary.fetched += page.results.len();

            for record in &page.results {
                match record.to_swatch(|id| self.config.swatch_url(id)) {
                    Ok(swatch) => match positions.get(&swatch.id) {
                        Some(&at) => {
                            summary.duplicates += 1;
                            tracing::debug!(
                                id = swatch.id,
                                page = page_number,
                                "Replacing duplicate catalog record"
                            );
                            swatches[at] = swatch;
                        }
                        None => {
                            positions.insert(swatch.id, swatches.len());
                            swatches.push(swatch);
                        }
                    },
                    Err(e) => {
                        summary.skipped += 1;
                        tracing::warn!(%e, page = page_number, "Skipping catalog record");
                    }
                }
            }

            tracing::info!(
                page = page_number,
                records = page.results.len(),
                total = swatches.len(),
                catalog_count = ?page.count,
                "Fetched catalog page"
            );

            if !page.has_next() {
                break;
            }
            page_number += 1;
        }

        summary.stored = swatches.len();
        self.store.replace_all(swatches).await?;

        tracing::info!(
            pages = summary.pages,
            stored = summary.stored,
            skipped = summary.skipped,
            duplicates = summary.duplicates,
            "Refresh complete"
        );

        Ok(summary)
    }
}
