use std::sync::Arc;

use lab_match::{SearchQuery, SearchResult};

use crate::error::FinderError;
use crate::services::swatch_store::SwatchRepository;

/// Result of a search together with the size of the set it ran against
#[derive(Debug, Clone, PartialEq)]
pub struct FindOutcome {
    pub available: usize,
    pub result: SearchResult,
}

/// Runs searches against the current repository snapshot
pub struct SwatchFinder {
    store: Arc<dyn SwatchRepository>,
}

impl SwatchFinder {
    pub fn new(store: Arc<dyn SwatchRepository>) -> Self {
        Self { store }
    }

    /// Search the current snapshot.
    ///
    /// An empty repository surfaces as
    /// `FinderError::Search(SearchError::EmptyRepository)`.
    pub async fn find(&self, query: &SearchQuery) -> Result<FindOutcome, FinderError> {
        let snapshot = self.store.all_swatches().await?;
        let result = snapshot.search(query)?;

        tracing::debug!(
            available = snapshot.len(),
            excluded = query.excluded().len(),
            method = %query.method(),
            matches = result.len(),
            "Search complete"
        );

        Ok(FindOutcome {
            available: snapshot.len(),
            result,
        })
    }
}
