//! Ranking over a swatch set, with or without precomputed Lab values.

use crate::color::Lab;
use crate::error::SearchError;

use super::query::SearchQuery;
use super::result::{Match, SearchResult};
use super::swatch::Swatch;

/// Rank `swatches` against `query`.
///
/// Each candidate's Lab value is computed on the fly. Use [`SwatchIndex`]
/// when the same set is searched repeatedly.
///
/// # Errors
///
/// Returns [`SearchError::EmptyRepository`] if `swatches` is empty. A
/// non-empty set whose members are all excluded gives an empty result.
pub fn search(query: &SearchQuery, swatches: &[Swatch]) -> Result<SearchResult, SearchError> {
    if swatches.is_empty() {
        return Err(SearchError::EmptyRepository);
    }

    let candidates = swatches
        .iter()
        .filter(|s| !query.is_excluded(s.id))
        .map(|s| (s, Lab::from(s.color)));

    Ok(rank(query, candidates))
}

/// Score, sort and truncate already-filtered candidates.
fn rank<'a>(query: &SearchQuery, candidates: impl Iterator<Item = (&'a Swatch, Lab)>) -> SearchResult {
    let target = Lab::from(query.color());
    let method = query.method();

    let mut scored: Vec<(&Swatch, f64)> = candidates
        .map(|(swatch, lab)| (swatch, method.distance(target, lab)))
        .collect();

    // Ties go to the lower id so output is reproducible regardless of input order
    scored.sort_by(|a, b| a.1.total_cmp(&b.1).then_with(|| a.0.id.cmp(&b.0.id)));
    scored.truncate(query.count().get());

    SearchResult::new(
        scored
            .into_iter()
            .map(|(swatch, distance)| Match {
                swatch: swatch.clone(),
                distance,
            })
            .collect(),
    )
}

/// Swatch paired with its precomputed Lab value.
#[derive(Debug, Clone)]
struct IndexedSwatch {
    swatch: Swatch,
    lab: Lab,
}

/// An immutable swatch set with every Lab conversion done up front.
///
/// An index is never updated in place: a refresh builds a new one, so cached
/// Lab values can never outlive the swatches they were computed from.
///
/// # Example
///
/// ```
/// use lab_match::{Rgb, SearchQuery, Swatch, SwatchIndex};
///
/// let index = SwatchIndex::new(vec![
///     Swatch::new(1, Rgb::new(0, 0, 0)),
///     Swatch::new(2, Rgb::new(255, 255, 255)),
/// ]);
///
/// let result = index.search(&SearchQuery::new(Rgb::new(10, 10, 10))).unwrap();
/// assert_eq!(result.ids(), vec![1]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SwatchIndex {
    entries: Vec<IndexedSwatch>,
}

impl SwatchIndex {
    pub fn new(swatches: Vec<Swatch>) -> Self {
        let entries = swatches
            .into_iter()
            .map(|swatch| IndexedSwatch {
                lab: Lab::from(swatch.color),
                swatch,
            })
            .collect();
        Self { entries }
    }

    /// An index with no swatches.
    pub fn empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Swatches in the order they were supplied.
    pub fn swatches(&self) -> impl Iterator<Item = &Swatch> {
        self.entries.iter().map(|e| &e.swatch)
    }

    /// The cached Lab value for swatch `id`.
    pub fn lab_of(&self, id: u32) -> Option<Lab> {
        self.entries.iter().find(|e| e.swatch.id == id).map(|e| e.lab)
    }

    /// Rank the indexed swatches against `query`.
    ///
    /// Same contract as the free [`search`] function.
    pub fn search(&self, query: &SearchQuery) -> Result<SearchResult, SearchError> {
        if self.entries.is_empty() {
            return Err(SearchError::EmptyRepository);
        }

        let candidates = self
            .entries
            .iter()
            .filter(|e| !query.is_excluded(e.swatch.id))
            .map(|e| (&e.swatch, e.lab));

        Ok(rank(query, candidates))
    }
}

impl FromIterator<Swatch> for SwatchIndex {
    fn from_iter<I: IntoIterator<Item = Swatch>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
