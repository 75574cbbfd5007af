use std::collections::HashSet;
use std::num::NonZeroUsize;

use crate::color::Rgb;
use crate::distance::DistanceMethod;
use crate::error::SearchError;

/// What to search for: a color, how to measure distance, which swatches to
/// skip and how many matches to return.
///
/// Defaults are the hue method, no exclusions and a single match.
///
/// # Example
///
/// ```
/// use std::num::NonZeroUsize;
/// use lab_match::{DistanceMethod, Rgb, SearchQuery};
///
/// let query = SearchQuery::new(Rgb::new(255, 0, 0))
///     .with_method(DistanceMethod::Absolute)
///     .excluding([4, 9])
///     .with_count(NonZeroUsize::new(5).unwrap());
///
/// assert!(query.is_excluded(9));
/// assert_eq!(query.count().get(), 5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    color: Rgb,
    method: DistanceMethod,
    excluded: HashSet<u32>,
    count: NonZeroUsize,
}

impl SearchQuery {
    pub fn new(color: Rgb) -> Self {
        Self {
            color,
            method: DistanceMethod::default(),
            excluded: HashSet::new(),
            count: NonZeroUsize::MIN,
        }
    }

    /// Build a query from user-facing strings.
    ///
    /// Fails with [`SearchError::InvalidColorFormat`] or
    /// [`SearchError::UnknownDistanceMethod`]; neither is replaced by a
    /// default.
    ///
    /// # Example
    ///
    /// ```
    /// use lab_match::{SearchError, SearchQuery};
    ///
    /// assert!(SearchQuery::parse("#FF0000", "absolute").is_ok());
    /// assert!(matches!(
    ///     SearchQuery::parse("ZZZZZZ", "hue"),
    ///     Err(SearchError::InvalidColorFormat(_))
    /// ));
    /// ```
    pub fn parse(hex_color: &str, method: &str) -> Result<Self, SearchError> {
        let color: Rgb = hex_color.parse()?;
        let method: DistanceMethod = method.parse()?;
        Ok(Self::new(color).with_method(method))
    }

    pub fn with_method(mut self, method: DistanceMethod) -> Self {
        self.method = method;
        self
    }

    /// Add swatch ids that must not appear in the result.
    pub fn excluding(mut self, ids: impl IntoIterator<Item = u32>) -> Self {
        self.excluded.extend(ids);
        self
    }

    /// Maximum number of matches to return.
    pub fn with_count(mut self, count: NonZeroUsize) -> Self {
        self.count = count;
        self
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn method(&self) -> DistanceMethod {
        self.method
    }

    pub fn count(&self) -> NonZeroUsize {
        self.count
    }

    pub fn excluded(&self) -> &HashSet<u32> {
        &self.excluded
    }

    #[inline]
    pub fn is_excluded(&self, id: u32) -> bool {
        self.excluded.contains(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseColorError;

    #[test]
    fn test_defaults() {
        let query = SearchQuery::new(Rgb::new(1, 2, 3));
        assert_eq!(query.color(), Rgb::new(1, 2, 3));
        assert_eq!(query.method(), DistanceMethod::hue());
        assert_eq!(query.count().get(), 1);
        assert!(query.excluded().is_empty());
    }

    #[test]
    fn test_excluding_accumulates() {
        let query = SearchQuery::new(Rgb::new(0, 0, 0))
            .excluding([1, 2])
            .excluding(vec![2, 3]);
        assert_eq!(query.excluded().len(), 3);
        assert!(query.is_excluded(1) && query.is_excluded(3));
        assert!(!query.is_excluded(4));
    }

    #[test]
    fn test_parse_reports_each_failure() {
        assert_eq!(
            SearchQuery::parse("ZZZZZZ", "hue"),
            Err(SearchError::InvalidColorFormat(ParseColorError::InvalidHex {
                position: 0,
                found: 'Z'
            }))
        );
        assert!(matches!(
            SearchQuery::parse("FF0000", "delta-e"),
            Err(SearchError::UnknownDistanceMethod(_))
        ));

        let query = SearchQuery::parse("#00ff00", "ABSOLUTE").unwrap();
        assert_eq!(query.color(), Rgb::new(0, 255, 0));
        assert_eq!(query.method(), DistanceMethod::Absolute);
    }
}
