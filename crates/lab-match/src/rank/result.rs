use super::swatch::Swatch;

/// A swatch together with its distance to the query color.
#[derive(Debug, Clone, PartialEq)]
pub struct Match {
    pub swatch: Swatch,
    pub distance: f64,
}

/// Ranked matches, closest first.
///
/// Holds at most the requested number of matches; may be empty when every
/// swatch was excluded.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchResult {
    matches: Vec<Match>,
}

impl SearchResult {
    pub(crate) fn new(matches: Vec<Match>) -> Self {
        Self { matches }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// The closest match, if any.
    pub fn best(&self) -> Option<&Match> {
        self.matches.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Match> {
        self.matches.iter()
    }

    pub fn as_slice(&self) -> &[Match] {
        &self.matches
    }

    /// Swatch ids in rank order.
    pub fn ids(&self) -> Vec<u32> {
        self.matches.iter().map(|m| m.swatch.id).collect()
    }
}

impl IntoIterator for SearchResult {
    type Item = Match;
    type IntoIter = std::vec::IntoIter<Match>;

    fn into_iter(self) -> Self::IntoIter {
        self.matches.into_iter()
    }
}

impl<'a> IntoIterator for &'a SearchResult {
    type Item = &'a Match;
    type IntoIter = std::slice::Iter<'a, Match>;

    fn into_iter(self) -> Self::IntoIter {
        self.matches.iter()
    }
}
