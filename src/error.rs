use lab_match::{ParseColorError, SearchError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("Invalid catalog response from {url}: {message}")]
    Decode { url: String, message: String },

    #[error("Giving up on {url} after {attempts} attempts: {last}")]
    RetriesExhausted {
        url: String,
        attempts: u32,
        last: String,
    },
}

impl CatalogError {
    /// Whether retrying the same request might succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            CatalogError::Http(e) => e.is_timeout() || e.is_connect() || e.is_request(),
            CatalogError::Status { status, .. } => *status >= 500 || *status == 429,
            CatalogError::Decode { .. } | CatalogError::RetriesExhausted { .. } => false,
        }
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported store version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },

    #[error("Corrupt swatch {id} in store: {reason}")]
    CorruptSwatch { id: u32, reason: String },
}

#[derive(Debug, Error)]
pub enum RefreshError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Catalog still had more pages after {0} pages")]
    TooManyPages(u32),
}

#[derive(Debug, Error)]
pub enum FinderError {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Search error: {0}")]
    Search(#[from] SearchError),
}

/// A catalog record that cannot become a swatch.
#[derive(Debug, Error, PartialEq)]
pub enum InvalidRecord {
    #[error("record has no id")]
    MissingId,

    #[error("id {0} is not a positive 32-bit integer")]
    BadId(i64),

    #[error("swatch {id} has invalid color {hex:?}: {source}")]
    BadColor {
        id: u32,
        hex: String,
        source: ParseColorError,
    },
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("search.hue_lightness_damping: {0}")]
    Damping(#[from] lab_match::InvalidLightnessDamping),

    #[error("search.default_top_n must be at least 1")]
    ZeroTopN,

    #[error("search.default_method: {0}")]
    Method(#[from] lab_match::UnknownDistanceMethod),

    #[error("catalog.max_pages must be at least 1")]
    ZeroMaxPages,

    #[error("catalog.base_url must not be empty")]
    EmptyBaseUrl,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_error_status() {
        let error = CatalogError::Status {
            status: 404,
            url: "http://catalog.test/api/swatch/".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Unexpected status 404 from http://catalog.test/api/swatch/"
        );
        assert!(!error.is_transient());
    }

    #[test]
    fn test_catalog_error_transient_statuses() {
        for status in [500, 502, 503, 429] {
            let error = CatalogError::Status {
                status,
                url: String::new(),
            };
            assert!(error.is_transient(), "{status} should be retried");
        }
    }

    #[test]
    fn test_catalog_error_decode_is_permanent() {
        let error = CatalogError::Decode {
            url: "u".to_string(),
            message: "expected value".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid catalog response from u: expected value"
        );
        assert!(!error.is_transient());
    }

    #[test]
    fn test_store_error_unsupported_version() {
        let error = StoreError::UnsupportedVersion {
            found: 7,
            expected: 1,
        };
        assert_eq!(error.to_string(), "Unsupported store version 7 (expected 1)");
    }

    #[test]
    fn test_refresh_error_from_store_error() {
        let error: RefreshError = StoreError::CorruptSwatch {
            id: 3,
            reason: "bad".to_string(),
        }
        .into();
        assert!(matches!(error, RefreshError::Store(_)));
        assert_eq!(
            error.to_string(),
            "Store error: Corrupt swatch 3 in store: bad"
        );
    }

    #[test]
    fn test_finder_error_from_search_error() {
        let error: FinderError = SearchError::EmptyRepository.into();
        assert!(matches!(
            error,
            FinderError::Search(SearchError::EmptyRepository)
        ));
    }

    #[test]
    fn test_invalid_record_messages() {
        assert_eq!(InvalidRecord::MissingId.to_string(), "record has no id");
        assert_eq!(
            InvalidRecord::BadId(-4).to_string(),
            "id -4 is not a positive 32-bit integer"
        );
        let error = InvalidRecord::BadColor {
            id: 9,
            hex: "12345".to_string(),
            source: ParseColorError::InvalidLength(5),
        };
        assert_eq!(
            error.to_string(),
            "swatch 9 has invalid color \"12345\": invalid hex color length (expected 6 characters, found 5)"
        );
    }

    #[test]
    fn test_config_error_damping() {
        assert_eq!(
            ConfigError::Damping(lab_match::InvalidLightnessDamping(1.5)).to_string(),
            "search.hue_lightness_damping: lightness damping must be between 0 and 1 (exclusive), got 1.5"
        );
    }
}
