//! Error types for color parsing, method selection and search
//!
//! This module provides error types for parsing hex colors, resolving
//! distance method names, checking hue damping, and running a search.

use std::fmt;

/// Error type for parsing hex color strings.
///
/// Returned when a string is not exactly six hexadecimal digits (after
/// stripping one optional leading `#`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseColorError {
    /// Wrong number of characters; carries the count that was found
    InvalidLength(usize),
    /// A character that is not a hexadecimal digit
    InvalidHex {
        /// Zero-based character position after the optional `#`
        position: usize,
        /// The offending character
        found: char,
    },
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseColorError::InvalidLength(found) => {
                write!(
                    f,
                    "invalid hex color length (expected 6 characters, found {})",
                    found
                )
            }
            ParseColorError::InvalidHex { position, found } => {
                write!(
                    f,
                    "invalid hex character {:?} at position {}",
                    found, position
                )
            }
        }
    }
}

impl std::error::Error for ParseColorError {}

/// Error type for an unrecognised distance method name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownDistanceMethod(pub String);

impl fmt::Display for UnknownDistanceMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown distance method {:?} (expected \"hue\" or \"absolute\")",
            self.0
        )
    }
}

impl std::error::Error for UnknownDistanceMethod {}

/// Error type for a hue lightness damping outside the open interval (0, 1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InvalidLightnessDamping(pub f64);

impl fmt::Display for InvalidLightnessDamping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "lightness damping must be between 0 and 1 (exclusive), got {}",
            self.0
        )
    }
}

impl std::error::Error for InvalidLightnessDamping {}

/// Error type for search operations.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchError {
    /// The query color could not be parsed
    InvalidColorFormat(ParseColorError),
    /// The requested distance method does not exist
    UnknownDistanceMethod(UnknownDistanceMethod),
    /// There are no swatches at all; a refresh is needed
    EmptyRepository,
}

impl From<ParseColorError> for SearchError {
    fn from(err: ParseColorError) -> Self {
        SearchError::InvalidColorFormat(err)
    }
}

impl From<UnknownDistanceMethod> for SearchError {
    fn from(err: UnknownDistanceMethod) -> Self {
        SearchError::UnknownDistanceMethod(err)
    }
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::InvalidColorFormat(err) => {
                write!(f, "invalid color: {}", err)
            }
            SearchError::UnknownDistanceMethod(err) => write!(f, "{}", err),
            SearchError::EmptyRepository => {
                write!(f, "no swatches available (refresh the local cache first)")
            }
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SearchError::InvalidColorFormat(err) => Some(err),
            SearchError::UnknownDistanceMethod(err) => Some(err),
            SearchError::EmptyRepository => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_parse_color_error_messages() {
        assert_eq!(
            ParseColorError::InvalidLength(4).to_string(),
            "invalid hex color length (expected 6 characters, found 4)"
        );
        assert_eq!(
            ParseColorError::InvalidHex {
                position: 2,
                found: 'x'
            }
            .to_string(),
            "invalid hex character 'x' at position 2"
        );
    }

    #[test]
    fn test_unknown_method_message() {
        assert_eq!(
            UnknownDistanceMethod("cie2000".into()).to_string(),
            "unknown distance method \"cie2000\" (expected \"hue\" or \"absolute\")"
        );
    }

    #[test]
    fn test_invalid_damping_message() {
        assert_eq!(
            InvalidLightnessDamping(1.5).to_string(),
            "lightness damping must be between 0 and 1 (exclusive), got 1.5"
        );
    }

    #[test]
    fn test_search_error_wraps_sources() {
        let err: SearchError = ParseColorError::InvalidLength(0).into();
        assert!(matches!(err, SearchError::InvalidColorFormat(_)));
        assert!(err.source().is_some());

        let err: SearchError = UnknownDistanceMethod("x".into()).into();
        assert!(matches!(err, SearchError::UnknownDistanceMethod(_)));

        assert!(SearchError::EmptyRepository.source().is_none());
    }
}
