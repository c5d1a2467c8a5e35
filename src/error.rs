//! Error types for the platform-URL boundary.
//!
//! Parsing and merging are total and never fail; errors exist only where a
//! component set meets the platform URL type — converting to an absolute
//! `url::Url`, or writing a hostname the platform rejects.

use thiserror::Error;

/// Errors that can occur at the wrapper/platform boundary.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RelUrlError {
    /// The reference has no scheme, so no absolute URL can be built from it.
    #[error("reference is not absolute: no scheme present")]
    NotAbsolute,

    /// The platform URL type rejected a hostname.
    #[error("invalid hostname: {0}")]
    InvalidHost(String),

    /// The platform URL type rejected the serialized reference.
    #[error("URL parsing error: {0}")]
    Platform(String),
}

impl From<url::ParseError> for RelUrlError {
    fn from(err: url::ParseError) -> Self {
        RelUrlError::Platform(err.to_string())
    }
}
