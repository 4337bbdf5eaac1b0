//! Error types for the syllabus page parsers.

use crate::error::CatalogError;
use thiserror::Error;

/// Errors produced while turning saved OCW pages into catalog records.
#[derive(Debug, Error, Clone)]
pub enum ScrapeError {
    /// An element the page skeleton guarantees was not found.
    #[error("missing element: {selector}")]
    MissingElement {
        /// Selector for the element that was expected.
        selector: &'static str,
    },

    /// A labeled summary entry the record needs was not on the page.
    #[error("missing field: {field}")]
    MissingField { field: &'static str },

    /// A field was present but its text did not match the expected
    /// grammar.
    #[error("malformed {field}: {message}")]
    MalformedField {
        field: &'static str,
        message: String,
    },

    /// A parsed value fell outside one of the closed vocabularies.
    #[error("{0}")]
    Vocabulary(CatalogError),
}

impl From<CatalogError> for ScrapeError {
    fn from(err: CatalogError) -> Self {
        ScrapeError::Vocabulary(err)
    }
}
