//! Error types for the catalog vocabularies and generators.

use thiserror::Error;

/// Errors surfaced at the edges of the closed vocabularies.
///
/// Inside the crate the vocabularies are enums, so invalid members cannot
/// be constructed; these errors only occur where outside data crosses into
/// the typed domain (parsing display symbols, indexing the day/period
/// grids, decoding stored semester numbers).
#[derive(Debug, Error, Clone)]
pub enum CatalogError {
    /// A value outside one of the closed vocabularies reached a
    /// conversion boundary.
    #[error("{value:?} is not a valid {domain}")]
    InvalidEnumValue {
        /// Which vocabulary rejected the value.
        domain: &'static str,
        /// The offending input, verbatim.
        value: String,
    },

    /// A caller-supplied argument was outside the accepted range.
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },
}

impl CatalogError {
    pub(crate) fn invalid_enum(domain: &'static str, value: impl Into<String>) -> Self {
        CatalogError::InvalidEnumValue {
            domain,
            value: value.into(),
        }
    }
}
