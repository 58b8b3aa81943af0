//! Error types for catalog-page-parser.
//!
//! Missing fields and missing links are modeled as `None` or empty values,
//! never as errors. Only a document that cannot be turned into a tree at all
//! is reported from `parse`.

/// Error type for parsing operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No document tree could be built from the given content.
    #[error("HTML parsing failed: {0}")]
    ParseError(String),

    /// A configured CSS selector does not compile.
    #[error("Invalid selector for {field}: {selector:?}")]
    InvalidSelector {
        /// Name of the `Options` field holding the selector.
        field: &'static str,
        /// The rejected selector text.
        selector: String,
    },
}

/// Result type alias for parsing operations.
pub type Result<T> = std::result::Result<T, Error>;
