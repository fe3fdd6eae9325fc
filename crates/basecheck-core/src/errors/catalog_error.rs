//! Feature catalog errors. All of these are fatal initialization failures.

/// Errors raised while loading the feature catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Malformed feature dataset: {0}")]
    ParseError(String),

    #[error("Duplicate feature id: {0}")]
    DuplicateFeature(String),

    #[error("Feature dataset contains no features")]
    Empty,
}
