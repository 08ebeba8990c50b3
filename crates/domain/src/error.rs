//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`MueblesError`] via `#[from]`; the HTTP adapter decides how each
//! variant is surfaced to clients.

/// Top-level error returned by application services and repository ports.
#[derive(Debug, thiserror::Error)]
pub enum MueblesError {
    /// The request carried unusable data.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// The addressed furniture item does not exist.
    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// The backing store failed.
    #[error("storage error: {0}")]
    Storage(Box<dyn std::error::Error + Send + Sync>),
}

/// Rejections raised before touching the store.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// None of `nombre`, `precio`, `categoria` were supplied.
    #[error("no furniture field was supplied")]
    MissingData,

    /// A price filter could not be read as a number.
    #[error("price filter {0:?} is not a number")]
    InvalidPrice(String),

    /// The request body could not be decoded.
    #[error("malformed request body")]
    MalformedBody,

    /// The query string could not be decoded.
    #[error("malformed query string")]
    MalformedQuery,
}

/// Lookup of a code that has no matching record.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{entity} with code {code} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub code: String,
}
