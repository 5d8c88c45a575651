//! Catalog query error types.

use thiserror::Error;

/// Errors that can occur when querying the catalog backend.
///
/// An unknown category slug is not an error: it yields an empty result
/// set. A discarded stale page is not an error either; it is silent.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The backend query failed (network or backend error).
    #[error("Catalog fetch failed: {0}")]
    Backend(String),

    /// The backend returned a payload that could not be decoded.
    #[error("Failed to decode catalog response: {0}")]
    Decode(String),
}
