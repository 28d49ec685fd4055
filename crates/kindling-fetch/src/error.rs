//! Fetch error types
//!
//! Per-URL failures are not errors in this crate; they become
//! `ResolutionOutcome::Failed` values. `FetchError` covers only resolver
//! construction, which can fail if the HTTP client cannot be built.

use thiserror::Error;

/// Resolver construction error
#[derive(Debug, Error)]
pub enum FetchError {
    /// The underlying HTTP client could not be built
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Specialized Result type for resolver construction
pub type FetchResult<T> = Result<T, FetchError>;
