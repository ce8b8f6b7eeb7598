//! Error types for statement operations.
//!
//! This module defines [`StatementError`] which covers the failures that can occur
//! at the edges of the engine: fetching series from a provider, reading or writing
//! the series cache, and exporting rendered sections. The pivot transformations
//! themselves never fail.

use thiserror::Error;

/// Errors that can occur while fetching, caching, or exporting statement data.
#[derive(Error, Debug)]
pub enum StatementError {
    /// Network-related errors (connection failures, timeouts, etc.).
    #[error("Network error: {0}")]
    Network(String),

    /// Rate limit exceeded by a provider.
    #[error("Rate limited by {provider}: retry after {retry_after:?}")]
    RateLimited {
        /// The provider that rate limited the request.
        provider: String,
        /// Suggested time to wait before retrying.
        retry_after: Option<std::time::Duration>,
    },

    /// The requested company was not found.
    #[error("Company not found: {0}")]
    CompanyNotFound(String),

    /// Error parsing data from a provider or the cache.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Error interacting with the cache.
    #[error("Cache error: {0}")]
    Cache(String),

    /// No provider is configured for the requested operation.
    #[error("Provider not configured: {0}")]
    ProviderNotConfigured(String),

    /// An invalid parameter was provided.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Error building a DataFrame from rendered rows.
    #[error("Frame error: {0}")]
    Frame(String),

    /// Any other error.
    #[error("{0}")]
    Other(String),
}

/// Result type alias using [`StatementError`].
pub type Result<T> = std::result::Result<T, StatementError>;
