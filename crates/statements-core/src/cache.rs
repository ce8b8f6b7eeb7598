//! Cache trait for storing fetched series.
//!
//! This module defines the [`SeriesCache`] trait used by the loader to avoid
//! refetching the same company's series on every view.

use async_trait::async_trait;
use std::time::Duration;

use crate::{
    error::Result,
    tag::SeriesSource,
    types::{CompanyId, TimeSeriesRecord},
};

/// Trait for caching fetched series records.
///
/// Entries are keyed by provider name, company and source. Implementations can
/// store data in various backends (SQLite, in-memory, etc.).
#[async_trait]
pub trait SeriesCache: Send + Sync {
    /// Retrieves cached records.
    ///
    /// Returns `Ok(Some(records))` if cached data exists, `Ok(None)` if not cached.
    async fn get_series(
        &self,
        provider: &str,
        company: &CompanyId,
        source: SeriesSource,
    ) -> Result<Option<Vec<TimeSeriesRecord>>>;

    /// Stores records in the cache, replacing any previous entry for the key.
    async fn put_series(
        &self,
        provider: &str,
        company: &CompanyId,
        source: SeriesSource,
        records: &[TimeSeriesRecord],
    ) -> Result<()>;

    /// Removes every cached source for a company.
    ///
    /// Returns the number of entries removed.
    async fn invalidate_company(&self, company: &CompanyId) -> Result<usize>;

    /// Removes cache entries older than the specified TTL.
    ///
    /// Returns the number of entries invalidated.
    async fn invalidate_stale(&self, ttl: Duration) -> Result<usize>;

    /// Clears all cached data.
    async fn clear(&self) -> Result<()>;
}
