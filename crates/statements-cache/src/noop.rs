//! No-op cache implementation.

use async_trait::async_trait;
use statements_core::{CompanyId, Result, SeriesCache, SeriesSource, TimeSeriesRecord};
use std::time::Duration;
use tracing::trace;

/// A no-op cache that doesn't store anything.
///
/// `get_series` always returns `Ok(None)` and every other method succeeds
/// without effect. Useful for disabling caching.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopCache;

impl NoopCache {
    /// Create a new no-op cache.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SeriesCache for NoopCache {
    async fn get_series(
        &self,
        _provider: &str,
        _company: &CompanyId,
        _source: SeriesSource,
    ) -> Result<Option<Vec<TimeSeriesRecord>>> {
        trace!("NoopCache: get_series called, returning None");
        Ok(None)
    }

    async fn put_series(
        &self,
        _provider: &str,
        _company: &CompanyId,
        _source: SeriesSource,
        _records: &[TimeSeriesRecord],
    ) -> Result<()> {
        trace!("NoopCache: put_series called, doing nothing");
        Ok(())
    }

    async fn invalidate_company(&self, _company: &CompanyId) -> Result<usize> {
        trace!("NoopCache: invalidate_company called, returning 0");
        Ok(0)
    }

    async fn invalidate_stale(&self, _ttl: Duration) -> Result<usize> {
        trace!("NoopCache: invalidate_stale called, returning 0");
        Ok(0)
    }

    async fn clear(&self) -> Result<()> {
        trace!("NoopCache: clear called, doing nothing");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_noop_cache_never_stores() {
        let cache = NoopCache::new();
        let company = CompanyId::new("42");
        let records = vec![TimeSeriesRecord::new("IS_EBIT")];

        assert!(
            cache
                .put_series("test", &company, SeriesSource::Raw, &records)
                .await
                .is_ok()
        );
        assert!(
            cache
                .get_series("test", &company, SeriesSource::Raw)
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_noop_cache_management() {
        let cache = NoopCache::new();
        let removed = cache
            .invalidate_stale(Duration::from_secs(3600))
            .await
            .unwrap();
        assert_eq!(removed, 0);
        assert_eq!(
            cache
                .invalidate_company(&CompanyId::new("42"))
                .await
                .unwrap(),
            0
        );
        assert!(cache.clear().await.is_ok());
    }
}
