//! In-memory cache implementation.

use async_trait::async_trait;
use chrono::Utc;
use statements_core::{CompanyId, Result, SeriesCache, SeriesSource, TimeSeriesRecord};
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

/// Cache entry with timestamp for TTL-based invalidation.
#[derive(Debug, Clone)]
struct CacheEntry<T> {
    data: T,
    cached_at: chrono::DateTime<Utc>,
}

impl<T> CacheEntry<T> {
    fn new(data: T) -> Self {
        Self {
            data,
            cached_at: Utc::now(),
        }
    }

    fn is_stale(&self, ttl: Duration) -> bool {
        let age = Utc::now().signed_duration_since(self.cached_at);
        age > chrono::TimeDelta::from_std(ttl).unwrap_or(chrono::TimeDelta::MAX)
    }
}

/// Key for series cache entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct SeriesKey {
    provider: String,
    company: CompanyId,
    source: SeriesSource,
}

/// Simple in-memory cache for testing and development.
///
/// Data is stored in a `RwLock`-protected `HashMap` and is lost when the cache
/// is dropped. Records are cloned on get/put operations.
#[derive(Debug, Default)]
pub struct InMemoryCache {
    series: RwLock<HashMap<SeriesKey, CacheEntry<Vec<TimeSeriesRecord>>>>,
}

impl InMemoryCache {
    /// Create a new empty in-memory cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of cached record sets.
    pub async fn len(&self) -> usize {
        self.series.read().await.len()
    }

    /// Returns true if nothing is cached.
    pub async fn is_empty(&self) -> bool {
        self.series.read().await.is_empty()
    }
}

#[async_trait]
impl SeriesCache for InMemoryCache {
    #[instrument(skip(self), fields(provider = %provider, company = %company, source = %source))]
    async fn get_series(
        &self,
        provider: &str,
        company: &CompanyId,
        source: SeriesSource,
    ) -> Result<Option<Vec<TimeSeriesRecord>>> {
        let key = SeriesKey {
            provider: provider.to_string(),
            company: company.clone(),
            source,
        };

        let cache = self.series.read().await;
        match cache.get(&key) {
            Some(entry) => {
                debug!("Cache hit for series");
                Ok(Some(entry.data.clone()))
            }
            None => {
                debug!("Cache miss for series");
                Ok(None)
            }
        }
    }

    #[instrument(skip(self, records), fields(provider = %provider, company = %company, source = %source, count = records.len()))]
    async fn put_series(
        &self,
        provider: &str,
        company: &CompanyId,
        source: SeriesSource,
        records: &[TimeSeriesRecord],
    ) -> Result<()> {
        let key = SeriesKey {
            provider: provider.to_string(),
            company: company.clone(),
            source,
        };

        let mut cache = self.series.write().await;
        cache.insert(key, CacheEntry::new(records.to_vec()));
        debug!("Cached {} series records", records.len());
        Ok(())
    }

    #[instrument(skip(self), fields(company = %company))]
    async fn invalidate_company(&self, company: &CompanyId) -> Result<usize> {
        let mut cache = self.series.write().await;
        let before = cache.len();
        cache.retain(|key, _| &key.company != company);
        let removed = before - cache.len();
        debug!("Invalidated {} cache entries", removed);
        Ok(removed)
    }

    #[instrument(skip(self))]
    async fn invalidate_stale(&self, ttl: Duration) -> Result<usize> {
        let mut cache = self.series.write().await;
        let before = cache.len();
        cache.retain(|_, entry| !entry.is_stale(ttl));
        let removed = before - cache.len();

        if removed > 0 {
            debug!("Invalidated {} stale cache entries", removed);
        }

        Ok(removed)
    }

    #[instrument(skip(self))]
    async fn clear(&self) -> Result<()> {
        self.series.write().await.clear();
        debug!("Cleared all cache entries");
        Ok(())
    }
}
