//! SQLite-based cache implementation.

use async_trait::async_trait;
use chrono::Utc;
use rusqlite::{Connection, OptionalExtension, params};
use statements_core::{
    CompanyId, Result, SeriesCache, SeriesSource, StatementError, TimeSeriesRecord,
};
use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;
use tracing::{debug, instrument};

fn cache_err(e: impl std::fmt::Display) -> StatementError {
    StatementError::Cache(e.to_string())
}

/// SQLite-based cache for fetched series.
///
/// Each (provider, company, source) record set is stored as one JSON blob,
/// so a cache hit returns exactly what the provider answered, points included.
#[derive(Debug)]
pub struct SqliteCache {
    conn: Mutex<Connection>,
}

impl SqliteCache {
    /// Create a new SQLite cache at the given path.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or schema creation fails.
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let conn = Connection::open(path).map_err(cache_err)?;
        Self::from_connection(conn)
    }

    /// Create an in-memory SQLite cache.
    ///
    /// Useful for testing; data is lost when the cache is dropped.
    ///
    /// # Errors
    /// Returns an error if schema creation fails.
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(cache_err)?;
        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        let cache = Self {
            conn: Mutex::new(conn),
        };
        cache.initialize_schema()?;
        Ok(cache)
    }

    fn initialize_schema(&self) -> Result<()> {
        let conn = self.conn.lock().map_err(cache_err)?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS series_cache (
                provider TEXT NOT NULL,
                company TEXT NOT NULL,
                source TEXT NOT NULL,
                record_count INTEGER NOT NULL,
                data_json TEXT NOT NULL,
                cached_at TEXT NOT NULL,
                PRIMARY KEY (provider, company, source)
            )",
            [],
        )
        .map_err(cache_err)?;

        conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_series_cache_company ON series_cache(company)",
            [],
        )
        .map_err(cache_err)?;

        debug!("SQLite cache schema initialized");
        Ok(())
    }
}

#[async_trait]
impl SeriesCache for SqliteCache {
    #[instrument(skip(self), fields(provider = %provider, company = %company, source = %source))]
    async fn get_series(
        &self,
        provider: &str,
        company: &CompanyId,
        source: SeriesSource,
    ) -> Result<Option<Vec<TimeSeriesRecord>>> {
        let conn = self.conn.lock().map_err(cache_err)?;

        let json: Option<String> = conn
            .query_row(
                "SELECT data_json FROM series_cache
                 WHERE provider = ?1 AND company = ?2 AND source = ?3",
                params![provider, company.as_str(), source.as_str()],
                |row| row.get(0),
            )
            .optional()
            .map_err(cache_err)?;

        match json {
            Some(json) => {
                let records: Vec<TimeSeriesRecord> = serde_json::from_str(&json)
                    .map_err(|e| StatementError::Parse(e.to_string()))?;
                debug!("Cache hit: {} series records", records.len());
                Ok(Some(records))
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
        let json = serde_json::to_string(records).map_err(cache_err)?;
        let cached_at = Utc::now().to_rfc3339();
        let count = i64::try_from(records.len()).map_err(cache_err)?;

        let conn = self.conn.lock().map_err(cache_err)?;
        conn.execute(
            "INSERT OR REPLACE INTO series_cache
             (provider, company, source, record_count, data_json, cached_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                provider,
                company.as_str(),
                source.as_str(),
                count,
                json,
                cached_at
            ],
        )
        .map_err(cache_err)?;

        debug!("Cached {} series records", records.len());
        Ok(())
    }

    #[instrument(skip(self), fields(company = %company))]
    async fn invalidate_company(&self, company: &CompanyId) -> Result<usize> {
        let conn = self.conn.lock().map_err(cache_err)?;
        let removed = conn
            .execute(
                "DELETE FROM series_cache WHERE company = ?1",
                params![company.as_str()],
            )
            .map_err(cache_err)?;

        debug!("Invalidated {} cache entries", removed);
        Ok(removed)
    }

    #[instrument(skip(self))]
    async fn invalidate_stale(&self, ttl: Duration) -> Result<usize> {
        let cutoff = Utc::now() - chrono::Duration::from_std(ttl).map_err(cache_err)?;
        let cutoff_str = cutoff.to_rfc3339();

        let conn = self.conn.lock().map_err(cache_err)?;
        let removed = conn
            .execute(
                "DELETE FROM series_cache WHERE cached_at < ?1",
                params![cutoff_str],
            )
            .map_err(cache_err)?;

        if removed > 0 {
            debug!("Invalidated {} stale cache entries", removed);
        }

        Ok(removed)
    }

    #[instrument(skip(self))]
    async fn clear(&self) -> Result<()> {
        let conn = self.conn.lock().map_err(cache_err)?;
        conn.execute("DELETE FROM series_cache", [])
            .map_err(cache_err)?;

        debug!("Cleared all cache entries");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use statements_core::TimeSeriesPoint;

    fn records() -> Vec<TimeSeriesRecord> {
        vec![
            TimeSeriesRecord::new("IS_NET_REVENUES")
                .with_description("Net revenues")
                .with_unit("BRL")
                .with_point(TimeSeriesPoint::new(
                    NaiveDate::from_ymd_opt(2020, 12, 31).unwrap(),
                    Some(100.0),
                ))
                .with_point(TimeSeriesPoint {
                    is_estimate: Some(true),
                    ..TimeSeriesPoint::new(NaiveDate::from_ymd_opt(2021, 12, 31).unwrap(), None)
                }),
            TimeSeriesRecord::new("GROSS_MARGIN").with_unit("%"),
        ]
    }

    #[tokio::test]
    async fn test_sqlite_cache_series() {
        let cache = SqliteCache::in_memory().unwrap();
        let company = CompanyId::new("42");

        let result = cache
            .get_series("test", &company, SeriesSource::Raw)
            .await
            .unwrap();
        assert!(result.is_none());

        cache
            .put_series("test", &company, SeriesSource::Raw, &records())
            .await
            .unwrap();

        let result = cache
            .get_series("test", &company, SeriesSource::Raw)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(result, records());

        // Replacing an entry keeps a single row per key
        cache
            .put_series("test", &company, SeriesSource::Raw, &records()[1..])
            .await
            .unwrap();
        let result = cache
            .get_series("test", &company, SeriesSource::Raw)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].series_code, "GROSS_MARGIN");
    }

    #[tokio::test]
    async fn test_sqlite_cache_empty_record_set_is_a_hit() {
        let cache = SqliteCache::in_memory().unwrap();
        let company = CompanyId::new("42");

        cache
            .put_series("test", &company, SeriesSource::Growth, &[])
            .await
            .unwrap();

        let result = cache
            .get_series("test", &company, SeriesSource::Growth)
            .await
            .unwrap();
        assert_eq!(result, Some(Vec::new()));
    }

    #[tokio::test]
    async fn test_sqlite_cache_invalidate_company() {
        let cache = SqliteCache::in_memory().unwrap();
        let a = CompanyId::new("a");
        let b = CompanyId::new("b");

        for source in SeriesSource::ALL {
            cache.put_series("test", &a, source, &records()).await.unwrap();
        }
        cache
            .put_series("test", &b, SeriesSource::Metrics, &records())
            .await
            .unwrap();

        assert_eq!(cache.invalidate_company(&a).await.unwrap(), 3);
        assert!(
            cache
                .get_series("test", &b, SeriesSource::Metrics)
                .await
                .unwrap()
                .is_some()
        );
    }

    #[tokio::test]
    async fn test_sqlite_cache_invalidate_stale_and_clear() {
        let cache = SqliteCache::in_memory().unwrap();
        let company = CompanyId::new("42");

        cache
            .put_series("test", &company, SeriesSource::Raw, &records())
            .await
            .unwrap();

        // Fresh entries survive a long TTL
        let removed = cache
            .invalidate_stale(Duration::from_secs(3600))
            .await
            .unwrap();
        assert_eq!(removed, 0);

        cache.clear().await.unwrap();
        assert!(
            cache
                .get_series("test", &company, SeriesSource::Raw)
                .await
                .unwrap()
                .is_none()
        );
    }
}
