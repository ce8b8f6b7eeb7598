//! Provider trait for fetching statement series.
//!
//! A [`TimeSeriesProvider`] answers the two request/response contracts the
//! engine consumes: the list of series records for a company and source, and
//! the company's evaluation summary.

use async_trait::async_trait;
use std::fmt::Debug;

use crate::{
    error::Result,
    tag::SeriesSource,
    types::{CompanyId, EvaluationSummary, TimeSeriesRecord},
};

/// Source of company time series.
///
/// Implementations must be cheap to share; the loader calls the methods of a
/// single provider concurrently.
#[async_trait]
pub trait TimeSeriesProvider: Send + Sync + Debug {
    /// Returns the name of this provider, used as the cache namespace.
    fn name(&self) -> &str;

    /// Returns a description of this provider.
    fn description(&self) -> &str;

    /// Fetches every series of one source for a company.
    async fn fetch_series(
        &self,
        company: &CompanyId,
        source: SeriesSource,
    ) -> Result<Vec<TimeSeriesRecord>>;

    /// Fetches the company's evaluation summary.
    async fn fetch_evaluation_summary(&self, company: &CompanyId) -> Result<EvaluationSummary>;
}
