//! Statement loader: provider fallback, caching and the concurrent fetch boundary.

use std::sync::Arc;
use std::time::Duration;

use polars::prelude::DataFrame;
use tracing::{debug, instrument, warn};

use statements_core::{
    CompanyId, CompanyType, EvaluationSummary, GroupedSeries, Result, Section, SeriesCache,
    SeriesSource, StatementError, TimeSeriesProvider, TimeSeriesRecord,
};
use statements_pivot::{ChartSeries, PivotedStatement, SourceRecords, build_statement};
use statements_table::{
    RenderOptions, RenderedTable, RowSelection, TableColumn, render_table, sections_to_dataframe,
};

/// Loads company series and pivots them into a [`StatementView`].
///
/// Several providers may be registered; each source is tried against them in
/// order until one succeeds. When a cache is configured it is checked first
/// and successful fetches are written back to it. Without a TTL cached
/// entries never expire.
///
/// # Example
///
/// ```rust,ignore
/// use statements::{CompanyId, CompanyType, StatementLoader};
///
/// let loader = StatementLoader::new().with_http("https://dashboard.example.com/api");
/// let view = loader.load(&CompanyId::new("42"), &CompanyType::NonFinancials).await?;
/// for section in &view.sections {
///     println!("{}: {} rows", section.section_label, section.section_data.len());
/// }
/// ```
#[derive(Default)]
pub struct StatementLoader {
    providers: Vec<Arc<dyn TimeSeriesProvider>>,
    cache: Option<Arc<dyn SeriesCache>>,
    ttl: Option<Duration>,
}

impl std::fmt::Debug for StatementLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatementLoader")
            .field("providers", &self.provider_names())
            .field("cache", &self.cache.as_ref().map(|_| "configured"))
            .field("ttl", &self.ttl)
            .finish()
    }
}

impl StatementLoader {
    /// Create a new loader with no providers and no cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new loader with a cache.
    #[must_use]
    pub fn with_cache(cache: Arc<dyn SeriesCache>) -> Self {
        Self {
            cache: Some(cache),
            ..Default::default()
        }
    }

    /// Set the cache for this loader.
    #[must_use]
    pub fn set_cache(mut self, cache: Arc<dyn SeriesCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Expire cached entries older than `ttl` before every cache read.
    #[must_use]
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = Some(ttl);
        self
    }

    /// Register a provider; it is tried after every provider registered before it.
    pub fn register_provider(&mut self, provider: Arc<dyn TimeSeriesProvider>) {
        debug!(provider = provider.name(), "Registering series provider");
        self.providers.push(provider);
    }

    /// Register a provider, builder style.
    #[must_use]
    pub fn with_provider(mut self, provider: Arc<dyn TimeSeriesProvider>) -> Self {
        self.register_provider(provider);
        self
    }

    /// Add an [`HttpProvider`](statements_http::HttpProvider) for the service at `base_url`.
    #[cfg(feature = "http")]
    #[must_use]
    pub fn with_http(self, base_url: &str) -> Self {
        self.with_provider(Arc::new(statements_http::HttpProvider::new(base_url)))
    }

    /// Names of the registered providers, in fallback order.
    pub fn provider_names(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    fn ensure_providers(&self) -> Result<()> {
        if self.providers.is_empty() {
            return Err(StatementError::ProviderNotConfigured(
                "No series providers registered".to_string(),
            ));
        }
        Ok(())
    }

    /// Fetch the records of one source, trying providers in order until one succeeds.
    pub async fn fetch_source(
        &self,
        company: &CompanyId,
        source: SeriesSource,
    ) -> Result<Vec<TimeSeriesRecord>> {
        self.ensure_providers()?;

        // Check cache first
        if let Some(cache) = &self.cache {
            if let Some(ttl) = self.ttl {
                if let Err(e) = cache.invalidate_stale(ttl).await {
                    warn!(error = %e, "Failed to expire stale cache entries");
                }
            }
            for provider in &self.providers {
                match cache.get_series(provider.name(), company, source).await {
                    Ok(Some(cached)) => {
                        debug!(
                            provider = provider.name(),
                            company = %company,
                            source = %source,
                            "Cache hit for series"
                        );
                        return Ok(cached);
                    }
                    Ok(None) => {}
                    Err(e) => warn!(
                        provider = provider.name(),
                        error = %e,
                        "Cache read failed"
                    ),
                }
            }
        }

        let mut last_error = None;
        for provider in &self.providers {
            debug!(
                provider = provider.name(),
                company = %company,
                source = %source,
                "Fetching series"
            );

            match provider.fetch_series(company, source).await {
                Ok(records) => {
                    if let Some(cache) = &self.cache {
                        if let Err(e) = cache
                            .put_series(provider.name(), company, source, &records)
                            .await
                        {
                            warn!(
                                provider = provider.name(),
                                error = %e,
                                "Failed to cache series"
                            );
                        }
                    }
                    return Ok(records);
                }
                Err(e) => {
                    warn!(
                        provider = provider.name(),
                        source = %source,
                        error = %e,
                        "Provider failed, trying next"
                    );
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| {
            StatementError::Other("All providers failed with no error".to_string())
        }))
    }

    /// Fetch the evaluation summary, trying providers in order until one succeeds.
    ///
    /// Summaries are not cached.
    pub async fn fetch_evaluation_summary(&self, company: &CompanyId) -> Result<EvaluationSummary> {
        self.ensure_providers()?;

        let mut last_error = None;
        for provider in &self.providers {
            match provider.fetch_evaluation_summary(company).await {
                Ok(summary) => return Ok(summary),
                Err(e) => {
                    warn!(
                        provider = provider.name(),
                        error = %e,
                        "Provider failed, trying next"
                    );
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| {
            StatementError::Other("All providers failed with no error".to_string())
        }))
    }

    /// Fetch every source and the evaluation summary concurrently and pivot them.
    ///
    /// A source that fails on every provider is replaced by an empty collection
    /// and reported in [`StatementView::degraded_sources`]; a failed summary
    /// becomes `None`. The only error is having no provider registered.
    #[instrument(skip(self), fields(company = %company, company_type = %company_type))]
    pub async fn load(
        &self,
        company: &CompanyId,
        company_type: &CompanyType,
    ) -> Result<StatementView> {
        self.ensure_providers()?;

        let (raw, growth, metrics, summary) = futures::join!(
            self.fetch_source(company, SeriesSource::Raw),
            self.fetch_source(company, SeriesSource::Growth),
            self.fetch_source(company, SeriesSource::Metrics),
            self.fetch_evaluation_summary(company)
        );

        let mut records = SourceRecords::default();
        let mut degraded_sources = Vec::new();
        for (source, result) in SeriesSource::ALL.into_iter().zip([raw, growth, metrics]) {
            match result {
                Ok(fetched) => records.set(source, fetched),
                Err(e) => {
                    warn!(source = %source, error = %e, "Source unavailable, rendering without it");
                    degraded_sources.push(source);
                }
            }
        }

        let evaluation_summary = match summary {
            Ok(summary) => Some(summary),
            Err(e) => {
                warn!(error = %e, "Evaluation summary unavailable");
                None
            }
        };

        let PivotedStatement { series, sections } = build_statement(&records, company_type);
        Ok(StatementView {
            sections,
            series,
            evaluation_summary,
            degraded_sources,
        })
    }

    /// Drop every cached source for a company so the next load refetches it.
    pub async fn invalidate(&self, company: &CompanyId) -> Result<usize> {
        match &self.cache {
            Some(cache) => cache.invalidate_company(company).await,
            None => Ok(0),
        }
    }
}

/// Everything the statement page needs for one company.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StatementView {
    /// Operating data, income statement and balance sheet, in display order.
    pub sections: Vec<Section>,
    /// Every grouped series across the three sources.
    pub series: Vec<GroupedSeries>,
    /// The company's evaluation summary, when it could be fetched.
    pub evaluation_summary: Option<EvaluationSummary>,
    /// Sources that failed and were rendered as empty.
    pub degraded_sources: Vec<SeriesSource>,
}

impl StatementView {
    /// True if any source was substituted by an empty collection.
    #[must_use]
    pub fn is_degraded(&self) -> bool {
        !self.degraded_sources.is_empty()
    }

    /// Returns the section with the given label.
    #[must_use]
    pub fn section(&self, label: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.section_label == label)
    }

    /// Margin trio for the margin mini-chart.
    #[must_use]
    pub fn margin_series(&self) -> Vec<ChartSeries> {
        statements_pivot::margin_series(&self.series)
    }

    /// Growth trio for the growth mini-chart.
    #[must_use]
    pub fn growth_series(&self) -> Vec<ChartSeries> {
        statements_pivot::growth_series(&self.series)
    }

    /// Renders the sections into a grid.
    #[must_use]
    pub fn render(
        &self,
        columns: &[TableColumn],
        options: &RenderOptions,
        selection: &RowSelection,
    ) -> RenderedTable {
        render_table(&self.sections, columns, options, selection)
    }

    /// Exports the sections to a DataFrame with one column per grid date.
    ///
    /// # Errors
    /// Returns [`StatementError::Frame`] if the frame cannot be assembled.
    pub fn to_dataframe(&self, columns: &[TableColumn]) -> Result<DataFrame> {
        sections_to_dataframe(&self.sections, columns)
    }
}
