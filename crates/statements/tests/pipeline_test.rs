//! Integration tests for loading, pivoting and rendering a company statement.

use async_trait::async_trait;
use chrono::NaiveDate;
use statements::{
    CompanyId, CompanyType, DataType, EvaluationSummary, InMemoryCache, RenderOptions,
    RenderedRow, Result, RowSelection, SeriesSource, StatementError, StatementLoader,
    TimeSeriesPoint, TimeSeriesProvider, TimeSeriesRecord, default_columns, selected_charts,
};
use std::collections::HashMap;
use std::sync::Arc;

fn year_end(year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, 12, 31).unwrap()
}

fn series(code: &str, unit: &str, values: &[(i32, f64)]) -> TimeSeriesRecord {
    values.iter().fold(
        TimeSeriesRecord::new(code)
            .with_description(code.to_lowercase())
            .with_unit(unit),
        |record, &(year, value)| record.with_point(TimeSeriesPoint::new(year_end(year), Some(value))),
    )
}

/// Serves canned responses per source; sources without a response fail.
#[derive(Debug, Default)]
struct FixtureProvider {
    responses: HashMap<SeriesSource, Vec<TimeSeriesRecord>>,
    summary: Option<serde_json::Value>,
}

#[async_trait]
impl TimeSeriesProvider for FixtureProvider {
    fn name(&self) -> &str {
        "fixture"
    }

    fn description(&self) -> &str {
        "In-process fixture"
    }

    async fn fetch_series(
        &self,
        company: &CompanyId,
        source: SeriesSource,
    ) -> Result<Vec<TimeSeriesRecord>> {
        self.responses
            .get(&source)
            .cloned()
            .ok_or_else(|| StatementError::CompanyNotFound(company.to_string()))
    }

    async fn fetch_evaluation_summary(&self, _company: &CompanyId) -> Result<EvaluationSummary> {
        self.summary
            .clone()
            .map(EvaluationSummary)
            .ok_or_else(|| StatementError::Network("summary service down".to_string()))
    }
}

fn full_fixture() -> FixtureProvider {
    let mut responses = HashMap::new();
    responses.insert(
        SeriesSource::Raw,
        vec![
            series("IS_GROSS_PROFIT", "BRL", &[(2020, 400.0), (2021, 450.0)]),
            series("IS_NET_REVENUES", "BRL", &[(2020, 1_000.0), (2021, 1_200.0)]),
            series("BS_CASH_AND_EQUIVALENTS", "BRL", &[(2021, 75.0)]),
            series("UNLISTED_CODE", "BRL", &[(2021, 1.0)]),
            series("STORES", "units", &[(2021, 12.0)]).with_series_type("OPERATING"),
        ],
    );
    responses.insert(
        SeriesSource::Growth,
        vec![series("PCT_CHG_IS_NET_REVENUES", "%", &[(2021, 0.2)])],
    );
    responses.insert(
        SeriesSource::Metrics,
        vec![
            series("GROSS_MARGIN", "%", &[(2020, 0.4), (2021, 0.375)]),
            series("BS_TOTAL_CURRENT_ASSETS", "BRL", &[(2021, 300.0)]),
        ],
    );
    FixtureProvider {
        responses,
        summary: Some(serde_json::json!({ "score": 8 })),
    }
}

#[tokio::test]
async fn test_full_statement_workflow() {
    let loader = StatementLoader::new().with_provider(Arc::new(full_fixture()));
    let view = loader
        .load(&CompanyId::new("42"), &CompanyType::NonFinancials)
        .await
        .unwrap();

    assert!(!view.is_degraded());
    assert_eq!(
        view.evaluation_summary.as_ref().and_then(|s| s.get("score")),
        Some(&serde_json::json!(8))
    );

    let labels: Vec<_> = view.sections.iter().map(|s| s.section_label.as_str()).collect();
    assert_eq!(labels, vec!["Operating Data", "Income Statement", "Balance Sheet"]);

    let operating = view.section("Operating Data").unwrap();
    assert_eq!(operating.series_codes().collect::<Vec<_>>(), vec!["STORES"]);
    assert_eq!(operating.section_data[0].data_type, Some(DataType::Operating));

    let income = view.section("Income Statement").unwrap();
    assert_eq!(
        income.series_codes().collect::<Vec<_>>(),
        vec![
            "IS_NET_REVENUES",
            "PCT_CHG_IS_NET_REVENUES",
            "IS_GROSS_PROFIT",
            "GROSS_MARGIN"
        ]
    );

    let balance = view.section("Balance Sheet").unwrap();
    assert_eq!(
        balance.series_codes().collect::<Vec<_>>(),
        vec!["BS_TOTAL_CURRENT_ASSETS", "BS_CASH_AND_EQUIVALENTS"]
    );
    let tags: Vec<_> = balance.section_data.iter().map(|s| s.data_type).collect();
    assert_eq!(tags, vec![Some(DataType::BsMetrics), Some(DataType::BsRaw)]);

    // Codes outside every schema stay in the grouped series but never render
    assert!(view.series.iter().any(|s| s.series_code == "UNLISTED_CODE"));
    assert!(
        view.sections
            .iter()
            .all(|s| s.series_codes().all(|code| code != "UNLISTED_CODE"))
    );

    let margins = view.margin_series();
    assert_eq!(margins.len(), 3);
    assert_eq!(margins[0].data.len(), 2);
    assert!(margins[1].data.is_empty());
}

#[tokio::test]
async fn test_render_and_chart_selected_rows() {
    let loader = StatementLoader::new().with_provider(Arc::new(full_fixture()));
    let view = loader
        .load(&CompanyId::new("42"), &CompanyType::NonFinancials)
        .await
        .unwrap();

    let mut selection = RowSelection::new();
    selection.toggle("IS_NET_REVENUES");

    let columns = default_columns();
    let table = view.render(&columns, &RenderOptions::default(), &selection);

    let revenue_row = table
        .body_rows()
        .find(|row| matches!(row, RenderedRow::Body { series_code, .. } if series_code == "IS_NET_REVENUES"))
        .unwrap();
    let texts: Vec<_> = revenue_row.cells().iter().map(|c| c.text.as_str()).collect();
    assert!(texts.contains(&"1,200.0"));
    assert!(texts.contains(&"-"));

    let margin_row = table
        .body_rows()
        .find(|row| matches!(row, RenderedRow::Body { series_code, .. } if series_code == "GROSS_MARGIN"))
        .unwrap();
    assert!(
        margin_row
            .cells()
            .iter()
            .any(|c| c.text == "37.5%")
    );

    let charts = selected_charts(&view.sections, &selection);
    assert_eq!(charts.len(), 1);
    assert_eq!(charts[0].data.len(), 2);

    let frame = view.to_dataframe(&columns).unwrap();
    assert_eq!(frame.height(), 7);
}

#[tokio::test]
async fn test_partial_failure_degrades_view() {
    let mut provider = full_fixture();
    provider.responses.remove(&SeriesSource::Metrics);
    provider.summary = None;

    let loader = StatementLoader::new().with_provider(Arc::new(provider));
    let view = loader
        .load(&CompanyId::new("42"), &CompanyType::NonFinancials)
        .await
        .unwrap();

    assert_eq!(view.degraded_sources, vec![SeriesSource::Metrics]);
    assert!(view.evaluation_summary.is_none());

    let income = view.section("Income Statement").unwrap();
    assert!(income.series_codes().all(|code| code != "GROSS_MARGIN"));
    assert_eq!(income.section_data.len(), 3);

    // Raw balance sheet items still render without their totals
    let balance = view.section("Balance Sheet").unwrap();
    assert_eq!(
        balance.series_codes().collect::<Vec<_>>(),
        vec!["BS_CASH_AND_EQUIVALENTS"]
    );
}

#[tokio::test]
async fn test_financial_company_has_empty_sections() {
    let loader = StatementLoader::new().with_provider(Arc::new(full_fixture()));
    let company_type: CompanyType = "financials".parse().unwrap();

    let view = loader
        .load(&CompanyId::new("7"), &company_type)
        .await
        .unwrap();

    assert_eq!(view.sections.len(), 3);
    assert!(view.sections.iter().all(|s| s.is_empty()));
    // Chart extraction reads the grouped series, not the sections
    assert_eq!(view.growth_series()[0].data.len(), 1);
}

#[tokio::test]
async fn test_cached_sources_survive_provider_outage() {
    let cache = Arc::new(InMemoryCache::new());
    let company = CompanyId::new("42");

    let warm = StatementLoader::with_cache(cache.clone()).with_provider(Arc::new(full_fixture()));
    let first = warm.load(&company, &CompanyType::NonFinancials).await.unwrap();

    // Same provider name, but every source now fails
    let cold = StatementLoader::with_cache(cache)
        .with_provider(Arc::new(FixtureProvider::default()));
    let second = cold.load(&company, &CompanyType::NonFinancials).await.unwrap();

    assert!(!second.is_degraded());
    assert_eq!(second.sections, first.sections);
    assert!(second.evaluation_summary.is_none());
}
