//! End-to-end pivot of the three source responses.

use serde::{Deserialize, Serialize};
use statements_core::{CompanyType, GroupedSeries, Section, SeriesSource, TimeSeriesRecord};
use tracing::debug;

use crate::chart::{self, ChartSeries};
use crate::flatten::flatten_tagged;
use crate::group::group_by_series;
use crate::section::build_sections;

/// Records fetched for one company, one collection per source.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceRecords {
    /// Reported financials.
    pub raw: Vec<TimeSeriesRecord>,
    /// Growth percentages.
    pub growth: Vec<TimeSeriesRecord>,
    /// Derived metrics.
    pub metrics: Vec<TimeSeriesRecord>,
}

impl SourceRecords {
    /// Returns the records of one source.
    #[must_use]
    pub fn get(&self, source: SeriesSource) -> &[TimeSeriesRecord] {
        match source {
            SeriesSource::Raw => &self.raw,
            SeriesSource::Growth => &self.growth,
            SeriesSource::Metrics => &self.metrics,
        }
    }

    /// Replaces the records of one source.
    pub fn set(&mut self, source: SeriesSource, records: Vec<TimeSeriesRecord>) {
        match source {
            SeriesSource::Raw => self.raw = records,
            SeriesSource::Growth => self.growth = records,
            SeriesSource::Metrics => self.metrics = records,
        }
    }
}

/// Grouped series and the statement sections built from them.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PivotedStatement {
    /// Every grouped series, in first-occurrence order across sources.
    pub series: Vec<GroupedSeries>,
    /// Operating data, income statement and balance sheet sections.
    pub sections: Vec<Section>,
}

impl PivotedStatement {
    /// Margin trio for the margin mini-chart.
    #[must_use]
    pub fn margin_series(&self) -> Vec<ChartSeries> {
        chart::margin_series(&self.series)
    }

    /// Growth trio for the growth mini-chart.
    #[must_use]
    pub fn growth_series(&self) -> Vec<ChartSeries> {
        chart::growth_series(&self.series)
    }

    /// Returns the section with the given label.
    #[must_use]
    pub fn section(&self, label: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.section_label == label)
    }
}

/// Flattens and tags each source, concatenates them (raw, growth, metrics),
/// groups by series code and builds the statement sections.
#[must_use]
pub fn build_statement(records: &SourceRecords, company_type: &CompanyType) -> PivotedStatement {
    let rows = SeriesSource::ALL
        .into_iter()
        .flat_map(|source| flatten_tagged(records.get(source), source.data_type()));
    let series = group_by_series(rows);
    let sections = build_sections(&series, company_type);
    debug!(
        series = series.len(),
        sections = sections.len(),
        "Pivoted statement"
    );
    PivotedStatement { series, sections }
}
