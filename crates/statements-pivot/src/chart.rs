//! Chart data extraction.
//!
//! Named extractors pull fixed series out of the grouped set for the margin and
//! growth mini-charts. The date-column extractor works on any row object and
//! backs ad-hoc charts built from table rows.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use statements_core::{DataPoint, GroupedSeries};

use crate::row::DATE_KEY_FORMAT;
use crate::schema;

/// One labelled line of a chart.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    /// Legend label.
    pub label: String,
    /// Points in series order.
    pub data: Vec<DataPoint>,
}

/// Returns one chart series per `(series_code, label)` target, in target order.
///
/// A target with no matching group yields an empty series.
#[must_use]
pub fn extract_series(groups: &[GroupedSeries], targets: &[(&str, &str)]) -> Vec<ChartSeries> {
    targets
        .iter()
        .map(|(code, label)| ChartSeries {
            label: (*label).to_string(),
            data: groups
                .iter()
                .find(|g| g.series_code == *code)
                .map(|g| g.values.clone())
                .unwrap_or_default(),
        })
        .collect()
}

/// Gross, EBIT and EBITDA margins.
#[must_use]
pub fn margin_series(groups: &[GroupedSeries]) -> Vec<ChartSeries> {
    extract_series(groups, schema::MARGIN_CHART)
}

/// Revenue, EBITDA and net income growth.
#[must_use]
pub fn growth_series(groups: &[GroupedSeries]) -> Vec<ChartSeries> {
    extract_series(groups, schema::GROWTH_CHART)
}

/// Lazily keeps the `(key, value)` entries whose key satisfies `predicate`.
pub fn filter_entries<I, K, V, P>(entries: I, mut predicate: P) -> impl Iterator<Item = (K, V)>
where
    I: IntoIterator<Item = (K, V)>,
    P: FnMut(&K) -> bool,
{
    entries.into_iter().filter(move |(k, _)| predicate(k))
}

/// Returns true for keys shaped like `YYYY-MM-DD`.
///
/// Only the shape is checked; the calendar date itself may be invalid.
#[must_use]
pub fn is_iso_date_key(key: &str) -> bool {
    let bytes = key.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Projects the date-keyed entries of a row object into data points.
///
/// Non-numeric values become `None`, as do keys that have the date shape but
/// are not a real calendar date.
#[must_use]
pub fn date_columns(row: &Map<String, Value>) -> Vec<DataPoint> {
    filter_entries(row, |key| is_iso_date_key(key))
        .map(|(key, value)| {
            DataPoint::new(
                NaiveDate::parse_from_str(key, DATE_KEY_FORMAT).ok(),
                value.as_f64(),
            )
        })
        .collect()
}
