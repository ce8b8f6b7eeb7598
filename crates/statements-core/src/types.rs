//! Core data types for statement pivoting.
//!
//! This module defines the request-scoped values that flow through the engine:
//!
//! - [`CompanyId`] - Identifier the data service keys series by
//! - [`TimeSeriesRecord`] / [`TimeSeriesPoint`] - Nested series as fetched
//! - [`FlatRow`] - One (series, date) pair after flattening
//! - [`DataPoint`] - A `{date_reference, value}` pair
//! - [`GroupedSeries`] - One row of the pivot grid
//! - [`Section`] - An ordered block of grid rows under a label
//! - [`EvaluationSummary`] - Opaque valuation summary fetched alongside series

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::frequency::Frequency;
use crate::tag::DataType;

/// Series type value marking operating (non-financial) data.
pub const OPERATING_SERIES_TYPE: &str = "OPERATING";

/// Unit of series whose values are ratios shown as percentages.
pub const PERCENT_UNIT: &str = "%";

/// Identifier of a company in the data service.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CompanyId(String);

impl CompanyId {
    /// Creates a new company id.
    #[must_use]
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CompanyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CompanyId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for CompanyId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

/// Treats an explicit JSON `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A single dated observation of a series.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    /// Period end date the value refers to.
    #[serde(default)]
    pub date_reference: Option<NaiveDate>,
    /// Observed value; `None` when the service has no figure for the period.
    #[serde(default)]
    pub value: Option<f64>,
    /// Whether the value is an estimate rather than a reported figure.
    #[serde(default)]
    pub is_estimate: Option<bool>,
    /// When the value was last updated upstream.
    #[serde(default)]
    pub update_date: Option<String>,
    /// When the value was first recorded upstream.
    #[serde(default)]
    pub created_at: Option<String>,
}

impl TimeSeriesPoint {
    /// Creates a point with a date and a value.
    #[must_use]
    pub const fn new(date_reference: NaiveDate, value: Option<f64>) -> Self {
        Self {
            date_reference: Some(date_reference),
            value,
            is_estimate: None,
            update_date: None,
            created_at: None,
        }
    }
}

/// One financial series for a company, as returned by the data service.
///
/// Every metadata field is optional on the wire. A missing or `null`
/// `time_series_values` array is read as an empty series.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesRecord {
    /// Series identifier, unique per company, case and type.
    #[serde(default, deserialize_with = "null_as_default")]
    pub series_code: String,
    /// Human-readable line item name.
    #[serde(default)]
    pub description: Option<String>,
    /// Unit of the values (`"%"` for ratios).
    #[serde(default)]
    pub unit: Option<String>,
    /// Reporting frequency.
    #[serde(default)]
    pub frequency: Option<Frequency>,
    /// Upstream data source.
    #[serde(default)]
    pub source: Option<String>,
    /// Scenario the values belong to (e.g. base case).
    #[serde(default)]
    pub case_type: Option<String>,
    /// Series classification (e.g. `"OPERATING"`).
    #[serde(default)]
    pub series_type: Option<String>,
    /// Dated observations, in service order.
    #[serde(
        rename = "time_series_values",
        default,
        deserialize_with = "null_as_default"
    )]
    pub points: Vec<TimeSeriesPoint>,
}

impl TimeSeriesRecord {
    /// Creates a record with a series code and no metadata or points.
    #[must_use]
    pub fn new(series_code: impl Into<String>) -> Self {
        Self {
            series_code: series_code.into(),
            ..Default::default()
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the unit.
    #[must_use]
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    /// Sets the series type.
    #[must_use]
    pub fn with_series_type(mut self, series_type: impl Into<String>) -> Self {
        self.series_type = Some(series_type.into());
        self
    }

    /// Appends a point.
    #[must_use]
    pub fn with_point(mut self, point: TimeSeriesPoint) -> Self {
        self.points.push(point);
        self
    }
}

/// One (series, date) pair: record metadata plus a single point's fields.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FlatRow {
    /// Series identifier.
    pub series_code: String,
    /// Human-readable line item name.
    pub description: Option<String>,
    /// Unit of the value.
    pub unit: Option<String>,
    /// Reporting frequency.
    pub frequency: Option<Frequency>,
    /// Upstream data source.
    pub source: Option<String>,
    /// Scenario the value belongs to.
    pub case_type: Option<String>,
    /// Series classification.
    pub series_type: Option<String>,
    /// Period end date.
    pub date_reference: Option<NaiveDate>,
    /// Observed value.
    pub value: Option<f64>,
    /// Whether the value is an estimate.
    pub is_estimate: Option<bool>,
    /// Upstream update timestamp.
    pub update_date: Option<String>,
    /// Upstream creation timestamp.
    pub created_at: Option<String>,
    /// Provenance tag; `None` until the row is tagged.
    pub data_type: Option<DataType>,
}

/// A `{date_reference, value}` pair inside a grouped series.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    /// Period end date.
    pub date_reference: Option<NaiveDate>,
    /// Observed value.
    pub value: Option<f64>,
}

impl DataPoint {
    /// Creates a data point.
    #[must_use]
    pub const fn new(date_reference: Option<NaiveDate>, value: Option<f64>) -> Self {
        Self {
            date_reference,
            value,
        }
    }
}

/// One row of the pivot grid: a series and all of its dated values.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupedSeries {
    /// Series identifier, unique within one grouping pass.
    pub series_code: String,
    /// Human-readable line item name.
    pub description: Option<String>,
    /// Unit of the values.
    pub unit: Option<String>,
    /// Provenance tag.
    pub data_type: Option<DataType>,
    /// Series classification.
    pub series_type: Option<String>,
    /// Values in first-seen order. Repeated dates are kept.
    pub values: Vec<DataPoint>,
}

impl GroupedSeries {
    /// Returns true if the values are ratios rendered as percentages.
    #[must_use]
    pub fn is_percentage(&self) -> bool {
        self.unit.as_deref() == Some(PERCENT_UNIT)
    }

    /// Returns true if the series is operating data.
    #[must_use]
    pub fn is_operating(&self) -> bool {
        self.series_type.as_deref() == Some(OPERATING_SERIES_TYPE)
    }
}

/// An ordered block of grid rows under a label.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    /// Label shown in the section's group header row.
    pub section_label: String,
    /// Rows in schema order.
    pub section_data: Vec<GroupedSeries>,
}

impl Section {
    /// Creates a section.
    #[must_use]
    pub fn new(section_label: impl Into<String>, section_data: Vec<GroupedSeries>) -> Self {
        Self {
            section_label: section_label.into(),
            section_data,
        }
    }

    /// Creates a section with no rows.
    #[must_use]
    pub fn empty(section_label: impl Into<String>) -> Self {
        Self::new(section_label, Vec::new())
    }

    /// Returns true if the section has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.section_data.is_empty()
    }

    /// Returns the series codes of the section's rows, in order.
    pub fn series_codes(&self) -> impl Iterator<Item = &str> {
        self.section_data.iter().map(|s| s.series_code.as_str())
    }
}

/// Valuation summary fetched alongside the statement series.
///
/// The engine does not interpret it; the document is passed through to the
/// caller as-is.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EvaluationSummary(pub serde_json::Value);

impl EvaluationSummary {
    /// Returns a top-level field of the summary, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.0.get(key)
    }
}
