//! Pivoted row projections of a grouped series.
//!
//! A grid row is keyed by column accessor: the metadata fields by name and every
//! value by its ISO date. When a series carries the same date twice, the later
//! value occupies the cell.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde_json::{Map, Value};
use statements_core::GroupedSeries;

/// Format of the date keys of a pivoted row.
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Returns the series' values keyed by date. Values without a date are skipped.
#[must_use]
pub fn values_by_date(series: &GroupedSeries) -> HashMap<NaiveDate, Option<f64>> {
    series
        .values
        .iter()
        .filter_map(|p| p.date_reference.map(|d| (d, p.value)))
        .collect()
}

/// Projects a series into a row object: metadata fields plus one
/// `YYYY-MM-DD` key per dated value.
#[must_use]
pub fn row_object(series: &GroupedSeries) -> Map<String, Value> {
    let mut row = Map::new();
    row.insert("series_code".into(), Value::from(series.series_code.clone()));
    row.insert("description".into(), opt_string(series.description.as_deref()));
    row.insert("unit".into(), opt_string(series.unit.as_deref()));
    row.insert(
        "data_type".into(),
        opt_string(series.data_type.as_ref().map(|t| t.as_str())),
    );
    row.insert("series_type".into(), opt_string(series.series_type.as_deref()));

    for point in &series.values {
        if let Some(date) = point.date_reference {
            let value = point.value.map_or(Value::Null, Value::from);
            row.insert(date.format(DATE_KEY_FORMAT).to_string(), value);
        }
    }
    row
}

fn opt_string(s: Option<&str>) -> Value {
    s.map_or(Value::Null, Value::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use statements_core::{DataPoint, DataType};

    fn sample() -> GroupedSeries {
        GroupedSeries {
            series_code: "IS_EBIT".to_string(),
            description: Some("EBIT".to_string()),
            unit: Some("EUR".to_string()),
            data_type: Some(DataType::Financials),
            series_type: None,
            values: vec![
                DataPoint::new(NaiveDate::from_ymd_opt(2020, 12, 31), Some(1.0)),
                DataPoint::new(NaiveDate::from_ymd_opt(2021, 12, 31), None),
                DataPoint::new(NaiveDate::from_ymd_opt(2020, 12, 31), Some(3.0)),
                DataPoint::new(None, Some(9.0)),
            ],
        }
    }

    #[test]
    fn test_row_object_keys() {
        let row = row_object(&sample());
        assert_eq!(row["series_code"], "IS_EBIT");
        assert_eq!(row["data_type"], "financials");
        assert_eq!(row["series_type"], Value::Null);
        assert_eq!(row["2020-12-31"], 3.0);
        assert_eq!(row["2021-12-31"], Value::Null);
        assert_eq!(row.len(), 7);
    }

    #[test]
    fn test_values_by_date_last_write_wins() {
        let values = values_by_date(&sample());
        assert_eq!(values.len(), 2);
        assert_eq!(
            values[&NaiveDate::from_ymd_opt(2020, 12, 31).unwrap()],
            Some(3.0)
        );
    }
}
