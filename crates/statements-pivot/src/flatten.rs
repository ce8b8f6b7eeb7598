//! Record flattening and provenance tagging.

use statements_core::{DataType, FlatRow, GroupedSeries, TimeSeriesRecord};
use tracing::trace;

/// Expands nested records into one [`FlatRow`] per point.
///
/// Each row carries its record's metadata unchanged. Records without points
/// contribute nothing. Rows come out untagged.
#[must_use]
pub fn flatten<'a, I>(records: I) -> Vec<FlatRow>
where
    I: IntoIterator<Item = &'a TimeSeriesRecord>,
{
    let rows: Vec<FlatRow> = records
        .into_iter()
        .flat_map(|record| {
            record.points.iter().map(move |point| FlatRow {
                series_code: record.series_code.clone(),
                description: record.description.clone(),
                unit: record.unit.clone(),
                frequency: record.frequency,
                source: record.source.clone(),
                case_type: record.case_type.clone(),
                series_type: record.series_type.clone(),
                date_reference: point.date_reference,
                value: point.value,
                is_estimate: point.is_estimate,
                update_date: point.update_date.clone(),
                created_at: point.created_at.clone(),
                data_type: None,
            })
        })
        .collect();
    trace!(rows = rows.len(), "Flattened series records");
    rows
}

/// Anything that carries a provenance tag.
pub trait Taggable {
    /// Replaces the provenance tag.
    fn set_data_type(&mut self, data_type: DataType);
}

impl Taggable for FlatRow {
    fn set_data_type(&mut self, data_type: DataType) {
        self.data_type = Some(data_type);
    }
}

impl Taggable for GroupedSeries {
    fn set_data_type(&mut self, data_type: DataType) {
        self.data_type = Some(data_type);
    }
}

/// Stamps every item with `data_type`.
///
/// Takes the items by value and returns them re-tagged; callers holding a
/// borrowed slice clone it first, so the original is never touched.
#[must_use]
pub fn tag<T, I>(items: I, data_type: DataType) -> Vec<T>
where
    T: Taggable,
    I: IntoIterator<Item = T>,
{
    items
        .into_iter()
        .map(|mut item| {
            item.set_data_type(data_type);
            item
        })
        .collect()
}

/// Flattens one source's records and tags the rows in one pass.
#[must_use]
pub fn flatten_tagged(records: &[TimeSeriesRecord], data_type: DataType) -> Vec<FlatRow> {
    tag(flatten(records), data_type)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use statements_core::TimeSeriesPoint;

    fn date(y: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, 12, 31).unwrap()
    }

    #[test]
    fn test_flatten_yields_one_row_per_point() {
        let records = vec![
            TimeSeriesRecord::new("A")
                .with_description("Alpha")
                .with_unit("EUR")
                .with_point(TimeSeriesPoint::new(date(2020), Some(1.0)))
                .with_point(TimeSeriesPoint::new(date(2021), Some(2.0)))
                .with_point(TimeSeriesPoint::new(date(2022), None)),
            TimeSeriesRecord::new("B"),
            TimeSeriesRecord::new("C").with_point(TimeSeriesPoint::new(date(2020), Some(5.0))),
        ];

        let rows = flatten(&records);
        assert_eq!(rows.len(), 4);
        assert!(rows[..3].iter().all(|r| r.series_code == "A"));
        assert!(
            rows[..3]
                .iter()
                .all(|r| r.description.as_deref() == Some("Alpha") && r.unit.as_deref() == Some("EUR"))
        );
        assert_eq!(rows[2].value, None);
        assert_eq!(rows[3].series_code, "C");
        assert!(rows.iter().all(|r| r.data_type.is_none()));
    }

    #[test]
    fn test_flatten_empty_input() {
        let records: Vec<TimeSeriesRecord> = Vec::new();
        assert!(flatten(&records).is_empty());
    }

    #[test]
    fn test_flatten_passes_missing_fields_through() {
        let records = vec![TimeSeriesRecord::new("A").with_point(TimeSeriesPoint::default())];
        let rows = flatten(&records);
        assert_eq!(rows.len(), 1);
        assert!(rows[0].date_reference.is_none());
        assert!(rows[0].value.is_none());
        assert!(rows[0].series_type.is_none());
    }

    #[test]
    fn test_tag_leaves_input_untouched() {
        let records = vec![TimeSeriesRecord::new("A").with_point(TimeSeriesPoint::new(date(2020), Some(1.0)))];
        let rows = flatten(&records);
        let tagged = tag(rows.clone(), DataType::Growth);

        assert!(rows[0].data_type.is_none());
        assert_eq!(tagged[0].data_type, Some(DataType::Growth));
        assert_eq!(tagged[0].series_code, rows[0].series_code);
    }

    #[test]
    fn test_tag_overwrites_existing_tag() {
        let series = GroupedSeries {
            series_code: "BS_TOTAL_ASSETS".to_string(),
            data_type: Some(DataType::Financials),
            ..Default::default()
        };
        let tagged = tag(vec![series], DataType::BsMetrics);
        assert_eq!(tagged[0].data_type, Some(DataType::BsMetrics));
    }
}
