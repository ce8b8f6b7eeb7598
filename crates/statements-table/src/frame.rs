//! DataFrame export of statement sections.

use polars::prelude::*;
use statements_core::{Result, Section, StatementError};
use statements_pivot::values_by_date;
use tracing::debug;

use crate::column::TableColumn;

/// Converts sections into a DataFrame with one row per series.
///
/// Columns are `section`, `series_code`, `description`, `unit`, `data_type`,
/// then one `Float64` column per date column of `columns`, named by its
/// accessor key. Values are raw (not scaled or formatted).
///
/// # Errors
/// Returns [`StatementError::Frame`] if the DataFrame cannot be assembled.
pub fn sections_to_dataframe(sections: &[Section], columns: &[TableColumn]) -> Result<DataFrame> {
    let rows: Vec<_> = sections
        .iter()
        .flat_map(|s| s.section_data.iter().map(move |series| (s, series)))
        .collect();

    let mut frame_columns = vec![
        Column::new(
            "section".into(),
            rows.iter()
                .map(|(s, _)| s.section_label.as_str())
                .collect::<Vec<_>>(),
        ),
        Column::new(
            "series_code".into(),
            rows.iter()
                .map(|(_, series)| series.series_code.as_str())
                .collect::<Vec<_>>(),
        ),
        Column::new(
            "description".into(),
            rows.iter()
                .map(|(_, series)| series.description.as_deref())
                .collect::<Vec<_>>(),
        ),
        Column::new(
            "unit".into(),
            rows.iter()
                .map(|(_, series)| series.unit.as_deref())
                .collect::<Vec<_>>(),
        ),
        Column::new(
            "data_type".into(),
            rows.iter()
                .map(|(_, series)| series.data_type.as_ref().map(|t| t.as_str()))
                .collect::<Vec<_>>(),
        ),
    ];

    let indexed: Vec<_> = rows.iter().map(|(_, series)| values_by_date(series)).collect();
    for column in columns {
        let Some(date) = column.date() else {
            continue;
        };
        let values: Vec<Option<f64>> = indexed
            .iter()
            .map(|values| values.get(&date).copied().flatten())
            .collect();
        frame_columns.push(Column::new(column.accessor_key.as_str().into(), values));
    }

    let df = DataFrame::new(frame_columns).map_err(|e| StatementError::Frame(e.to_string()))?;
    debug!(rows = df.height(), columns = df.width(), "Exported sections to DataFrame");
    Ok(df)
}
