//! Chart context menu.
//!
//! Right-clicking the grid offers to chart the selected rows. Each row is
//! projected to its row object and its date columns become the chart data.

use statements_core::{GroupedSeries, Section};
use statements_pivot::{ChartSeries, date_columns, row_object};

use crate::selection::RowSelection;

/// Chart series for one grid row, labelled by its description.
#[must_use]
pub fn row_chart(series: &GroupedSeries) -> ChartSeries {
    ChartSeries {
        label: series
            .description
            .clone()
            .unwrap_or_else(|| series.series_code.clone()),
        data: date_columns(&row_object(series)),
    }
}

/// Chart series for every selected row, in grid order.
///
/// A series appearing in more than one section is charted once per section.
#[must_use]
pub fn selected_charts(sections: &[Section], selection: &RowSelection) -> Vec<ChartSeries> {
    sections
        .iter()
        .flat_map(|s| &s.section_data)
        .filter(|series| selection.is_selected(&series.series_code))
        .map(row_chart)
        .collect()
}
