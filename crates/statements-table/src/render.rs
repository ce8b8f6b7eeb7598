//! Pivot grid rendering.
//!
//! [`render_table`] turns statement sections into a header row followed by, for
//! each section, a group header row and one body row per series. Rendering is a
//! pure function of the sections, the columns, the options and the selection.

use serde::{Deserialize, Serialize};
use statements_core::{GroupedSeries, Section};
use statements_pivot::values_by_date;
use tracing::trace;

use crate::column::{TableColumn, TextPosition};
use crate::format::{MISSING, format_value};
use crate::selection::RowSelection;
use crate::style::{Density, DensityMetrics, RowVariant};

/// Default width of the selection checkbox column.
pub const CHECKBOX_WIDTH: u32 = 40;

/// Rendering options chosen by the caller.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Decimals shown for every numeric cell.
    pub decimal_places: usize,
    /// Divisor applied to non-percentage values (e.g. 1000 for thousands).
    pub divider: f64,
    /// Row density.
    pub density: Density,
    /// Width of the selection checkbox column.
    pub checkbox_width: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            decimal_places: 1,
            divider: 1.0,
            density: Density::default(),
            checkbox_width: CHECKBOX_WIDTH,
        }
    }
}

impl RenderOptions {
    /// Sets the number of decimals.
    #[must_use]
    pub const fn with_decimal_places(mut self, decimal_places: usize) -> Self {
        self.decimal_places = decimal_places;
        self
    }

    /// Sets the divider.
    #[must_use]
    pub const fn with_divider(mut self, divider: f64) -> Self {
        self.divider = divider;
        self
    }

    /// Sets the density.
    #[must_use]
    pub const fn with_density(mut self, density: Density) -> Self {
        self.density = density;
        self
    }

    /// Sets the checkbox column width.
    #[must_use]
    pub const fn with_checkbox_width(mut self, checkbox_width: u32) -> Self {
        self.checkbox_width = checkbox_width;
        self
    }
}

/// Left offsets of sticky columns.
///
/// The checkbox column sits at offset 0; each sticky column starts where the
/// previous sticky column ends. Non-sticky columns have no offset.
#[must_use]
pub fn sticky_offsets(columns: &[TableColumn], checkbox_width: u32) -> Vec<Option<u32>> {
    let mut left = checkbox_width;
    columns
        .iter()
        .map(|column| {
            column.sticky.then(|| {
                let offset = left;
                left += column.width;
                offset
            })
        })
        .collect()
}

/// One rendered cell.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// Accessor key of the cell's column.
    pub accessor_key: String,
    /// Display text.
    pub text: String,
    /// Width in pixels.
    pub width: u32,
    /// Left offset when the column is sticky.
    pub sticky_left: Option<u32>,
    /// Text alignment.
    pub align: TextPosition,
}

/// The leading selection checkbox of a row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkbox {
    /// Whether the box is ticked.
    pub checked: bool,
    /// Edge length in pixels.
    pub size: u32,
}

/// A rendered grid row below the header.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RenderedRow {
    /// Section label row; only the first column has text.
    GroupHeader {
        /// Section label.
        label: String,
        /// Cells, one per column.
        cells: Vec<Cell>,
    },
    /// One series.
    Body {
        /// Series code of the row.
        series_code: String,
        /// Selection checkbox.
        checkbox: Checkbox,
        /// Visual variant.
        variant: RowVariant,
        /// Cells, one per column.
        cells: Vec<Cell>,
    },
}

impl RenderedRow {
    /// Returns the row's cells.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        match self {
            Self::GroupHeader { cells, .. } | Self::Body { cells, .. } => cells,
        }
    }
}

/// A fully rendered grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedTable {
    /// Sizes applied to every row.
    pub metrics: DensityMetrics,
    /// Width of the checkbox column.
    pub checkbox_width: u32,
    /// Select-all checkbox in the header.
    pub header_checkbox: Checkbox,
    /// Header cells, one per column.
    pub header: Vec<Cell>,
    /// Group header and body rows, in display order.
    pub rows: Vec<RenderedRow>,
}

impl RenderedTable {
    /// Returns the body rows only.
    pub fn body_rows(&self) -> impl Iterator<Item = &RenderedRow> {
        self.rows
            .iter()
            .filter(|r| matches!(r, RenderedRow::Body { .. }))
    }
}

/// Builds one cell per column, sharing a single sticky offset computation so
/// every row type lines up.
fn row_cells<F>(columns: &[TableColumn], offsets: &[Option<u32>], mut text: F) -> Vec<Cell>
where
    F: FnMut(usize, &TableColumn) -> String,
{
    columns
        .iter()
        .zip(offsets)
        .enumerate()
        .map(|(i, (column, offset))| Cell {
            accessor_key: column.accessor_key.clone(),
            text: text(i, column),
            width: column.width,
            sticky_left: *offset,
            align: column.text_position,
        })
        .collect()
}

fn metadata_text(series: &GroupedSeries, accessor_key: &str) -> String {
    let value = match accessor_key {
        "description" => series.description.as_deref(),
        "unit" => series.unit.as_deref(),
        "series_code" => Some(series.series_code.as_str()),
        "data_type" => series.data_type.as_ref().map(|t| t.as_str()),
        "series_type" => series.series_type.as_deref(),
        _ => None,
    };
    value.unwrap_or(MISSING).to_string()
}

fn body_row(
    series: &GroupedSeries,
    columns: &[TableColumn],
    offsets: &[Option<u32>],
    options: &RenderOptions,
    selection: &RowSelection,
) -> RenderedRow {
    let values = values_by_date(series);
    let percentage = series.is_percentage();
    let cells = row_cells(columns, offsets, |_, column| {
        match (column.format_row, column.date()) {
            (true, Some(date)) => format_value(
                values.get(&date).copied().flatten(),
                percentage,
                options.decimal_places,
                options.divider,
            ),
            _ => metadata_text(series, &column.accessor_key),
        }
    });
    RenderedRow::Body {
        series_code: series.series_code.clone(),
        checkbox: Checkbox {
            checked: selection.is_selected(&series.series_code),
            size: options.density.metrics().checkbox_size,
        },
        variant: RowVariant::for_data_type(series.data_type),
        cells,
    }
}

/// Renders sections into a grid.
#[must_use]
pub fn render_table(
    sections: &[Section],
    columns: &[TableColumn],
    options: &RenderOptions,
    selection: &RowSelection,
) -> RenderedTable {
    let offsets = sticky_offsets(columns, options.checkbox_width);
    let metrics = options.density.metrics();

    let header = row_cells(columns, &offsets, |_, column| column.header.clone());

    let mut rows = Vec::new();
    for section in sections {
        rows.push(RenderedRow::GroupHeader {
            label: section.section_label.clone(),
            cells: row_cells(columns, &offsets, |i, _| {
                if i == 0 {
                    section.section_label.clone()
                } else {
                    String::new()
                }
            }),
        });
        rows.extend(
            section
                .section_data
                .iter()
                .map(|series| body_row(series, columns, &offsets, options, selection)),
        );
    }
    trace!(rows = rows.len(), columns = columns.len(), "Rendered pivot grid");

    RenderedTable {
        metrics,
        checkbox_width: options.checkbox_width,
        header_checkbox: Checkbox {
            checked: selection.all_selected(sections),
            size: metrics.checkbox_size,
        },
        header,
        rows,
    }
}
