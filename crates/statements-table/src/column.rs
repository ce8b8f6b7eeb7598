//! Grid column definitions.
//!
//! The grid has two sticky metadata columns (description and unit) followed by
//! one year-end date column per calendar year.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// First calendar year with a date column.
pub const FIRST_YEAR: i32 = 2016;
/// Last calendar year with a date column.
pub const LAST_YEAR: i32 = 2035;

/// Default width of the description column.
pub const DESCRIPTION_WIDTH: u32 = 280;
/// Default width of the unit column.
pub const UNIT_WIDTH: u32 = 80;
/// Default width of a date column.
pub const DATE_WIDTH: u32 = 110;

/// Horizontal alignment of a column's text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextPosition {
    /// Left aligned.
    #[default]
    Left,
    /// Centered.
    Center,
    /// Right aligned.
    Right,
}

/// One grid column.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableColumn {
    /// Key of the row field rendered in this column.
    pub accessor_key: String,
    /// Header text.
    pub header: String,
    /// Whether the column stays pinned while the grid scrolls.
    pub sticky: bool,
    /// Text alignment.
    pub text_position: TextPosition,
    /// Width in pixels.
    pub width: u32,
    /// Whether cell values are formatted as numbers.
    pub format_row: bool,
}

impl TableColumn {
    /// Returns the date of a date column, or `None` for metadata columns.
    #[must_use]
    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.accessor_key, "%Y-%m-%d").ok()
    }
}

/// Builder for the grid's column list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColumnLayout {
    first_year: i32,
    last_year: i32,
    description_width: u32,
    unit_width: u32,
    date_width: u32,
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self::new(FIRST_YEAR, LAST_YEAR)
    }
}

impl ColumnLayout {
    /// Creates a layout with one year-end column per year in `first_year..=last_year`.
    #[must_use]
    pub const fn new(first_year: i32, last_year: i32) -> Self {
        Self {
            first_year,
            last_year,
            description_width: DESCRIPTION_WIDTH,
            unit_width: UNIT_WIDTH,
            date_width: DATE_WIDTH,
        }
    }

    /// Sets the description column width.
    #[must_use]
    pub const fn with_description_width(mut self, width: u32) -> Self {
        self.description_width = width;
        self
    }

    /// Sets the unit column width.
    #[must_use]
    pub const fn with_unit_width(mut self, width: u32) -> Self {
        self.unit_width = width;
        self
    }

    /// Sets the width of every date column.
    #[must_use]
    pub const fn with_date_width(mut self, width: u32) -> Self {
        self.date_width = width;
        self
    }

    /// Builds the column list: description, unit, then the year-end columns.
    #[must_use]
    pub fn columns(&self) -> Vec<TableColumn> {
        let mut columns = vec![
            TableColumn {
                accessor_key: "description".to_string(),
                header: "Description".to_string(),
                sticky: true,
                text_position: TextPosition::Left,
                width: self.description_width,
                format_row: false,
            },
            TableColumn {
                accessor_key: "unit".to_string(),
                header: "Unit".to_string(),
                sticky: true,
                text_position: TextPosition::Center,
                width: self.unit_width,
                format_row: false,
            },
        ];
        columns.extend((self.first_year..=self.last_year).map(|year| TableColumn {
            accessor_key: format!("{year}-12-31"),
            header: year.to_string(),
            sticky: false,
            text_position: TextPosition::Right,
            width: self.date_width,
            format_row: true,
        }));
        columns
    }
}

/// The default 22-column grid (2016-12-31 through 2035-12-31).
#[must_use]
pub fn default_columns() -> Vec<TableColumn> {
    ColumnLayout::default().columns()
}
