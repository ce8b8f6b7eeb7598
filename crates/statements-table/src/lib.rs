#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/statements/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Rendering rules for the pivoted statement grid.
//!
//! - [`TableColumn`] / [`ColumnLayout`] - the fixed year-end column set
//! - [`format_value`] - percentage and thousands-grouped number formatting
//! - [`RowVariant`] / [`Density`] - row styling driven by provenance tag
//! - [`render_table`] - header, group header and body rows with sticky offsets
//! - [`RowSelection`] - per-row checkbox state owned by the grid
//! - [`selected_charts`] - chart context menu over the selected rows
//! - [`sections_to_dataframe`] - export to a polars `DataFrame`

/// Column definitions.
pub mod column;
/// Cell value formatting.
pub mod format;
/// DataFrame export.
pub mod frame;
/// Chart context menu.
pub mod menu;
/// Grid rendering.
pub mod render;
/// Row selection state.
pub mod selection;
/// Row variants and density.
pub mod style;

pub use column::{ColumnLayout, TableColumn, TextPosition, default_columns};
pub use format::{format_value, format_with_commas};
pub use frame::sections_to_dataframe;
pub use menu::{row_chart, selected_charts};
pub use render::{
    Cell, Checkbox, RenderOptions, RenderedRow, RenderedTable, render_table, sticky_offsets,
};
pub use selection::RowSelection;
pub use style::{Background, Density, DensityMetrics, RowVariant};
