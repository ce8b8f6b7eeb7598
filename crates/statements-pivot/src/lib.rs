#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/statements/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Pivot financial time series into ordered statement sections.
//!
//! The stages run in this order, each a pure function over owned values:
//!
//! 1. [`flatten()`] - one row per (series, date)
//! 2. [`tag()`] - stamp rows with their source's [`DataType`](statements_core::DataType)
//! 3. [`group_by_series`] - one series per code, values in first-seen order
//! 4. [`order_by_schema`] - filter and reorder against a canonical schema
//! 5. [`build_sections`] - operating data, income statement, balance sheet
//!
//! [`build_statement`] runs the whole chain over the three source responses.
//!
//! # Example
//!
//! ```rust,ignore
//! use statements_core::CompanyType;
//! use statements_pivot::{SourceRecords, build_statement};
//!
//! let records = SourceRecords { raw, growth, metrics };
//! let statement = build_statement(&records, &CompanyType::NonFinancials);
//! for section in &statement.sections {
//!     println!("{}: {} rows", section.section_label, section.section_data.len());
//! }
//! ```

/// Chart data extraction.
pub mod chart;
/// Record flattening and tagging.
pub mod flatten;
/// Grouping rows by series code.
pub mod group;
/// Schema-driven ordering.
pub mod order;
/// End-to-end pipeline.
pub mod pipeline;
/// Pivoted row projections.
pub mod row;
/// Canonical statement schemas.
pub mod schema;
/// Statement section builders.
pub mod section;

pub use chart::{
    ChartSeries, date_columns, extract_series, filter_entries, growth_series, is_iso_date_key,
    margin_series,
};
pub use flatten::{Taggable, flatten, flatten_tagged, tag};
pub use group::{group_by_series, reflatten};
pub use order::order_by_schema;
pub use pipeline::{PivotedStatement, SourceRecords, build_statement};
pub use row::{row_object, values_by_date};
pub use section::{balance_sheet, build_sections, income_statement, operating_data};
