#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/statements/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Core traits and types for the financial statement pivot engine.
//!
//! This crate provides the foundational abstractions shared by every other crate:
//!
//! - [`TimeSeriesRecord`](types::TimeSeriesRecord) - Nested series as fetched
//! - [`GroupedSeries`](types::GroupedSeries) and [`Section`](types::Section) - Pivot output
//! - [`DataType`](tag::DataType) - Provenance tags
//! - [`TimeSeriesProvider`](provider::TimeSeriesProvider) - Source of company series
//! - [`SeriesCache`](cache::SeriesCache) - Caching abstraction

/// Cache trait for storing fetched series.
pub mod cache;
/// Error types for statement operations.
pub mod error;
/// Reporting frequency definitions.
pub mod frequency;
/// Provider trait for fetching series.
pub mod provider;
/// Provenance tags, fetch sources and company types.
pub mod tag;
/// Core data types (records, rows, grouped series, sections).
pub mod types;

// Re-export commonly used items at crate root
pub use cache::SeriesCache;
pub use error::{Result, StatementError};
pub use frequency::Frequency;
pub use provider::TimeSeriesProvider;
pub use tag::{CompanyType, DataType, SeriesSource};
pub use types::{
    CompanyId, DataPoint, EvaluationSummary, FlatRow, GroupedSeries, OPERATING_SERIES_TYPE,
    PERCENT_UNIT, Section, TimeSeriesPoint, TimeSeriesRecord,
};
