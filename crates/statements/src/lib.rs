#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/statements/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Financial statement pivot engine.
//!
//! This crate re-exports the core types, the pivot pipeline and the table
//! rendering rules, and provides a [`StatementLoader`] that fetches a
//! company's series from one or more providers with automatic fallback.
//!
//! # Features
//!
//! - `http` - REST provider for the dashboard service
//! - `cache-sqlite` - SQLite-based caching
//!
//! # Example
//!
//! ```rust,ignore
//! use statements::{CompanyId, CompanyType, RenderOptions, RowSelection, StatementLoader};
//!
//! #[tokio::main]
//! async fn main() -> statements::Result<()> {
//!     let loader = StatementLoader::new()
//!         .with_http("https://dashboard.example.com/api")
//!         .set_cache(std::sync::Arc::new(statements::SqliteCache::new("statements.db")?));
//!
//!     let view = loader.load(&CompanyId::new("42"), &CompanyType::NonFinancials).await?;
//!     let table = view.render(
//!         &statements::default_columns(),
//!         &RenderOptions::default().with_divider(1_000.0),
//!         &RowSelection::new(),
//!     );
//!     println!("{} body rows", table.body_rows().count());
//!
//!     Ok(())
//! }
//! ```

// Core types and traits
pub use statements_core::*;

// Pivot pipeline
pub use statements_pivot::{
    ChartSeries, PivotedStatement, SourceRecords, build_sections, build_statement, date_columns,
    flatten, group_by_series, growth_series, margin_series, order_by_schema, row_object,
    schema, tag,
};

// Table rendering
pub use statements_table::{
    ColumnLayout, Density, RenderOptions, RenderedRow, RenderedTable, RowSelection, RowVariant,
    TableColumn, default_columns, format_value, render_table, sections_to_dataframe,
    selected_charts,
};

// Cache implementations
#[cfg(feature = "cache-sqlite")]
pub use statements_cache::SqliteCache;
pub use statements_cache::{InMemoryCache, NoopCache};

// Providers
#[cfg(feature = "http")]
pub use statements_http::HttpProvider;

mod loader;
pub use loader::{StatementLoader, StatementView};
