//! Statement section builders.
//!
//! Each builder takes the full grouped set and returns one labelled section.
//! Only non-financial companies have statement schemas; for any other company
//! type every builder returns an empty section.

use statements_core::{CompanyType, DataType, GroupedSeries, Section};
use tracing::debug;

use crate::flatten::tag;
use crate::order::order_by_schema;
use crate::schema;

/// Builds the operating data section: every `OPERATING` series, in input order.
#[must_use]
pub fn operating_data(groups: &[GroupedSeries], company_type: &CompanyType) -> Section {
    if !company_type.has_statement_schema() {
        return Section::empty(schema::OPERATING_DATA_LABEL);
    }
    let rows = tag(
        groups.iter().filter(|g| g.is_operating()).cloned(),
        DataType::Operating,
    );
    Section::new(schema::OPERATING_DATA_LABEL, rows)
}

/// Builds the income statement section.
///
/// Line items, margins and growth rates are interleaved by the schema; each row
/// keeps the tag of the source it was fetched from.
#[must_use]
pub fn income_statement(groups: &[GroupedSeries], company_type: &CompanyType) -> Section {
    if !company_type.has_statement_schema() {
        return Section::empty(schema::INCOME_STATEMENT_LABEL);
    }
    let rows = order_by_schema(groups.iter().cloned(), schema::INCOME_STATEMENT);
    Section::new(schema::INCOME_STATEMENT_LABEL, rows)
}

/// Builds the balance sheet section.
///
/// Totals and raw items are selected separately so each half can be re-tagged
/// (`bs_metrics` / `bs_raw`) before the halves are interleaved into
/// presentation order.
#[must_use]
pub fn balance_sheet(groups: &[GroupedSeries], company_type: &CompanyType) -> Section {
    if !company_type.has_statement_schema() {
        return Section::empty(schema::BALANCE_SHEET_LABEL);
    }
    let totals = tag(
        order_by_schema(groups.iter().cloned(), schema::BALANCE_SHEET_METRICS),
        DataType::BsMetrics,
    );
    let raw = tag(
        order_by_schema(groups.iter().cloned(), schema::BALANCE_SHEET_RAW),
        DataType::BsRaw,
    );
    let rows = order_by_schema(totals.into_iter().chain(raw), schema::BALANCE_SHEET);
    Section::new(schema::BALANCE_SHEET_LABEL, rows)
}

/// Builds every section, in display order.
#[must_use]
pub fn build_sections(groups: &[GroupedSeries], company_type: &CompanyType) -> Vec<Section> {
    let sections = vec![
        operating_data(groups, company_type),
        income_statement(groups, company_type),
        balance_sheet(groups, company_type),
    ];
    debug!(
        company_type = %company_type,
        operating = sections[0].section_data.len(),
        income_statement = sections[1].section_data.len(),
        balance_sheet = sections[2].section_data.len(),
        "Built statement sections"
    );
    sections
}
