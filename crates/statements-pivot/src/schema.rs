//! Canonical statement schemas.
//!
//! Each schema is the fixed display order of a statement's line items. They are
//! maintained by hand alongside the data service's series catalogue.

/// Label of the operating data section.
pub const OPERATING_DATA_LABEL: &str = "Operating Data";
/// Label of the income statement section.
pub const INCOME_STATEMENT_LABEL: &str = "Income Statement";
/// Label of the balance sheet section.
pub const BALANCE_SHEET_LABEL: &str = "Balance Sheet";

/// Income statement rows: each line item is followed by its margin and/or
/// its growth rate.
pub const INCOME_STATEMENT: &[&str] = &[
    "IS_NET_REVENUES",
    "PCT_CHG_IS_NET_REVENUES",
    "IS_GROSS_PROFIT",
    "GROSS_MARGIN",
    "PCT_CHG_IS_GROSS_PROFIT",
    "IS_EBITDA",
    "EBITDA_MARGIN",
    "PCT_CHG_IS_EBITDA",
    "IS_EBIT",
    "EBIT_MARGIN",
    "PCT_CHG_IS_EBIT",
    "IS_NET_INCOME",
    "NET_MARGIN",
    "PCT_CHG_IS_NET_INCOME",
];

/// Balance sheet aggregate totals.
pub const BALANCE_SHEET_METRICS: &[&str] = &[
    "BS_TOTAL_CURRENT_ASSETS",
    "BS_TOTAL_NON_CURRENT_ASSETS",
    "BS_TOTAL_ASSETS",
    "BS_TOTAL_CURRENT_LIABILITIES",
    "BS_TOTAL_NON_CURRENT_LIABILITIES",
    "BS_TOTAL_LIABILITIES",
    "BS_TOTAL_EQUITY",
    "BS_TOTAL_LIABILITIES_AND_EQUITY",
];

/// Balance sheet raw line items.
pub const BALANCE_SHEET_RAW: &[&str] = &[
    "BS_CASH_AND_EQUIVALENTS",
    "BS_SHORT_TERM_INVESTMENTS",
    "BS_ACCOUNTS_RECEIVABLE",
    "BS_INVENTORIES",
    "BS_OTHER_CURRENT_ASSETS",
    "BS_PPE_NET",
    "BS_GOODWILL",
    "BS_INTANGIBLE_ASSETS",
    "BS_OTHER_NON_CURRENT_ASSETS",
    "BS_ACCOUNTS_PAYABLE",
    "BS_SHORT_TERM_DEBT",
    "BS_OTHER_CURRENT_LIABILITIES",
    "BS_LONG_TERM_DEBT",
    "BS_LEASE_LIABILITIES",
    "BS_OTHER_NON_CURRENT_LIABILITIES",
    "BS_SHARE_CAPITAL",
    "BS_RETAINED_EARNINGS",
    "BS_MINORITY_INTEREST",
];

/// Balance sheet presentation order: each total precedes its raw items.
pub const BALANCE_SHEET: &[&str] = &[
    "BS_TOTAL_CURRENT_ASSETS",
    "BS_CASH_AND_EQUIVALENTS",
    "BS_SHORT_TERM_INVESTMENTS",
    "BS_ACCOUNTS_RECEIVABLE",
    "BS_INVENTORIES",
    "BS_OTHER_CURRENT_ASSETS",
    "BS_TOTAL_NON_CURRENT_ASSETS",
    "BS_PPE_NET",
    "BS_GOODWILL",
    "BS_INTANGIBLE_ASSETS",
    "BS_OTHER_NON_CURRENT_ASSETS",
    "BS_TOTAL_ASSETS",
    "BS_TOTAL_CURRENT_LIABILITIES",
    "BS_ACCOUNTS_PAYABLE",
    "BS_SHORT_TERM_DEBT",
    "BS_OTHER_CURRENT_LIABILITIES",
    "BS_TOTAL_NON_CURRENT_LIABILITIES",
    "BS_LONG_TERM_DEBT",
    "BS_LEASE_LIABILITIES",
    "BS_OTHER_NON_CURRENT_LIABILITIES",
    "BS_TOTAL_LIABILITIES",
    "BS_TOTAL_EQUITY",
    "BS_SHARE_CAPITAL",
    "BS_RETAINED_EARNINGS",
    "BS_MINORITY_INTEREST",
    "BS_TOTAL_LIABILITIES_AND_EQUITY",
];

/// Margin series charted together, with their chart labels.
pub const MARGIN_CHART: &[(&str, &str)] = &[
    ("GROSS_MARGIN", "Gross margin"),
    ("EBIT_MARGIN", "EBIT margin"),
    ("EBITDA_MARGIN", "EBITDA margin"),
];

/// Growth series charted together, with their chart labels.
pub const GROWTH_CHART: &[(&str, &str)] = &[
    ("PCT_CHG_IS_NET_REVENUES", "Revenue growth"),
    ("PCT_CHG_IS_EBITDA", "EBITDA growth"),
    ("PCT_CHG_IS_NET_INCOME", "Net income growth"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn unique(schema: &[&str]) -> bool {
        schema.iter().collect::<HashSet<_>>().len() == schema.len()
    }

    #[test]
    fn test_schema_sizes() {
        assert_eq!(INCOME_STATEMENT.len(), 14);
        assert_eq!(BALANCE_SHEET.len(), 26);
        assert_eq!(
            BALANCE_SHEET_METRICS.len() + BALANCE_SHEET_RAW.len(),
            BALANCE_SHEET.len()
        );
    }

    #[test]
    fn test_schema_codes_are_unique() {
        assert!(unique(INCOME_STATEMENT));
        assert!(unique(BALANCE_SHEET));
        assert!(unique(BALANCE_SHEET_METRICS));
        assert!(unique(BALANCE_SHEET_RAW));
    }

    #[test]
    fn test_balance_sheet_sub_schemas_partition_presentation_order() {
        let metrics: HashSet<_> = BALANCE_SHEET_METRICS.iter().collect();
        let raw: HashSet<_> = BALANCE_SHEET_RAW.iter().collect();
        assert!(metrics.is_disjoint(&raw));
        assert!(
            BALANCE_SHEET
                .iter()
                .all(|code| metrics.contains(code) || raw.contains(code))
        );
    }

    #[test]
    fn test_chart_codes_belong_to_income_statement() {
        for (code, _) in MARGIN_CHART.iter().chain(GROWTH_CHART) {
            assert!(INCOME_STATEMENT.contains(code), "{code} not in schema");
        }
    }
}
