//! Provenance tags, fetch sources and company types.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Provenance label stamped onto rows before grouping.
///
/// The tag decides which section a series can land in and how the renderer
/// styles its row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataType {
    /// Raw reported line items.
    Financials,
    /// Period-over-period growth rates.
    Growth,
    /// Derived metrics such as margins.
    Metrics,
    /// Operating (non-financial) data.
    Operating,
    /// Balance sheet aggregate totals.
    BsMetrics,
    /// Balance sheet raw line items.
    BsRaw,
}

impl DataType {
    /// Returns the wire label of this tag.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Financials => "financials",
            Self::Growth => "growth",
            Self::Metrics => "metrics",
            Self::Operating => "operating",
            Self::BsMetrics => "bs_metrics",
            Self::BsRaw => "bs_raw",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the three independent time-series endpoints a statement is built from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesSource {
    /// Reported financials.
    Raw,
    /// Growth percentages.
    Growth,
    /// Derived metrics.
    Metrics,
}

impl SeriesSource {
    /// All sources, in the order they are concatenated before grouping.
    pub const ALL: [Self; 3] = [Self::Raw, Self::Growth, Self::Metrics];

    /// Returns the provenance tag applied to rows fetched from this source.
    #[must_use]
    pub const fn data_type(&self) -> DataType {
        match self {
            Self::Raw => DataType::Financials,
            Self::Growth => DataType::Growth,
            Self::Metrics => DataType::Metrics,
        }
    }

    /// Returns the wire label of this source.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Raw => "raw",
            Self::Growth => "growth",
            Self::Metrics => "metrics",
        }
    }
}

impl fmt::Display for SeriesSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Company classification controlling which statement layouts apply.
///
/// Only non-financial companies have statement schemas; every other
/// classification renders empty sections.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum CompanyType {
    /// Industrial and service companies (`"non-financials"`).
    NonFinancials,
    /// Banks and insurers (`"financials"`).
    Financials,
    /// Any other classification string.
    Other(String),
}

impl CompanyType {
    /// Returns true if statement sections can be built for this company type.
    #[must_use]
    pub const fn has_statement_schema(&self) -> bool {
        matches!(self, Self::NonFinancials)
    }

    /// Returns the wire label of this company type.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::NonFinancials => "non-financials",
            Self::Financials => "financials",
            Self::Other(s) => s,
        }
    }
}

impl FromStr for CompanyType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "non-financials" => Self::NonFinancials,
            "financials" => Self::Financials,
            other => Self::Other(other.to_string()),
        })
    }
}

impl From<&str> for CompanyType {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(t) => t,
            Err(never) => match never {},
        }
    }
}

impl fmt::Display for CompanyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_type_labels_round_trip_through_serde() {
        let json = serde_json::to_string(&DataType::BsMetrics).unwrap();
        assert_eq!(json, "\"bs_metrics\"");
        assert_eq!(DataType::BsRaw.to_string(), "bs_raw");
    }

    #[test]
    fn test_source_tags() {
        assert_eq!(SeriesSource::Raw.data_type(), DataType::Financials);
        assert_eq!(SeriesSource::Growth.data_type(), DataType::Growth);
        assert_eq!(SeriesSource::Metrics.data_type(), DataType::Metrics);
    }

    #[test]
    fn test_company_type_gate() {
        assert!(CompanyType::from("non-financials").has_statement_schema());
        assert!(!CompanyType::from("financials").has_statement_schema());
        let other = CompanyType::from("insurance");
        assert_eq!(other, CompanyType::Other("insurance".to_string()));
        assert!(!other.has_statement_schema());
        assert_eq!(other.to_string(), "insurance");
    }
}
