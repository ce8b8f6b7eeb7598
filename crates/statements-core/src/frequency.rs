//! Reporting frequency of a time series.
//!
//! The data service reports frequencies as upper-case strings. Anything it
//! sends that is not recognised deserializes to [`Frequency::Unknown`] rather
//! than failing the whole response.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Reporting frequency of a financial time series.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Frequency {
    /// Fiscal-year values.
    #[default]
    #[serde(alias = "annual", alias = "Y")]
    Annual,
    /// Fiscal-half values.
    #[serde(alias = "semiannual", alias = "H")]
    Semiannual,
    /// Fiscal-quarter values.
    #[serde(alias = "quarterly", alias = "Q")]
    Quarterly,
    /// Calendar-month values.
    #[serde(alias = "monthly", alias = "M")]
    Monthly,
    /// Any frequency code not recognised by this crate.
    #[serde(other)]
    Unknown,
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Annual => "ANNUAL",
            Self::Semiannual => "SEMIANNUAL",
            Self::Quarterly => "QUARTERLY",
            Self::Monthly => "MONTHLY",
            Self::Unknown => "UNKNOWN",
        };
        f.write_str(s)
    }
}
