//! Cell value formatting.
//!
//! Values are rounded half away from zero at the requested number of
//! decimals, so `2.5` shows as `3` and `0.125` at two decimals as `0.13`.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Text shown for a missing value.
pub const MISSING: &str = "-";

/// Formats a cell value.
///
/// Percentage rows render `value * 100` with `decimal_places` decimals and a
/// `%` suffix. Every other row renders `value / divider` with thousands
/// separators. Missing, non-finite and out-of-range values render as
/// [`MISSING`]. A zero divider leaves the value unscaled.
#[must_use]
pub fn format_value(
    value: Option<f64>,
    percentage: bool,
    decimal_places: usize,
    divider: f64,
) -> String {
    let Some(value) = value.and_then(to_decimal) else {
        return MISSING.to_string();
    };

    let scaled = if percentage {
        value.checked_mul(Decimal::ONE_HUNDRED)
    } else {
        match to_decimal(divider).filter(|d| !d.is_zero()) {
            Some(divider) => value.checked_div(divider),
            None => Some(value),
        }
    };

    match scaled {
        Some(scaled) if percentage => format!("{}%", fixed(scaled, decimal_places)),
        Some(scaled) => group_thousands(&fixed(scaled, decimal_places)),
        None => MISSING.to_string(),
    }
}

/// Formats a number with a fixed number of decimals and `,` thousands separators.
///
/// Non-finite values render as [`MISSING`].
#[must_use]
pub fn format_with_commas(value: f64, decimals: usize) -> String {
    to_decimal(value).map_or_else(
        || MISSING.to_string(),
        |value| group_thousands(&fixed(value, decimals)),
    )
}

/// Reads the shortest decimal text of `value`, the digits a user sees.
fn to_decimal(value: f64) -> Option<Decimal> {
    if !value.is_finite() {
        return None;
    }
    value
        .to_string()
        .parse::<Decimal>()
        .ok()
        .or_else(|| Decimal::from_f64(value))
}

/// Rounds half away from zero and renders exactly `decimals` fraction digits.
///
/// The sign follows the rounded text, so -0.04 at one decimal prints `0.0`.
fn fixed(value: Decimal, decimals: usize) -> String {
    let dp = u32::try_from(decimals).unwrap_or(u32::MAX);
    let rounded = value
        .abs()
        .round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    let sign = if value.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}{rounded:.decimals$}")
}

fn group_thousands(text: &str) -> String {
    let (sign, digits) = text
        .strip_prefix('-')
        .map_or(("", text), |rest| ("-", rest));
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits, ""));

    let mut grouped = String::with_capacity(text.len() + int_part.len() / 3);
    grouped.push_str(sign);
    for (idx, ch) in int_part.chars().enumerate() {
        if idx > 0 && (int_part.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if !frac_part.is_empty() {
        grouped.push('.');
        grouped.push_str(frac_part);
    }
    grouped
}
