//! Numeric Coercion
//!
//! Upstream data (supplier spreadsheets, legacy records, form posts) hands us
//! numbers as JSON numbers, numeric strings or null. Everything funnels
//! through this module and comes out as an exact `Decimal`.
//!
//! Coercion is total: anything that cannot be read as a number becomes zero.

use rust_decimal::prelude::*;
use serde_json::Value;

/// Parse a numeric string into an exact decimal, falling back to zero.
///
/// Accepts plain (`"12.5"`) and scientific (`"1.2e3"`) notation, with
/// surrounding whitespace.
pub fn parse_decimal(text: &str) -> Decimal {
    let trimmed = text.trim();
    match Decimal::from_str(trimmed).or_else(|_| Decimal::from_scientific(trimmed)) {
        Ok(value) => value,
        Err(_) => {
            tracing::debug!(input = %text, "Unparseable numeric input, using zero");
            Decimal::ZERO
        }
    }
}

/// Convert an untyped value to an exact decimal.
///
/// Numbers are stringified first, so `0.105` becomes exactly `0.105` rather
/// than the nearest binary float. `null`, booleans, arrays and objects are
/// not numeric and yield zero.
pub fn to_decimal(value: &Value) -> Decimal {
    match value {
        Value::Null => Decimal::ZERO,
        Value::Number(n) => parse_decimal(&n.to_string()),
        Value::String(s) => parse_decimal(s),
        other => {
            tracing::debug!(input = %other, "Non-numeric value, using zero");
            Decimal::ZERO
        }
    }
}

/// Normalize a factor-or-percent value to a factor in [0, 1].
///
/// - (0, 1): already a factor, returned unchanged
/// - (1, 100]: a percentage, divided by 100
/// - ≤ 0, exactly 1, or > 100: no effect, returns zero
pub fn to_factor(value: Decimal) -> Decimal {
    if value <= Decimal::ZERO || value == Decimal::ONE || value > Decimal::ONE_HUNDRED {
        return Decimal::ZERO;
    }
    if value > Decimal::ONE {
        return value / Decimal::ONE_HUNDRED;
    }
    value
}

/// Integer coercion with fallback.
///
/// `null` (and values too large for `i64`) yield `default`; anything else is
/// coerced with [`to_decimal`] and truncated toward zero.
pub fn to_int_or(value: &Value, default: i64) -> i64 {
    if value.is_null() {
        return default;
    }
    to_decimal(value).trunc().to_i64().unwrap_or(default)
}

/// Integer part of a decimal, truncated toward zero and saturated to `i64`.
pub fn truncate_int(value: Decimal) -> i64 {
    value.trunc().to_i64().unwrap_or(if value.is_sign_negative() {
        i64::MIN
    } else {
        i64::MAX
    })
}

/// Coerce an untyped flag.
///
/// Accepts JSON booleans, numbers (non-zero is true) and the strings
/// `true/false`, `yes/no`, `1/0` in any case. Everything else is false.
pub fn to_flag(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(_) => !to_decimal(value).is_zero(),
        Value::String(s) => matches!(
            s.trim().to_ascii_lowercase().as_str(),
            "true" | "yes" | "1"
        ),
        _ => false,
    }
}
