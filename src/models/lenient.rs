//! Lenient parsing of numeric and text fields.
//!
//! Candidate records and period overrides arrive from spreadsheets and
//! browser forms, so a numeric field may be a JSON number, a numeric string,
//! a blank string, `null`, or garbage. These helpers collapse all of that
//! into `Option<Decimal>`:
//!
//! - `null`, missing, or blank text is `None` ("not entered")
//! - anything else is `Some`, with unparseable values coerced to zero

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Parses text as a number, coercing failures to zero.
///
/// Surrounding whitespace is ignored and scientific notation is accepted.
/// Digit separators (`1_000`) are not numbers and coerce to zero.
///
/// # Example
///
/// ```
/// use payroll_engine::models::coerce_number;
/// use rust_decimal::Decimal;
///
/// assert_eq!(coerce_number(" 12.5 "), Decimal::new(125, 1));
/// assert_eq!(coerce_number("1e3"), Decimal::from(1000));
/// assert_eq!(coerce_number("forty"), Decimal::ZERO);
/// assert_eq!(coerce_number("1_000"), Decimal::ZERO);
/// ```
pub fn coerce_number(text: &str) -> Decimal {
    let trimmed = text.trim();
    if trimmed.contains('_') {
        return Decimal::ZERO;
    }
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .unwrap_or(Decimal::ZERO)
}

/// Interprets a JSON value as an optional decimal.
///
/// Returns `None` when the value counts as "not entered" (null or blank
/// text) and `Some` otherwise, with non-numeric values coerced to zero.
pub fn coerce_value(value: &Value) -> Option<Decimal> {
    match value {
        Value::Null => None,
        Value::String(text) if text.trim().is_empty() => None,
        Value::String(text) => Some(coerce_number(text)),
        Value::Number(number) => Some(match number.as_i64() {
            Some(integer) => Decimal::from(integer),
            None => coerce_number(&number.to_string()),
        }),
        Value::Bool(_) | Value::Array(_) | Value::Object(_) => Some(Decimal::ZERO),
    }
}

/// Serde adapter for `Option<Decimal>` fields that must never reject input.
///
/// Use with `#[serde(default, deserialize_with = "lenient::decimal")]`.
pub fn decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(coerce_value))
}

/// Serde adapter for optional free-text fields.
///
/// Blank strings and non-string values are treated as absent. Other text is
/// kept exactly as given, surrounding whitespace included.
pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(text)) if !text.trim().is_empty() => Some(text),
        _ => None,
    })
}
