//! Lenient numeric deserialization.
//!
//! Upstream spreadsheets deliver hours and percentage fractions as numbers,
//! numeric strings, blanks, or outright garbage. The allocation core never
//! aborts on a malformed value; it coerces to zero at the ingestion boundary
//! so the affected row degrades to zero-hour output instead of failing the
//! whole batch.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use std::str::FromStr;

/// Deserializes a field into a [`Decimal`], coercing anything unparseable to
/// zero. Accepts JSON numbers, numeric strings (trimmed), and nulls.
pub(crate) fn decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(coerce(&value))
}

/// Coerces a JSON value into a [`Decimal`], defaulting to zero.
pub(crate) fn coerce(value: &serde_json::Value) -> Decimal {
    match value {
        serde_json::Value::Number(n) => {
            Decimal::from_str(&n.to_string()).unwrap_or(Decimal::ZERO)
        }
        serde_json::Value::String(s) => Decimal::from_str(s.trim()).unwrap_or(Decimal::ZERO),
        _ => Decimal::ZERO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_coerce_number() {
        assert_eq!(coerce(&json!(7.5)), Decimal::new(75, 1));
        assert_eq!(coerce(&json!(8)), Decimal::new(8, 0));
    }

    #[test]
    fn test_coerce_numeric_string() {
        assert_eq!(coerce(&json!("0.7")), Decimal::new(7, 1));
        assert_eq!(coerce(&json!("  2.25 ")), Decimal::new(225, 2));
    }

    #[test]
    fn test_coerce_garbage_defaults_to_zero() {
        assert_eq!(coerce(&json!("n/a")), Decimal::ZERO);
        assert_eq!(coerce(&json!("")), Decimal::ZERO);
        assert_eq!(coerce(&json!(null)), Decimal::ZERO);
        assert_eq!(coerce(&json!([1, 2])), Decimal::ZERO);
    }
}
