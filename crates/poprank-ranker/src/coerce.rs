//! Numeric coercion for crowd-sourced values.
//!
//! Every numeric step in the ranker goes through here so that "skip what is
//! not a usable number" is one policy instead of scattered checks.

use serde_json::Value;

/// Returns the value as `f64` iff it is finite.
pub fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

/// Coerce an arbitrary JSON value to a finite number.
///
/// Accepted: JSON numbers, and strings holding a decimal number (whitespace
/// trimmed). Everything else (`null`, booleans, containers, blank strings,
/// `"NaN"`, `"inf"`) yields `None`.
pub fn finite_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().and_then(finite),
        Value::String(s) => parse_numeric(s),
        _ => None,
    }
}

fn parse_numeric(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    // f64::from_str accepts "inf"/"NaN"; finite() drops them.
    trimmed.parse::<f64>().ok().and_then(finite)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_numbers_pass_through() {
        assert_eq!(finite_value(&json!(42)), Some(42.0));
        assert_eq!(finite_value(&json!(-0.5)), Some(-0.5));
        assert_eq!(finite_value(&json!(0)), Some(0.0));
    }

    #[test]
    fn test_numeric_strings() {
        assert_eq!(finite_value(&json!("12.5")), Some(12.5));
        assert_eq!(finite_value(&json!("  7 ")), Some(7.0));
        assert_eq!(finite_value(&json!("")), None);
        assert_eq!(finite_value(&json!("   ")), None);
        assert_eq!(finite_value(&json!("12%")), None);
        assert_eq!(finite_value(&json!("NaN")), None);
        assert_eq!(finite_value(&json!("inf")), None);
    }

    #[test]
    fn test_non_numeric_rejected() {
        assert_eq!(finite_value(&Value::Null), None);
        assert_eq!(finite_value(&json!(true)), None);
        assert_eq!(finite_value(&json!([1])), None);
        assert_eq!(finite_value(&json!({ "v": 1 })), None);
    }

    #[test]
    fn test_finite_f64() {
        assert_eq!(finite(3.0), Some(3.0));
        assert_eq!(finite(f64::NAN), None);
        assert_eq!(finite(f64::INFINITY), None);
        assert_eq!(finite(f64::NEG_INFINITY), None);
    }
}
