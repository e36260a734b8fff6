//! Numeric coercion for extracted values.
//!
//! Extracted values arrive as numbers, numeric strings, strings with unit
//! suffixes or nothing at all. Sums must always render, so every failure
//! coerces to `0.0`.

use serde_json::Value;

/// Coerces a value to a number. Strings are trimmed and parsed (an empty
/// string is `0`), booleans count as `1`/`0`, anything else is `0`.
pub fn coerce(value: Option<&Value>) -> f64 {
    let number = match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => parse_text(s),
        Some(Value::Bool(b)) => f64::from(u8::from(*b)),
        _ => 0.0,
    };
    finite_or_zero(number)
}

/// Like [`coerce`], but drops `,` thousands separators from strings first.
pub fn coerce_amount(value: Option<&Value>) -> f64 {
    match value {
        Some(Value::String(s)) => finite_or_zero(parse_text(&s.replace(',', ""))),
        other => coerce(other),
    }
}

/// Tax values may carry a suffix (`"12.5 USD"`); only the token before the
/// first space is read.
pub fn coerce_tax(value: Option<&Value>) -> f64 {
    match value {
        Some(Value::String(s)) => {
            let token = s.trim().split(' ').next().unwrap_or_default();
            finite_or_zero(parse_text(&token.replace(',', "")))
        }
        other => coerce(other),
    }
}

fn parse_text(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().unwrap_or(0.0)
}

fn finite_or_zero(number: f64) -> f64 {
    if number.is_finite() { number } else { 0.0 }
}

/// Builds a JSON number, preferring an integer when the value is whole.
/// Non-finite input becomes `null`.
pub fn to_json_number(number: f64) -> Value {
    if number.is_finite() && number.fract() == 0.0 && number.abs() < 9.0e15 {
        Value::from(number as i64)
    } else {
        serde_json::Number::from_f64(number)
            .map(Value::Number)
            .unwrap_or(Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn coerces_numbers_and_numeric_strings() {
        assert_eq!(coerce(Some(&json!(4))), 4.0);
        assert_eq!(coerce(Some(&json!(" 2.5 "))), 2.5);
        assert_eq!(coerce(Some(&json!(""))), 0.0);
        assert_eq!(coerce(Some(&json!(true))), 1.0);
    }

    #[test]
    fn failures_coerce_to_zero() {
        assert_eq!(coerce(None), 0.0);
        assert_eq!(coerce(Some(&Value::Null)), 0.0);
        assert_eq!(coerce(Some(&json!("abc"))), 0.0);
        assert_eq!(coerce(Some(&json!("1,200"))), 0.0);
        assert_eq!(coerce(Some(&json!("NaN"))), 0.0);
        assert_eq!(coerce(Some(&json!([1]))), 0.0);
    }

    #[test]
    fn amounts_drop_thousands_separators() {
        assert_eq!(coerce_amount(Some(&json!("1,200.50"))), 1200.5);
        assert_eq!(coerce_amount(Some(&json!(30))), 30.0);
    }

    #[test]
    fn tax_reads_leading_token() {
        assert_eq!(coerce_tax(Some(&json!("12.5 USD"))), 12.5);
        assert_eq!(coerce_tax(Some(&json!("1,000 EUR"))), 1000.0);
        assert_eq!(coerce_tax(Some(&json!("VAT 5"))), 0.0);
        assert_eq!(coerce_tax(Some(&json!(1.5))), 1.5);
    }

    #[test]
    fn json_numbers_prefer_integers() {
        assert_eq!(to_json_number(5.0), json!(5));
        assert_eq!(to_json_number(2.5), json!(2.5));
        assert_eq!(to_json_number(f64::NAN), Value::Null);
    }
}
