// src/domain/coerce.rs

use serde_json::Value;

/// Verbatim display text of a raw field.
///
/// Strings pass through untouched, numbers and booleans keep their JSON
/// spelling. `null`, arrays and objects have no display text.
pub fn raw_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Coerces a listing price such as `"$450,000+"` into a number.
///
/// `$`, `,` and `+` are stripped before parsing. Zero and negative
/// prices pass through unchanged.
pub fn parse_price(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => finite(n.as_f64()),
        Value::String(s) => {
            let cleaned: String = s
                .chars()
                .filter(|c| !matches!(c, '$' | ',' | '+'))
                .collect();
            parse_decimal(&cleaned)
        }
        _ => None,
    }
}

/// Coerces bedrooms, bathrooms or square footage. Anything that isn't a
/// decimal number (including the empty string) is `None`.
pub fn parse_number(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => finite(n.as_f64()),
        Value::String(s) => parse_decimal(s),
        _ => None,
    }
}

/// Categorical fields: verbatim text, with blank values treated as absent.
pub fn parse_category(value: Option<&Value>) -> Option<String> {
    raw_text(value).filter(|s| !s.trim().is_empty())
}

fn parse_decimal(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    finite(trimmed.parse::<f64>().ok())
}

// f64 parsing accepts "NaN" and "inf"; neither is a usable value here.
fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}
