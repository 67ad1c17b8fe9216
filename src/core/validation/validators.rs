//! Field validators for JSON request bodies
//!
//! A field is *present* when the key exists and its value is not `null`,
//! an empty string, `false` or numerically zero.

use serde_json::Value;

/// Whether a value counts as supplied
pub fn is_present(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

/// Validator: field is a present, non-empty string
pub fn required_str(field: &str, value: Option<&Value>) -> Result<String, String> {
    if !is_present(value) {
        return Err(format!("'{}' is required", field));
    }
    match value {
        Some(Value::String(s)) => Ok(s.clone()),
        _ => Err(format!("'{}' must be a string", field)),
    }
}

/// Validator: field is a string when present
///
/// Absent and empty values both yield `None`, so the caller keeps its
/// stored value.
pub fn optional_str(field: &str, value: Option<&Value>) -> Result<Option<String>, String> {
    if !is_present(value) {
        return Ok(None);
    }
    match value {
        Some(Value::String(s)) => Ok(Some(s.clone())),
        _ => Err(format!("'{}' must be a string", field)),
    }
}

/// Validator: field is a present, non-zero amount
///
/// Accepts JSON numbers and numeric strings.
pub fn required_amount(field: &str, value: Option<&Value>) -> Result<f64, String> {
    if !is_present(value) {
        return Err(format!("'{}' is required", field));
    }
    let amount = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match amount {
        Some(amt) if amt.is_finite() && amt != 0.0 => Ok(amt),
        _ => Err(format!("'{}' must be a non-zero number", field)),
    }
}

/// Validator: field is a boolean when present
pub fn optional_bool(field: &str, value: Option<&Value>) -> Result<Option<bool>, String> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Bool(b)) => Ok(Some(*b)),
        _ => Err(format!("'{}' must be a boolean", field)),
    }
}
