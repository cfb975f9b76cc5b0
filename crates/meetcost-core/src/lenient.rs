//! Lenient parsing for caller-supplied meeting fields.
//!
//! Meeting fields arrive from forms and agents in whatever shape the caller
//! had at hand: counts as numbers or numeric strings, attendee roles as a JSON
//! list or as a list serialized into a string. None of these helpers fail;
//! anything unusable comes back as `None` or an empty list and the caller
//! substitutes its documented default.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Parse a positive whole count from a JSON number or numeric string.
///
/// Fractions are truncated. Zero, negatives, and non-numeric input yield `None`.
///
/// # Examples
///
/// ```
/// use meetcost_core::lenient::parse_count;
/// use serde_json::json;
///
/// assert_eq!(parse_count(&json!(45)), Some(45));
/// assert_eq!(parse_count(&json!("90")), Some(90));
/// assert_eq!(parse_count(&json!("soon")), None);
/// assert_eq!(parse_count(&json!(0)), None);
/// ```
pub fn parse_count(value: &Value) -> Option<u32> {
    let number = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    if !number.is_finite() || number < 1.0 || number > f64::from(u32::MAX) {
        return None;
    }
    Some(number.trunc() as u32)
}

/// Parse a finite amount from a JSON number or numeric string.
///
/// # Examples
///
/// ```
/// use meetcost_core::lenient::parse_amount;
/// use serde_json::json;
///
/// assert_eq!(parse_amount(&json!(112.5)), Some(112.5));
/// assert_eq!(parse_amount(&json!("80")), Some(80.0));
/// assert_eq!(parse_amount(&json!(null)), None);
/// ```
pub fn parse_amount(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    number.is_finite().then_some(number)
}

/// Parse a serialized role list such as `["engineer","pm"]`.
///
/// Malformed input yields an empty list.
///
/// # Examples
///
/// ```
/// use meetcost_core::lenient::parse_roles;
///
/// assert_eq!(parse_roles(r#"["engineer","pm"]"#), vec!["engineer", "pm"]);
/// assert!(parse_roles("[engineer").is_empty());
/// ```
pub fn parse_roles(serialized: &str) -> Vec<String> {
    let trimmed = serialized.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    match serde_json::from_str::<Vec<Value>>(trimmed) {
        Ok(items) => collect_roles(&items),
        Err(_) => Vec::new(),
    }
}

/// Extract role ids from a JSON list or a serialized-list string.
pub fn roles_from_value(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => collect_roles(items),
        Value::String(s) => parse_roles(s),
        _ => Vec::new(),
    }
}

// Non-string entries are dropped; duplicates keep their first position.
fn collect_roles(items: &[Value]) -> Vec<String> {
    let mut roles: Vec<String> = Vec::new();
    for item in items {
        let Some(role) = item.as_str().map(str::trim) else {
            continue;
        };
        if !role.is_empty() && !roles.iter().any(|r| r == role) {
            roles.push(role.to_string());
        }
    }
    roles
}

/// Serde adapter for [`parse_count`].
pub fn count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(parse_count))
}

/// Serde adapter for [`parse_amount`].
pub fn amount<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(parse_amount))
}

/// Serde adapter for [`roles_from_value`].
pub fn roles<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().map(roles_from_value).unwrap_or_default())
}
