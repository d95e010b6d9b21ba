//! Lenient field decoding for spreadsheet-derived payloads.
//!
//! Rows produced from spreadsheets by the backend may carry numbers
//! (`style_no: 1001`) or `null` where a string is expected.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Render any JSON scalar as a string. `null` becomes `""`.
pub fn value_to_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match n.as_f64() {
            // 1001.0 from a float cell reads as "1001"
            Some(f) if f.fract() == 0.0 && f.abs() < 1e15 && !n.is_i64() && !n.is_u64() => {
                format!("{}", f as i64)
            }
            _ => n.to_string(),
        },
        other => other.to_string(),
    }
}

pub fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_to_string(&value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_value_to_string() {
        assert_eq!(value_to_string(&json!(null)), "");
        assert_eq!(value_to_string(&json!("6109.10")), "6109.10");
        assert_eq!(value_to_string(&json!(1001)), "1001");
        assert_eq!(value_to_string(&json!(1001.0)), "1001");
        assert_eq!(value_to_string(&json!(61.5)), "61.5");
        assert_eq!(value_to_string(&json!(true)), "true");
    }
}
