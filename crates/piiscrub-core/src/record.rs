//! Record data model: an ordered field-name → value mapping.

use serde_json::{Map, Value};

/// A single record: field name → value, in input order.
///
/// `serde_json` is built with `preserve_order`, so a record keeps its key
/// order through a parse/serialize round trip. Redaction relies on that:
/// the output record must carry the same keys in the same order as the input.
pub type Record = Map<String, Value>;

/// Canonical text form of a scalar value, used for pattern matching and
/// shape-sensitive masking. Arrays, objects and null have no text form.
pub fn text_of(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_of_scalars() {
        assert_eq!(text_of(&json!("hello")), Some("hello".to_string()));
        assert_eq!(text_of(&json!(9876543210u64)), Some("9876543210".to_string()));
        assert_eq!(text_of(&json!(true)), Some("true".to_string()));
    }

    #[test]
    fn test_text_of_non_scalars() {
        assert_eq!(text_of(&json!(null)), None);
        assert_eq!(text_of(&json!(["a"])), None);
        assert_eq!(text_of(&json!({"a": 1})), None);
    }

    #[test]
    fn test_record_preserves_key_order() {
        let record: Record = serde_json::from_str(r#"{"z": "1", "a": "2", "m": "3"}"#).unwrap();
        let keys: Vec<&String> = record.keys().collect();
        assert_eq!(keys, ["z", "a", "m"]);
    }
}
