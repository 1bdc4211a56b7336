//! Document bodies.

use serde_json::{Map, Value};

/// A document as stored in the engine: field name to JSON value.
pub type DocumentBody = Map<String, Value>;

/// Value of `field` in `document`, or `Value::Null` when the field is absent.
pub fn field_or_null(document: &DocumentBody, field: &str) -> Value {
    document.get(field).cloned().unwrap_or(Value::Null)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_or_null() {
        let doc = json!({"name": "widget", "qty": 3});
        let doc = doc.as_object().unwrap();

        assert_eq!(field_or_null(doc, "qty"), json!(3));
        assert_eq!(field_or_null(doc, "price"), Value::Null);
    }
}
