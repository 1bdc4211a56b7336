//! OpenSearch query builders.
//!
//! Each builder returns the value of the top-level `query` key of a search
//! body. The same DSL is understood by Elasticsearch.

use serde_json::{json, Value};

/// Exact lookup by document id.
pub fn id_query(id: &str) -> Value {
    json!({
        "ids": {
            "values": [id]
        }
    })
}

/// Full-text `match` on a single field.
pub fn match_query(key: &str, value: &str) -> Value {
    json!({
        "match": {
            key: value
        }
    })
}

/// Inclusive range on a date (or any ordered) field.
pub fn range_query(field: &str, start: &str, end: &str) -> Value {
    json!({
        "range": {
            field: {
                "gte": start,
                "lte": end
            }
        }
    })
}

/// Query-string syntax query. The text is passed through unescaped.
pub fn query_string_query(text: &str) -> Value {
    json!({
        "query_string": {
            "query": text
        }
    })
}

/// Query-string query matching `text` anywhere inside a term.
pub fn substring_query(text: &str) -> Value {
    query_string_query(&format!("*{}*", text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_query() {
        let query = id_query("42");

        let values = query["ids"]["values"].as_array().unwrap();
        assert_eq!(values.len(), 1);
        assert_eq!(values[0], "42");
    }

    #[test]
    fn test_match_query_uses_key_as_field() {
        let query = match_query("city", "Oslo");
        assert_eq!(query["match"]["city"], "Oslo");
    }

    #[test]
    fn test_range_query_is_inclusive() {
        let query = range_query("created_at", "2024-01-01", "2024-01-31");

        let bounds = &query["range"]["created_at"];
        assert_eq!(bounds["gte"], "2024-01-01");
        assert_eq!(bounds["lte"], "2024-01-31");
        assert!(bounds.get("gt").is_none());
        assert!(bounds.get("lt").is_none());
    }

    #[test]
    fn test_query_string_is_unescaped() {
        let query = query_string_query("name:(widget OR gadget)");
        assert_eq!(query["query_string"]["query"], "name:(widget OR gadget)");
    }

    #[test]
    fn test_substring_query_wraps_with_wildcards() {
        let query = substring_query("idge");
        assert_eq!(query["query_string"]["query"], "*idge*");
    }
}
