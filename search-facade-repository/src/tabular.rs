//! Delimited-file document source for bulk loads.
//!
//! The first row names the fields; every following row becomes one document
//! whose values are the row's cells as strings. Rows shorter than the header
//! get `null` for the missing columns; extra cells are ignored.

use search_facade_shared::DocumentBody;
use serde_json::Value;
use std::io::Read;

/// Read every row of a CSV source into documents.
pub fn read_documents<R: Read>(source: R) -> Result<Vec<DocumentBody>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(source);
    let headers = reader.headers()?.clone();

    let mut documents = Vec::new();
    for record in reader.records() {
        let record = record?;
        let document: DocumentBody = headers
            .iter()
            .enumerate()
            .map(|(i, field)| {
                let value = record
                    .get(i)
                    .map(|cell| Value::String(cell.to_string()))
                    .unwrap_or(Value::Null);
                (field.to_string(), value)
            })
            .collect();
        documents.push(document);
    }

    Ok(documents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rows_become_string_documents() {
        let data = "id,name,qty\n1,widget,3\n2,gadget,5\n";

        let docs = read_documents(data.as_bytes()).unwrap();

        assert_eq!(docs.len(), 2);
        assert_eq!(
            Value::Object(docs[0].clone()),
            json!({"id": "1", "name": "widget", "qty": "3"})
        );
        assert_eq!(docs[1]["name"], "gadget");
    }

    #[test]
    fn test_short_rows_get_null() {
        let data = "id,name,qty\n1,widget\n";

        let docs = read_documents(data.as_bytes()).unwrap();

        assert_eq!(docs[0]["qty"], Value::Null);
    }

    #[test]
    fn test_quoted_cells() {
        let data = "id,note\n1,\"hello, world\"\n";

        let docs = read_documents(data.as_bytes()).unwrap();

        assert_eq!(docs[0]["note"], "hello, world");
    }

    #[test]
    fn test_header_only() {
        let docs = read_documents("id,name\n".as_bytes()).unwrap();
        assert!(docs.is_empty());
    }
}
