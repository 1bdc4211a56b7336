//! Command-line surface: one subcommand per facade operation.

use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::Value;
use std::path::PathBuf;

use search_facade_repository::{DocumentStoreClient, OperationError};
use search_facade_shared::{DocumentBody, Envelope};

#[derive(Parser, Debug)]
#[command(name = "search-facade")]
#[command(about = "Index management and search against an OpenSearch cluster", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// OpenSearch URL (overrides OPENSEARCH_URL)
    #[arg(long, global = true)]
    pub opensearch_url: Option<String>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Create an index
    CreateIndex { index: String },
    /// Delete an index
    DeleteIndex { index: String },
    /// Insert one JSON document under an id
    Insert {
        index: String,
        id: String,
        /// Document body as a JSON object
        document: String,
    },
    /// Load every row of a CSV file, creating the index if needed
    BulkInsert { index: String, path: PathBuf },
    /// Fetch a document by id
    Get { index: String, id: String },
    /// Documents whose field matches a value
    Find {
        index: String,
        key: String,
        value: String,
    },
    /// One field of every document whose field matches a value
    FindField {
        index: String,
        field: String,
        key: String,
        value: String,
    },
    /// Documents whose date field lies within [start, end]
    Range {
        index: String,
        date_field: String,
        start: String,
        end: String,
    },
    /// One field of every document whose date field lies within [start, end]
    RangeField {
        index: String,
        date_field: String,
        field: String,
        start: String,
        end: String,
    },
    /// Documents matching a query-string keyword
    Keyword { index: String, keyword: String },
    /// Documents containing a substring
    Text { index: String, text: String },
    /// Check that the cluster is reachable and healthy
    Health,
}

/// Successful command output.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Reply {
    Envelope(Envelope),
    Document(DocumentBody),
    Documents(Vec<DocumentBody>),
    Values(Vec<Value>),
}

/// Run `command` against `client`.
pub async fn execute(
    client: &DocumentStoreClient,
    command: Command,
) -> Result<Reply, OperationError> {
    let reply = match command {
        Command::CreateIndex { index } => {
            Reply::Envelope(client.create_index(&index).await?.envelope())
        }
        Command::DeleteIndex { index } => {
            Reply::Envelope(client.delete_index(&index).await?.envelope())
        }
        Command::Insert {
            index,
            id,
            document,
        } => {
            let document: DocumentBody = serde_json::from_str(&document).map_err(|e| {
                OperationError::invalid_input(format!("document must be a JSON object: {}", e))
            })?;
            Reply::Envelope(client.insert_document(&index, &id, &document).await?.envelope())
        }
        Command::BulkInsert { index, path } => {
            Reply::Envelope(client.bulk_insert_csv(&index, &path).await?.envelope())
        }
        Command::Get { index, id } => Reply::Document(client.search_by_id(&index, &id).await?),
        Command::Find { index, key, value } => {
            Reply::Documents(client.search_by_key_value(&index, &key, &value).await?)
        }
        Command::FindField {
            index,
            field,
            key,
            value,
        } => Reply::Values(
            client
                .search_field_by_key_value(&index, &field, &key, &value)
                .await?,
        ),
        Command::Range {
            index,
            date_field,
            start,
            end,
        } => Reply::Documents(
            client
                .search_by_time_range(&index, &date_field, &start, &end)
                .await?,
        ),
        Command::RangeField {
            index,
            date_field,
            field,
            start,
            end,
        } => Reply::Values(
            client
                .search_field_by_time_range(&index, &date_field, &field, &start, &end)
                .await?,
        ),
        Command::Keyword { index, keyword } => {
            Reply::Documents(client.search_by_keyword(&index, &keyword).await?)
        }
        Command::Text { index, text } => {
            Reply::Documents(client.search_by_text(&index, &text).await?)
        }
        // Reaching this point means start-up already verified cluster health.
        Command::Health => Reply::Envelope(Envelope::ok("OpenSearch cluster is healthy")),
    };

    Ok(reply)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use search_facade_repository::{SearchEngineClient, SearchError};
    use search_facade_shared::{SearchHit, SearchRequest, Status};
    use serde_json::json;
    use std::sync::Arc;
    use std::time::Duration;

    /// Engine where `tdp_orders` exists and every search returns one hit.
    struct StubEngine;

    #[async_trait]
    impl SearchEngineClient for StubEngine {
        async fn count_indices(&self, _pattern: &str) -> Result<usize, SearchError> {
            Ok(1)
        }

        async fn index_exists(&self, index: &str) -> Result<bool, SearchError> {
            Ok(index == "tdp_orders")
        }

        async fn create_index(&self, _index: &str) -> Result<(), SearchError> {
            Ok(())
        }

        async fn delete_index(&self, _index: &str) -> Result<(), SearchError> {
            Ok(())
        }

        async fn index_document(
            &self,
            _index: &str,
            _id: &str,
            _document: &DocumentBody,
            _timeout: Duration,
        ) -> Result<(), SearchError> {
            Ok(())
        }

        async fn bulk_index(
            &self,
            _index: &str,
            _documents: &[DocumentBody],
        ) -> Result<(), SearchError> {
            Ok(())
        }

        async fn search(
            &self,
            _index: &str,
            _request: &SearchRequest,
        ) -> Result<Vec<SearchHit>, SearchError> {
            Ok(vec![SearchHit {
                id: "1".to_string(),
                source: json!({"name": "widget"}).as_object().cloned().unwrap(),
            }])
        }

        async fn health_check(&self) -> Result<bool, SearchError> {
            Ok(true)
        }
    }

    fn client() -> DocumentStoreClient {
        DocumentStoreClient::new(Arc::new(StubEngine))
    }

    #[test]
    fn test_parse_subcommands() {
        let cli = Cli::try_parse_from(["search-facade", "create-index", "orders"]).unwrap();
        assert_eq!(
            cli.command,
            Command::CreateIndex {
                index: "orders".to_string()
            }
        );
        assert!(cli.opensearch_url.is_none());

        let cli = Cli::try_parse_from([
            "search-facade",
            "range-field",
            "orders",
            "created_at",
            "qty",
            "2024-01-01",
            "2024-12-31",
            "--opensearch-url",
            "http://other:9200",
        ])
        .unwrap();
        assert_eq!(
            cli.command,
            Command::RangeField {
                index: "orders".to_string(),
                date_field: "created_at".to_string(),
                field: "qty".to_string(),
                start: "2024-01-01".to_string(),
                end: "2024-12-31".to_string(),
            }
        );
        assert_eq!(cli.opensearch_url.as_deref(), Some("http://other:9200"));
    }

    #[test]
    fn test_parse_rejects_missing_arguments() {
        assert!(Cli::try_parse_from(["search-facade", "find", "orders", "city"]).is_err());
    }

    #[tokio::test]
    async fn test_write_command_replies_with_envelope() {
        let reply = execute(
            &client(),
            Command::DeleteIndex {
                index: "orders".to_string(),
            },
        )
        .await
        .unwrap();

        assert_eq!(
            serde_json::to_value(&reply).unwrap(),
            json!({"message": "Successfully deleted index: tdp_orders", "status": 200})
        );
    }

    #[tokio::test]
    async fn test_search_command_replies_with_data() {
        let reply = execute(
            &client(),
            Command::FindField {
                index: "orders".to_string(),
                field: "qty".to_string(),
                key: "name".to_string(),
                value: "widget".to_string(),
            },
        )
        .await
        .unwrap();

        assert_eq!(serde_json::to_value(&reply).unwrap(), json!([null]));

        let reply = execute(
            &client(),
            Command::Get {
                index: "orders".to_string(),
                id: "1".to_string(),
            },
        )
        .await
        .unwrap();

        assert_eq!(serde_json::to_value(&reply).unwrap(), json!({"name": "widget"}));
    }

    #[tokio::test]
    async fn test_insert_rejects_non_object_document() {
        let err = execute(
            &client(),
            Command::Insert {
                index: "orders".to_string(),
                id: "1".to_string(),
                document: "[1, 2]".to_string(),
            },
        )
        .await
        .unwrap_err();

        assert_eq!(err.status(), Status::BadRequest);
    }

    #[tokio::test]
    async fn test_failure_renders_envelope() {
        let err = execute(
            &client(),
            Command::Keyword {
                index: "missing".to_string(),
                keyword: "widget".to_string(),
            },
        )
        .await
        .unwrap_err();

        assert_eq!(
            serde_json::to_value(err.envelope()).unwrap(),
            json!({"message": "Index 'tdp_missing' doesn't exist", "status": 404})
        );
    }
}
