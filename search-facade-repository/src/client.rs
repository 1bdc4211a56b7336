//! Document store client implementation.
//!
//! This module provides the facade application code uses to manage indices,
//! write documents and search them. Every operation validates and normalizes
//! the index name, checks its precondition, makes one delegated engine call
//! and returns a typed outcome.

use serde_json::Value;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

use crate::config::StoreConfig;
use crate::errors::{OperationError, SearchError};
use crate::interfaces::SearchEngineClient;
use crate::naming::{normalize, resolve_index_name};
use crate::opensearch::queries;
use crate::tabular;
use crate::types::{Operation, WriteOutcome};
use search_facade_shared::{field_or_null, DocumentBody, SearchHit, SearchRequest};

/// The main client for the document store.
///
/// Stateless apart from its configuration; the engine connection is injected
/// and shared.
pub struct DocumentStoreClient {
    engine: Arc<dyn SearchEngineClient>,
    config: StoreConfig,
}

impl DocumentStoreClient {
    /// Create a new DocumentStoreClient with default configuration.
    pub fn new(engine: Arc<dyn SearchEngineClient>) -> Self {
        Self {
            engine,
            config: StoreConfig::default(),
        }
    }

    /// Create a new DocumentStoreClient with custom configuration.
    pub fn with_config(engine: Arc<dyn SearchEngineClient>, config: StoreConfig) -> Self {
        Self { engine, config }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Validate `name` and return it with the configured prefix.
    fn resolve(&self, name: &str, operation: Operation) -> Result<String, OperationError> {
        resolve_index_name(name, &self.config.index_prefix, operation).inspect_err(|_| {
            warn!(index = %name, operation = %operation, "Rejected index name");
        })
    }

    /// Classify an engine error. Only searches report timeouts distinctly.
    fn engine_failure(operation: Operation, index: &str, source: SearchError) -> OperationError {
        if operation == Operation::Search && source.is_timeout() {
            warn!(index = %index, error = %source, "Search timed out");
            return OperationError::Timeout {
                index: index.to_string(),
            };
        }

        error!(
            index = %index,
            operation = %operation,
            error = %source,
            "Search engine request failed"
        );
        OperationError::Upstream {
            index: index.to_string(),
            operation,
            source,
        }
    }

    async fn index_exists(
        &self,
        index: &str,
        operation: Operation,
    ) -> Result<bool, OperationError> {
        self.engine
            .index_exists(index)
            .await
            .map_err(|e| Self::engine_failure(operation, index, e))
    }

    /// Fail with `IndexNotFound` unless `index` exists.
    async fn require_index(
        &self,
        index: &str,
        operation: Operation,
    ) -> Result<(), OperationError> {
        if self.index_exists(index, operation).await? {
            return Ok(());
        }

        warn!(index = %index, operation = %operation, "Index does not exist");
        Err(OperationError::IndexNotFound {
            index: index.to_string(),
            operation,
        })
    }

    /// Create an index with one shard and no replicas.
    ///
    /// Refused once the number of prefixed indices reaches `max_indices`.
    /// An index that already exists is reported as
    /// `WriteOutcome::IndexAlreadyExists`, not as an error.
    #[instrument(skip(self))]
    pub async fn create_index(&self, name: &str) -> Result<WriteOutcome, OperationError> {
        let count = self
            .engine
            .count_indices(&self.config.index_pattern())
            .await
            .map_err(|e| {
                let index = normalize(name, &self.config.index_prefix);
                Self::engine_failure(Operation::CreateIndex, &index, e)
            })?;
        if count >= self.config.max_indices {
            warn!(count, max = self.config.max_indices, "Index limit reached");
            return Err(OperationError::IndexLimitReached {
                max: self.config.max_indices,
            });
        }

        let index = self.resolve(name, Operation::CreateIndex)?;

        if self.index_exists(&index, Operation::CreateIndex).await? {
            info!(index = %index, "Index already exists");
            return Ok(WriteOutcome::IndexAlreadyExists { index });
        }

        self.engine
            .create_index(&index)
            .await
            .map_err(|e| Self::engine_failure(Operation::CreateIndex, &index, e))?;

        info!(index = %index, "Created index");
        Ok(WriteOutcome::IndexCreated { index })
    }

    /// Delete an existing index.
    #[instrument(skip(self))]
    pub async fn delete_index(&self, name: &str) -> Result<WriteOutcome, OperationError> {
        let index = self.resolve(name, Operation::DeleteIndex)?;
        self.require_index(&index, Operation::DeleteIndex).await?;

        self.engine
            .delete_index(&index)
            .await
            .map_err(|e| Self::engine_failure(Operation::DeleteIndex, &index, e))?;

        info!(index = %index, "Deleted index");
        Ok(WriteOutcome::IndexDeleted { index })
    }

    /// Insert one document under `id` into an existing index.
    #[instrument(skip(self, document))]
    pub async fn insert_document(
        &self,
        name: &str,
        id: &str,
        document: &DocumentBody,
    ) -> Result<WriteOutcome, OperationError> {
        let index = self.resolve(name, Operation::InsertDocument)?;
        self.require_index(&index, Operation::InsertDocument).await?;

        self.engine
            .index_document(&index, id, document, self.config.insert_timeout)
            .await
            .map_err(|e| Self::engine_failure(Operation::InsertDocument, &index, e))?;

        info!(index = %index, doc_id = %id, "Inserted document");
        Ok(WriteOutcome::DocumentInserted {
            index,
            id: id.to_string(),
        })
    }

    /// Insert many documents, creating the index first if it does not exist.
    ///
    /// Documents are sent in requests of at most `bulk_chunk_size`. The first
    /// failing request fails the whole load; requests before it stay applied.
    #[instrument(skip(self, documents), fields(count = documents.len()))]
    pub async fn bulk_insert(
        &self,
        name: &str,
        documents: &[DocumentBody],
    ) -> Result<WriteOutcome, OperationError> {
        let index = self.resolve(name, Operation::BulkInsert)?;

        if !self.index_exists(&index, Operation::BulkInsert).await? {
            self.create_index(&index).await?;
        }

        if documents.is_empty() {
            debug!(index = %index, "No documents to load");
        }

        for chunk in documents.chunks(self.config.bulk_chunk_size.max(1)) {
            self.engine
                .bulk_index(&index, chunk)
                .await
                .map_err(|e| Self::engine_failure(Operation::BulkInsert, &index, e))?;
        }

        info!(index = %index, count = documents.len(), "Loaded documents");
        Ok(WriteOutcome::DocumentsLoaded {
            index,
            count: documents.len(),
        })
    }

    /// Load every row of a CSV file (header row required) into an index.
    ///
    /// See [`bulk_insert`](Self::bulk_insert) for index creation and batch
    /// semantics.
    #[instrument(skip(self, path), fields(path = %path.display()))]
    pub async fn bulk_insert_csv(
        &self,
        name: &str,
        path: &Path,
    ) -> Result<WriteOutcome, OperationError> {
        let index = self.resolve(name, Operation::BulkInsert)?;

        let contents = tokio::fs::read(path).await.map_err(|e| {
            OperationError::invalid_input(format!("cannot read '{}': {}", path.display(), e))
        })?;
        let documents = tabular::read_documents(contents.as_slice()).map_err(|e| {
            OperationError::invalid_input(format!("cannot parse '{}': {}", path.display(), e))
        })?;

        self.bulk_insert(&index, &documents).await
    }

    /// Run one query against an existing index; an empty hit list is
    /// reported as `NoMatches` with the given criteria.
    async fn run_search(
        &self,
        name: &str,
        query: Value,
        criteria: String,
    ) -> Result<Vec<SearchHit>, OperationError> {
        let index = self.resolve(name, Operation::Search)?;
        self.require_index(&index, Operation::Search).await?;

        let request =
            SearchRequest::new(query, self.config.page_size, self.config.request_timeout);
        let hits = self
            .engine
            .search(&index, &request)
            .await
            .map_err(|e| Self::engine_failure(Operation::Search, &index, e))?;

        if hits.is_empty() {
            debug!(index = %index, criteria = %criteria, "Search returned no hits");
            return Err(OperationError::NoMatches { index, criteria });
        }

        debug!(index = %index, hits = hits.len(), "Search returned hits");
        Ok(hits)
    }

    /// Fetch the document with the given id.
    #[instrument(skip(self))]
    pub async fn search_by_id(
        &self,
        index: &str,
        id: &str,
    ) -> Result<DocumentBody, OperationError> {
        let hits = self
            .run_search(index, queries::id_query(id), format!("with id={}", id))
            .await?;

        Ok(hits.into_iter().next().map(|hit| hit.source).unwrap_or_default())
    }

    /// Documents whose `key` field matches `value`.
    #[instrument(skip(self))]
    pub async fn search_by_key_value(
        &self,
        index: &str,
        key: &str,
        value: &str,
    ) -> Result<Vec<DocumentBody>, OperationError> {
        let hits = self
            .run_search(
                index,
                queries::match_query(key, value),
                format!("with key='{}' and value='{}'", key, value),
            )
            .await?;

        Ok(sources(hits))
    }

    /// The `field` value of every document whose `key` field matches `value`.
    ///
    /// Hits without `field` yield `null` at their position.
    #[instrument(skip(self))]
    pub async fn search_field_by_key_value(
        &self,
        index: &str,
        field: &str,
        key: &str,
        value: &str,
    ) -> Result<Vec<Value>, OperationError> {
        let hits = self
            .run_search(
                index,
                queries::match_query(key, value),
                format!("with key='{}' and value='{}'", key, value),
            )
            .await?;

        Ok(project(&hits, field))
    }

    /// Documents whose `date_field` lies within `[start, end]`.
    #[instrument(skip(self))]
    pub async fn search_by_time_range(
        &self,
        index: &str,
        date_field: &str,
        start: &str,
        end: &str,
    ) -> Result<Vec<DocumentBody>, OperationError> {
        let hits = self
            .run_search(
                index,
                queries::range_query(date_field, start, end),
                "in given time-range".to_string(),
            )
            .await?;

        Ok(sources(hits))
    }

    /// The `field` value of every document whose `date_field` lies within
    /// `[start, end]`.
    #[instrument(skip(self))]
    pub async fn search_field_by_time_range(
        &self,
        index: &str,
        date_field: &str,
        field: &str,
        start: &str,
        end: &str,
    ) -> Result<Vec<Value>, OperationError> {
        let hits = self
            .run_search(
                index,
                queries::range_query(date_field, start, end),
                "in given time-range".to_string(),
            )
            .await?;

        Ok(project(&hits, field))
    }

    /// Documents matching `keyword` in the engine's query-string syntax.
    #[instrument(skip(self))]
    pub async fn search_by_keyword(
        &self,
        index: &str,
        keyword: &str,
    ) -> Result<Vec<DocumentBody>, OperationError> {
        let hits = self
            .run_search(
                index,
                queries::query_string_query(keyword),
                format!("matching '{}'", keyword),
            )
            .await?;

        Ok(sources(hits))
    }

    /// Documents containing `text` as a substring of any term.
    #[instrument(skip(self))]
    pub async fn search_by_text(
        &self,
        index: &str,
        text: &str,
    ) -> Result<Vec<DocumentBody>, OperationError> {
        let hits = self
            .run_search(
                index,
                queries::substring_query(text),
                format!("containing '{}'", text),
            )
            .await?;

        Ok(sources(hits))
    }
}

fn sources(hits: Vec<SearchHit>) -> Vec<DocumentBody> {
    hits.into_iter().map(|hit| hit.source).collect()
}

fn project(hits: &[SearchHit], field: &str) -> Vec<Value> {
    hits.iter().map(|hit| field_or_null(&hit.source, field)).collect()
}
