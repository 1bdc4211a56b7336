//! Dependency initialization and wiring for the search facade.

use std::sync::Arc;
use tracing::info;

use crate::config::Settings;
use crate::AppError;
use search_facade_repository::{DocumentStoreClient, OpenSearchClient, SearchEngineClient};

/// Container for all initialized dependencies.
pub struct Dependencies {
    /// The facade client, ready to serve operations.
    pub client: DocumentStoreClient,
}

impl Dependencies {
    /// Connect to the engine described by `settings` and build the client.
    ///
    /// # Returns
    ///
    /// * `Ok(Dependencies)` - Initialized dependencies
    /// * `Err(AppError)` - If the engine is unreachable or unhealthy. Every
    ///   request is bounded by `settings.store.request_timeout`.
    pub async fn new(settings: Settings) -> Result<Self, AppError> {
        info!(
            opensearch_url = %settings.opensearch_url,
            index_prefix = %settings.store.index_prefix,
            max_indices = settings.store.max_indices,
            "Initializing dependencies"
        );

        let search_client = OpenSearchClient::new(
            &settings.opensearch_url,
            settings.auth,
            settings.store.request_timeout,
        )
        .await?;

        // Verify OpenSearch is reachable
        let healthy = search_client.health_check().await?;

        if !healthy {
            return Err(AppError::config("OpenSearch cluster is unhealthy"));
        }

        info!("OpenSearch connection verified");

        let client = DocumentStoreClient::with_config(Arc::new(search_client), settings.store);

        Ok(Self { client })
    }
}
