//! OpenSearch index settings.
//!
//! Every index the facade creates uses the same fixed settings and relies on
//! dynamic mappings for its fields.

use serde_json::{json, Value};

/// Primary shards per index.
pub const NUMBER_OF_SHARDS: u32 = 1;

/// Replicas per index.
pub const NUMBER_OF_REPLICAS: u32 = 0;

/// Body of the create-index request.
pub fn index_settings() -> Value {
    json!({
        "settings": {
            "index": {
                "number_of_shards": NUMBER_OF_SHARDS,
                "number_of_replicas": NUMBER_OF_REPLICAS
            }
        }
    })
}
