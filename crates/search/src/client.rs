//! Vector search client abstraction.

use docqa_core::AppResult;
use serde::{Deserialize, Serialize};

/// Similarity-search request, serialized as the query body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Raw question text
    pub query_text: String,

    /// Columns to project in the response
    pub columns: Vec<String>,

    /// Upper bound on returned rows
    pub num_results: u32,
}

/// Trait for similarity-search backends.
///
/// The response shape is owned by the service, so implementations hand back
/// the raw JSON and leave interpretation to [`crate::normalize`].
#[async_trait::async_trait]
pub trait VectorSearchClient: Send + Sync {
    /// Backend name for logs (e.g., "databricks").
    fn backend_name(&self) -> &str;

    /// Run one similarity search.
    async fn similarity_search(&self, request: &SearchRequest) -> AppResult<serde_json::Value>;
}
