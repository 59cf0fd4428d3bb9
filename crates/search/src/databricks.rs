//! Databricks Vector Search REST client.
//!
//! API: `POST /api/2.0/vector-search/indexes/{index_name}/query`

use crate::client::{SearchRequest, VectorSearchClient};
use docqa_core::{AppError, AppResult};

/// Client for a single Databricks vector search index.
pub struct DatabricksVectorSearch {
    /// Workspace URL without trailing slash
    host: String,

    /// Personal access token
    token: String,

    /// Endpoint serving the index
    endpoint: String,

    /// Fully qualified index name
    index: String,

    /// HTTP client
    client: reqwest::Client,
}

impl DatabricksVectorSearch {
    /// Create a client for `index` served by `endpoint` on `host`.
    pub fn new(
        host: impl Into<String>,
        token: impl Into<String>,
        endpoint: impl Into<String>,
        index: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into().trim_end_matches('/').to_string(),
            token: token.into(),
            endpoint: endpoint.into(),
            index: index.into(),
            client: reqwest::Client::new(),
        }
    }

    fn query_url(&self) -> String {
        format!(
            "{}/api/2.0/vector-search/indexes/{}/query",
            self.host, self.index
        )
    }
}

#[async_trait::async_trait]
impl VectorSearchClient for DatabricksVectorSearch {
    fn backend_name(&self) -> &str {
        "databricks"
    }

    async fn similarity_search(&self, request: &SearchRequest) -> AppResult<serde_json::Value> {
        tracing::info!(
            endpoint = %self.endpoint,
            index = %self.index,
            num_results = request.num_results,
            "Querying vector index"
        );

        let response = self
            .client
            .post(self.query_url())
            .bearer_auth(&self.token)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                AppError::Search(format!(
                    "Failed to query index '{}' on endpoint '{}': {}",
                    self.index, self.endpoint, e
                ))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::Search(format!(
                "Vector search API error ({}): {}",
                status, error_text
            )));
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AppError::Search(format!("Failed to parse search response: {}", e)))?;

        tracing::debug!("Search response: {}", body);
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_url() {
        let client = DatabricksVectorSearch::new(
            "https://adb-1.azuredatabricks.net/",
            "tok",
            "docs-endpoint",
            "main.course.docs_index",
        );
        assert_eq!(
            client.query_url(),
            "https://adb-1.azuredatabricks.net/api/2.0/vector-search/indexes/main.course.docs_index/query"
        );
        assert_eq!(client.backend_name(), "databricks");
    }

    #[test]
    fn test_request_body_shape() {
        let request = SearchRequest {
            query_text: "late policy".to_string(),
            columns: vec!["title".to_string(), "page".to_string()],
            num_results: 5,
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({
                "query_text": "late policy",
                "columns": ["title", "page"],
                "num_results": 5
            })
        );
    }
}
