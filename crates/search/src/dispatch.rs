//! Query dispatch: one similarity search per question.

use crate::client::{SearchRequest, VectorSearchClient};
use docqa_core::{AppError, AppResult};

/// Columns projected from the index.
pub const SEARCH_COLUMNS: [&str; 6] = [
    "title",
    "url_or_path",
    "chunk_text",
    "section",
    "page",
    "doc_id",
];

/// Maximum number of passages requested per question.
pub const NUM_RESULTS: u32 = 5;

/// Build the search request for a question.
pub fn search_request(query: &str) -> SearchRequest {
    SearchRequest {
        query_text: query.to_string(),
        columns: SEARCH_COLUMNS.iter().map(|c| c.to_string()).collect(),
        num_results: NUM_RESULTS,
    }
}

/// Send the question to the search backend and return its raw response.
///
/// Blank queries are rejected without a call. Backend failures propagate
/// as-is.
pub async fn dispatch_query(
    client: &dyn VectorSearchClient,
    query: &str,
) -> AppResult<serde_json::Value> {
    if query.trim().is_empty() {
        return Err(AppError::Search("Query text is empty".to_string()));
    }

    tracing::debug!("Dispatching query to {}", client.backend_name());
    client.similarity_search(&search_request(query)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingClient {
        requests: Mutex<Vec<SearchRequest>>,
        fail: bool,
    }

    #[async_trait::async_trait]
    impl VectorSearchClient for RecordingClient {
        fn backend_name(&self) -> &str {
            "recording"
        }

        async fn similarity_search(
            &self,
            request: &SearchRequest,
        ) -> AppResult<serde_json::Value> {
            self.requests.lock().unwrap().push(request.clone());
            if self.fail {
                return Err(AppError::Search("401 Unauthorized".to_string()));
            }
            Ok(serde_json::json!({"data": []}))
        }
    }

    #[tokio::test]
    async fn test_dispatch_sends_fixed_projection() {
        let client = RecordingClient::default();
        let raw = dispatch_query(&client, "What is the AI policy?").await.unwrap();
        assert_eq!(raw, serde_json::json!({"data": []}));

        let requests = client.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].query_text, "What is the AI policy?");
        assert_eq!(
            requests[0].columns,
            vec!["title", "url_or_path", "chunk_text", "section", "page", "doc_id"]
        );
        assert_eq!(requests[0].num_results, 5);
    }

    #[tokio::test]
    async fn test_blank_query_makes_no_call() {
        let client = RecordingClient::default();
        let result = dispatch_query(&client, "  \n ").await;
        assert!(matches!(result, Err(AppError::Search(_))));
        assert!(client.requests.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_backend_failure_propagates() {
        let client = RecordingClient {
            fail: true,
            ..RecordingClient::default()
        };
        let err = dispatch_query(&client, "grading").await.unwrap_err();
        assert_eq!(err.to_string(), "Search error: 401 Unauthorized");
        assert_eq!(client.requests.lock().unwrap().len(), 1);
    }
}
