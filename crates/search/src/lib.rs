//! Vector search integration for docqa.
//!
//! Sends questions to a hosted similarity-search index and turns whatever
//! shape the service answers with into an ordered list of [`SearchRow`]s.

pub mod client;
pub mod databricks;
pub mod dispatch;
pub mod normalize;
pub mod types;

// Re-export commonly used types
pub use client::{SearchRequest, VectorSearchClient};
pub use databricks::DatabricksVectorSearch;
pub use dispatch::{dispatch_query, NUM_RESULTS, SEARCH_COLUMNS};
pub use normalize::{normalize, SearchResponseShape};
pub use types::SearchRow;
