//! LLM integration crate for docqa.
//!
//! This crate provides a provider-agnostic abstraction for chat-completion
//! services behind the [`LlmClient`] trait.
//!
//! # Providers
//! - **Databricks**: Foundation Model APIs under `<host>/serving-endpoints`
//! - **OpenAI**: any OpenAI-compatible `/chat/completions` endpoint
//!
//! # Example
//! ```no_run
//! use docqa_llm::{LlmClient, LlmRequest, providers::OpenAiCompatibleClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = OpenAiCompatibleClient::new(
//!     "databricks",
//!     "https://adb-1.azuredatabricks.net/serving-endpoints",
//!     "dapi-token",
//! );
//! let request = LlmRequest::new("Hello, world!", "databricks-meta-llama-3-1-405b-instruct");
//! let response = client.complete(&request).await?;
//! println!("{}", response.content);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod factory;
pub mod providers;
pub mod types;

// Re-export main types
pub use client::{LlmClient, LlmRequest, LlmResponse, LlmUsage};
pub use factory::create_client;
pub use providers::OpenAiCompatibleClient;
pub use types::ProviderType;
