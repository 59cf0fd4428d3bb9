//! LLM provider factory.
//!
//! Creates chat-completion clients from the configured provider name,
//! host and access token.

use crate::client::LlmClient;
use crate::providers::OpenAiCompatibleClient;
use crate::types::ProviderType;
use std::sync::Arc;

/// Create an LLM client based on the provider name.
///
/// # Arguments
/// * `provider` - Provider identifier ("databricks", "openai")
/// * `host` - Service host; Databricks appends `/serving-endpoints`
/// * `api_key` - Access token, required by every provider
///
/// # Errors
/// Returns error if the provider is unknown or the key is missing.
pub fn create_client(
    provider: &str,
    host: &str,
    api_key: Option<&str>,
) -> Result<Arc<dyn LlmClient>, String> {
    let provider_type =
        ProviderType::parse(provider).ok_or_else(|| format!("Unknown provider: {}", provider))?;

    let api_key = api_key
        .filter(|k| !k.is_empty())
        .ok_or_else(|| format!("{} provider requires an access token", provider_type.as_str()))?;

    let client = OpenAiCompatibleClient::new(
        provider_type.as_str(),
        provider_type.base_url(host),
        api_key,
    );
    Ok(Arc::new(client))
}
