//! Provider identification.

/// Provider type enum for matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderType {
    /// Databricks Foundation Model APIs (`<host>/serving-endpoints`)
    Databricks,
    /// Plain OpenAI-compatible endpoint (host is the API base URL)
    OpenAI,
}

impl ProviderType {
    /// Parse provider type from its canonical name.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "databricks" => Some(Self::Databricks),
            "openai" => Some(Self::OpenAI),
            _ => None,
        }
    }

    /// Get the canonical provider name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Databricks => "databricks",
            Self::OpenAI => "openai",
        }
    }

    /// Chat-completion base URL for a given host.
    pub fn base_url(&self, host: &str) -> String {
        let host = host.trim_end_matches('/');
        match self {
            Self::Databricks => format!("{}/serving-endpoints", host),
            Self::OpenAI => host.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_type_parsing() {
        assert_eq!(
            ProviderType::parse("databricks"),
            Some(ProviderType::Databricks)
        );
        assert_eq!(ProviderType::parse("openai"), Some(ProviderType::OpenAI));
        assert_eq!(ProviderType::parse("ollama"), None);
    }

    #[test]
    fn test_parse_accepts_only_canonical_names() {
        // Config validation accepts exactly these names; anything else must
        // be rejected here too.
        for name in ["Databricks", "OPENAI", "openai-compatible"] {
            assert_eq!(ProviderType::parse(name), None, "{}", name);
        }
        for provider in [ProviderType::Databricks, ProviderType::OpenAI] {
            assert_eq!(ProviderType::parse(provider.as_str()), Some(provider));
        }
    }

    #[test]
    fn test_base_url() {
        assert_eq!(
            ProviderType::Databricks.base_url("https://adb-1.net/"),
            "https://adb-1.net/serving-endpoints"
        );
        assert_eq!(
            ProviderType::OpenAI.base_url("https://api.openai.com/v1"),
            "https://api.openai.com/v1"
        );
    }
}
