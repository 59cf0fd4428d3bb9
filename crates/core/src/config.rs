//! Configuration management for the docqa CLI.
//!
//! This module handles loading and merging configuration from multiple sources:
//! - Config files (.docqa/config.yaml)
//! - Environment variables
//! - Command-line flags
//!
//! The configuration is workspace-centric: the config file and any prompt
//! overrides live under `.docqa/` in the workspace root.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

/// Default chat-completion provider.
pub const DEFAULT_PROVIDER: &str = "databricks";

/// Default foundation model served by the workspace.
pub const DEFAULT_MODEL: &str = "databricks-meta-llama-3-1-405b-instruct";

/// Default environment variable holding the access token.
pub const DEFAULT_TOKEN_ENV: &str = "DATABRICKS_TOKEN";

const DEFAULT_TITLE: &str = "Document Q&A";

const DEFAULT_NO_RESULTS_MESSAGE: &str =
    "No matching passages yet. Try rephrasing your question.";

const KNOWN_PROVIDERS: [&str; 2] = ["databricks", "openai"];

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Path to the workspace root (contains .docqa/)
    pub workspace: PathBuf,

    /// Optional config file path
    pub config_file: Option<PathBuf>,

    /// Workspace URL of the hosted services (e.g. "https://adb-123.azuredatabricks.net")
    pub host: Option<String>,

    /// Access token for both the search and the completion endpoints
    pub token: Option<String>,

    /// Environment variable the token is read from
    pub token_env: String,

    /// Chat-completion provider ("databricks" or "openai")
    pub provider: String,

    /// Model identifier sent with every completion request
    pub model: String,

    /// Vector search endpoint name
    pub search_endpoint: Option<String>,

    /// Fully qualified vector index name (catalog.schema.index)
    pub search_index: Option<String>,

    /// Title shown by the interactive chat
    pub title: String,

    /// Warning displayed when the search finds no passages
    pub no_results_message: String,

    /// Log level override
    pub log_level: Option<String>,

    /// Verbose mode (enables debug logging)
    pub verbose: bool,

    /// Disable colored output
    pub no_color: bool,
}

/// Full configuration file structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ConfigFile {
    databricks: Option<DatabricksSection>,
    search: Option<SearchSection>,
    llm: Option<LlmSection>,
    ui: Option<UiSection>,
    logging: Option<LoggingSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct DatabricksSection {
    host: Option<String>,
    #[serde(rename = "tokenEnv")]
    token_env: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct SearchSection {
    endpoint: Option<String>,
    index: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct LlmSection {
    provider: Option<String>,
    model: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct UiSection {
    title: Option<String>,
    #[serde(rename = "noResultsMessage")]
    no_results_message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct LoggingSection {
    level: Option<String>,
    color: Option<bool>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            workspace: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            config_file: None,
            host: None,
            token: None,
            token_env: DEFAULT_TOKEN_ENV.to_string(),
            provider: DEFAULT_PROVIDER.to_string(),
            model: DEFAULT_MODEL.to_string(),
            search_endpoint: None,
            search_index: None,
            title: DEFAULT_TITLE.to_string(),
            no_results_message: DEFAULT_NO_RESULTS_MESSAGE.to_string(),
            log_level: None,
            verbose: false,
            no_color: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from defaults, the YAML config file and the environment.
    ///
    /// Environment variables:
    /// - `DOCQA_WORKSPACE`: Override workspace path
    /// - `DOCQA_CONFIG`: Path to config file
    /// - `DATABRICKS_HOST`: Workspace URL
    /// - `DATABRICKS_TOKEN` (or the configured `tokenEnv`): Access token
    /// - `DOCQA_PROVIDER`: Completion provider
    /// - `DOCQA_MODEL`: Model identifier
    /// - `DOCQA_VS_ENDPOINT`: Vector search endpoint name
    /// - `DOCQA_VS_INDEX`: Vector index name
    /// - `RUST_LOG`: Log level
    /// - `NO_COLOR`: Disable colored output
    ///
    /// # Example
    /// ```no_run
    /// use docqa_core::config::AppConfig;
    ///
    /// let config = AppConfig::load_from(None, None).expect("Failed to load config");
    /// println!("Workspace: {:?}", config.workspace);
    /// ```
    ///
    /// Explicit workspace and config file paths take precedence over
    /// `DOCQA_WORKSPACE` / `DOCQA_CONFIG`.
    pub fn load_from(workspace: Option<PathBuf>, config_file: Option<PathBuf>) -> AppResult<Self> {
        let mut config = Self::default();

        if let Some(workspace) =
            workspace.or_else(|| std::env::var("DOCQA_WORKSPACE").ok().map(PathBuf::from))
        {
            config.workspace = workspace;
        }

        if let Some(config_file) =
            config_file.or_else(|| std::env::var("DOCQA_CONFIG").ok().map(PathBuf::from))
        {
            config.config_file = Some(config_file);
        }

        let mut config = config.load_file()?;

        // Environment variables override YAML config
        if let Ok(host) = std::env::var("DATABRICKS_HOST") {
            config.host = Some(host);
        }

        if let Ok(provider) = std::env::var("DOCQA_PROVIDER") {
            config.provider = provider;
        }

        if let Ok(model) = std::env::var("DOCQA_MODEL") {
            config.model = model;
        }

        if let Ok(endpoint) = std::env::var("DOCQA_VS_ENDPOINT") {
            config.search_endpoint = Some(endpoint);
        }

        if let Ok(index) = std::env::var("DOCQA_VS_INDEX") {
            config.search_index = Some(index);
        }

        config.token = std::env::var(&config.token_env).ok();

        if let Ok(level) = std::env::var("RUST_LOG") {
            config.log_level = Some(level);
        }

        if std::env::var("NO_COLOR").is_ok() {
            config.no_color = true;
        }

        Ok(config)
    }

    /// Merge the workspace config file (if any) into this config.
    ///
    /// An explicitly configured file must exist; the default
    /// `.docqa/config.yaml` is optional.
    pub fn load_file(self) -> AppResult<Self> {
        if !self.workspace.exists() {
            return Err(AppError::Config(format!(
                "Workspace directory does not exist: {:?}",
                self.workspace
            )));
        }

        match self.config_file.clone() {
            Some(path) => {
                if !path.exists() {
                    return Err(AppError::Config(format!(
                        "Config file not found: {:?}",
                        path
                    )));
                }
                self.merge_yaml(&path)
            }
            None => {
                let default_path = self.docqa_dir().join("config.yaml");
                if default_path.exists() {
                    self.merge_yaml(&default_path)
                } else {
                    tracing::debug!("No config file at {:?}, using defaults", default_path);
                    Ok(self)
                }
            }
        }
    }

    /// Merge YAML configuration file into this config.
    fn merge_yaml(mut self, path: &Path) -> AppResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("Failed to read config file {:?}: {}", path, e))
        })?;

        let file: ConfigFile = if contents.trim().is_empty() {
            ConfigFile::default()
        } else {
            serde_yaml::from_str(&contents).map_err(|e| {
                AppError::Config(format!("Failed to parse config file {:?}: {}", path, e))
            })?
        };

        if let Some(databricks) = file.databricks {
            if let Some(host) = databricks.host {
                self.host = Some(host);
            }
            if let Some(token_env) = databricks.token_env {
                self.token_env = token_env;
            }
        }

        if let Some(search) = file.search {
            if let Some(endpoint) = search.endpoint {
                self.search_endpoint = Some(endpoint);
            }
            if let Some(index) = search.index {
                self.search_index = Some(index);
            }
        }

        if let Some(llm) = file.llm {
            if let Some(provider) = llm.provider {
                self.provider = provider;
            }
            if let Some(model) = llm.model {
                self.model = model;
            }
        }

        if let Some(ui) = file.ui {
            if let Some(title) = ui.title {
                self.title = title;
            }
            if let Some(message) = ui.no_results_message {
                self.no_results_message = message;
            }
        }

        if let Some(logging) = file.logging {
            if let Some(level) = logging.level {
                self.log_level = Some(level);
            }
            if let Some(color) = logging.color {
                self.no_color = !color;
            }
        }

        tracing::debug!("Merged config file {:?}", path);
        Ok(self)
    }

    /// Apply CLI overrides to the configuration.
    ///
    /// CLI flags take precedence over the config file and environment.
    /// Workspace and config file paths are applied earlier, in
    /// [`AppConfig::load_from`].
    pub fn with_overrides(
        mut self,
        host: Option<String>,
        model: Option<String>,
        log_level: Option<String>,
        verbose: bool,
        no_color: bool,
    ) -> Self {
        if let Some(host) = host {
            self.host = Some(host);
        }

        if let Some(model) = model {
            self.model = model;
        }

        if let Some(log_level) = log_level {
            self.log_level = Some(log_level);
        }

        if verbose {
            self.verbose = true;
            // Verbose mode implies debug logging
            if self.log_level.is_none() {
                self.log_level = Some("debug".to_string());
            }
        }

        if no_color {
            self.no_color = true;
        }

        self
    }

    /// Get the path to the .docqa directory.
    pub fn docqa_dir(&self) -> PathBuf {
        self.workspace.join(".docqa")
    }

    /// Workspace host with any trailing slash removed.
    pub fn host_url(&self) -> AppResult<String> {
        self.host
            .as_deref()
            .map(|h| h.trim().trim_end_matches('/').to_string())
            .filter(|h| !h.is_empty())
            .ok_or_else(|| {
                AppError::Config("Service host not set (DATABRICKS_HOST or databricks.host)".into())
            })
    }

    /// Validate that everything needed to reach both services is present.
    pub fn validate(&self) -> AppResult<()> {
        if !KNOWN_PROVIDERS.contains(&self.provider.as_str()) {
            return Err(AppError::Config(format!(
                "Unknown provider: {}. Supported: {}",
                self.provider,
                KNOWN_PROVIDERS.join(", ")
            )));
        }

        self.host_url()?;

        if self.token.as_deref().map_or(true, str::is_empty) {
            return Err(AppError::Config(format!(
                "Access token not found in environment variable: {}",
                self.token_env
            )));
        }

        if self.search_endpoint.as_deref().map_or(true, str::is_empty) {
            return Err(AppError::Config(
                "Vector search endpoint not set (DOCQA_VS_ENDPOINT or search.endpoint)".into(),
            ));
        }

        if self.search_index.as_deref().map_or(true, str::is_empty) {
            return Err(AppError::Config(
                "Vector index not set (DOCQA_VS_INDEX or search.index)".into(),
            ));
        }

        if self.model.trim().is_empty() {
            return Err(AppError::Config("Model identifier is empty".into()));
        }

        Ok(())
    }

    /// Copy of this config that is safe to print.
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();
        if copy.token.is_some() {
            copy.token = Some("********".to_string());
        }
        copy
    }
}
