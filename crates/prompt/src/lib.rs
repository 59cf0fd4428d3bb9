//! Prompt system for docqa.
//!
//! This crate provides the grounding prompt used to answer questions:
//! - YAML-based prompt definitions with a built-in default
//! - Handlebars template rendering

pub mod builder;
pub mod loader;
pub mod types;

// Re-export main types
pub use builder::build_prompt;
pub use loader::{load_prompt, ANSWER_PROMPT_ID};
pub use types::{BuiltPrompt, BuiltPromptMetadata, PromptDefinition};
