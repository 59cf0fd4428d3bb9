//! Prompt loader for YAML prompt definitions.

use crate::types::PromptDefinition;
use docqa_core::{AppError, AppResult};
use std::path::Path;

/// Identifier of the grounded answering prompt.
pub const ANSWER_PROMPT_ID: &str = "answer.grounded";

const ANSWER_TEMPLATE: &str = "Answer using ONLY the context. Cite sources inline (Title). \
If unsure, say you don't know.\n\nQuestion: {{question}}\n\nContext:\n{{context}}";

/// Load a prompt definition by ID.
///
/// Looks for `<id>.yml` in `<workspace>/.docqa/prompts/`. When no file exists
/// the built-in definition is returned; IDs without a built-in fail.
///
/// # Example
/// ```no_run
/// use docqa_prompt::{load_prompt, ANSWER_PROMPT_ID};
/// use std::path::Path;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let prompt = load_prompt(Path::new("."), ANSWER_PROMPT_ID)?;
/// println!("Loaded prompt: {}", prompt.title);
/// # Ok(())
/// # }
/// ```
pub fn load_prompt(workspace_path: &Path, prompt_id: &str) -> AppResult<PromptDefinition> {
    let prompt_file = workspace_path
        .join(".docqa/prompts")
        .join(format!("{}.yml", prompt_id));

    if !prompt_file.exists() {
        tracing::debug!("No prompt override at {:?}", prompt_file);
        return builtin_prompt(prompt_id).ok_or_else(|| {
            AppError::Prompt(format!("Prompt file not found: {:?}", prompt_file))
        });
    }

    let contents = std::fs::read_to_string(&prompt_file).map_err(|e| {
        AppError::Prompt(format!(
            "Failed to read prompt file {:?}: {}",
            prompt_file, e
        ))
    })?;

    let definition: PromptDefinition = serde_yaml::from_str(&contents).map_err(|e| {
        AppError::Prompt(format!(
            "Failed to parse prompt YAML {:?}: {}",
            prompt_file, e
        ))
    })?;

    validate_prompt(&definition)?;

    tracing::info!("Loaded prompt: {} ({})", definition.id, definition.title);

    Ok(definition)
}

/// Built-in prompt definitions.
pub fn builtin_prompt(prompt_id: &str) -> Option<PromptDefinition> {
    match prompt_id {
        ANSWER_PROMPT_ID => Some(PromptDefinition {
            id: ANSWER_PROMPT_ID.to_string(),
            title: "Grounded answer with inline citations".to_string(),
            api_version: "1.0".to_string(),
            system: None,
            template: ANSWER_TEMPLATE.to_string(),
        }),
        _ => None,
    }
}

fn validate_prompt(definition: &PromptDefinition) -> AppResult<()> {
    if definition.id.trim().is_empty() {
        return Err(AppError::Prompt("Prompt ID cannot be empty".to_string()));
    }

    if definition.template.trim().is_empty() {
        return Err(AppError::Prompt(format!(
            "Prompt '{}' has an empty template",
            definition.id
        )));
    }

    Ok(())
}
