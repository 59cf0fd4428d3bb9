//! Prompt builder for rendering templates.

use crate::types::{BuiltPrompt, BuiltPromptMetadata, PromptDefinition};
use docqa_core::{AppError, AppResult};
use handlebars::Handlebars;
use std::collections::HashMap;

/// Build a prompt from a definition, the raw question and the context block.
///
/// # Example
/// ```no_run
/// use docqa_prompt::{build_prompt, PromptDefinition};
///
/// # fn example(def: PromptDefinition) -> Result<(), Box<dyn std::error::Error>> {
/// let built = build_prompt(&def, "When is the final?", "[Source] Syllabus\nWeek 15")?;
/// println!("User prompt: {}", built.user);
/// # Ok(())
/// # }
/// ```
pub fn build_prompt(
    definition: &PromptDefinition,
    question: &str,
    context: &str,
) -> AppResult<BuiltPrompt> {
    tracing::debug!("Building prompt: {}", definition.id);

    let mut variables = HashMap::new();
    variables.insert("question", question);
    variables.insert("context", context);

    let user = render_template(&definition.template, &variables)?;

    Ok(BuiltPrompt {
        system: definition.system.clone(),
        user,
        metadata: BuiltPromptMetadata {
            source_prompt_id: definition.id.clone(),
            context_bytes: context.len(),
        },
    })
}

/// Render a Handlebars template with variables.
fn render_template(template: &str, variables: &HashMap<&str, &str>) -> AppResult<String> {
    let mut handlebars = Handlebars::new();

    // Questions and excerpts are plain text
    handlebars.register_escape_fn(handlebars::no_escape);

    handlebars
        .register_template_string("prompt", template)
        .map_err(|e| AppError::Prompt(format!("Failed to register template: {}", e)))?;

    handlebars
        .render("prompt", variables)
        .map_err(|e| AppError::Prompt(format!("Failed to render template: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::{builtin_prompt, ANSWER_PROMPT_ID};

    #[test]
    fn test_default_prompt_text() {
        let def = builtin_prompt(ANSWER_PROMPT_ID).unwrap();
        let built = build_prompt(
            &def,
            "How is the course graded?",
            "[Source] Syllabus — syllabus.pdf (p.3)\nGrading is 40% exams",
        )
        .unwrap();

        assert_eq!(
            built.user,
            "Answer using ONLY the context. Cite sources inline (Title). \
             If unsure, say you don't know.\n\n\
             Question: How is the course graded?\n\n\
             Context:\n[Source] Syllabus — syllabus.pdf (p.3)\nGrading is 40% exams"
        );
        assert!(built.system.is_none());
        assert_eq!(built.metadata.source_prompt_id, ANSWER_PROMPT_ID);
    }

    #[test]
    fn test_no_html_escaping() {
        let def = PromptDefinition {
            id: "t".to_string(),
            title: "t".to_string(),
            api_version: "1.0".to_string(),
            system: Some("sys".to_string()),
            template: "{{question}}|{{context}}".to_string(),
        };

        let built = build_prompt(&def, "Is <b> & \"x\" ok?", "a < b").unwrap();
        assert_eq!(built.user, "Is <b> & \"x\" ok?|a < b");
        assert_eq!(built.system.as_deref(), Some("sys"));
        assert_eq!(built.metadata.context_bytes, 5);
    }

    #[test]
    fn test_missing_variable_renders_empty() {
        let mut vars = HashMap::new();
        vars.insert("question", "q");
        let result = render_template("Q: {{question}} {{missing}}", &vars).unwrap();
        assert_eq!(result, "Q: q ");
    }

    #[test]
    fn test_malformed_template_fails() {
        let vars = HashMap::new();
        let result = render_template("{{#if}", &vars);
        assert!(matches!(result, Err(AppError::Prompt(_))));
    }
}
