//! Answer pipeline: search, normalize, compose, complete.

use crate::context::{build_context, source_titles};
use crate::types::{AnswerOutcome, RagAnswer};
use docqa_core::{AppConfig, AppError, AppResult};
use docqa_llm::{create_client, LlmClient, LlmRequest};
use docqa_prompt::{build_prompt, load_prompt, PromptDefinition, ANSWER_PROMPT_ID};
use docqa_search::{
    dispatch_query, normalize, DatabricksVectorSearch, SearchRow, VectorSearchClient,
};
use std::sync::Arc;

/// Sampling temperature for grounded answers.
pub const ANSWER_TEMPERATURE: f32 = 0.2;

/// Wires a search backend and an LLM into the question-answering flow.
pub struct AnswerPipeline {
    search: Arc<dyn VectorSearchClient>,
    llm: Arc<dyn LlmClient>,
    model: String,
    prompt: PromptDefinition,
}

impl AnswerPipeline {
    /// Create a pipeline from explicit collaborators.
    pub fn new(
        search: Arc<dyn VectorSearchClient>,
        llm: Arc<dyn LlmClient>,
        model: impl Into<String>,
        prompt: PromptDefinition,
    ) -> Self {
        Self {
            search,
            llm,
            model: model.into(),
            prompt,
        }
    }

    /// Build the Databricks-backed pipeline from configuration.
    pub fn from_config(config: &AppConfig) -> AppResult<Self> {
        config.validate()?;

        let host = config.host_url()?;
        let token = config.token.clone().unwrap_or_default();

        let search = DatabricksVectorSearch::new(
            host.clone(),
            token.clone(),
            config.search_endpoint.clone().unwrap_or_default(),
            config.search_index.clone().unwrap_or_default(),
        );

        let llm = create_client(&config.provider, &host, Some(token.as_str()))
            .map_err(AppError::Config)?;

        let prompt = load_prompt(&config.workspace, ANSWER_PROMPT_ID)?;

        Ok(Self::new(Arc::new(search), llm, config.model.clone(), prompt))
    }

    /// Model identifier used for completions.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Answer one question.
    ///
    /// Errors from either service are returned untouched; an empty search
    /// result yields [`AnswerOutcome::NoResults`] without a model call.
    pub async fn answer(&self, question: &str) -> AppResult<AnswerOutcome> {
        let raw = dispatch_query(self.search.as_ref(), question).await?;
        let rows = normalize(&raw);

        tracing::info!("Retrieved {} passages", rows.len());

        compose_answer(
            self.llm.as_ref(),
            &self.model,
            &self.prompt,
            question,
            &rows,
        )
        .await
    }
}

/// Build the grounded prompt from `rows` and ask the model.
pub async fn compose_answer(
    llm: &dyn LlmClient,
    model: &str,
    prompt: &PromptDefinition,
    question: &str,
    rows: &[SearchRow],
) -> AppResult<AnswerOutcome> {
    if rows.is_empty() {
        tracing::info!("No matching passages; skipping completion");
        return Ok(AnswerOutcome::NoResults);
    }

    let context = build_context(rows);
    let built = build_prompt(prompt, question, &context)?;

    tracing::debug!(
        prompt_id = %built.metadata.source_prompt_id,
        context_bytes = built.metadata.context_bytes,
        "Built grounded prompt"
    );

    let mut request = LlmRequest::new(built.user, model)
        .with_temperature(ANSWER_TEMPERATURE)
        .with_choices(1);

    if let Some(system) = built.system {
        request = request.with_system(system);
    }

    let response = llm.complete(&request).await?;

    tracing::debug!(
        "Token usage - Prompt: {}, Completion: {}, Total: {}",
        response.usage.prompt_tokens,
        response.usage.completion_tokens,
        response.usage.total_tokens
    );

    Ok(AnswerOutcome::Answered(RagAnswer {
        answer: response.content,
        sources: source_titles(rows),
        model: response.model,
        passages: rows.len(),
    }))
}
