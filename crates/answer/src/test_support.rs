//! In-memory search and LLM doubles that count calls.

use docqa_core::{AppError, AppResult};
use docqa_llm::{LlmClient, LlmRequest, LlmResponse, LlmUsage};
use docqa_prompt::{loader::builtin_prompt, ANSWER_PROMPT_ID};
use docqa_search::{SearchRequest, VectorSearchClient};
use std::sync::{Arc, Mutex};

use crate::pipeline::AnswerPipeline;

/// Search backend returning a canned response.
pub struct StubSearch {
    response: Result<serde_json::Value, String>,
    pub requests: Mutex<Vec<SearchRequest>>,
}

impl StubSearch {
    pub fn returning(response: serde_json::Value) -> Self {
        Self {
            response: Ok(response),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            response: Err(message.to_string()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait::async_trait]
impl VectorSearchClient for StubSearch {
    fn backend_name(&self) -> &str {
        "stub"
    }

    async fn similarity_search(&self, request: &SearchRequest) -> AppResult<serde_json::Value> {
        self.requests.lock().unwrap().push(request.clone());
        match &self.response {
            Ok(value) => Ok(value.clone()),
            Err(message) => Err(AppError::Search(message.clone())),
        }
    }
}

/// LLM returning a fixed answer and recording requests.
pub struct StubLlm {
    answer: Option<String>,
    pub requests: Mutex<Vec<LlmRequest>>,
}

impl StubLlm {
    pub fn answering(answer: &str) -> Self {
        Self {
            answer: Some(answer.to_string()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            answer: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait::async_trait]
impl LlmClient for StubLlm {
    fn provider_name(&self) -> &str {
        "stub"
    }

    async fn complete(&self, request: &LlmRequest) -> AppResult<LlmResponse> {
        self.requests.lock().unwrap().push(request.clone());
        match &self.answer {
            Some(answer) => Ok(LlmResponse {
                content: answer.clone(),
                model: request.model.clone(),
                usage: LlmUsage::new(100, 20),
            }),
            None => Err(AppError::Llm("503 Service Unavailable".to_string())),
        }
    }
}

/// Tabular search response with the two course rows.
pub fn course_response() -> serde_json::Value {
    serde_json::json!({
        "manifest": {
            "columns": [
                {"name": "title"},
                {"name": "url_or_path"},
                {"name": "chunk_text"},
                {"name": "section"},
                {"name": "page"},
                {"name": "doc_id"},
                {"name": "score"}
            ]
        },
        "result": {
            "row_count": 2,
            "data_array": [
                ["Syllabus", "syllabus.pdf", "Grading is 40% exams", "Grading", 3, "d1", 0.92],
                ["Policy", "ai_policy.pdf", "No unauthorized AI use", null, null, "d2", 0.81]
            ]
        }
    })
}

/// Pipeline wired to the given doubles with the built-in prompt.
pub fn pipeline(search: Arc<StubSearch>, llm: Arc<StubLlm>) -> AnswerPipeline {
    let prompt = builtin_prompt(ANSWER_PROMPT_ID).expect("built-in prompt");
    AnswerPipeline::new(search, llm, "test-model", prompt)
}
