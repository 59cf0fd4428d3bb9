//! Interactive question state.
//!
//! The chat loop owns one [`QuestionSession`]. Submitting runs the pipeline
//! for the current question; clearing empties it.

use crate::pipeline::AnswerPipeline;
use crate::types::{AnswerOutcome, RagAnswer};
use docqa_core::AppError;

/// What happened when a question was submitted.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Blank question, nothing was sent
    Skipped,
    /// The search found no passages
    NoResults,
    /// The model answered
    Answered(RagAnswer),
    /// One of the services failed
    Failed(AppError),
}

/// Current question of an interactive session.
#[derive(Debug, Clone, Default)]
pub struct QuestionSession {
    question: String,
}

impl QuestionSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current question text.
    pub fn question(&self) -> &str {
        &self.question
    }

    /// Replace the current question.
    pub fn set_question(&mut self, question: impl Into<String>) {
        self.question = question.into();
    }

    /// Reset the question to empty.
    pub fn clear(&mut self) {
        self.question.clear();
    }

    /// Whether the current question is empty or whitespace only.
    pub fn is_blank(&self) -> bool {
        self.question.trim().is_empty()
    }

    /// Run the pipeline for the current question.
    pub async fn submit(&self, pipeline: &AnswerPipeline) -> SubmitOutcome {
        if self.is_blank() {
            tracing::debug!("Blank question, nothing to submit");
            return SubmitOutcome::Skipped;
        }

        match pipeline.answer(&self.question).await {
            Ok(AnswerOutcome::Answered(answer)) => SubmitOutcome::Answered(answer),
            Ok(AnswerOutcome::NoResults) => SubmitOutcome::NoResults,
            Err(e) => {
                tracing::error!("Question failed: {}", e);
                SubmitOutcome::Failed(e)
            }
        }
    }
}
