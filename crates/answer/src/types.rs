//! Answer types.

use serde::{Deserialize, Serialize};

/// A grounded answer and the documents it drew from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RagAnswer {
    /// Model answer text
    pub answer: String,

    /// Distinct document titles, in retrieval order
    pub sources: Vec<String>,

    /// Model that produced the answer
    pub model: String,

    /// Number of passages placed in the context
    pub passages: usize,
}

/// Result of answering one question.
///
/// `NoResults` is a normal outcome: the search found nothing and the model
/// was never called.
#[derive(Debug, Clone, PartialEq)]
pub enum AnswerOutcome {
    Answered(RagAnswer),
    NoResults,
}

impl AnswerOutcome {
    /// Status label used in machine-readable output.
    pub fn status(&self) -> &'static str {
        match self {
            Self::Answered(_) => "answered",
            Self::NoResults => "no_results",
        }
    }
}
