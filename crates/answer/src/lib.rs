//! Grounded question answering.
//!
//! Retrieves passages for a question, builds a citation-annotated context,
//! asks the LLM for an answer grounded in that context and reports the
//! sources that were used.

pub mod context;
pub mod pipeline;
pub mod session;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export commonly used types
pub use context::{build_context, citation_label, source_titles};
pub use pipeline::{compose_answer, AnswerPipeline, ANSWER_TEMPERATURE};
pub use session::{QuestionSession, SubmitOutcome};
pub use types::{AnswerOutcome, RagAnswer};
