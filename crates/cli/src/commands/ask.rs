//! Ask command handler.
//!
//! One-shot question: search, answer, print, exit.

use crate::commands::chat::PROGRESS_MESSAGE;
use crate::render::render_outcome;
use clap::Args;
use docqa_answer::{AnswerPipeline, QuestionSession, SubmitOutcome};
use docqa_core::{config::AppConfig, AppError, AppResult};
use std::path::PathBuf;

/// Ask a single question
#[derive(Args, Debug)]
pub struct AskCommand {
    /// The question to ask (words are joined with spaces)
    pub question: Vec<String>,

    /// Read the question from a file
    #[arg(short, long, conflicts_with = "question")]
    pub file: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl AskCommand {
    /// Execute the ask command.
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing ask command");
        tracing::debug!("Ask command options: {:?}", self);

        let mut session = QuestionSession::new();
        session.set_question(self.get_question()?);

        if session.is_blank() {
            tracing::info!("Empty question, nothing to ask");
            return Ok(());
        }

        let pipeline = AnswerPipeline::from_config(config)?;

        if !self.json {
            eprintln!("{}", PROGRESS_MESSAGE);
        }

        let outcome = session.submit(&pipeline).await;

        if self.json {
            self.print_json(&outcome, pipeline.model())?;
        } else if !matches!(outcome, SubmitOutcome::Failed(_)) {
            render_outcome(
                &mut std::io::stdout().lock(),
                &outcome,
                &config.no_results_message,
            )?;
        }

        match outcome {
            SubmitOutcome::Failed(e) => Err(e),
            _ => Ok(()),
        }
    }

    /// Structured output for scripts.
    fn print_json(&self, outcome: &SubmitOutcome, model: &str) -> AppResult<()> {
        let output = json_output(outcome, model);
        let json = serde_json::to_string_pretty(&output)
            .map_err(|e| AppError::Serialization(e.to_string()))?;
        println!("{}", json);
        Ok(())
    }

    /// Question text from the positional words or the file.
    fn get_question(&self) -> AppResult<String> {
        match self.file {
            Some(ref path) => std::fs::read_to_string(path).map_err(|e| {
                AppError::Config(format!("Failed to read question file {:?}: {}", path, e))
            }),
            None => Ok(self.question.join(" ")),
        }
    }
}

fn json_output(outcome: &SubmitOutcome, model: &str) -> serde_json::Value {
    match outcome {
        SubmitOutcome::Answered(answer) => serde_json::json!({
            "status": "answered",
            "answer": answer.answer,
            "sources": answer.sources,
            "model": answer.model,
        }),
        SubmitOutcome::NoResults => serde_json::json!({
            "status": "no_results",
            "answer": null,
            "sources": [],
            "model": model,
        }),
        SubmitOutcome::Skipped => serde_json::json!({
            "status": "skipped",
            "answer": null,
            "sources": [],
            "model": model,
        }),
        SubmitOutcome::Failed(e) => serde_json::json!({
            "status": "error",
            "error": e.to_string(),
            "model": model,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docqa_answer::RagAnswer;

    fn command(words: &[&str]) -> AskCommand {
        AskCommand {
            question: words.iter().map(|w| w.to_string()).collect(),
            file: None,
            json: false,
        }
    }

    #[test]
    fn test_question_words_are_joined() {
        let cmd = command(&["what", "is", "the", "late", "policy?"]);
        assert_eq!(cmd.get_question().unwrap(), "what is the late policy?");
    }

    #[test]
    fn test_missing_question_file() {
        let cmd = AskCommand {
            question: Vec::new(),
            file: Some(PathBuf::from("/definitely/not/here.txt")),
            json: false,
        };
        assert!(matches!(cmd.get_question(), Err(AppError::Config(_))));
    }

    #[tokio::test]
    async fn test_blank_question_needs_no_config() {
        // Default config cannot reach any service; a blank question must not try.
        let cmd = command(&["   "]);
        assert!(cmd.execute(&AppConfig::default()).await.is_ok());
    }

    #[test]
    fn test_json_output_answered() {
        let outcome = SubmitOutcome::Answered(RagAnswer {
            answer: "Yes.".to_string(),
            sources: vec!["Policy".to_string()],
            model: "served".to_string(),
            passages: 1,
        });
        assert_eq!(
            json_output(&outcome, "configured"),
            serde_json::json!({
                "status": "answered",
                "answer": "Yes.",
                "sources": ["Policy"],
                "model": "served"
            })
        );
    }

    #[test]
    fn test_json_output_failure() {
        let outcome = SubmitOutcome::Failed(AppError::Search("403 Forbidden".to_string()));
        assert_eq!(
            json_output(&outcome, "configured"),
            serde_json::json!({
                "status": "error",
                "error": "Search error: 403 Forbidden",
                "model": "configured"
            })
        );
    }

    #[tokio::test]
    async fn test_json_failure_still_returns_error() {
        // The index is unreachable, so the search fails after validation.
        let config = AppConfig {
            host: Some("http://127.0.0.1:9".to_string()),
            token: Some("dapi".to_string()),
            search_endpoint: Some("docs-endpoint".to_string()),
            search_index: Some("main.docs.index".to_string()),
            workspace: std::env::temp_dir(),
            ..AppConfig::default()
        };
        let cmd = AskCommand {
            question: vec!["grading?".to_string()],
            file: None,
            json: true,
        };
        assert!(matches!(cmd.execute(&config).await, Err(AppError::Search(_))));
    }

    #[test]
    fn test_json_output_no_results() {
        let value = json_output(&SubmitOutcome::NoResults, "configured");
        assert_eq!(value["status"], "no_results");
        assert_eq!(value["model"], "configured");
        assert!(value["answer"].is_null());
    }
}
