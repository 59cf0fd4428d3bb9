//! Chat command handler.
//!
//! Interactive loop: each line is a question, `/ask` re-submits the current
//! one, `/clear` empties it, `/quit` leaves.

use crate::render::{render_error, render_outcome};
use clap::Args;
use docqa_answer::{AnswerPipeline, QuestionSession};
use docqa_core::{config::AppConfig, AppResult};
use std::io::{BufRead, Write};

/// Status line shown while a question is being searched and answered.
pub const PROGRESS_MESSAGE: &str = "Searching and answering...";

/// Interactive question answering
#[derive(Args, Debug)]
pub struct ChatCommand {}

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ChatAction {
    Ask(String),
    Resubmit,
    Clear,
    Quit,
}

impl ChatAction {
    fn parse(line: &str) -> Self {
        match line.trim() {
            "/quit" | "/exit" => Self::Quit,
            "/clear" | "/reset" => Self::Clear,
            "/ask" => Self::Resubmit,
            _ => Self::Ask(line.trim_end_matches(['\r', '\n']).to_string()),
        }
    }
}

impl ChatCommand {
    /// Execute the chat command on stdin/stdout.
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing chat command");

        let pipeline = AnswerPipeline::from_config(config)?;

        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        run_chat(
            &pipeline,
            &config.title,
            &config.no_results_message,
            stdin.lock(),
            stdout.lock(),
        )
        .await
    }
}

/// Drive the chat loop until `/quit` or end of input.
pub async fn run_chat<R: BufRead, W: Write>(
    pipeline: &AnswerPipeline,
    title: &str,
    no_results_message: &str,
    mut input: R,
    mut out: W,
) -> AppResult<()> {
    writeln!(out, "{}", title)?;
    writeln!(
        out,
        "Type a question. /ask asks again, /clear resets, /quit exits."
    )?;

    let mut session = QuestionSession::new();

    loop {
        write!(out, "> ")?;
        out.flush()?;

        let mut buf = Vec::new();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        let line = match String::from_utf8(buf) {
            Ok(line) => line,
            Err(e) => {
                tracing::warn!("Discarding undecodable input line: {}", e);
                render_error(
                    &mut out,
                    &format!("input is not valid UTF-8 ({})", e.utf8_error()),
                )?;
                continue;
            }
        };

        match ChatAction::parse(&line) {
            ChatAction::Quit => break,
            ChatAction::Clear => {
                session.clear();
                writeln!(out, "(question cleared)")?;
                continue;
            }
            ChatAction::Resubmit => {}
            ChatAction::Ask(question) => session.set_question(question),
        }

        if !session.is_blank() {
            writeln!(out, "{}", PROGRESS_MESSAGE)?;
            out.flush()?;
        }

        let outcome = session.submit(pipeline).await;
        render_outcome(&mut out, &outcome, no_results_message)?;
    }

    tracing::debug!("Chat loop finished");
    Ok(())
}
