//! Terminal rendering of answers, warnings and errors.

use docqa_answer::{RagAnswer, SubmitOutcome};
use std::io::{self, Write};

/// Answer text followed by the distinct source titles.
pub fn render_answer<W: Write>(out: &mut W, answer: &RagAnswer) -> io::Result<()> {
    writeln!(out, "### Answer")?;
    writeln!(out, "{}", answer.answer)?;
    writeln!(out)?;
    writeln!(out, "### Sources")?;
    for title in &answer.sources {
        writeln!(out, "- [{}]", title)?;
    }
    Ok(())
}

/// Warning shown when no passages matched.
pub fn render_no_results<W: Write>(out: &mut W, message: &str) -> io::Result<()> {
    writeln!(out, "Warning: {}", message)
}

/// Generic error display.
pub fn render_error<W: Write>(out: &mut W, error: &dyn std::fmt::Display) -> io::Result<()> {
    writeln!(out, "Error: {}", error)
}

/// Render any submit outcome. Skipped submissions print nothing.
pub fn render_outcome<W: Write>(
    out: &mut W,
    outcome: &SubmitOutcome,
    no_results_message: &str,
) -> io::Result<()> {
    match outcome {
        SubmitOutcome::Skipped => Ok(()),
        SubmitOutcome::NoResults => render_no_results(out, no_results_message),
        SubmitOutcome::Answered(answer) => render_answer(out, answer),
        SubmitOutcome::Failed(e) => render_error(out, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docqa_core::AppError;

    fn render(outcome: &SubmitOutcome) -> String {
        let mut buf = Vec::new();
        render_outcome(&mut buf, outcome, "Nothing matched.").unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_render_answer_with_sources() {
        let outcome = SubmitOutcome::Answered(RagAnswer {
            answer: "Exams are 40% of the grade (Syllabus).".to_string(),
            sources: vec!["Syllabus".to_string(), "Policy".to_string()],
            model: "m".to_string(),
            passages: 3,
        });

        assert_eq!(
            render(&outcome),
            "### Answer\nExams are 40% of the grade (Syllabus).\n\n### Sources\n- [Syllabus]\n- [Policy]\n"
        );
    }

    #[test]
    fn test_render_no_results() {
        assert_eq!(
            render(&SubmitOutcome::NoResults),
            "Warning: Nothing matched.\n"
        );
    }

    #[test]
    fn test_render_error() {
        let outcome = SubmitOutcome::Failed(AppError::Llm("timeout".to_string()));
        assert_eq!(render(&outcome), "Error: LLM error: timeout\n");
    }

    #[test]
    fn test_skipped_renders_nothing() {
        assert_eq!(render(&SubmitOutcome::Skipped), "");
    }
}
