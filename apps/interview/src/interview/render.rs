//! Markdown rendering for streamed records and JSON export for finished runs.

use std::path::Path;

use crate::errors::AppError;
use crate::interview::driver::{GenerationReport, QuestionRecord};

pub fn render_title(job_title: &str) -> String {
    format!("# Mock Interview: {job_title}\n\n_Generated interview questions and answers_\n")
}

/// Renders one record. The answer block only appears when an answer exists.
pub fn render_record(position: usize, record: &QuestionRecord) -> String {
    let mut out = format!(
        "### Question #{position}\n\n**Type: {}**\n\n",
        record.question_type
    );

    match (&record.question, &record.question_error) {
        (Some(question), _) => out.push_str(question),
        (None, Some(reason)) => out.push_str(&format!("_Question unavailable: {reason}_")),
        (None, None) => out.push_str("_Question unavailable_"),
    }
    out.push_str("\n\n");

    match (&record.answer, &record.answer_error) {
        (Some(answer), _) => {
            out.push_str("<details>\n<summary>Answer (Spoiler)</summary>\n\n");
            out.push_str(answer);
            out.push_str("\n\n</details>\n\n");
        }
        (None, Some(reason)) => out.push_str(&format!("_Answer unavailable: {reason}_\n\n")),
        (None, None) => {}
    }

    out.push_str("---\n");
    out
}

/// Writes the report as pretty-printed JSON, replacing any existing file.
pub fn write_json_report(path: &Path, report: &GenerationReport) -> Result<(), AppError> {
    let json = serde_json::to_string_pretty(report)?;
    std::fs::write(path, json)?;
    Ok(())
}
