//! Prompt Builder: turns the job details and recent history into the exact
//! text sent to the generation API.
//!
//! Every function here is pure string assembly. History truncation lives in
//! `render_history` only, so all prompt variants see the same window.

use crate::interview::category::QuestionCategory;
use crate::interview::prompts::{
    ACCURATE_ANSWER_INSTRUCTION, ALGORITHM_QUESTION_INSTRUCTIONS, ANSWER_FRAME_TEMPLATE,
    ANSWER_LANGUAGES, BEHAVIORAL_QUESTION_INSTRUCTIONS, CLASSIFY_QUESTION_INSTRUCTION,
    DEFINITIONS_INSTRUCTION, GENERAL_QUESTION_INSTRUCTIONS, HISTORY_HEADING,
    HISTORY_ITEM_PREFIX, LANGUAGE_ALLOW_LIST_INSTRUCTION, QUESTION_FRAME_TEMPLATE,
    REVIEW_BREAKDOWN_INSTRUCTION, SOLVE_PROBLEM_INSTRUCTION,
};
use crate::llm_client::prompts::fill_template;

/// Number of previous questions shown to the model.
pub const HISTORY_WINDOW: usize = 3;

/// Job details plus every question generated so far in this run.
#[derive(Debug, Clone)]
pub struct PromptContext {
    job_description: String,
    job_title: String,
    history: Vec<String>,
}

impl PromptContext {
    pub fn new(job_description: impl Into<String>, job_title: impl Into<String>) -> Self {
        Self {
            job_description: job_description.into(),
            job_title: job_title.into(),
            history: Vec::new(),
        }
    }

    pub fn add_question(&mut self, question: impl Into<String>) {
        self.history.push(question.into());
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn job_description(&self) -> &str {
        &self.job_description
    }

    pub fn job_title(&self) -> &str {
        &self.job_title
    }
}

/// Renders the last `HISTORY_WINDOW` questions under a heading, oldest first.
/// Returns an empty string when there is no history.
pub fn render_history<S: AsRef<str>>(history: &[S]) -> String {
    if history.is_empty() {
        return String::new();
    }

    let start = history.len().saturating_sub(HISTORY_WINDOW);
    let mut block = String::from(HISTORY_HEADING);
    for question in &history[start..] {
        block.push('\n');
        block.push_str(HISTORY_ITEM_PREFIX);
        block.push_str(question.as_ref());
    }
    block
}

/// Builds the prompt asking for one new question of `category`.
pub fn build_generation_prompt(context: &PromptContext, category: QuestionCategory) -> String {
    let body = match category {
        QuestionCategory::MultipleChoice | QuestionCategory::OpenEnded => {
            GENERAL_QUESTION_INSTRUCTIONS
        }
        QuestionCategory::Behavioral => BEHAVIORAL_QUESTION_INSTRUCTIONS,
        QuestionCategory::DataStructuresAndAlgorithms => ALGORITHM_QUESTION_INSTRUCTIONS,
    };
    let instructions = fill_template(body, &[("category", category.label())]);
    let history = render_history(context.history());

    fill_template(
        QUESTION_FRAME_TEMPLATE,
        &[
            ("instructions", instructions.as_str()),
            ("history", history.as_str()),
            ("job_description", context.job_description()),
            ("job_title", context.job_title()),
        ],
    )
}

/// Builds the prompt asking for an answer to `question`.
pub fn build_answer_prompt(question: &str, is_algorithm: bool) -> String {
    let languages = ANSWER_LANGUAGES.join(", ");
    let language_clause = fill_template(
        LANGUAGE_ALLOW_LIST_INSTRUCTION,
        &[("languages", languages.as_str())],
    );

    let mut lines: Vec<&str> = Vec::with_capacity(5);
    if is_algorithm {
        lines.push(SOLVE_PROBLEM_INSTRUCTION);
    } else {
        lines.push(CLASSIFY_QUESTION_INSTRUCTION);
    }
    lines.push(ACCURATE_ANSWER_INSTRUCTION);
    if is_algorithm {
        lines.push(language_clause.as_str());
    }
    lines.push(REVIEW_BREAKDOWN_INSTRUCTION);
    lines.push(DEFINITIONS_INSTRUCTION);

    let instructions = lines.join("\n");
    fill_template(
        ANSWER_FRAME_TEMPLATE,
        &[("instructions", instructions.as_str()), ("question", question)],
    )
}
