//! Generation Driver: runs N sequential rounds of question + answer generation.
//!
//! Flow per round: pick category → question prompt → LLM → answer prompt → LLM → emit record.
//!
//! A failed call never aborts the run. The affected field is left absent and the
//! failure reason is kept on the record so the caller can flag it.

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::interview::category::QuestionCategory;
use crate::interview::prompt_builder::{
    build_answer_prompt, build_generation_prompt, PromptContext,
};
use crate::llm_client::{LlmError, TextGenerator};

/// Upper bound on questions per run.
pub const MAX_QUESTIONS: u8 = 20;

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// Everything the caller supplies for one run. Immutable once built.
#[derive(Debug, Clone)]
pub struct SessionParams {
    pub job_description: String,
    pub job_title: String,
    pub question_count: u8,
    /// Empty means "use the default category for every question".
    pub categories: Vec<QuestionCategory>,
}

impl SessionParams {
    /// Validates the inputs. Duplicate categories are collapsed so each selected
    /// category keeps an equal chance of being drawn.
    pub fn new(
        job_description: impl Into<String>,
        job_title: impl Into<String>,
        question_count: u8,
        categories: impl IntoIterator<Item = QuestionCategory>,
    ) -> Result<Self, AppError> {
        let job_description = job_description.into();
        let job_title = job_title.into();

        if job_description.trim().is_empty() {
            return Err(AppError::Validation(
                "job description cannot be empty".to_string(),
            ));
        }
        if job_title.trim().is_empty() {
            return Err(AppError::Validation("job title cannot be empty".to_string()));
        }
        if !(1..=MAX_QUESTIONS).contains(&question_count) {
            return Err(AppError::Validation(format!(
                "question count must be between 1 and {MAX_QUESTIONS}, got {question_count}"
            )));
        }

        let mut selected: Vec<QuestionCategory> = Vec::new();
        for category in categories {
            if !selected.contains(&category) {
                selected.push(category);
            }
        }

        Ok(Self {
            job_description,
            job_title,
            question_count,
            categories: selected,
        })
    }
}

/// One generated question and, when available, its answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
    pub question_type: QuestionCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    /// Why the question is missing, when it is.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question_error: Option<String>,
    /// Why the answer is missing, when it is.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer_error: Option<String>,
}

/// Output of a whole run.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    pub run_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub job_title: String,
    pub requested_count: u8,
    pub records: Vec<QuestionRecord>,
}

// ────────────────────────────────────────────────────────────────────────────
// Category selection
// ────────────────────────────────────────────────────────────────────────────

/// Source of per-round category choices. Injected so tests can script the sequence.
pub trait CategoryPicker {
    /// Picks one entry of `selected`, which is never empty.
    fn pick(&mut self, selected: &[QuestionCategory]) -> QuestionCategory;
}

/// Uniform draw with replacement, backed by any `rand` RNG.
pub struct RandomPicker<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomPicker<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomPicker<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> CategoryPicker for RandomPicker<R> {
    fn pick(&mut self, selected: &[QuestionCategory]) -> QuestionCategory {
        selected.choose(&mut self.rng).copied().unwrap_or_default()
    }
}

fn select_category(picker: &mut dyn CategoryPicker, selected: &[QuestionCategory]) -> QuestionCategory {
    if selected.is_empty() {
        QuestionCategory::default()
    } else {
        picker.pick(selected)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Generation loop
// ────────────────────────────────────────────────────────────────────────────

/// Runs `params.question_count` rounds strictly in sequence.
///
/// `on_record` receives each record (with its 1-based position) as soon as the
/// round finishes, before the next round starts. The run itself cannot fail.
pub async fn generate_questions<F>(
    generator: &dyn TextGenerator,
    picker: &mut dyn CategoryPicker,
    params: &SessionParams,
    mut on_record: F,
) -> GenerationReport
where
    F: FnMut(usize, &QuestionRecord),
{
    let run_id = Uuid::new_v4();
    let started_at = Utc::now();
    let mut context = PromptContext::new(params.job_description.as_str(), params.job_title.as_str());
    let mut records = Vec::with_capacity(params.question_count as usize);

    info!(
        "Run {} started: {} question(s) for '{}'",
        run_id, params.question_count, params.job_title
    );

    for position in 1..=params.question_count as usize {
        let category = select_category(picker, &params.categories);

        let question_prompt = build_generation_prompt(&context, category);
        let (question, question_error) = match generator.generate(&question_prompt).await {
            Ok(text) => {
                info!("Got question #{} ({}): {} chars", position, category, text.len());
                context.add_question(text.as_str());
                (Some(text), None)
            }
            Err(e) => {
                log_failure(position, "question", &e);
                (None, Some(e.to_string()))
            }
        };

        let answer_prompt =
            build_answer_prompt(question.as_deref().unwrap_or_default(), category.is_algorithm());
        let (answer, answer_error) = match generator.generate(&answer_prompt).await {
            Ok(text) => {
                info!("Got answer #{}: {} chars", position, text.len());
                (Some(text), None)
            }
            Err(e) => {
                log_failure(position, "answer", &e);
                (None, Some(e.to_string()))
            }
        };

        let record = QuestionRecord {
            question,
            question_type: category,
            answer,
            question_error,
            answer_error,
        };
        on_record(position, &record);
        records.push(record);
    }

    let answered = records.iter().filter(|r| r.answer.is_some()).count();
    info!(
        "Run {} finished: {}/{} records answered",
        run_id,
        answered,
        records.len()
    );

    GenerationReport {
        run_id,
        started_at,
        finished_at: Utc::now(),
        job_title: params.job_title.clone(),
        requested_count: params.question_count,
        records,
    }
}

fn log_failure(position: usize, field: &str, error: &LlmError) {
    if error.is_empty_content() {
        warn!("No {} content returned for #{}", field, position);
    } else {
        warn!("Failed to get {} for #{}: {}", field, position, error);
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
