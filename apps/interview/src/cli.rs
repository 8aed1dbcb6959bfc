//! Command-line front-end: collects the job details and options for one run.

use std::path::PathBuf;

use clap::Parser;

use crate::errors::AppError;
use crate::interview::category::QuestionCategory;
use crate::interview::driver::{SessionParams, MAX_QUESTIONS};

/// Generate mock software engineering interview questions and answers from a job description.
#[derive(Debug, Parser)]
#[command(name = "interview-gen", version)]
pub struct Cli {
    /// Job position, e.g. "Junior Software Engineer"
    #[arg(long)]
    pub job_title: String,

    /// Job description text
    #[arg(
        long,
        conflicts_with = "job_description_file",
        required_unless_present = "job_description_file"
    )]
    pub job_description: Option<String>,

    /// Read the job description from a file
    #[arg(long)]
    pub job_description_file: Option<PathBuf>,

    /// Number of questions to generate (1-20)
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=(MAX_QUESTIONS as i64)))]
    pub count: u8,

    /// Question category, repeatable. Picked at random per question.
    /// Defaults to "Data Structure and Algorithms" and "Behavioral".
    #[arg(long = "category", value_parser = parse_category)]
    pub categories: Vec<QuestionCategory>,

    /// Select no categories; every question falls back to "Open Ended"
    #[arg(long, conflicts_with = "categories")]
    pub no_categories: bool,

    /// Write the finished run as JSON to this path
    #[arg(long)]
    pub json_report: Option<PathBuf>,
}

fn parse_category(value: &str) -> Result<QuestionCategory, String> {
    value.parse()
}

impl Cli {
    /// Resolves the job description source and category defaults into validated params.
    pub fn session_params(&self) -> Result<SessionParams, AppError> {
        let job_description = match (&self.job_description, &self.job_description_file) {
            (Some(text), _) => text.clone(),
            (None, Some(path)) => std::fs::read_to_string(path)?,
            (None, None) => {
                return Err(AppError::Validation(
                    "a job description is required".to_string(),
                ))
            }
        };

        let categories: Vec<QuestionCategory> = if self.no_categories {
            Vec::new()
        } else if self.categories.is_empty() {
            QuestionCategory::PRESELECTED.to_vec()
        } else {
            self.categories.clone()
        };

        SessionParams::new(
            job_description.trim(),
            self.job_title.trim(),
            self.count,
            categories,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("interview-gen").chain(args.iter().copied()))
    }

    #[test]
    fn test_defaults_preselect_dsa_and_behavioral() {
        let cli = parse(&["--job-title", "SRE", "--job-description", "Run Kubernetes"]).unwrap();
        let params = cli.session_params().unwrap();

        assert_eq!(params.question_count, 1);
        assert_eq!(
            params.categories,
            vec![
                QuestionCategory::DataStructuresAndAlgorithms,
                QuestionCategory::Behavioral
            ]
        );
        assert!(cli.json_report.is_none());
    }

    #[test]
    fn test_repeated_categories_and_count() {
        let cli = parse(&[
            "--job-title",
            "SRE",
            "--job-description",
            "Run Kubernetes",
            "--count",
            "7",
            "--category",
            "multiple-choice",
            "--category",
            "Open Ended",
        ])
        .unwrap();
        let params = cli.session_params().unwrap();

        assert_eq!(params.question_count, 7);
        assert_eq!(
            params.categories,
            vec![QuestionCategory::MultipleChoice, QuestionCategory::OpenEnded]
        );
    }

    #[test]
    fn test_no_categories_yields_empty_selection() {
        let cli = parse(&[
            "--job-title",
            "SRE",
            "--job-description",
            "Run Kubernetes",
            "--no-categories",
        ])
        .unwrap();
        assert!(cli.session_params().unwrap().categories.is_empty());
    }

    #[test]
    fn test_count_out_of_range_is_rejected() {
        for count in ["0", "21"] {
            let result = parse(&[
                "--job-title",
                "SRE",
                "--job-description",
                "Run Kubernetes",
                "--count",
                count,
            ]);
            assert!(result.is_err(), "count {count} should be rejected");
        }
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let result = parse(&[
            "--job-title",
            "SRE",
            "--job-description",
            "Run Kubernetes",
            "--category",
            "Take home Assessment",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_description_is_required() {
        assert!(parse(&["--job-title", "SRE"]).is_err());
    }

    #[test]
    fn test_description_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "  Build low-latency trading systems in Rust.  ").unwrap();
        let path = file.path().to_string_lossy().to_string();

        let cli = parse(&["--job-title", "Quant Dev", "--job-description-file", path.as_str()]).unwrap();
        let params = cli.session_params().unwrap();
        assert_eq!(
            params.job_description,
            "Build low-latency trading systems in Rust."
        );
    }

    #[test]
    fn test_blank_description_fails_validation() {
        let cli = parse(&["--job-title", "SRE", "--job-description", "   "]).unwrap();
        assert!(matches!(
            cli.session_params(),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_missing_description_file_is_io_error() {
        let cli = parse(&[
            "--job-title",
            "SRE",
            "--job-description-file",
            "/definitely/not/here.txt",
        ])
        .unwrap();
        assert!(matches!(cli.session_params(), Err(AppError::Io(_))));
    }
}
