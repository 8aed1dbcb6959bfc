mod cli;
mod config;
mod errors;
mod interview;
mod llm_client;

use std::io::Write;

use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::Cli;
use crate::config::Config;
use crate::interview::driver::{generate_questions, RandomPicker};
use crate::interview::render::{render_record, render_title, write_json_report};
use crate::llm_client::LlmClient;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Missing credentials stop the process before any generation attempt
    let config = Config::from_env()?;

    // Logs go to stderr; stdout carries the rendered questions
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting interview-gen v{}", env!("CARGO_PKG_VERSION"));

    let params = cli.session_params()?;

    let llm = LlmClient::new(&config)?;
    info!(
        "LLM client initialized (model: {}, max attempts: {})",
        llm.model(),
        config.max_attempts
    );

    let mut picker = RandomPicker::from_entropy();
    let mut stdout = std::io::stdout();

    writeln!(stdout, "{}", render_title(&params.job_title))?;

    let report = generate_questions(&llm, &mut picker, &params, |position, record| {
        let written = writeln!(stdout, "{}", render_record(position, record))
            .and_then(|_| stdout.flush());
        if let Err(e) = written {
            warn!("Failed to print question #{}: {}", position, e);
        }
    })
    .await;

    if let Some(path) = &cli.json_report {
        write_json_report(path, &report)?;
        info!("Wrote report {} to {}", report.run_id, path.display());
    }

    Ok(())
}
