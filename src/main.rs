//! Evidence research command line entry point.
//!
//! Results are printed to stdout as pretty JSON. All logs go to stderr.

use std::sync::Arc;

use serde::Serialize;
use serde_json::json;
use tracing_subscriber::EnvFilter;

use evidence_research::api::{ClientConfig, EvidenceClient};
use evidence_research::claims::ClaimsAnalyzer;
use evidence_research::cli::{help_text, AnalysisReport, AnalyzeInput, Command};
use evidence_research::config::{Config, LogFormat, DEFAULT_LOG_LEVEL};
use evidence_research::discovery::DiscoveryService;
use evidence_research::error::AppError;
use evidence_research::sources::SourceEnricher;

#[tokio::main]
async fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = match Command::parse(&args) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("{e}\n\n{}", help_text());
            std::process::exit(1);
        }
    };

    if command == Command::Help {
        println!("{}", help_text());
        return;
    }

    // Loaded before logging so .env can set LOG_LEVEL and LOG_FORMAT
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            std::process::exit(1);
        }
    };

    init_tracing(&config);

    tracing::debug!(
        api_root = %config.api_root(),
        timeout_ms = ?config.request_timeout_ms,
        "Configuration loaded"
    );

    match run(command, &config).await {
        Ok(output) => println!("{output}"),
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

async fn run(command: Command, config: &Config) -> Result<String, AppError> {
    let client = Arc::new(EvidenceClient::new(ClientConfig::from(config))?);

    match command {
        Command::Health => {
            client.ping().await?;
            render(&json!({ "status": "ok", "api_root": client.api_root() }))
        }

        Command::Search { .. } => {
            let Some(query) = command.search_query() else {
                return Err(AppError::Input {
                    message: "search query missing".into(),
                });
            };
            let response = DiscoveryService::new(client).search_openalex(query).await?;
            render(&response)
        }

        Command::Resolve { lines } => {
            let response = DiscoveryService::new(client)
                .resolve_suggestions(lines)
                .await?;
            render(&response)
        }

        Command::Analyze { path } => {
            let input = AnalyzeInput::load(&path)?;
            let outcome = SourceEnricher::new(Arc::clone(&client))
                .enrich_with_stats(input.sources)
                .await?;
            let response = ClaimsAnalyzer::new(client)
                .analyze_claims(
                    input.thesis,
                    input.claims,
                    &outcome.sources,
                    input.proquest_evidence,
                )
                .await?;
            render(&AnalysisReport::new(outcome.stats, &response))
        }

        Command::Help => Ok(help_text().to_string()),
    }
}

/// Logs go to stderr only; stdout carries results.
fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_level)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false);

    match config.log_format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.init(),
    }
}

fn render<T: Serialize>(value: &T) -> Result<String, AppError> {
    serde_json::to_string_pretty(value).map_err(|e| AppError::Output {
        message: e.to_string(),
    })
}
