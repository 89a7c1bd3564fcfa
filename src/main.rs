//! Sentipulse CLI
//!
//! Drives the ingestion pipeline and the analytics views against the
//! configured record store. Results are printed to stdout as JSON; logs go to
//! stderr.
//!
//! # Usage
//! ```sh
//! sentipulse ingest --author alice "Loving the new #Rust release"
//! sentipulse generate --count 50
//! sentipulse overview
//! ```
//!
//! # Environment Variables
//! - `STORAGE_BACKEND` - `sqlite` or `memory` (default: sqlite)
//! - `DATABASE_URL` - SQLite location (default: sqlite://data/sentipulse.db)
//! - `METRICS_ENABLED` - Dump Prometheus metrics at debug level on exit (default: true)

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sentipulse::application::analytics::AnalyticsService;
use sentipulse::application::analyzer::DualSentimentAnalyzer;
use sentipulse::application::ingestion::IngestionService;
use sentipulse::application::sample_generator::SampleGenerator;
use sentipulse::config::{Config, StorageBackend};
use sentipulse::domain::record::{PostSubmission, RecordQuery, RecordSort};
use sentipulse::domain::repositories::RecordRepository;
use sentipulse::domain::sentiment::SentimentLabel;
use sentipulse::infrastructure::{
    Database, InMemoryRecordRepository, Metrics, SqliteRecordRepository,
};
use serde::Serialize;
use std::process::ExitCode;
use std::str::FromStr;
use std::sync::Arc;
use tracing::{Level, debug, error, info};
use tracing_subscriber::prelude::*;

#[derive(Parser)]
#[command(author, version, about = "Dual-engine sentiment pipeline for short social posts", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze and store a single post
    Ingest {
        /// Post author
        #[arg(short, long)]
        author: String,

        /// Hashtag to attach (repeatable); extracted from the text when omitted
        #[arg(short, long = "tag")]
        tags: Vec<String>,

        /// Post text
        text: String,
    },
    /// Ingest generated demo posts
    Generate {
        /// Number of posts to generate
        #[arg(short, long, default_value = "50")]
        count: usize,
    },
    /// List stored records
    List {
        /// Only records with this fused label (positive, negative, neutral)
        #[arg(short, long)]
        label: Option<String>,

        /// Ordering (timestamp, relevance)
        #[arg(short, long, default_value = "timestamp")]
        sort: String,

        /// Maximum number of records
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
    /// Aggregate statistics over the stored records
    Overview,
    /// Hashtags ranked by volume
    Trending {
        /// Maximum number of topics
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
    /// Delete every stored record
    Clear,
}

#[derive(Serialize)]
struct Cleared {
    deleted: u64,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(stderr_layer)
        .init();

    let cli = Cli::parse();
    ExitCode::from(exit_status(&run(cli).await))
}

/// Logs the error chain once and maps the outcome to a process status.
fn exit_status(result: &Result<()>) -> u8 {
    match result {
        Ok(()) => 0,
        Err(e) => {
            error!("{:#}", e);
            1
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::from_env()?;
    info!(
        "Sentipulse {} (storage: {:?})",
        env!("CARGO_PKG_VERSION"),
        config.storage_backend
    );

    let repository = build_repository(&config).await?;
    let metrics = if config.metrics_enabled {
        Some(Metrics::new().context("Failed to register metrics")?)
    } else {
        None
    };

    let analyzer = Arc::new(DualSentimentAnalyzer::with_default_engines());
    let (compound_engine, polarity_engine) = analyzer.engine_names();
    debug!("Engines: {} + {}", compound_engine, polarity_engine);

    let mut ingestion = IngestionService::new(analyzer, repository.clone());
    let mut analytics = AnalyticsService::new(repository)
        .with_aggregator(config.overview_aggregator())
        .with_snapshot_limit(config.snapshot_limit);
    if let Some(metrics) = &metrics {
        ingestion = ingestion.with_metrics(metrics.clone());
        analytics = analytics.with_metrics(metrics.clone());
    }

    match cli.command {
        Commands::Ingest { author, tags, text } => {
            let mut submission = PostSubmission::new(text, author);
            if !tags.is_empty() {
                submission = submission.with_hashtags(tags);
            }
            let record = ingestion.ingest(submission).await?;
            print_json(&record)?;
        }
        Commands::Generate { count } => {
            let posts = SampleGenerator::new().generate(count);
            let records = ingestion.ingest_batch(posts).await?;
            info!("Generated {} sample records", records.len());
            print_json(&records)?;
        }
        Commands::List { label, sort, limit } => {
            let query = RecordQuery {
                label: label.as_deref().map(SentimentLabel::from_str).transpose()?,
                sort: RecordSort::from_str(&sort)?,
                limit: limit.unwrap_or(config.records_default_limit),
            };
            let records = ingestion.list(&query).await?;
            print_json(&records)?;
        }
        Commands::Overview => {
            let summary = analytics.overview().await?;
            print_json(&summary)?;
        }
        Commands::Trending { limit } => {
            let trending = analytics
                .trending(limit.unwrap_or(config.trending_default_limit))
                .await?;
            print_json(&trending)?;
        }
        Commands::Clear => {
            let deleted = ingestion.clear().await?;
            print_json(&Cleared { deleted })?;
        }
    }

    if let Some(metrics) = &metrics {
        debug!("Metrics:\n{}", metrics.render()?);
    }
    Ok(())
}

async fn build_repository(config: &Config) -> Result<Arc<dyn RecordRepository>> {
    match config.storage_backend {
        StorageBackend::Sqlite => {
            let database = Database::new(&config.database_url, config.database_max_connections)
                .await
                .with_context(|| format!("Failed to open {}", config.database_url))?;
            Ok(Arc::new(SqliteRecordRepository::new(database)))
        }
        StorageBackend::Memory => Ok(Arc::new(InMemoryRecordRepository::new())),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn test_exit_status() {
        assert_eq!(exit_status(&Ok(())), 0);
        assert_eq!(
            exit_status(&Err(anyhow!("disk full").context("Failed to open store"))),
            1
        );
    }

    #[test]
    fn test_cli_parses_subcommands() {
        let cli = Cli::try_parse_from([
            "sentipulse",
            "ingest",
            "--author",
            "alice",
            "--tag",
            "AI",
            "--tag",
            "Rust",
            "hello there",
        ])
        .unwrap();
        match cli.command {
            Commands::Ingest { author, tags, text } => {
                assert_eq!(author, "alice");
                assert_eq!(tags, vec!["AI", "Rust"]);
                assert_eq!(text, "hello there");
            }
            _ => panic!("expected ingest"),
        }

        let cli = Cli::try_parse_from(["sentipulse", "trending", "-n", "3"]).unwrap();
        assert!(matches!(cli.command, Commands::Trending { limit: Some(3) }));
    }
}
