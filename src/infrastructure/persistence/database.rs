use anyhow::{Context, Result};

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use std::str::FromStr;
use tokio::fs;
use tracing::info;

/// Shared SQLite pool wrapper
#[derive(Clone)]
pub struct Database {
    pub pool: SqlitePool,
}

impl Database {
    pub async fn new(db_url: &str, max_connections: u32) -> Result<Self> {
        // Ensure the directory exists if it's a file path
        if let Some(path_part) = db_url.strip_prefix("sqlite://") {
            let path = Path::new(path_part);
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
                && !parent.exists()
            {
                fs::create_dir_all(parent)
                    .await
                    .context("Failed to create database directory")?;
            }
        }

        let options = SqliteConnectOptions::from_str(db_url)?
            .create_if_missing(true)
            .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal); // Better for concurrency

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await
            .context("Failed to connect to SQLite database")?;

        info!("Connected to database: {}", db_url);

        let db = Self { pool };
        db.init().await?;

        Ok(db)
    }

    /// Initialize database schema
    async fn init(&self) -> Result<()> {
        let mut conn = self.pool.acquire().await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS scored_records (
                id TEXT PRIMARY KEY,
                text TEXT NOT NULL,
                author TEXT NOT NULL,
                created_at INTEGER NOT NULL,
                hashtags_json TEXT NOT NULL,
                compound_score REAL NOT NULL,
                compound_label TEXT NOT NULL,
                polarity REAL NOT NULL,
                subjectivity REAL NOT NULL,
                fused_label TEXT NOT NULL,
                fused_score REAL NOT NULL,
                relevance_score REAL NOT NULL
            );
            "#,
        )
        .execute(&mut *conn)
        .await
        .context("Failed to create scored_records table")?;

        // Listing sorts and label filter
        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS idx_records_created_at
            ON scored_records (created_at);
            CREATE INDEX IF NOT EXISTS idx_records_relevance
            ON scored_records (relevance_score);
            CREATE INDEX IF NOT EXISTS idx_records_label
            ON scored_records (fused_label);
            "#,
        )
        .execute(&mut *conn)
        .await
        .context("Failed to create scored_records indexes")?;

        info!("Database schema initialized.");
        Ok(())
    }
}
