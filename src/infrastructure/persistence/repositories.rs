use crate::domain::errors::PersistenceError;
use crate::domain::record::{RecordQuery, RecordSort, ScoredRecord};
use crate::domain::repositories::RecordRepository;
use crate::domain::sentiment::{DualReading, PolarityReading};
use crate::infrastructure::persistence::database::Database;
use async_trait::async_trait;
use chrono::DateTime;
use sqlx::Row;
use sqlx::sqlite::SqliteRow;
use tracing::debug;

fn is_connection_failure(e: &sqlx::Error) -> bool {
    matches!(
        e,
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_)
    )
}

fn write_error(e: sqlx::Error) -> PersistenceError {
    if is_connection_failure(&e) {
        return PersistenceError::Connection {
            reason: e.to_string(),
        };
    }
    PersistenceError::Write {
        reason: e.to_string(),
    }
}

fn read_error(e: sqlx::Error) -> PersistenceError {
    if is_connection_failure(&e) {
        return PersistenceError::Connection {
            reason: e.to_string(),
        };
    }
    PersistenceError::Read {
        reason: e.to_string(),
    }
}

pub struct SqliteRecordRepository {
    database: Database,
}

impl SqliteRecordRepository {
    pub fn new(database: Database) -> Self {
        Self { database }
    }

    /// Rebuilds a record from its raw columns.
    ///
    /// Derived columns are only stored for filtering and sorting; the
    /// constructor recomputes them from the engine outputs.
    fn map_row(row: &SqliteRow) -> Result<ScoredRecord, PersistenceError> {
        let id: String = row.try_get("id").map_err(read_error)?;

        let created_ms: i64 = row.try_get("created_at").map_err(read_error)?;
        let created_at =
            DateTime::from_timestamp_millis(created_ms).ok_or_else(|| PersistenceError::Corrupt {
                id: id.clone(),
                reason: format!("timestamp {} out of range", created_ms),
            })?;

        let hashtags_json: String = row.try_get("hashtags_json").map_err(read_error)?;
        let hashtags: Vec<String> =
            serde_json::from_str(&hashtags_json).map_err(|e| PersistenceError::Corrupt {
                id: id.clone(),
                reason: format!("invalid hashtags: {}", e),
            })?;

        let reading = DualReading::new(
            row.try_get("compound_score").map_err(read_error)?,
            PolarityReading {
                polarity: row.try_get("polarity").map_err(read_error)?,
                subjectivity: row.try_get("subjectivity").map_err(read_error)?,
            },
        );

        Ok(ScoredRecord::new(
            id,
            created_at,
            row.try_get("text").map_err(read_error)?,
            row.try_get("author").map_err(read_error)?,
            hashtags,
            reading,
        ))
    }

    fn map_rows(rows: Vec<SqliteRow>) -> Result<Vec<ScoredRecord>, PersistenceError> {
        rows.iter().map(Self::map_row).collect()
    }
}

#[async_trait]
impl RecordRepository for SqliteRecordRepository {
    async fn save(&self, record: &ScoredRecord) -> Result<(), PersistenceError> {
        let hashtags_json =
            serde_json::to_string(record.hashtags()).map_err(|e| PersistenceError::Write {
                reason: format!("invalid hashtags: {}", e),
            })?;

        sqlx::query(
            r#"
            INSERT INTO scored_records (
                id, text, author, created_at, hashtags_json,
                compound_score, compound_label, polarity, subjectivity,
                fused_label, fused_score, relevance_score
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(record.id())
        .bind(record.text())
        .bind(record.author())
        .bind(record.created_at().timestamp_millis())
        .bind(hashtags_json)
        .bind(record.compound_score())
        .bind(record.compound_label().as_str())
        .bind(record.polarity())
        .bind(record.subjectivity())
        .bind(record.fused_label().as_str())
        .bind(record.fused_score())
        .bind(record.relevance_score())
        .execute(&self.database.pool)
        .await
        .map_err(write_error)?;

        debug!("Persisted record {}", record.id());
        Ok(())
    }

    async fn fetch_all(&self, limit: usize) -> Result<Vec<ScoredRecord>, PersistenceError> {
        let rows = sqlx::query("SELECT * FROM scored_records ORDER BY rowid LIMIT ?")
            .bind(limit as i64)
            .fetch_all(&self.database.pool)
            .await
            .map_err(read_error)?;
        Self::map_rows(rows)
    }

    async fn find(&self, query: &RecordQuery) -> Result<Vec<ScoredRecord>, PersistenceError> {
        let order_by = match query.sort {
            RecordSort::Newest => "created_at DESC, rowid DESC",
            RecordSort::Relevance => "relevance_score DESC, rowid DESC",
        };

        let rows = match query.label {
            Some(label) => {
                let sql = format!(
                    "SELECT * FROM scored_records WHERE fused_label = ? ORDER BY {} LIMIT ?",
                    order_by
                );
                sqlx::query(&sql)
                    .bind(label.as_str())
                    .bind(query.limit as i64)
                    .fetch_all(&self.database.pool)
                    .await
            }
            None => {
                let sql = format!("SELECT * FROM scored_records ORDER BY {} LIMIT ?", order_by);
                sqlx::query(&sql)
                    .bind(query.limit as i64)
                    .fetch_all(&self.database.pool)
                    .await
            }
        }
        .map_err(read_error)?;

        Self::map_rows(rows)
    }

    async fn delete_all(&self) -> Result<u64, PersistenceError> {
        let result = sqlx::query("DELETE FROM scored_records")
            .execute(&self.database.pool)
            .await
            .map_err(write_error)?;

        debug!("Deleted {} rows from scored_records", result.rows_affected());
        Ok(result.rows_affected())
    }

    async fn count(&self) -> Result<usize, PersistenceError> {
        let row = sqlx::query("SELECT COUNT(*) as count FROM scored_records")
            .fetch_one(&self.database.pool)
            .await
            .map_err(read_error)?;
        let count: i64 = row.try_get("count").map_err(read_error)?;
        Ok(count as usize)
    }
}
