//! In-Memory Repository Implementation
//!
//! Thread-safe, in-memory implementation of `RecordRepository`.
//!
//! # Features
//!
//! - **Thread-safe**: Uses `Arc<RwLock>` for concurrent access
//! - **Snapshot reads**: readers clone the records under a read lock, so a
//!   concurrent write is either fully visible or not visible at all
//! - **Testing**: Ideal for unit tests and `STORAGE_BACKEND=memory` runs
//!
//! # Limitations
//!
//! - Data is lost on process exit
//! - Limited by available RAM

use crate::domain::errors::PersistenceError;
use crate::domain::record::{RecordQuery, ScoredRecord};
use crate::domain::repositories::RecordRepository;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory implementation of RecordRepository
#[derive(Clone)]
pub struct InMemoryRecordRepository {
    records: Arc<RwLock<Vec<ScoredRecord>>>,
}

impl InMemoryRecordRepository {
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl Default for InMemoryRecordRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecordRepository for InMemoryRecordRepository {
    async fn save(&self, record: &ScoredRecord) -> Result<(), PersistenceError> {
        let mut records = self.records.write().await;
        if records.iter().any(|r| r.id() == record.id()) {
            return Err(PersistenceError::Write {
                reason: format!("duplicate record id {}", record.id()),
            });
        }
        records.push(record.clone());
        Ok(())
    }

    async fn fetch_all(&self, limit: usize) -> Result<Vec<ScoredRecord>, PersistenceError> {
        let records = self.records.read().await;
        Ok(records.iter().take(limit).cloned().collect())
    }

    async fn find(&self, query: &RecordQuery) -> Result<Vec<ScoredRecord>, PersistenceError> {
        let records = self.records.read().await;
        Ok(query.apply(records.iter()))
    }

    async fn delete_all(&self) -> Result<u64, PersistenceError> {
        let mut records = self.records.write().await;
        let deleted = records.len() as u64;
        records.clear();
        Ok(deleted)
    }

    async fn count(&self) -> Result<usize, PersistenceError> {
        Ok(self.records.read().await.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::sentiment::{DualReading, PolarityReading, SentimentLabel};
    use chrono::{Duration, Utc};

    fn create_test_record(id: &str, score: f64, age_minutes: i64) -> ScoredRecord {
        ScoredRecord::new(
            id.to_string(),
            Utc::now() - Duration::minutes(age_minutes),
            format!("text {}", id),
            "user1".to_string(),
            vec!["AI".to_string()],
            DualReading::new(
                score,
                PolarityReading {
                    polarity: score,
                    subjectivity: 0.5,
                },
            ),
        )
    }

    #[tokio::test]
    async fn test_save_and_fetch() {
        let repo = InMemoryRecordRepository::new();

        repo.save(&create_test_record("a", 0.5, 0)).await.unwrap();

        let records = repo.fetch_all(10).await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id(), "a");
    }

    #[tokio::test]
    async fn test_duplicate_id_rejected() {
        let repo = InMemoryRecordRepository::new();
        let record = create_test_record("a", 0.5, 0);

        repo.save(&record).await.unwrap();
        let err = repo.save(&record).await.unwrap_err();
        assert!(matches!(err, PersistenceError::Write { .. }));
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_fetch_all_respects_limit() {
        let repo = InMemoryRecordRepository::new();
        for i in 0..5 {
            repo.save(&create_test_record(&format!("r{}", i), 0.1, i))
                .await
                .unwrap();
        }

        assert_eq!(repo.fetch_all(3).await.unwrap().len(), 3);
        assert_eq!(repo.fetch_all(100).await.unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_find_by_label_newest_first() {
        let repo = InMemoryRecordRepository::new();
        repo.save(&create_test_record("old", 0.6, 30)).await.unwrap();
        repo.save(&create_test_record("neg", -0.6, 20)).await.unwrap();
        repo.save(&create_test_record("new", 0.3, 10)).await.unwrap();

        let query = RecordQuery {
            label: Some(SentimentLabel::Positive),
            ..RecordQuery::default()
        };
        let found = repo.find(&query).await.unwrap();
        let ids: Vec<&str> = found.iter().map(|r| r.id()).collect();
        assert_eq!(ids, vec!["new", "old"]);
    }

    #[tokio::test]
    async fn test_delete_all_returns_count() {
        let repo = InMemoryRecordRepository::new();

        assert_eq!(repo.delete_all().await.unwrap(), 0);

        repo.save(&create_test_record("a", 0.1, 0)).await.unwrap();
        repo.save(&create_test_record("b", 0.2, 0)).await.unwrap();

        assert_eq!(repo.delete_all().await.unwrap(), 2);
        assert_eq!(repo.count().await.unwrap(), 0);
    }
}
