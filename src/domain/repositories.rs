//! Repository Pattern Abstractions
//!
//! The record store is an external collaborator: the ingestion pipeline hands it
//! finished records and the analytics routines read snapshots back from it.
//!
//! # Implementations
//!
//! - `InMemoryRecordRepository`: `Arc<RwLock<Vec<_>>>`, for tests and single runs
//! - `SqliteRecordRepository`: sqlx-backed, durable
//!
//! # Example
//!
//! ```rust,no_run
//! use sentipulse::domain::repositories::RecordRepository;
//! use sentipulse::infrastructure::InMemoryRecordRepository;
//!
//! # async {
//! let repo = InMemoryRecordRepository::new();
//! let snapshot = repo.fetch_all(10_000).await.unwrap();
//! assert!(snapshot.is_empty());
//! # };
//! ```

use crate::domain::errors::PersistenceError;
use crate::domain::record::{RecordQuery, ScoredRecord};
use async_trait::async_trait;

/// Repository for persisting and reading scored records
#[async_trait]
pub trait RecordRepository: Send + Sync {
    /// Persist a newly created record
    async fn save(&self, record: &ScoredRecord) -> Result<(), PersistenceError>;

    /// Snapshot of stored records in insertion order, capped at `limit`
    async fn fetch_all(&self, limit: usize) -> Result<Vec<ScoredRecord>, PersistenceError>;

    /// Filtered, ordered listing
    async fn find(&self, query: &RecordQuery) -> Result<Vec<ScoredRecord>, PersistenceError>;

    /// Remove every record, returning how many were deleted
    async fn delete_all(&self) -> Result<u64, PersistenceError>;

    /// Count stored records
    async fn count(&self) -> Result<usize, PersistenceError>;
}
