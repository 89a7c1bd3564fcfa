pub mod observability;
pub mod persistence;
pub mod repositories;
pub mod sentiment;

pub use observability::Metrics;
pub use persistence::{Database, SqliteRecordRepository};
pub use repositories::InMemoryRecordRepository;
