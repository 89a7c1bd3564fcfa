use crate::application::analytics::overview::OverviewAggregator;
use crate::application::analytics::trending::rank_trending;
use crate::domain::analytics::{OverviewSummary, TrendingEntry};
use crate::domain::errors::PersistenceError;
use crate::domain::record::ScoredRecord;
use crate::domain::repositories::RecordRepository;
use crate::infrastructure::observability::Metrics;
use std::sync::Arc;
use tracing::debug;

pub const DEFAULT_SNAPSHOT_LIMIT: usize = 10_000;

/// Pulls a snapshot from the store and runs the aggregation routines over it.
///
/// Every call reads a fresh snapshot; nothing is cached between calls.
pub struct AnalyticsService {
    repository: Arc<dyn RecordRepository>,
    aggregator: OverviewAggregator,
    snapshot_limit: usize,
    metrics: Option<Metrics>,
}

impl AnalyticsService {
    pub fn new(repository: Arc<dyn RecordRepository>) -> Self {
        Self {
            repository,
            aggregator: OverviewAggregator::default(),
            snapshot_limit: DEFAULT_SNAPSHOT_LIMIT,
            metrics: None,
        }
    }

    pub fn with_aggregator(mut self, aggregator: OverviewAggregator) -> Self {
        self.aggregator = aggregator;
        self
    }

    pub fn with_snapshot_limit(mut self, limit: usize) -> Self {
        self.snapshot_limit = limit;
        self
    }

    pub fn with_metrics(mut self, metrics: Metrics) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub async fn overview(&self) -> Result<OverviewSummary, PersistenceError> {
        let snapshot = self.snapshot("overview").await?;
        Ok(self.aggregator.aggregate(&snapshot))
    }

    pub async fn trending(&self, limit: usize) -> Result<Vec<TrendingEntry>, PersistenceError> {
        let snapshot = self.snapshot("trending").await?;
        Ok(rank_trending(&snapshot, limit))
    }

    async fn snapshot(&self, view: &str) -> Result<Vec<ScoredRecord>, PersistenceError> {
        let snapshot = self.repository.fetch_all(self.snapshot_limit).await?;
        debug!("Loaded snapshot of {} records for {}", snapshot.len(), view);

        if let Some(metrics) = &self.metrics {
            metrics.observe_analytics(view, snapshot.len());
        }
        Ok(snapshot)
    }
}
