//! Ingestion pipeline
//!
//! text -> hashtags -> dual analysis -> fusion -> relevance -> record -> store
//!
//! Analysis is pure and runs without locks; the repository is the only shared
//! resource touched per call.

use crate::application::analyzer::DualSentimentAnalyzer;
use crate::domain::errors::{IngestError, PersistenceError, ProcessingError};
use crate::domain::hashtags::extract_hashtags;
use crate::domain::record::{PostSubmission, RecordQuery, ScoredRecord};
use crate::domain::repositories::RecordRepository;
use crate::infrastructure::observability::Metrics;
use chrono::{SubsecRound, Utc};
use rayon::prelude::*;
use std::sync::Arc;
use tracing::{error, info};
use uuid::Uuid;

pub struct IngestionService {
    analyzer: Arc<DualSentimentAnalyzer>,
    repository: Arc<dyn RecordRepository>,
    metrics: Option<Metrics>,
}

impl IngestionService {
    pub fn new(analyzer: Arc<DualSentimentAnalyzer>, repository: Arc<dyn RecordRepository>) -> Self {
        Self {
            analyzer,
            repository,
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, metrics: Metrics) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Builds a scored record without storing it.
    ///
    /// Caller-supplied hashtags win; extraction only runs when none were given.
    pub fn analyze(&self, submission: &PostSubmission) -> Result<ScoredRecord, ProcessingError> {
        analyze_submission(&self.analyzer, submission)
    }

    /// Analyzes and stores one post.
    pub async fn ingest(&self, submission: PostSubmission) -> Result<ScoredRecord, IngestError> {
        let record = self.analyze(&submission).map_err(|e| {
            error!("Error analyzing post from {}: {}", submission.author, e);
            self.fail(IngestError::from(e))
        })?;

        self.store(record).await
    }

    /// Analyzes a batch in parallel, then stores the records in input order.
    ///
    /// Nothing is written if any submission fails analysis. Storage stops at the
    /// first failure; records stored before it stay stored.
    pub async fn ingest_batch(
        &self,
        submissions: Vec<PostSubmission>,
    ) -> Result<Vec<ScoredRecord>, IngestError> {
        let count = submissions.len();
        let analyzer = self.analyzer.clone();
        // rayon blocks the calling thread; keep it off the async workers.
        let analyzed = tokio::task::spawn_blocking(move || {
            submissions
                .par_iter()
                .map(|s| analyze_submission(&analyzer, s))
                .collect::<Result<Vec<ScoredRecord>, ProcessingError>>()
        })
        .await
        .unwrap_or_else(|e| {
            Err(ProcessingError::Interrupted {
                reason: e.to_string(),
            })
        });

        let records = analyzed.map_err(|e| {
            error!("Error analyzing batch of {}: {}", count, e);
            self.fail(IngestError::from(e))
        })?;

        let mut stored = Vec::with_capacity(records.len());
        for record in records {
            stored.push(self.store(record).await?);
        }

        info!("Ingested batch of {} records", stored.len());
        Ok(stored)
    }

    /// Filtered listing straight from the store.
    pub async fn list(&self, query: &RecordQuery) -> Result<Vec<ScoredRecord>, PersistenceError> {
        self.repository.find(query).await
    }

    /// Deletes every stored record.
    pub async fn clear(&self) -> Result<u64, PersistenceError> {
        let deleted = self.repository.delete_all().await.inspect_err(|e| {
            error!("Error clearing records: {}", e);
        })?;
        info!("Deleted {} records", deleted);
        Ok(deleted)
    }

    async fn store(&self, record: ScoredRecord) -> Result<ScoredRecord, IngestError> {
        if let Err(e) = self.repository.save(&record).await {
            error!("Error storing record {}: {}", record.id(), e);
            return Err(self.fail(IngestError::from(e)));
        }

        if let Some(metrics) = &self.metrics {
            metrics.inc_ingested(record.fused_label().as_str());
        }
        info!(
            "Ingested record {} ({}, score {:.3}, relevance {:.3})",
            record.id(),
            record.fused_label(),
            record.fused_score(),
            record.relevance_score()
        );
        Ok(record)
    }

    fn fail(&self, error: IngestError) -> IngestError {
        if let Some(metrics) = &self.metrics {
            metrics.inc_failure(error.stage());
        }
        error
    }
}

/// Scores one submission. The creation time is truncated to milliseconds, the
/// precision the durable store keeps, so a stored record reads back unchanged.
fn analyze_submission(
    analyzer: &DualSentimentAnalyzer,
    submission: &PostSubmission,
) -> Result<ScoredRecord, ProcessingError> {
    if submission.text.trim().is_empty() {
        return Err(ProcessingError::EmptyText);
    }

    let hashtags = match &submission.hashtags {
        Some(tags) if !tags.is_empty() => tags.clone(),
        _ => extract_hashtags(&submission.text),
    };

    let reading = analyzer.analyze(&submission.text);

    Ok(ScoredRecord::new(
        Uuid::new_v4().to_string(),
        Utc::now().trunc_subsecs(3),
        submission.text.clone(),
        submission.author.clone(),
        hashtags,
        reading,
    ))
}
