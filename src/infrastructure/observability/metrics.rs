//! Prometheus metrics definitions for Sentipulse
//!
//! All metrics use the `sentipulse_` prefix.

use prometheus::{
    CounterVec, Gauge, Opts, Registry, TextEncoder,
    core::{AtomicF64, GenericGauge},
};
use std::sync::Arc;

/// Prometheus metrics for ingestion and analytics
#[derive(Clone)]
pub struct Metrics {
    registry: Arc<Registry>,
    /// Records stored, by fused label
    pub records_ingested_total: CounterVec,
    /// Failed ingestions, by stage (processing, persistence)
    pub ingest_failures_total: CounterVec,
    /// Analytics requests, by view (overview, trending)
    pub analytics_requests_total: CounterVec,
    /// Size of the last snapshot read for analytics
    pub snapshot_size: GenericGauge<AtomicF64>,
}

impl Metrics {
    /// Create a new Metrics instance with all counters registered
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new();

        let records_ingested_total = CounterVec::new(
            Opts::new(
                "sentipulse_records_ingested_total",
                "Records analyzed and stored, by fused label",
            ),
            &["label"],
        )?;
        registry.register(Box::new(records_ingested_total.clone()))?;

        let ingest_failures_total = CounterVec::new(
            Opts::new(
                "sentipulse_ingest_failures_total",
                "Failed ingestions, by pipeline stage",
            ),
            &["stage"],
        )?;
        registry.register(Box::new(ingest_failures_total.clone()))?;

        let analytics_requests_total = CounterVec::new(
            Opts::new(
                "sentipulse_analytics_requests_total",
                "Analytics computations, by view",
            ),
            &["view"],
        )?;
        registry.register(Box::new(analytics_requests_total.clone()))?;

        let snapshot_size = Gauge::with_opts(Opts::new(
            "sentipulse_snapshot_size",
            "Records in the last analytics snapshot",
        ))?;
        registry.register(Box::new(snapshot_size.clone()))?;

        Ok(Self {
            registry: Arc::new(registry),
            records_ingested_total,
            ingest_failures_total,
            analytics_requests_total,
            snapshot_size,
        })
    }

    /// Render all metrics in the Prometheus text exposition format
    pub fn render(&self) -> anyhow::Result<String> {
        let encoder = TextEncoder::new();
        let families = self.registry.gather();
        Ok(encoder.encode_to_string(&families)?)
    }

    pub fn inc_ingested(&self, label: &str) {
        self.records_ingested_total.with_label_values(&[label]).inc();
    }

    pub fn inc_failure(&self, stage: &str) {
        self.ingest_failures_total.with_label_values(&[stage]).inc();
    }

    pub fn observe_analytics(&self, view: &str, snapshot_size: usize) {
        self.analytics_requests_total
            .with_label_values(&[view])
            .inc();
        self.snapshot_size.set(snapshot_size as f64);
    }
}
