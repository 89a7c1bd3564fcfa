//! Configuration module for Sentipulse.
//!
//! This module provides structured configuration loading from environment variables,
//! organized by concern: Storage, Analytics, and Observability.

mod analytics_config;
mod observability_config;
mod storage_config;

pub use analytics_config::AnalyticsEnvConfig;
pub use observability_config::ObservabilityEnvConfig;
pub use storage_config::{StorageBackend, StorageEnvConfig};

use crate::application::analytics::OverviewAggregator;
use anyhow::{Context, Result};

/// Main application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    // Storage
    pub storage_backend: StorageBackend,
    pub database_url: String,
    pub database_max_connections: u32,

    // Analytics
    pub snapshot_limit: usize,
    pub top_hashtags: usize,
    pub trend_window_hours: usize,
    pub trending_default_limit: usize,
    pub records_default_limit: usize,

    // Observability
    pub metrics_enabled: bool,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let storage = StorageEnvConfig::from_env().context("Failed to load storage config")?;
        let analytics =
            AnalyticsEnvConfig::from_env().context("Failed to load analytics config")?;
        let observability = ObservabilityEnvConfig::from_env();

        Ok(Self::compose(storage, analytics, observability))
    }

    fn compose(
        storage: StorageEnvConfig,
        analytics: AnalyticsEnvConfig,
        observability: ObservabilityEnvConfig,
    ) -> Self {
        Self {
            storage_backend: storage.backend,
            database_url: storage.database_url,
            database_max_connections: storage.max_connections,

            snapshot_limit: analytics.snapshot_limit,
            top_hashtags: analytics.top_hashtags,
            trend_window_hours: analytics.trend_window_hours,
            trending_default_limit: analytics.trending_default_limit,
            records_default_limit: analytics.records_default_limit,

            metrics_enabled: observability.metrics_enabled,
        }
    }

    /// Overview aggregator built from the configured limits
    pub fn overview_aggregator(&self) -> OverviewAggregator {
        OverviewAggregator::new(self.top_hashtags, self.trend_window_hours)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::compose(
            StorageEnvConfig::default(),
            AnalyticsEnvConfig::default(),
            ObservabilityEnvConfig::default(),
        )
    }
}
