//! Analytics and listing limits parsed from environment variables.

use anyhow::{Result, bail};
use std::env;

/// Analytics environment configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyticsEnvConfig {
    pub snapshot_limit: usize,
    pub top_hashtags: usize,
    pub trend_window_hours: usize,
    pub trending_default_limit: usize,
    pub records_default_limit: usize,
}

impl Default for AnalyticsEnvConfig {
    fn default() -> Self {
        Self {
            snapshot_limit: 10_000,
            top_hashtags: 10,
            trend_window_hours: 24,
            trending_default_limit: 10,
            records_default_limit: 100,
        }
    }
}

impl AnalyticsEnvConfig {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            snapshot_limit: Self::parse_limit(
                "ANALYTICS_SNAPSHOT_LIMIT",
                env::var("ANALYTICS_SNAPSHOT_LIMIT").ok(),
                defaults.snapshot_limit,
            )?,
            top_hashtags: Self::parse_limit(
                "ANALYTICS_TOP_HASHTAGS",
                env::var("ANALYTICS_TOP_HASHTAGS").ok(),
                defaults.top_hashtags,
            )?,
            trend_window_hours: Self::parse_limit(
                "ANALYTICS_TREND_WINDOW_HOURS",
                env::var("ANALYTICS_TREND_WINDOW_HOURS").ok(),
                defaults.trend_window_hours,
            )?,
            trending_default_limit: Self::parse_limit(
                "TRENDING_DEFAULT_LIMIT",
                env::var("TRENDING_DEFAULT_LIMIT").ok(),
                defaults.trending_default_limit,
            )?,
            records_default_limit: Self::parse_limit(
                "RECORDS_DEFAULT_LIMIT",
                env::var("RECORDS_DEFAULT_LIMIT").ok(),
                defaults.records_default_limit,
            )?,
        })
    }

    /// Unparseable values fall back to the default; an explicit zero is an error.
    fn parse_limit(name: &str, raw: Option<String>, default: usize) -> Result<usize> {
        let value = raw
            .and_then(|v| v.trim().parse::<usize>().ok())
            .unwrap_or(default);
        if value == 0 {
            bail!("{} must be greater than zero", name);
        }
        Ok(value)
    }
}
