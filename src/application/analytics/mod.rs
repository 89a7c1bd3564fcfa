//! Snapshot analytics
//!
//! - [`OverviewAggregator`]: counts, mean score, top hashtags, hourly trend
//! - [`rank_trending`]: hashtags by volume with mean sentiment
//! - [`AnalyticsService`]: loads a snapshot from the store and runs either
//!
//! Both views share one grouping routine so their per-tag counts and means agree.

mod grouping;
pub mod overview;
pub mod service;
pub mod trending;

pub use overview::{OverviewAggregator, aggregate_overview};
pub use service::AnalyticsService;
pub use trending::rank_trending;
