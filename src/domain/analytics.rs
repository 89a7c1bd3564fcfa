//! Summary value types produced by the analytics routines.
//!
//! None of these carry identity; they are recomputed from a record snapshot
//! on every request.

use crate::domain::sentiment::SentimentLabel;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HashtagStat {
    pub tag: String,
    pub count: usize,
    pub avg_sentiment: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourlyBucket {
    /// Bucket key, `YYYY-MM-DD HH:00` in UTC.
    pub hour: String,
    pub avg_sentiment: f64,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SentimentDistribution {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl SentimentDistribution {
    pub fn record(&mut self, label: SentimentLabel) {
        match label {
            SentimentLabel::Positive => self.positive += 1,
            SentimentLabel::Negative => self.negative += 1,
            SentimentLabel::Neutral => self.neutral += 1,
        }
    }

    pub fn get(&self, label: SentimentLabel) -> usize {
        match label {
            SentimentLabel::Positive => self.positive,
            SentimentLabel::Negative => self.negative,
            SentimentLabel::Neutral => self.neutral,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverviewSummary {
    pub total_records: usize,
    pub positive_count: usize,
    pub negative_count: usize,
    pub neutral_count: usize,
    pub avg_sentiment: f64,
    pub top_hashtags: Vec<HashtagStat>,
    pub sentiment_distribution: SentimentDistribution,
    /// Oldest first.
    pub hourly_trend: Vec<HourlyBucket>,
}

impl OverviewSummary {
    pub fn empty() -> Self {
        Self {
            total_records: 0,
            positive_count: 0,
            negative_count: 0,
            neutral_count: 0,
            avg_sentiment: 0.0,
            top_hashtags: Vec::new(),
            sentiment_distribution: SentimentDistribution::default(),
            hourly_trend: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendingEntry {
    pub topic: String,
    pub count: usize,
    pub avg_sentiment: f64,
    pub sentiment_label: SentimentLabel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distribution_counts() {
        let mut dist = SentimentDistribution::default();
        dist.record(SentimentLabel::Positive);
        dist.record(SentimentLabel::Positive);
        dist.record(SentimentLabel::Neutral);
        assert_eq!(dist.get(SentimentLabel::Positive), 2);
        assert_eq!(dist.get(SentimentLabel::Negative), 0);
        assert_eq!(dist.get(SentimentLabel::Neutral), 1);
    }

    #[test]
    fn test_empty_summary_serializes_zero_distribution() {
        let json = serde_json::to_value(OverviewSummary::empty()).unwrap();
        assert_eq!(
            json["sentiment_distribution"],
            serde_json::json!({"positive": 0, "negative": 0, "neutral": 0})
        );
        assert_eq!(json["avg_sentiment"], 0.0);
    }
}
