use crate::application::analytics::grouping::rank_hashtags;
use crate::domain::analytics::{HashtagStat, HourlyBucket, OverviewSummary, SentimentDistribution};
use crate::domain::record::ScoredRecord;
use chrono::{NaiveDate, Timelike};
use std::collections::BTreeMap;

pub const DEFAULT_TOP_HASHTAGS: usize = 10;
pub const DEFAULT_TREND_WINDOW_HOURS: usize = 24;

/// Computes overview statistics from a record snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverviewAggregator {
    top_hashtags: usize,
    trend_window_hours: usize,
}

impl Default for OverviewAggregator {
    fn default() -> Self {
        Self::new(DEFAULT_TOP_HASHTAGS, DEFAULT_TREND_WINDOW_HOURS)
    }
}

impl OverviewAggregator {
    pub fn new(top_hashtags: usize, trend_window_hours: usize) -> Self {
        Self {
            top_hashtags,
            trend_window_hours,
        }
    }

    pub fn aggregate(&self, records: &[ScoredRecord]) -> OverviewSummary {
        if records.is_empty() {
            return OverviewSummary::empty();
        }

        let mut distribution = SentimentDistribution::default();
        let mut score_sum = 0.0;
        for record in records {
            distribution.record(record.fused_label());
            score_sum += record.fused_score();
        }

        OverviewSummary {
            total_records: records.len(),
            positive_count: distribution.positive,
            negative_count: distribution.negative,
            neutral_count: distribution.neutral,
            avg_sentiment: score_sum / records.len() as f64,
            top_hashtags: self.top_hashtags(records),
            sentiment_distribution: distribution,
            hourly_trend: self.hourly_trend(records),
        }
    }

    fn top_hashtags(&self, records: &[ScoredRecord]) -> Vec<HashtagStat> {
        rank_hashtags(records)
            .into_iter()
            .take(self.top_hashtags)
            .map(|group| HashtagStat {
                tag: group.tag.to_string(),
                count: group.count,
                avg_sentiment: group.avg_sentiment(),
            })
            .collect()
    }

    /// Buckets by the record's own UTC creation hour, oldest first, keeping the
    /// most recent `trend_window_hours` buckets.
    fn hourly_trend(&self, records: &[ScoredRecord]) -> Vec<HourlyBucket> {
        let mut buckets: BTreeMap<(NaiveDate, u32), (f64, usize)> = BTreeMap::new();
        for record in records {
            let created = record.created_at();
            let entry = buckets
                .entry((created.date_naive(), created.hour()))
                .or_insert((0.0, 0));
            entry.0 += record.fused_score();
            entry.1 += 1;
        }

        let skip = buckets.len().saturating_sub(self.trend_window_hours);
        buckets
            .into_iter()
            .skip(skip)
            .map(|((date, hour), (sum, count))| HourlyBucket {
                hour: format!("{} {:02}:00", date.format("%Y-%m-%d"), hour),
                avg_sentiment: sum / count as f64,
                count,
            })
            .collect()
    }
}

/// Overview with the default limits (top 10 hashtags, 24 hourly buckets).
pub fn aggregate_overview(records: &[ScoredRecord]) -> OverviewSummary {
    OverviewAggregator::default().aggregate(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::sentiment::{DualReading, PolarityReading};
    use chrono::{DateTime, Duration, TimeZone, Utc};

    fn record_at(created_at: DateTime<Utc>, score: f64, tags: &[&str]) -> ScoredRecord {
        ScoredRecord::new(
            uuid::Uuid::new_v4().to_string(),
            created_at,
            "text".to_string(),
            "user".to_string(),
            tags.iter().map(|t| t.to_string()).collect(),
            DualReading::new(
                score,
                PolarityReading {
                    polarity: score,
                    subjectivity: 0.3,
                },
            ),
        )
    }

    fn at(hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, hour, minute, 0).unwrap()
    }

    #[test]
    fn test_empty_snapshot_is_zero_valued() {
        let summary = aggregate_overview(&[]);
        assert_eq!(summary, OverviewSummary::empty());
        assert_eq!(summary.avg_sentiment, 0.0);
        assert!(summary.top_hashtags.is_empty());
        assert!(summary.hourly_trend.is_empty());
    }

    #[test]
    fn test_single_record() {
        let summary = aggregate_overview(&[record_at(at(9, 0), 0.8, &["AI"])]);

        assert_eq!(summary.total_records, 1);
        assert_eq!(summary.positive_count, 1);
        assert_eq!(summary.negative_count, 0);
        assert_eq!(summary.neutral_count, 0);
        assert!((summary.avg_sentiment - 0.8).abs() < 1e-12);
        assert_eq!(
            summary.top_hashtags,
            vec![HashtagStat {
                tag: "AI".to_string(),
                count: 1,
                avg_sentiment: 0.8,
            }]
        );
        assert_eq!(summary.sentiment_distribution.positive, 1);
    }

    #[test]
    fn test_counts_match_distribution() {
        let records = vec![
            record_at(at(9, 0), 0.8, &[]),
            record_at(at(9, 5), -0.8, &[]),
            record_at(at(9, 10), 0.0, &[]),
            record_at(at(9, 15), 0.04, &[]),
        ];
        let summary = aggregate_overview(&records);

        assert_eq!(summary.positive_count, 1);
        assert_eq!(summary.negative_count, 1);
        assert_eq!(summary.neutral_count, 2);
        assert_eq!(
            summary.positive_count + summary.negative_count + summary.neutral_count,
            summary.total_records
        );
        assert_eq!(summary.sentiment_distribution.neutral, 2);
        assert!((summary.avg_sentiment - 0.01).abs() < 1e-12);
    }

    #[test]
    fn test_same_hour_shares_bucket() {
        let records = vec![
            record_at(at(10, 15), 0.2, &[]),
            record_at(at(10, 45), 0.6, &[]),
        ];
        let trend = aggregate_overview(&records).hourly_trend;

        assert_eq!(trend.len(), 1);
        assert_eq!(trend[0].hour, "2024-01-01 10:00");
        assert_eq!(trend[0].count, 2);
        assert!((trend[0].avg_sentiment - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_trend_is_chronological_and_windowed() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 30, 0).unwrap();
        // 30 distinct hours, inserted newest first
        let records: Vec<ScoredRecord> = (0..30)
            .rev()
            .map(|h| record_at(start + Duration::hours(h), 0.1, &[]))
            .collect();

        let trend = aggregate_overview(&records).hourly_trend;
        assert_eq!(trend.len(), 24);
        assert_eq!(trend[0].hour, "2024-01-01 06:00");
        assert_eq!(trend[23].hour, "2024-01-02 05:00");
        assert!(trend.windows(2).all(|w| w[0].hour < w[1].hour));
    }

    #[test]
    fn test_fewer_hours_than_window() {
        let records = vec![
            record_at(at(23, 0), 0.1, &[]),
            record_at(at(1, 0), 0.1, &[]),
        ];
        let trend = aggregate_overview(&records).hourly_trend;
        let hours: Vec<&str> = trend.iter().map(|b| b.hour.as_str()).collect();
        assert_eq!(hours, vec!["2024-01-01 01:00", "2024-01-01 23:00"]);
    }

    #[test]
    fn test_top_hashtags_capped() {
        let tags: Vec<String> = (0..15).map(|i| format!("tag{}", i)).collect();
        let tag_refs: Vec<&str> = tags.iter().map(|t| t.as_str()).collect();
        let mut records = vec![record_at(at(8, 0), 0.5, &tag_refs)];
        records.push(record_at(at(8, 1), -0.5, &["tag14"]));

        let summary = aggregate_overview(&records);
        assert_eq!(summary.top_hashtags.len(), 10);
        assert_eq!(summary.top_hashtags[0].tag, "tag14");
        assert_eq!(summary.top_hashtags[0].count, 2);
        assert_eq!(summary.top_hashtags[0].avg_sentiment, 0.0);
        assert_eq!(summary.top_hashtags[1].tag, "tag0");
        assert_eq!(summary.top_hashtags[9].tag, "tag8");
    }

    #[test]
    fn test_custom_limits() {
        let records = vec![
            record_at(at(1, 0), 0.5, &["a", "b"]),
            record_at(at(2, 0), 0.5, &["a"]),
            record_at(at(3, 0), 0.5, &[]),
        ];
        let summary = OverviewAggregator::new(1, 2).aggregate(&records);

        assert_eq!(summary.top_hashtags.len(), 1);
        assert_eq!(summary.top_hashtags[0].tag, "a");
        assert_eq!(summary.hourly_trend.len(), 2);
        assert_eq!(summary.hourly_trend[0].hour, "2024-01-01 02:00");
    }
}
