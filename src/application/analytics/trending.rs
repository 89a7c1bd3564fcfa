use crate::application::analytics::grouping::rank_hashtags;
use crate::domain::analytics::TrendingEntry;
use crate::domain::record::ScoredRecord;
use crate::domain::sentiment::SentimentLabel;

pub const DEFAULT_TRENDING_LIMIT: usize = 10;

/// Hashtags ranked by volume, each with its mean fused score and label.
///
/// Returns at most `limit` entries; fewer when the snapshot has fewer tags.
pub fn rank_trending(records: &[ScoredRecord], limit: usize) -> Vec<TrendingEntry> {
    rank_hashtags(records)
        .into_iter()
        .take(limit)
        .map(|group| {
            let avg_sentiment = group.avg_sentiment();
            TrendingEntry {
                topic: group.tag.to_string(),
                count: group.count,
                avg_sentiment,
                sentiment_label: SentimentLabel::from_score(avg_sentiment),
            }
        })
        .collect()
}
