use crate::domain::record::ScoredRecord;
use std::collections::HashMap;

/// Per-tag accumulation over a snapshot.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct HashtagGroup<'a> {
    pub tag: &'a str,
    pub count: usize,
    pub score_sum: f64,
}

impl HashtagGroup<'_> {
    pub fn avg_sentiment(&self) -> f64 {
        self.score_sum / self.count as f64
    }
}

/// Groups records by every tag they carry, ordered by descending count.
///
/// A record with N tags contributes to N groups (a tag repeated inside one
/// record counts each time). Equal counts keep first-encounter order.
pub(crate) fn rank_hashtags(records: &[ScoredRecord]) -> Vec<HashtagGroup<'_>> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<HashtagGroup<'_>> = Vec::new();

    for record in records {
        for tag in record.hashtags() {
            let slot = *index.entry(tag.as_str()).or_insert_with(|| {
                groups.push(HashtagGroup {
                    tag: tag.as_str(),
                    count: 0,
                    score_sum: 0.0,
                });
                groups.len() - 1
            });
            let group = &mut groups[slot];
            group.count += 1;
            group.score_sum += record.fused_score();
        }
    }

    // Stable: ties stay in encounter order.
    groups.sort_by(|a, b| b.count.cmp(&a.count));
    groups
}
