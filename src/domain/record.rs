use crate::domain::relevance::relevance_score;
use crate::domain::sentiment::{DualReading, FusedSentiment, SentimentLabel};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Inbound post waiting to be analyzed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostSubmission {
    pub text: String,
    pub author: String,
    #[serde(default)]
    pub hashtags: Option<Vec<String>>,
}

impl PostSubmission {
    pub fn new(text: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            author: author.into(),
            hashtags: None,
        }
    }

    pub fn with_hashtags(mut self, hashtags: Vec<String>) -> Self {
        self.hashtags = Some(hashtags);
        self
    }
}

/// A fully analyzed post.
///
/// Fused sentiment and relevance are computed in [`ScoredRecord::new`] from the
/// raw engine outputs and the hashtags; nothing can change them afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredRecord {
    id: String,
    text: String,
    author: String,
    created_at: DateTime<Utc>,
    hashtags: Vec<String>,
    #[serde(flatten)]
    reading: DualReading,
    #[serde(flatten)]
    fused: FusedSentiment,
    relevance_score: f64,
}

impl ScoredRecord {
    pub fn new(
        id: String,
        created_at: DateTime<Utc>,
        text: String,
        author: String,
        hashtags: Vec<String>,
        reading: DualReading,
    ) -> Self {
        let fused = FusedSentiment::fuse(&reading);
        let relevance_score = relevance_score(fused.score, hashtags.len());
        Self {
            id,
            text,
            author,
            created_at,
            hashtags,
            reading,
            fused,
            relevance_score,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn hashtags(&self) -> &[String] {
        &self.hashtags
    }

    pub fn reading(&self) -> &DualReading {
        &self.reading
    }

    pub fn compound_score(&self) -> f64 {
        self.reading.compound_score
    }

    pub fn compound_label(&self) -> SentimentLabel {
        self.reading.compound_label
    }

    pub fn polarity(&self) -> f64 {
        self.reading.polarity
    }

    pub fn subjectivity(&self) -> f64 {
        self.reading.subjectivity
    }

    pub fn fused_label(&self) -> SentimentLabel {
        self.fused.label
    }

    pub fn fused_score(&self) -> f64 {
        self.fused.score
    }

    pub fn relevance_score(&self) -> f64 {
        self.relevance_score
    }
}

/// Ordering for record listings. Both orders are descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecordSort {
    #[default]
    Newest,
    Relevance,
}

impl FromStr for RecordSort {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "timestamp" | "newest" => Ok(RecordSort::Newest),
            "relevance" => Ok(RecordSort::Relevance),
            _ => anyhow::bail!("Invalid sort: {}. Must be 'timestamp' or 'relevance'", s),
        }
    }
}

impl fmt::Display for RecordSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordSort::Newest => write!(f, "timestamp"),
            RecordSort::Relevance => write!(f, "relevance"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordQuery {
    pub label: Option<SentimentLabel>,
    pub sort: RecordSort,
    pub limit: usize,
}

impl Default for RecordQuery {
    fn default() -> Self {
        Self {
            label: None,
            sort: RecordSort::Newest,
            limit: 100,
        }
    }
}

impl RecordQuery {
    /// Applies the filter, ordering and limit to records given in insertion order.
    ///
    /// Equal sort keys list the most recently inserted record first.
    pub fn apply<'a, I>(&self, records: I) -> Vec<ScoredRecord>
    where
        I: IntoIterator<Item = &'a ScoredRecord>,
    {
        let mut selected: Vec<ScoredRecord> = records
            .into_iter()
            .filter(|r| self.label.is_none_or(|label| r.fused_label() == label))
            .cloned()
            .collect();
        selected.reverse();

        match self.sort {
            RecordSort::Newest => selected.sort_by(|a, b| b.created_at().cmp(&a.created_at())),
            RecordSort::Relevance => {
                selected.sort_by(|a, b| b.relevance_score().total_cmp(&a.relevance_score()))
            }
        }
        selected.truncate(self.limit);
        selected
    }
}
