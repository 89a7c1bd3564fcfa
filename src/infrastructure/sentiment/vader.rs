//! Compound polarity engine backed by VADER
//!
//! VADER (Valence Aware Dictionary and sEntiment Reasoner) is tuned for short
//! social media text, which makes it a good fit for posts: it understands
//! capitalization, punctuation emphasis, and common slang.
//!
//! # Example
//! ```rust
//! use sentipulse::domain::ports::CompoundScorer;
//! use sentipulse::infrastructure::sentiment::VaderEngine;
//!
//! let engine = VaderEngine::new();
//! let score = engine.compound("Absolutely love the new developments in #AI");
//! assert!(score > 0.05);
//! ```

use crate::domain::ports::CompoundScorer;
use vader_sentiment::SentimentIntensityAnalyzer;

/// Thread-safe wrapper around the VADER analyzer.
///
/// The lexicon is loaded once at construction; scoring does not mutate it.
pub struct VaderEngine {
    analyzer: SentimentIntensityAnalyzer<'static>,
}

impl VaderEngine {
    pub fn new() -> Self {
        Self {
            analyzer: SentimentIntensityAnalyzer::new(),
        }
    }
}

impl Default for VaderEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl CompoundScorer for VaderEngine {
    /// Compound score in [-1, 1]; `0.0` for empty text.
    fn compound(&self, text: &str) -> f64 {
        if text.trim().is_empty() {
            return 0.0;
        }

        let scores = self.analyzer.polarity_scores(text);
        scores
            .get("compound")
            .copied()
            .unwrap_or(0.0)
            .clamp(-1.0, 1.0)
    }

    fn name(&self) -> &str {
        "vader"
    }
}
