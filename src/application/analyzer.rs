use crate::domain::ports::{CompoundScorer, PolarityScorer};
use crate::domain::sentiment::DualReading;
use crate::infrastructure::sentiment::{PatternEngine, VaderEngine};
use std::sync::Arc;

/// Runs both lexical engines over the same text.
///
/// Built once and shared by reference; neither engine mutates state per call,
/// so one instance can serve concurrent ingestions.
#[derive(Clone)]
pub struct DualSentimentAnalyzer {
    compound: Arc<dyn CompoundScorer>,
    polarity: Arc<dyn PolarityScorer>,
}

impl DualSentimentAnalyzer {
    pub fn new(compound: Arc<dyn CompoundScorer>, polarity: Arc<dyn PolarityScorer>) -> Self {
        Self { compound, polarity }
    }

    /// VADER for the compound score, the pattern lexicon for polarity/subjectivity.
    pub fn with_default_engines() -> Self {
        Self::new(Arc::new(VaderEngine::new()), Arc::new(PatternEngine::new()))
    }

    /// Raw outputs of both engines. Empty text yields the neutral reading.
    pub fn analyze(&self, text: &str) -> DualReading {
        if text.trim().is_empty() {
            return DualReading::neutral();
        }

        let compound = self.compound.compound(text);
        let reading = self.polarity.polarity(text);
        DualReading::new(compound, reading)
    }

    pub fn engine_names(&self) -> (&str, &str) {
        (self.compound.name(), self.polarity.name())
    }
}

impl Default for DualSentimentAnalyzer {
    fn default() -> Self {
        Self::with_default_engines()
    }
}
