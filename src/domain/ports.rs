use crate::domain::sentiment::PolarityReading;

/// Lexical engine producing a single compound polarity in [-1, 1].
///
/// Implementations hold only read-only lexicon state and are shared by reference.
pub trait CompoundScorer: Send + Sync {
    fn compound(&self, text: &str) -> f64;

    fn name(&self) -> &str;
}

/// Lexical engine producing polarity in [-1, 1] and subjectivity in [0, 1].
pub trait PolarityScorer: Send + Sync {
    fn polarity(&self, text: &str) -> PolarityReading;

    fn name(&self) -> &str;
}
