//! Polarity and subjectivity lexicon engine
//!
//! Each lexicon entry carries a polarity in [-1, 1] and a subjectivity in [0, 1].
//! A text scores as the mean of its matched entries after modifiers:
//! 1. An intensifier ("very", "extremely") scales the next sentiment word
//! 2. A negation ("not", "never") within the next three tokens flips the
//!    polarity of the next sentiment word and halves it
//!
//! Texts without any lexicon hit score `0.0 / 0.0`.

use crate::domain::ports::PolarityScorer;
use crate::domain::sentiment::PolarityReading;
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-z0-9']+").expect("valid token regex"));

/// Number of tokens a negation stays active for.
const NEGATION_WINDOW: usize = 3;
/// Polarity multiplier applied to a negated word.
const NEGATION_FACTOR: f64 = -0.5;

/// (word, polarity, subjectivity)
const LEXICON: &[(&str, f64, f64)] = &[
    // Positive
    ("amazing", 0.6, 0.9),
    ("awesome", 1.0, 1.0),
    ("best", 1.0, 0.3),
    ("better", 0.5, 0.5),
    ("bright", 0.7, 0.8),
    ("brilliant", 0.9, 1.0),
    ("excellent", 1.0, 1.0),
    ("excited", 0.375, 0.75),
    ("exciting", 0.3, 0.8),
    ("fantastic", 0.4, 0.9),
    ("fine", 0.4167, 0.5),
    ("first", 0.25, 0.3333),
    ("good", 0.7, 0.6),
    ("great", 0.8, 0.75),
    ("happy", 0.8, 1.0),
    ("helpful", 0.5, 0.5),
    ("impressed", 1.0, 1.0),
    ("impressive", 1.0, 1.0),
    ("incredible", 0.9, 0.9),
    ("innovative", 0.5, 0.75),
    ("interesting", 0.5, 0.5),
    ("love", 0.5, 0.6),
    ("many", 0.5, 0.5),
    ("loved", 0.7, 0.8),
    ("nice", 0.6, 1.0),
    ("perfect", 1.0, 1.0),
    ("powerful", 0.3, 1.0),
    ("promising", 0.5, 0.6),
    ("remarkable", 0.75, 0.75),
    ("robust", 0.4, 0.5),
    ("smart", 0.2143, 0.6429),
    ("solid", 0.3, 0.4),
    ("strong", 0.4333, 0.7333),
    ("success", 0.3, 0.4),
    ("successful", 0.75, 0.95),
    ("supportive", 0.5, 0.5),
    ("useful", 0.3, 0.0),
    ("win", 0.8, 0.4),
    ("wonderful", 1.0, 1.0),
    ("new", 0.1364, 0.4545),
    // Negative
    ("annoying", -0.8, 0.9),
    ("awful", -1.0, 1.0),
    ("bad", -0.7, 0.6667),
    ("boring", -1.0, 1.0),
    ("broken", -0.4, 0.4),
    ("confusing", -0.4, 0.7),
    ("difficult", -0.5, 1.0),
    ("disappointed", -0.75, 0.75),
    ("disappointing", -0.6, 0.7),
    ("fail", -0.5, 0.3),
    ("failed", -0.5, 0.3),
    ("hard", -0.2917, 0.5417),
    ("hate", -0.8, 0.9),
    ("horrible", -1.0, 1.0),
    ("lacking", -0.3, 0.4),
    ("misleading", -0.5, 0.6),
    ("overblown", -0.5, 0.7),
    ("poor", -0.4, 0.6),
    ("sad", -0.5, 1.0),
    ("slow", -0.3, 0.3923),
    ("struggling", -0.4, 0.6),
    ("terrible", -1.0, 1.0),
    ("ugly", -0.7, 1.0),
    ("useless", -0.5, 0.0),
    ("worse", -0.4, 0.6),
    ("worst", -1.0, 1.0),
    ("wrong", -0.5, 0.9),
    // Mildly subjective but neutral
    ("current", 0.0, 0.4),
    ("next", 0.0, 0.0),
    ("future", 0.0, 0.125),
    ("recent", 0.0, 0.25),
];

const NEGATIONS: &[&str] = &[
    "not", "no", "never", "none", "nothing", "neither", "cannot", "can't", "cant", "don't",
    "dont", "doesn't", "doesnt", "didn't", "didnt", "isn't", "isnt", "wasn't", "wasnt",
    "won't", "wont", "aren't", "arent", "hardly", "barely",
];

const INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("really", 1.3),
    ("extremely", 1.5),
    ("incredibly", 1.5),
    ("absolutely", 1.4),
    ("totally", 1.3),
    ("so", 1.2),
    ("too", 1.2),
    ("highly", 1.3),
    ("super", 1.3),
    ("quite", 1.1),
    ("slightly", 0.5),
    ("somewhat", 0.7),
];

#[derive(Debug, Clone, Copy)]
struct Entry {
    polarity: f64,
    subjectivity: f64,
}

/// Lexicon-based polarity/subjectivity engine.
pub struct PatternEngine {
    words: HashMap<&'static str, Entry>,
    intensifiers: HashMap<&'static str, f64>,
}

impl Default for PatternEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternEngine {
    pub fn new() -> Self {
        let words = LEXICON
            .iter()
            .map(|&(word, polarity, subjectivity)| {
                (
                    word,
                    Entry {
                        polarity,
                        subjectivity,
                    },
                )
            })
            .collect();
        let intensifiers = INTENSIFIERS.iter().copied().collect();

        Self {
            words,
            intensifiers,
        }
    }

    fn is_negation(token: &str) -> bool {
        NEGATIONS.contains(&token)
    }

    fn assess(&self, text: &str) -> Vec<Entry> {
        let lowered = text.to_lowercase();
        let mut assessments = Vec::new();
        let mut negation_left = 0usize;
        let mut intensity: Option<f64> = None;

        for token in TOKEN_RE.find_iter(&lowered).map(|m| m.as_str()) {
            if Self::is_negation(token) {
                negation_left = NEGATION_WINDOW;
                continue;
            }

            if let Some(&entry) = self.words.get(token) {
                let mut polarity = entry.polarity;
                let mut subjectivity = entry.subjectivity;

                if let Some(factor) = intensity.take() {
                    polarity *= factor;
                    subjectivity *= factor;
                }
                if negation_left > 0 {
                    polarity *= NEGATION_FACTOR;
                    negation_left = 0;
                }

                assessments.push(Entry {
                    polarity: polarity.clamp(-1.0, 1.0),
                    subjectivity: subjectivity.clamp(0.0, 1.0),
                });
                continue;
            }

            if let Some(&factor) = self.intensifiers.get(token) {
                intensity = Some(factor);
                continue;
            }

            // Plain words let modifiers expire.
            intensity = None;
            negation_left = negation_left.saturating_sub(1);
        }

        assessments
    }
}

impl PolarityScorer for PatternEngine {
    fn polarity(&self, text: &str) -> PolarityReading {
        let assessments = self.assess(text);
        if assessments.is_empty() {
            return PolarityReading::default();
        }

        let n = assessments.len() as f64;
        let polarity = assessments.iter().map(|e| e.polarity).sum::<f64>() / n;
        let subjectivity = assessments.iter().map(|e| e.subjectivity).sum::<f64>() / n;

        PolarityReading {
            polarity: polarity.clamp(-1.0, 1.0),
            subjectivity: subjectivity.clamp(0.0, 1.0),
        }
    }

    fn name(&self) -> &str {
        "pattern"
    }
}
