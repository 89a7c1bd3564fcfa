//! Sentiment labels and the fusion rule.
//!
//! Every label in the system, whether it comes from the compound engine, the
//! fused score or a trending topic average, is derived by [`SentimentLabel::from_score`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Scores at or above this value are positive.
pub const POSITIVE_THRESHOLD: f64 = 0.05;
/// Scores at or below this value are negative.
pub const NEGATIVE_THRESHOLD: f64 = -0.05;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// Fixed threshold rule: `>= 0.05` positive, `<= -0.05` negative, neutral in between.
    pub fn from_score(score: f64) -> Self {
        if score >= POSITIVE_THRESHOLD {
            Self::Positive
        } else if score <= NEGATIVE_THRESHOLD {
            Self::Negative
        } else {
            Self::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SentimentLabel {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "positive" => Ok(Self::Positive),
            "negative" => Ok(Self::Negative),
            "neutral" => Ok(Self::Neutral),
            _ => anyhow::bail!(
                "Invalid sentiment label: {}. Must be 'positive', 'negative' or 'neutral'",
                s
            ),
        }
    }
}

/// Polarity engine output: polarity in [-1, 1], subjectivity in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PolarityReading {
    pub polarity: f64,
    pub subjectivity: f64,
}

/// Raw outputs of both lexical engines for one text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DualReading {
    pub compound_score: f64,
    pub compound_label: SentimentLabel,
    pub polarity: f64,
    pub subjectivity: f64,
}

impl DualReading {
    pub fn new(compound_score: f64, reading: PolarityReading) -> Self {
        Self {
            compound_score,
            compound_label: SentimentLabel::from_score(compound_score),
            polarity: reading.polarity,
            subjectivity: reading.subjectivity,
        }
    }

    /// Zero output of both engines, used for empty text.
    pub fn neutral() -> Self {
        Self::new(0.0, PolarityReading::default())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FusedSentiment {
    #[serde(rename = "fused_label")]
    pub label: SentimentLabel,
    #[serde(rename = "fused_score")]
    pub score: f64,
}

impl FusedSentiment {
    /// Unweighted mean of the compound score and the polarity.
    /// Subjectivity does not take part.
    pub fn fuse(reading: &DualReading) -> Self {
        let score = (reading.compound_score + reading.polarity) / 2.0;
        Self {
            label: SentimentLabel::from_score(score),
            score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_boundaries() {
        assert_eq!(SentimentLabel::from_score(0.05), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::from_score(-0.05), SentimentLabel::Negative);
        assert_eq!(SentimentLabel::from_score(0.049), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_score(-0.049), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_score(0.0), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_score(1.0), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::from_score(-1.0), SentimentLabel::Negative);
    }

    #[test]
    fn test_label_parsing_and_display() {
        assert_eq!(
            "Positive".parse::<SentimentLabel>().unwrap(),
            SentimentLabel::Positive
        );
        assert_eq!(SentimentLabel::Negative.to_string(), "negative");
        assert!("mixed".parse::<SentimentLabel>().is_err());
    }

    #[test]
    fn test_fused_score_is_midpoint() {
        let reading = DualReading::new(
            0.6,
            PolarityReading {
                polarity: -0.2,
                subjectivity: 0.9,
            },
        );
        let fused = FusedSentiment::fuse(&reading);
        assert!((fused.score - 0.2).abs() < 1e-12);
        assert_eq!(fused.label, SentimentLabel::Positive);
        assert_eq!(reading.compound_label, SentimentLabel::Positive);
    }

    #[test]
    fn test_fusion_ignores_subjectivity() {
        let low = DualReading::new(
            0.1,
            PolarityReading {
                polarity: -0.1,
                subjectivity: 0.0,
            },
        );
        let high = DualReading::new(
            0.1,
            PolarityReading {
                polarity: -0.1,
                subjectivity: 1.0,
            },
        );
        assert_eq!(FusedSentiment::fuse(&low), FusedSentiment::fuse(&high));
        assert_eq!(FusedSentiment::fuse(&low).label, SentimentLabel::Neutral);
    }

    #[test]
    fn test_neutral_reading() {
        let fused = FusedSentiment::fuse(&DualReading::neutral());
        assert_eq!(fused.score, 0.0);
        assert_eq!(fused.label, SentimentLabel::Neutral);
    }

    #[test]
    fn test_label_serializes_lowercase() {
        let json = serde_json::to_string(&SentimentLabel::Neutral).unwrap();
        assert_eq!(json, "\"neutral\"");
    }
}
