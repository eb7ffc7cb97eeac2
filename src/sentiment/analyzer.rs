// Sentiment collaborator contract and compound-score classification

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::{MindwellError, Result};

/// Compound scores at or above this are positive
pub const POSITIVE_THRESHOLD: f64 = 0.05;
/// Compound scores at or below this are negative
pub const NEGATIVE_THRESHOLD: f64 = -0.05;

/// Produces a compound polarity score in `[-1, 1]` for a piece of text
pub trait SentimentAnalyzer: Send + Sync {
    fn polarity(&self, text: &str) -> Result<f64>;
}

impl<F> SentimentAnalyzer for F
where
    F: Fn(&str) -> Result<f64> + Send + Sync,
{
    fn polarity(&self, text: &str) -> Result<f64> {
        self(text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub fn from_compound(score: f64) -> Self {
        if score >= POSITIVE_THRESHOLD {
            Sentiment::Positive
        } else if score <= NEGATIVE_THRESHOLD {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }

    /// Classify text, treating analyzer failures as neutral
    pub fn classify(analyzer: &dyn SentimentAnalyzer, text: &str) -> Self {
        match checked_polarity(analyzer, text) {
            Ok(score) => {
                let sentiment = Self::from_compound(score);
                tracing::debug!("Sentiment {:.3} -> {}", score, sentiment);
                sentiment
            }
            Err(e) => {
                tracing::warn!("Sentiment analysis unavailable, falling back to neutral: {}", e);
                Sentiment::Neutral
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn checked_polarity(analyzer: &dyn SentimentAnalyzer, text: &str) -> Result<f64> {
    let score = analyzer.polarity(text)?;
    if score.is_nan() {
        return Err(MindwellError::Sentiment("analyzer returned NaN".to_string()));
    }
    Ok(score.clamp(-1.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_boundaries() {
        assert_eq!(Sentiment::from_compound(0.05), Sentiment::Positive);
        assert_eq!(Sentiment::from_compound(0.0499), Sentiment::Neutral);
        assert_eq!(Sentiment::from_compound(-0.0499), Sentiment::Neutral);
        assert_eq!(Sentiment::from_compound(-0.05), Sentiment::Negative);
        assert_eq!(Sentiment::from_compound(1.0), Sentiment::Positive);
        assert_eq!(Sentiment::from_compound(-1.0), Sentiment::Negative);
    }

    #[test]
    fn test_failing_analyzer_is_neutral() {
        let failing = |_: &str| -> Result<f64> {
            Err(MindwellError::Sentiment("offline".to_string()))
        };
        assert_eq!(Sentiment::classify(&failing, "I love this"), Sentiment::Neutral);

        let nan = |_: &str| -> Result<f64> { Ok(f64::NAN) };
        assert_eq!(Sentiment::classify(&nan, "anything"), Sentiment::Neutral);
    }

    #[test]
    fn test_out_of_range_scores_are_clamped() {
        let loud = |_: &str| -> Result<f64> { Ok(-4.0) };
        assert_eq!(Sentiment::classify(&loud, "anything"), Sentiment::Negative);
    }
}
