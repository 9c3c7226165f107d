use serde::{Deserialize, Serialize};

/// Three-way sentiment label attached to a headline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

/// A sentiment label with a confidence score in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sentiment {
    pub label: SentimentLabel,
    pub score: f32,
}

/// Lexicon scores this close to zero are treated as neutral.
const NEUTRAL_BAND: f32 = 0.05;

impl Sentiment {
    /// The degraded label: neutral with zero confidence. Used when a
    /// headline could not be classified at all.
    #[must_use]
    pub fn degraded() -> Self {
        Self {
            label: SentimentLabel::Neutral,
            score: 0.0,
        }
    }

    /// Map a lexicon score in `[-1, 1]` onto a label.
    ///
    /// The fixed confidences (0.75 for a direction, 0.5 for neutral) mirror
    /// the rule-based fallback this replaces; the lexicon cannot produce a
    /// calibrated probability.
    #[must_use]
    pub fn from_lexicon(score: f32) -> Self {
        if score > NEUTRAL_BAND {
            Self {
                label: SentimentLabel::Positive,
                score: 0.75,
            }
        } else if score < -NEUTRAL_BAND {
            Self {
                label: SentimentLabel::Negative,
                score: 0.75,
            }
        } else {
            Self {
                label: SentimentLabel::Neutral,
                score: 0.5,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_score_maps_to_positive_label() {
        let s = Sentiment::from_lexicon(0.4);
        assert_eq!(s.label, SentimentLabel::Positive);
        assert!((s.score - 0.75).abs() < f32::EPSILON);
    }

    #[test]
    fn negative_score_maps_to_negative_label() {
        let s = Sentiment::from_lexicon(-0.4);
        assert_eq!(s.label, SentimentLabel::Negative);
    }

    #[test]
    fn near_zero_score_is_neutral() {
        assert_eq!(Sentiment::from_lexicon(0.0).label, SentimentLabel::Neutral);
        assert_eq!(Sentiment::from_lexicon(0.04).label, SentimentLabel::Neutral);
        assert_eq!(
            Sentiment::from_lexicon(-0.04).label,
            SentimentLabel::Neutral
        );
    }

    #[test]
    fn degraded_is_neutral_with_zero_confidence() {
        let s = Sentiment::degraded();
        assert_eq!(s.label, SentimentLabel::Neutral);
        assert_eq!(s.score, 0.0);
    }

    #[test]
    fn label_serializes_snake_case() {
        let json = serde_json::to_string(&SentimentLabel::Positive).expect("serialize");
        assert_eq!(json, "\"positive\"");
    }
}
