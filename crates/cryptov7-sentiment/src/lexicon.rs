//! Crypto-market lexicon scorer: the deterministic fallback classifier.

/// Crypto-domain word weights.
///
/// Keys are lowercase single words. Values in `(0.0, 1.0]` are positive,
/// in `[-1.0, 0.0)` are negative. The final score is clamped to `[-1.0, 1.0]`.
pub(crate) const LEXICON: &[(&str, f32)] = &[
    // Positive signals
    ("bullish", 0.5),
    ("rally", 0.4),
    ("rallies", 0.4),
    ("surge", 0.4),
    ("surges", 0.4),
    ("gain", 0.3),
    ("gains", 0.3),
    ("rise", 0.3),
    ("rises", 0.3),
    ("climbs", 0.3),
    ("soars", 0.5),
    ("growth", 0.3),
    ("adoption", 0.4),
    ("approval", 0.4),
    ("approved", 0.4),
    ("record", 0.3),
    ("breakout", 0.4),
    ("recovery", 0.3),
    ("good", 0.3),
    ("great", 0.4),
    ("excellent", 0.5),
    ("positive", 0.4),
    ("up", 0.2),
    // Negative signals
    ("bearish", -0.5),
    ("crash", -0.6),
    ("crashes", -0.6),
    ("plunge", -0.5),
    ("plunges", -0.5),
    ("drop", -0.3),
    ("drops", -0.3),
    ("fall", -0.3),
    ("falls", -0.3),
    ("loss", -0.4),
    ("losses", -0.4),
    ("hack", -0.7),
    ("hacked", -0.7),
    ("scam", -0.7),
    ("fraud", -0.7),
    ("ban", -0.6),
    ("banned", -0.6),
    ("lawsuit", -0.5),
    ("selloff", -0.5),
    ("liquidation", -0.5),
    ("bad", -0.4),
    ("poor", -0.4),
    ("terrible", -0.6),
    ("negative", -0.4),
    ("down", -0.2),
];

/// Score a text string using the crypto lexicon.
///
/// Splits text into lowercase words, sums matching weights, and clamps
/// the result to `[-1.0, 1.0]`. Returns `0.0` for empty or unknown text.
#[must_use]
pub fn lexicon_score(text: &str) -> f32 {
    let mut score = 0.0_f32;
    for word in text.split_whitespace() {
        let w = word
            .trim_matches(|c: char| !c.is_alphabetic())
            .to_lowercase();
        for &(lex_word, weight) in LEXICON {
            if w == lex_word {
                score += weight;
                break;
            }
        }
    }
    score.clamp(-1.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string_returns_zero() {
        assert_eq!(lexicon_score(""), 0.0);
    }

    #[test]
    fn unknown_text_returns_zero() {
        assert_eq!(lexicon_score("the quick brown fox"), 0.0);
    }

    #[test]
    fn bullish_headline_scores_positive() {
        let score = lexicon_score("Bitcoin rallies as ETF approval fuels bullish momentum");
        assert!(score > 0.0, "expected positive score, got {score}");
    }

    #[test]
    fn bearish_headline_scores_negative() {
        let score = lexicon_score("Exchange hacked, token plunges amid selloff");
        assert!(score < 0.0, "expected negative score, got {score}");
    }

    #[test]
    fn mixed_headline_scores_intermediate() {
        // rally (+0.4) + lawsuit (-0.5) = -0.1
        let score = lexicon_score("rally stalls as lawsuit looms");
        assert!(
            score > -1.0 && score < 1.0,
            "expected intermediate score, got {score}"
        );
    }

    #[test]
    fn score_clamps_to_positive_one() {
        let text = "bullish rally surge soars breakout adoption excellent record";
        assert_eq!(lexicon_score(text), 1.0);
    }

    #[test]
    fn score_clamps_to_negative_one() {
        let text = "crash hack scam fraud banned bearish selloff liquidation";
        assert_eq!(lexicon_score(text), -1.0);
    }

    #[test]
    fn punctuation_stripped_from_words() {
        let score = lexicon_score("Bitcoin soars!");
        assert!(score > 0.0, "expected positive score, got {score}");
    }

    #[test]
    fn scoring_is_deterministic() {
        let text = "bitcoin drops after record rally";
        assert_eq!(lexicon_score(text), lexicon_score(text));
    }
}
