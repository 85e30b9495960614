//! Lexicon scorer for small-business review sentiment.

/// Review-language word weights.
///
/// Keys are lowercase single words. Values in `(0.0, 1.0]` are positive,
/// in `[-1.0, 0.0)` are negative. The final score is clamped to
/// `[-1.0, 1.0]`.
pub(crate) const LEXICON: &[(&str, f32)] = &[
    // Positive signals
    ("great", 0.4),
    ("good", 0.3),
    ("excellent", 0.5),
    ("amazing", 0.5),
    ("awesome", 0.5),
    ("wonderful", 0.5),
    ("fantastic", 0.5),
    ("love", 0.5),
    ("loved", 0.5),
    ("best", 0.5),
    ("recommend", 0.4),
    ("recommended", 0.4),
    ("friendly", 0.4),
    ("helpful", 0.4),
    ("professional", 0.4),
    ("clean", 0.3),
    ("quality", 0.3),
    ("fresh", 0.3),
    ("fast", 0.3),
    ("affordable", 0.3),
    ("delicious", 0.4),
    ("happy", 0.3),
    // Negative signals
    ("bad", -0.4),
    ("terrible", -0.6),
    ("horrible", -0.6),
    ("awful", -0.6),
    ("worst", -0.6),
    ("rude", -0.5),
    ("dirty", -0.5),
    ("slow", -0.3),
    ("overpriced", -0.4),
    ("expensive", -0.3),
    ("scam", -0.7),
    ("avoid", -0.5),
    ("disappointed", -0.5),
    ("disappointing", -0.5),
    ("unprofessional", -0.5),
    ("broken", -0.4),
    ("refund", -0.3),
    ("waited", -0.3),
    ("waiting", -0.3),
    ("never", -0.2),
];

/// Score a text string using the review lexicon.
///
/// Splits text into lowercase words, sums matching weights, and clamps
/// the result to `[-1.0, 1.0]`. Returns `0.0` for empty or unknown text —
/// distinguishing confirmed-neutral from no-reviews-at-all is the
/// aggregator's job, not this function's.
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
        assert_eq!(lexicon_score("we went there on a tuesday"), 0.0);
    }

    #[test]
    fn positive_review_scores_positive() {
        let score = lexicon_score("friendly staff and great service");
        assert!(score > 0.0, "expected positive score, got {score}");
    }

    #[test]
    fn negative_review_scores_negative() {
        let score = lexicon_score("rude owner and dirty tables");
        assert!(score < 0.0, "expected negative score, got {score}");
    }

    #[test]
    fn mixed_review_scores_intermediate() {
        // great (+0.4) + slow (-0.3) = +0.1
        let score = lexicon_score("great food but slow service");
        assert!(
            score > -1.0 && score < 1.0,
            "expected intermediate score, got {score}"
        );
    }

    #[test]
    fn score_clamps_to_positive_one() {
        let text = "great excellent best love recommend friendly helpful amazing quality";
        assert_eq!(lexicon_score(text), 1.0);
    }

    #[test]
    fn score_clamps_to_negative_one() {
        let text = "terrible horrible worst rude dirty scam avoid unprofessional";
        assert_eq!(lexicon_score(text), -1.0);
    }

    #[test]
    fn punctuation_stripped_from_words() {
        let score = lexicon_score("excellent!");
        assert!(score > 0.0, "expected positive score, got {score}");
    }
}
