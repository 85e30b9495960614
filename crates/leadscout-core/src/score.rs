//! Lead scoring: five weighted sub-signals folded into a 0–100 score.
//!
//! Each sub-signal is normalized to [0, 1] where 1 always means "more
//! reason to contact this lead" (no website, poor rating, thin review
//! history, unhappy customers, missing on-page SEO). The weighted sum is
//! scaled to [0, 100] and clamped. Reason strings are generated from
//! independent display thresholds and are never fed back into the score.

use crate::lead::FeatureBundle;

/// Sub-signal weights. Sum to 1.0 so the raw score stays in [0, 1].
const W_MISSING_WEBSITE: f64 = 0.25;
const W_LOW_RATING: f64 = 0.20;
const W_LOW_REVIEW_COUNT: f64 = 0.15;
const W_NEGATIVE_SENTIMENT: f64 = 0.25;
const W_MISSING_META: f64 = 0.15;

/// Review volume at which the low-review-count sub-signal bottoms out.
const REVIEW_COUNT_CAP: u32 = 200;

/// Display threshold for the "Low rating" reason: sub-signal > 0.3,
/// equivalently rating < 3.5.
const LOW_RATING_REASON_THRESHOLD: f64 = 0.3;

/// Display threshold for the "Low review count" reason.
const LOW_REVIEW_COUNT_REASON_THRESHOLD: u32 = 20;

/// Display threshold for the "Negative review sentiment" reason:
/// sub-signal > 0.25, equivalently `1 - (avg + 1) / 2 > 0.25`.
const NEGATIVE_SENTIMENT_REASON_THRESHOLD: f64 = 0.25;

/// Score a feature bundle, returning the 0–100 lead score and the ordered
/// reason list.
///
/// Scorer policy for unknowns: an unknown rating is treated as a best-case
/// 5.0 (contributes nothing), and unknown sentiment contributes nothing —
/// distinct from a confirmed-neutral compound of 0.0, which contributes a
/// 0.5 sub-signal. An unknown meta-description state also contributes
/// nothing; only an explicit `Some(false)` is penalized.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn score_features(features: &FeatureBundle) -> (u8, Vec<String>) {
    let f_missing_website = if features.has_website { 0.0 } else { 1.0 };

    let rating = features.rating.unwrap_or(5.0);
    let f_low_rating = 1.0 - (rating / 5.0);

    let capped = features.review_count.min(REVIEW_COUNT_CAP);
    let f_low_review_count = 1.0 - f64::from(capped) / f64::from(REVIEW_COUNT_CAP);

    let f_negative_sentiment = features
        .avg_sentiment
        .map_or(0.0, |avg| 1.0 - ((f64::from(avg) + 1.0) / 2.0));

    let f_missing_meta = if features.has_meta_description == Some(false) {
        1.0
    } else {
        0.0
    };

    let raw = W_MISSING_WEBSITE * f_missing_website
        + W_LOW_RATING * f_low_rating
        + W_LOW_REVIEW_COUNT * f_low_review_count
        + W_NEGATIVE_SENTIMENT * f_negative_sentiment
        + W_MISSING_META * f_missing_meta;

    let score = (raw * 100.0).round().clamp(0.0, 100.0) as u8;

    let mut reasons = Vec::new();
    if !features.has_website {
        reasons.push("No website found".to_string());
    }
    if f_low_rating > LOW_RATING_REASON_THRESHOLD {
        reasons.push(format!("Low rating: {rating}"));
    }
    if features.review_count < LOW_REVIEW_COUNT_REASON_THRESHOLD {
        reasons.push(format!("Low review count: {}", features.review_count));
    }
    if f_negative_sentiment > NEGATIVE_SENTIMENT_REASON_THRESHOLD {
        reasons.push("Negative review sentiment".to_string());
    }
    if features.has_meta_description == Some(false) {
        reasons.push("Missing meta description".to_string());
    }

    (score, reasons)
}

#[cfg(test)]
#[path = "score_test.rs"]
mod tests;
