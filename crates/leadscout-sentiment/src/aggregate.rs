//! Snippet truncation and mean-sentiment aggregation.

use crate::scorer::lexicon_score;

/// Maximum characters of a review snippet fed to the scorer. Bounds
/// worst-case cost and memory per review.
pub const SNIPPET_MAX_CHARS: usize = 1000;

/// Computes the mean compound sentiment over a candidate's review
/// snippets, each truncated to its first [`SNIPPET_MAX_CHARS`] characters.
///
/// Returns `None` for an empty snippet list. Unknown sentiment must stay
/// distinguishable from a confirmed-neutral 0.0 all the way through the
/// pipeline, so this never substitutes zero.
#[must_use]
pub fn average_sentiment(snippets: &[&str]) -> Option<f32> {
    if snippets.is_empty() {
        return None;
    }

    let sum: f32 = snippets
        .iter()
        .map(|s| lexicon_score(truncate_snippet(s)))
        .sum();

    #[allow(clippy::cast_precision_loss)]
    let denom = snippets.len() as f32;
    Some(sum / denom)
}

/// Returns the first [`SNIPPET_MAX_CHARS`] characters of `text`,
/// respecting char boundaries.
fn truncate_snippet(text: &str) -> &str {
    match text.char_indices().nth(SNIPPET_MAX_CHARS) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
