//! Review sentiment analysis for LeadScout.
//!
//! Scores individual review snippets with a lexicon tuned to
//! small-business review language and aggregates them into a per-business
//! mean compound polarity. An empty review set yields "unknown" rather
//! than neutral — the pipeline must be able to tell the two apart.

pub mod aggregate;
pub mod scorer;

pub use aggregate::{average_sentiment, SNIPPET_MAX_CHARS};
pub use scorer::lexicon_score;
