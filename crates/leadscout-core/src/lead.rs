//! Domain types for candidate businesses and scored leads.

/// A prospective business discovered via directory search.
///
/// Built from a search-result summary, then enriched in place from the
/// detail fetch. `place_id` never changes after construction. Detail-fetch
/// values are authoritative for `rating`/`review_count`; the summary values
/// remain as a fallback when the detail fetch fails.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub place_id: String,
    pub name: String,
    /// Star rating in 0.0–5.0, `None` when the directory has none.
    pub rating: Option<f64>,
    pub review_count: u32,
    /// Website URL from the detail fetch. `None` until enriched, and stays
    /// `None` when the business has no site or details were unavailable.
    pub website: Option<String>,
}

/// The scorer's sole input.
///
/// Every field is either a valid value or an explicit `None` — nothing is
/// silently defaulted before reaching the scorer. Defaulting (unknown
/// rating treated as best-case 5.0, unknown sentiment contributing zero)
/// is the scorer's own documented policy.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureBundle {
    pub has_website: bool,
    pub rating: Option<f64>,
    pub review_count: u32,
    /// Mean compound sentiment in [-1, 1], `None` when no reviews exist.
    pub avg_sentiment: Option<f32>,
    /// `None` when no website exists to inspect; `Some(false)` when a site
    /// exists but carries no meta description (including unreachable sites).
    pub has_meta_description: Option<bool>,
}

/// One output row: a scored lead.
#[derive(Debug, Clone)]
pub struct LeadResult {
    pub name: String,
    pub place_id: String,
    pub rating: Option<f64>,
    pub review_count: u32,
    /// Empty string when the business has no website.
    pub website: String,
    pub avg_sentiment: Option<f32>,
    /// Always within [0, 100].
    pub score: u8,
    /// Human-readable justifications in fixed order. Advisory only — never
    /// used to recompute the score.
    pub reasons: Vec<String>,
}
