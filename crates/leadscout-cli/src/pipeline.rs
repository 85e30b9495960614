//! Lead pipeline orchestration: paginate the directory search, enrich
//! each candidate with details, derive website and sentiment features,
//! score, and rank.

use std::time::Duration;

use futures::stream::{self, StreamExt};

use leadscout_core::{score_features, AppConfig, Candidate, FeatureBundle, LeadResult};
use leadscout_places::{PlaceDetails, PlacesClient};
use leadscout_web::{SignalExtractor, WebsiteSignals};

/// Run the full pipeline for one category/location search.
///
/// Pages through the directory search until `target_count` candidates are
/// accumulated or no continuation token remains, processes each candidate
/// (details, website signals, review sentiment, score), and returns the
/// results sorted by descending score. Ties keep discovery order — the
/// sort is stable and candidates are processed in discovery order
/// regardless of the concurrency width.
///
/// # Errors
///
/// Returns an error only when the directory search fails before any
/// candidate has been accumulated. A search failure mid-pagination keeps
/// the partial set; detail-fetch and website failures degrade individual
/// features instead of failing the run.
pub(crate) async fn scout_leads(
    config: &AppConfig,
    places: &PlacesClient,
    extractor: &SignalExtractor,
    category: &str,
    location: &str,
    target_count: usize,
) -> anyhow::Result<Vec<LeadResult>> {
    let candidates =
        collect_candidates(config, places, category, location, target_count).await?;
    println!("Found {} candidate businesses", candidates.len());

    let width = config.max_concurrent_candidates.max(1);
    let mut results: Vec<LeadResult> = stream::iter(candidates)
        .map(|candidate| process_candidate(config, places, extractor, candidate))
        .buffered(width)
        .collect()
        .await;

    // Stable sort: equal scores retain discovery order.
    results.sort_by(|a, b| b.score.cmp(&a.score));
    Ok(results)
}

/// Accumulate up to `target_count` candidates from the paged search.
///
/// A fixed delay precedes every continuation call: the API's opaque page
/// token needs a short propagation delay before it becomes valid.
async fn collect_candidates(
    config: &AppConfig,
    places: &PlacesClient,
    category: &str,
    location: &str,
    target_count: usize,
) -> anyhow::Result<Vec<Candidate>> {
    let mut candidates: Vec<Candidate> = Vec::new();
    let mut page_token: Option<String> = None;

    while candidates.len() < target_count {
        if page_token.is_some() && config.request_delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(config.request_delay_ms)).await;
        }

        let remaining = target_count - candidates.len();
        let page_size = config
            .search_page_size
            .min(u32::try_from(remaining).unwrap_or(u32::MAX));

        let page = match places
            .text_search(category, location, page_size, page_token.as_deref())
            .await
        {
            Ok(page) => page,
            Err(e) if candidates.is_empty() => {
                return Err(anyhow::Error::new(e)
                    .context("directory search failed before any candidates were found"));
            }
            Err(e) => {
                // Partial results beat total failure: stop paginating and
                // score what we have.
                tracing::warn!(
                    error = %e,
                    collected = candidates.len(),
                    "directory search failed mid-pagination; scoring partial results"
                );
                break;
            }
        };

        if page.results.is_empty() {
            break;
        }

        tracing::info!(
            page_results = page.results.len(),
            collected = candidates.len(),
            "directory search page fetched"
        );

        candidates.extend(page.results.into_iter().map(|summary| Candidate {
            place_id: summary.place_id,
            name: summary.name,
            rating: summary.rating,
            review_count: summary.user_ratings_total,
            website: None,
        }));

        match page.next_page_token {
            Some(token) => page_token = Some(token),
            None => break,
        }
    }

    candidates.truncate(target_count);
    Ok(candidates)
}

/// Enrich one candidate and score it. Infallible: every collaborator
/// failure degrades to an unknown feature rather than aborting the run.
async fn process_candidate(
    config: &AppConfig,
    places: &PlacesClient,
    extractor: &SignalExtractor,
    mut candidate: Candidate,
) -> LeadResult {
    // Throttle outbound detail fetches.
    if config.request_delay_ms > 0 {
        tokio::time::sleep(Duration::from_millis(config.request_delay_ms)).await;
    }

    let details = match places.place_details(&candidate.place_id).await {
        Ok(Some(details)) => details,
        Ok(None) => {
            tracing::warn!(
                place_id = %candidate.place_id,
                "place details not found; substituting empty record"
            );
            PlaceDetails::default()
        }
        Err(e) => {
            tracing::warn!(
                place_id = %candidate.place_id,
                error = %e,
                "detail fetch failed; substituting empty record"
            );
            PlaceDetails::default()
        }
    };

    // Detail values are authoritative; the search summary stays as the
    // fallback when details were unavailable.
    if let Some(rating) = details.rating {
        candidate.rating = Some(rating);
    }
    if let Some(count) = details.user_ratings_total {
        candidate.review_count = count;
    }
    candidate.website = details.website;

    let signals = match candidate.website.as_deref() {
        Some(url) => extractor.extract(url).await,
        None => WebsiteSignals::unreachable(),
    };

    let snippets: Vec<&str> = details.reviews.iter().map(|r| r.text.as_str()).collect();
    let avg_sentiment = leadscout_sentiment::average_sentiment(&snippets);

    let features = FeatureBundle {
        has_website: candidate.website.is_some(),
        rating: candidate.rating,
        review_count: candidate.review_count,
        avg_sentiment,
        has_meta_description: Some(signals.has_meta_description),
    };
    let (score, reasons) = score_features(&features);

    tracing::debug!(
        place_id = %candidate.place_id,
        score,
        reachable = signals.reachable,
        "candidate scored"
    );

    LeadResult {
        name: candidate.name,
        place_id: candidate.place_id,
        rating: candidate.rating,
        review_count: candidate.review_count,
        website: candidate.website.unwrap_or_default(),
        avg_sentiment,
        score,
        reasons,
    }
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod tests;
