use serde::Deserialize;

/// One page of text-search results plus the continuation token for the
/// next page, if any. The token is opaque and needs a short propagation
/// delay on the API side before it becomes valid for reuse.
#[derive(Debug)]
pub struct SearchPage {
    pub results: Vec<PlaceSummary>,
    pub next_page_token: Option<String>,
}

/// A candidate summary as returned by the text-search endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceSummary {
    pub place_id: String,
    pub name: String,
    pub rating: Option<f64>,
    #[serde(default)]
    pub user_ratings_total: u32,
}

/// Full profile from the details endpoint. Every field is optional on the
/// wire; absent fields stay unknown rather than defaulting here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlaceDetails {
    pub name: Option<String>,
    pub website: Option<String>,
    pub formatted_address: Option<String>,
    pub rating: Option<f64>,
    pub user_ratings_total: Option<u32>,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

/// One review attached to a details response.
#[derive(Debug, Clone, Deserialize)]
pub struct Review {
    #[serde(default)]
    pub text: String,
}

/// Wire envelope for the text-search endpoint.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(default)]
    pub results: Vec<PlaceSummary>,
    pub next_page_token: Option<String>,
}

/// Wire envelope for the details endpoint.
#[derive(Debug, Deserialize)]
pub(crate) struct DetailsResponse {
    pub result: Option<PlaceDetails>,
}
