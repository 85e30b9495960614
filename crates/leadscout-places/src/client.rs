//! HTTP client for the Places REST API.
//!
//! Wraps `reqwest` with Places-specific error handling, API key management,
//! and typed response deserialization. Every endpoint checks the `"status"`
//! field in the JSON envelope and surfaces API-level failures as
//! [`PlacesError::Api`].

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::PlacesError;
use crate::types::{DetailsResponse, PlaceDetails, SearchPage, SearchResponse};

const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api/place/";

/// Field mask requested from the details endpoint. Anything beyond this is
/// billed without being used.
const DETAILS_FIELDS: &str = "name,website,formatted_address,rating,user_ratings_total,reviews";

/// Client for the Places REST API.
///
/// Manages the HTTP client, API key, and endpoint URLs. Use
/// [`PlacesClient::new`] for production or [`PlacesClient::with_base_url`]
/// to point at a mock server in tests.
pub struct PlacesClient {
    client: Client,
    api_key: String,
    text_search_url: Url,
    details_url: Url,
}

impl PlacesClient {
    /// Creates a new client pointed at the production Places API.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, PlacesError> {
        Self::with_base_url(api_key, timeout_secs, user_agent, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`PlacesError::InvalidBaseUrl`] if
    /// `base_url` is not a valid URL.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, PlacesError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Normalise: ensure the base URL ends with exactly one slash so that
        // joining endpoint paths appends rather than replacing the last
        // path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let invalid = |reason: String| PlacesError::InvalidBaseUrl {
            url: base_url.to_owned(),
            reason,
        };
        let base = Url::parse(&normalised).map_err(|e| invalid(e.to_string()))?;
        let text_search_url = base
            .join("textsearch/json")
            .map_err(|e| invalid(e.to_string()))?;
        let details_url = base
            .join("details/json")
            .map_err(|e| invalid(e.to_string()))?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            text_search_url,
            details_url,
        })
    }

    /// Searches the directory for businesses matching `"{category} in
    /// {location}"`, optionally continuing from an earlier page's token.
    ///
    /// The wire protocol serves fixed pages of up to 20 results with no
    /// page-size parameter, so `page_size` is applied client-side by
    /// truncating the returned page.
    ///
    /// A `ZERO_RESULTS` status is a successful empty page, not an error.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::Api`] if the API reports any other non-OK status.
    /// - [`PlacesError::Http`] on network failure or non-2xx HTTP status.
    /// - [`PlacesError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn text_search(
        &self,
        category: &str,
        location: &str,
        page_size: u32,
        page_token: Option<&str>,
    ) -> Result<SearchPage, PlacesError> {
        let query = format!("{category} in {location}");
        let mut params = vec![("query", query.as_str())];
        if let Some(token) = page_token {
            params.push(("pagetoken", token));
        }

        let url = self.build_url(&self.text_search_url, &params);
        let body = self.request_json(&url).await?;
        Self::check_api_status(&body)?;

        let mut parsed: SearchResponse =
            serde_json::from_value(body).map_err(|e| PlacesError::Deserialize {
                context: format!("text_search(query={query})"),
                source: e,
            })?;
        parsed.results.truncate(page_size as usize);

        Ok(SearchPage {
            results: parsed.results,
            next_page_token: parsed.next_page_token,
        })
    }

    /// Fetches the full profile for one candidate, including up to five
    /// review snippets.
    ///
    /// Returns `Ok(None)` when the API reports the place as gone
    /// (`NOT_FOUND`/`ZERO_RESULTS`) — the caller treats that like an empty
    /// detail record rather than a failure.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::Api`] if the API reports any other non-OK status.
    /// - [`PlacesError::Http`] on network failure or non-2xx HTTP status.
    /// - [`PlacesError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn place_details(
        &self,
        place_id: &str,
    ) -> Result<Option<PlaceDetails>, PlacesError> {
        let url = self.build_url(
            &self.details_url,
            &[("place_id", place_id), ("fields", DETAILS_FIELDS)],
        );
        let body = self.request_json(&url).await?;

        let status = body.get("status").and_then(serde_json::Value::as_str);
        if matches!(status, Some("NOT_FOUND" | "ZERO_RESULTS")) {
            return Ok(None);
        }
        Self::check_api_status(&body)?;

        let parsed: DetailsResponse =
            serde_json::from_value(body).map_err(|e| PlacesError::Deserialize {
                context: format!("place_details(place_id={place_id})"),
                source: e,
            })?;

        Ok(parsed.result)
    }

    /// Builds a full request URL with properly percent-encoded query
    /// parameters, appending the API key last.
    fn build_url(&self, endpoint: &Url, params: &[(&str, &str)]) -> Url {
        let mut url = endpoint.clone();
        {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in params {
                pairs.append_pair(k, v);
            }
            pairs.append_pair("key", &self.api_key);
        }
        url
    }

    /// Sends a GET request, asserts a 2xx HTTP status, and parses the
    /// response body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] on network failure or a non-2xx status.
    /// Returns [`PlacesError::Deserialize`] if the body is not valid JSON.
    async fn request_json(&self, url: &Url) -> Result<serde_json::Value, PlacesError> {
        let response = self.client.get(url.clone()).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| PlacesError::Deserialize {
            context: url.path().to_string(),
            source: e,
        })
    }

    /// Checks the top-level `"status"` field and returns an error for
    /// anything other than `OK`/`ZERO_RESULTS`.
    fn check_api_status(body: &serde_json::Value) -> Result<(), PlacesError> {
        let status = body
            .get("status")
            .and_then(serde_json::Value::as_str)
            .unwrap_or("MISSING_STATUS");
        if matches!(status, "OK" | "ZERO_RESULTS") {
            return Ok(());
        }
        let message = body
            .get("error_message")
            .and_then(serde_json::Value::as_str)
            .unwrap_or("no error message provided")
            .to_string();
        Err(PlacesError::Api {
            status: status.to_string(),
            message,
        })
    }
}
