use std::time::Duration;

use reqwest::Client;

use crate::error::WebError;
use crate::parse;

/// Derived, read-only snapshot of one website fetch.
///
/// Computed once per candidate per run; never cached across runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebsiteSignals {
    pub reachable: bool,
    pub has_meta_description: bool,
    /// First email-looking substring on the page, if any.
    pub contact_email: Option<String>,
    pub has_json_ld: bool,
}

impl WebsiteSignals {
    /// The all-false signal set used both when a fetch fails and when the
    /// candidate has no website URL at all. The two cases are deliberately
    /// indistinguishable downstream.
    #[must_use]
    pub fn unreachable() -> Self {
        Self {
            reachable: false,
            has_meta_description: false,
            contact_email: None,
            has_json_ld: false,
        }
    }
}

/// Fetches candidate websites and extracts [`WebsiteSignals`].
///
/// Issues exactly one bounded-timeout GET per call with a descriptive
/// user-agent. No retries, no redirect-chain inspection beyond reqwest's
/// defaults.
pub struct SignalExtractor {
    client: Client,
}

impl SignalExtractor {
    /// Creates an extractor with the configured timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`WebError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, WebError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(timeout_secs))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Fetches `url` and derives its signals.
    ///
    /// Infallible by design: any network failure, timeout, or non-2xx
    /// status collapses to [`WebsiteSignals::unreachable`]. No
    /// partial-failure distinction is surfaced to the caller.
    pub async fn extract(&self, url: &str) -> WebsiteSignals {
        let Some(body) = self.fetch(url).await else {
            return WebsiteSignals::unreachable();
        };

        WebsiteSignals {
            reachable: true,
            has_meta_description: parse::has_meta_description(&body),
            contact_email: parse::find_contact_email(&body),
            has_json_ld: parse::has_json_ld(&body),
        }
    }

    async fn fetch(&self, url: &str) -> Option<String> {
        let response = match self.client.get(url).send().await {
            Ok(r) => r,
            Err(e) => {
                tracing::debug!(url, error = %e, "website fetch failed");
                return None;
            }
        };
        let response = match response.error_for_status() {
            Ok(r) => r,
            Err(e) => {
                tracing::debug!(url, error = %e, "website returned error status");
                return None;
            }
        };
        match response.text().await {
            Ok(body) => Some(body),
            Err(e) => {
                tracing::debug!(url, error = %e, "website body read failed");
                None
            }
        }
    }
}
