#[derive(Clone)]
pub struct AppConfig {
    pub places_api_key: String,
    /// Results requested per directory search page. The Places text search
    /// returns at most 20 results per page, so this is clamped to 20.
    pub search_page_size: u32,
    /// Fixed pause between paged search calls and between per-candidate
    /// detail fetches, in milliseconds.
    pub request_delay_ms: u64,
    pub api_timeout_secs: u64,
    /// Timeout for probing candidate websites. Kept short: a slow site is
    /// itself a weak-presence signal and not worth waiting on.
    pub site_timeout_secs: u64,
    pub user_agent: String,
    pub max_concurrent_candidates: usize,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("places_api_key", &"[redacted]")
            .field("search_page_size", &self.search_page_size)
            .field("request_delay_ms", &self.request_delay_ms)
            .field("api_timeout_secs", &self.api_timeout_secs)
            .field("site_timeout_secs", &self.site_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field(
                "max_concurrent_candidates",
                &self.max_concurrent_candidates,
            )
            .finish()
    }
}
