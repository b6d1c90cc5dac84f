/// Runtime settings for the scraper, resolved from the environment.
///
/// Per-run knobs (output path, hotel limits, worker count) live on the CLI;
/// this struct only carries what describes the upstream site and the HTTP
/// client talking to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Origin of the listing site, without a trailing slash.
    pub base_url: String,
    pub user_agent: String,
    /// Per-request timeout for search-results pages.
    pub list_timeout_secs: u64,
    /// Per-request timeout for hotel detail pages.
    pub detail_timeout_secs: u64,
    /// Additional attempts after the first failure for retriable errors.
    /// `0` means every request is single-shot.
    pub max_retries: u32,
    /// Base delay for exponential backoff between retries.
    pub retry_backoff_base_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: "https://tw.trip.com".to_string(),
            user_agent: "Mozilla/5.0".to_string(),
            list_timeout_secs: 30,
            detail_timeout_secs: 25,
            max_retries: 0,
            retry_backoff_base_ms: 1_000,
        }
    }
}
