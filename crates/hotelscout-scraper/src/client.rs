//! HTTP client for the listing site's search and detail pages.

use std::time::Duration;

use hotelscout_core::AppConfig;
use reqwest::{Client, Url};

use crate::error::ScraperError;
use crate::rate_limit::retry_with_backoff;

const LIST_PATH: &str = "/hotels/list";
const DETAIL_PATH: &str = "/hotels/detail/";

/// HTTP client for the listing site.
///
/// Non-2xx responses become typed errors. Each request carries its own
/// timeout (list and detail pages have separate budgets); a timeout fails
/// only that request.
#[derive(Debug, Clone)]
pub struct TripClient {
    pub(crate) client: Client,
    base_url: Url,
    list_timeout: Duration,
    pub(crate) detail_timeout: Duration,
    max_retries: u32,
    backoff_base_ms: u64,
}

impl TripClient {
    /// Creates a client from the resolved application config.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::InvalidBaseUrl`] if `config.base_url` does not
    /// parse, or [`ScraperError::Http`] if the `reqwest::Client` cannot be built.
    pub fn new(config: &AppConfig) -> Result<Self, ScraperError> {
        let base_url = Url::parse(&config.base_url).map_err(|e| ScraperError::InvalidBaseUrl {
            base_url: config.base_url.clone(),
            reason: e.to_string(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ScraperError::InvalidBaseUrl {
                base_url: config.base_url.clone(),
                reason: "URL cannot be used as a base".to_string(),
            });
        }

        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self {
            client,
            base_url,
            list_timeout: Duration::from_secs(config.list_timeout_secs),
            detail_timeout: Duration::from_secs(config.detail_timeout_secs),
            max_retries: config.max_retries,
            backoff_base_ms: config.retry_backoff_base_ms,
        })
    }

    /// Builds the search-results URL for a city, e.g.
    /// `https://tw.trip.com/hotels/list?city=617&searchWord=%E5%8F%B0%E5%8C%97`.
    #[must_use]
    pub fn list_url(&self, city_id: u32, keyword: &str) -> String {
        let mut url = self.base_url.join(LIST_PATH).unwrap_or_else(|_| self.base_url.clone());
        url.query_pairs_mut()
            .append_pair("city", &city_id.to_string())
            .append_pair("searchWord", keyword);
        url.to_string()
    }

    /// Builds the detail page URL for a hotel.
    #[must_use]
    pub fn detail_url(&self, hotel_id: u64) -> String {
        let mut url = self
            .base_url
            .join(DETAIL_PATH)
            .unwrap_or_else(|_| self.base_url.clone());
        url.query_pairs_mut()
            .append_pair("hotelid", &hotel_id.to_string());
        url.to_string()
    }

    /// Fetches a search-results page body.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::RateLimited`]: HTTP 429 after all retries.
    /// - [`ScraperError::UnexpectedStatus`]: any other non-2xx status.
    /// - [`ScraperError::Http`]: network, timeout or body decode failure.
    pub async fn fetch_list_page(&self, url: &str) -> Result<String, ScraperError> {
        self.fetch_text(url, self.list_timeout).await
    }

    pub(crate) async fn fetch_text(
        &self,
        url: &str,
        timeout: Duration,
    ) -> Result<String, ScraperError> {
        retry_with_backoff(self.max_retries, self.backoff_base_ms, || async move {
            let response = self
                .client
                .get(url)
                .timeout(timeout)
                .header(
                    reqwest::header::ACCEPT,
                    "text/html,application/xhtml+xml;q=0.9,*/*;q=0.8",
                )
                .header(reqwest::header::ACCEPT_LANGUAGE, "zh-TW,zh;q=0.9,en;q=0.8")
                .send()
                .await?;
            let status = response.status();

            if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
                let retry_after_secs = response
                    .headers()
                    .get(reqwest::header::RETRY_AFTER)
                    .and_then(|v| v.to_str().ok())
                    .and_then(|s| s.parse::<u64>().ok())
                    .unwrap_or(60);
                return Err(ScraperError::RateLimited {
                    url: url.to_owned(),
                    retry_after_secs,
                });
            }

            if !status.is_success() {
                return Err(ScraperError::UnexpectedStatus {
                    status: status.as_u16(),
                    url: url.to_owned(),
                });
            }

            Ok(response.text().await?)
        })
        .await
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
