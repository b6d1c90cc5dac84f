//! Street address lookup from hotel detail pages.

use std::sync::LazyLock;

use regex::Regex;

use crate::client::TripClient;

static STREET_ADDRESS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)"streetAddress":"(.*?)""#).expect("valid street address regex")
});

impl TripClient {
    /// Fetches a hotel's detail page and returns its structured street address.
    ///
    /// Never fails: any transport, status or parse problem yields
    /// `(hotel_id, None)`.
    pub async fn fetch_detail_address(&self, hotel_id: u64) -> (u64, Option<String>) {
        let url = self.detail_url(hotel_id);
        match self.fetch_text(&url, self.detail_timeout).await {
            Ok(body) => (hotel_id, extract_street_address(&body)),
            Err(err) => {
                tracing::debug!(hotel_id, url = %url, error = %err, "detail fetch failed");
                (hotel_id, None)
            }
        }
    }
}

/// Finds the first `"streetAddress":"..."` value in a detail page.
///
/// The address sits in JSON embedded in script content, where quotes arrive
/// escaped once (`\"`) or twice (`\\\"`); both forms are unescaped first.
#[must_use]
pub fn extract_street_address(body: &str) -> Option<String> {
    let unescaped = body.replace(r#"\\\""#, "\"").replace(r#"\""#, "\"");
    let raw = STREET_ADDRESS_RE
        .captures(&unescaped)
        .and_then(|caps| caps.get(1))?
        .as_str();
    let decoded = html_escape::decode_html_entities(raw);
    let trimmed = decoded.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
