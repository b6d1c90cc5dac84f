//! Scrape of a single destination: list page, then detail-page addresses.

use std::collections::HashMap;

use futures::stream::{self, StreamExt};
use hotelscout_core::{search_keyword, CityScrapeResult};

use crate::client::TripClient;
use crate::error::ScraperError;
use crate::parse::parse_list_page;

/// Scrapes up to `max_hotels` hotels for one destination.
///
/// Detail pages are fetched with at most `detail_workers` requests in flight.
/// Results are merged by hotel ID, so the output keeps search-results order
/// no matter which detail fetch finishes first. A detail address replaces the
/// list-page snippet only when the detail page produced one.
///
/// # Errors
///
/// Returns [`ScraperError`] if the search-results page cannot be fetched.
/// Detail-page failures are absorbed.
pub async fn scrape_city(
    client: &TripClient,
    county: &str,
    city_id: u32,
    max_hotels: usize,
    detail_workers: usize,
) -> Result<CityScrapeResult, ScraperError> {
    let url = client.list_url(city_id, &search_keyword(county));
    tracing::info!(county, city_id, url = %url, "scraping county");

    let html = client.fetch_list_page(&url).await?;
    let mut items = parse_list_page(&html, max_hotels);
    tracing::debug!(county, parsed = items.len(), "parsed search results");

    let hotel_ids: Vec<u64> = items.iter().map(|h| h.hotel_id).collect();
    let addresses: HashMap<u64, Option<String>> = stream::iter(hotel_ids)
        .map(|hotel_id| client.fetch_detail_address(hotel_id))
        .buffer_unordered(detail_workers.max(1))
        .collect()
        .await;

    let mut refined = 0usize;
    for item in &mut items {
        if let Some(Some(address)) = addresses.get(&item.hotel_id) {
            item.address = Some(address.clone());
            refined += 1;
        }
    }
    tracing::debug!(county, refined, "merged detail addresses");

    Ok(CityScrapeResult::new(county.to_string(), city_id, url, items))
}
