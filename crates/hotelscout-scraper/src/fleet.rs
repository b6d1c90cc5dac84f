//! Sequential scrape across all destinations.
//!
//! Destinations run one at a time; the only concurrency is the detail-page
//! fan-out inside [`scrape_city`]. A destination that fails is recorded as
//! skipped and the run moves on.

use std::time::Instant;

use hotelscout_core::{DestinationTarget, FleetReport, SkippedDestination};

use crate::city::scrape_city;
use crate::client::TripClient;
use crate::error::error_chain;

/// Skip reason for a destination with no known city ID.
pub const REASON_CITY_ID_NOT_CONFIGURED: &str = "city id not configured";

/// Per-run limits applied to every destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FleetOptions {
    pub max_hotels_per_city: usize,
    pub detail_workers: usize,
}

impl Default for FleetOptions {
    fn default() -> Self {
        Self {
            max_hotels_per_city: 10,
            detail_workers: 5,
        }
    }
}

/// Scrapes every target in order and collects the outcome into one report.
///
/// Targets without a city ID are skipped before any request is made.
pub async fn run_fleet(
    client: &TripClient,
    targets: &[DestinationTarget],
    options: FleetOptions,
) -> FleetReport {
    let started = Instant::now();
    let mut results = Vec::new();
    let mut skipped = Vec::new();

    for target in targets {
        let county = target.county.as_str();
        let Some(city_id) = target.city_id else {
            tracing::warn!(county, reason = REASON_CITY_ID_NOT_CONFIGURED, "skipping county");
            skipped.push(SkippedDestination {
                county: county.to_string(),
                city_id: None,
                reason: REASON_CITY_ID_NOT_CONFIGURED.to_string(),
            });
            continue;
        };

        match scrape_city(
            client,
            county,
            city_id,
            options.max_hotels_per_city,
            options.detail_workers,
        )
        .await
        {
            Ok(result) => {
                tracing::info!(county, count = result.count, "county done");
                results.push(result);
            }
            Err(err) => {
                let cause = error_chain(&err);
                tracing::error!(county, city_id, error = %cause, "county scrape failed");
                skipped.push(SkippedDestination {
                    county: county.to_string(),
                    city_id: Some(city_id),
                    reason: format!("scrape failed: {cause}"),
                });
            }
        }
    }

    let report = FleetReport::from_parts(results, skipped);
    tracing::info!(
        attempted = report.total_cities_attempted,
        scraped = report.total_cities_scraped,
        hotels = report.total_hotels,
        skipped = report.skipped.len(),
        elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
        "fleet run complete"
    );
    report
}
