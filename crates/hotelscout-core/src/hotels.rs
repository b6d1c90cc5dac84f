use serde::{Deserialize, Serialize};

/// One hotel as scraped from a search-results card, optionally refined by
/// its detail page.
///
/// Every field except `hotel_id` is best-effort: third-party markup changes
/// shape without notice, so a missing field is `None` rather than an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotelRecord {
    /// Site-assigned hotel ID. Identical on the list page and the detail page.
    pub hotel_id: u64,
    pub name: Option<String>,
    /// Lowest displayed nightly price in whole New Taiwan dollars.
    pub price_twd: Option<u64>,
    /// Display form of `price_twd`, e.g. `"TWD 1,000"`.
    pub price_text: Option<String>,
    pub rating: Option<f64>,
    /// Street address. The detail page value replaces the list snippet when
    /// one is available.
    pub address: Option<String>,
}

/// A [`HotelRecord`] copied out of its city result and tagged with where it
/// came from. Serialized flat, so consumers see `county` and `city_id` next
/// to the record fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaggedHotel {
    #[serde(flatten)]
    pub hotel: HotelRecord,
    pub county: String,
    pub city_id: u32,
}

/// A destination to scrape. `city_id` is `None` when no listing-site city
/// is known for the county; such targets are skipped, never guessed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DestinationTarget {
    pub county: String,
    pub city_id: Option<u32>,
}

/// Output of scraping a single destination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityScrapeResult {
    pub county: String,
    pub city_id: u32,
    /// Exact search URL that produced `items`.
    pub query_url: String,
    pub count: usize,
    /// Hotels in search-results page order.
    pub items: Vec<HotelRecord>,
}

impl CityScrapeResult {
    #[must_use]
    pub fn new(county: String, city_id: u32, query_url: String, items: Vec<HotelRecord>) -> Self {
        Self {
            county,
            city_id,
            query_url,
            count: items.len(),
            items,
        }
    }
}

/// A destination that produced no result, with the reason why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedDestination {
    pub county: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city_id: Option<u32>,
    pub reason: String,
}

/// Everything a fleet run produced, in fleet order.
///
/// A county appears in at most one of `results` and `skipped`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FleetReport {
    pub total_cities_attempted: usize,
    pub total_cities_scraped: usize,
    pub total_hotels: usize,
    pub results: Vec<CityScrapeResult>,
    pub skipped: Vec<SkippedDestination>,
}

impl FleetReport {
    /// Builds a report and derives the totals from its parts.
    #[must_use]
    pub fn from_parts(results: Vec<CityScrapeResult>, skipped: Vec<SkippedDestination>) -> Self {
        let total_hotels = results.iter().map(|r| r.count).sum();
        Self {
            total_cities_attempted: results.len() + skipped.len(),
            total_cities_scraped: results.len(),
            total_hotels,
            results,
            skipped,
        }
    }
}
