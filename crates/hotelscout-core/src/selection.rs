//! Destination-fair selection of a fixed number of hotels.
//!
//! Every destination with at least one hotel gets its first hotel selected
//! before any destination gets a second. Remaining slots are then filled in
//! fleet order, each destination contributing its hotels in page order.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::hotels::{CityScrapeResult, FleetReport, SkippedDestination, TaggedHotel};

/// The persisted artifact: a bounded, tagged hotel list plus the skip list
/// from the run that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionResult {
    pub target_total: usize,
    /// Always `items.len()`, never more than `target_total`.
    pub actual_total: usize,
    /// Sorted, de-duplicated counties present in `items`.
    pub unique_counties_included: Vec<String>,
    pub items: Vec<TaggedHotel>,
    pub skipped: Vec<SkippedDestination>,
}

/// Selects `min(target_total, available)` hotels from `report`.
///
/// When `target_total` is smaller than the number of destinations with
/// hotels, only the first `target_total` of them (in fleet order) are
/// represented.
#[must_use]
pub fn select_exact_total(report: &FleetReport, target_total: usize) -> SelectionResult {
    let mut selected: Vec<TaggedHotel> = report
        .results
        .iter()
        .filter_map(|city| tag(city, 0))
        .collect();

    if selected.len() >= target_total {
        selected.truncate(target_total);
    } else {
        'fill: for city in &report.results {
            for index in 1..city.items.len() {
                if selected.len() >= target_total {
                    break 'fill;
                }
                if let Some(hotel) = tag(city, index) {
                    selected.push(hotel);
                }
            }
        }
    }

    let unique_counties_included = selected
        .iter()
        .map(|h| h.county.clone())
        .filter(|c| !c.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    SelectionResult {
        target_total,
        actual_total: selected.len(),
        unique_counties_included,
        items: selected,
        skipped: report.skipped.clone(),
    }
}

fn tag(city: &CityScrapeResult, index: usize) -> Option<TaggedHotel> {
    city.items.get(index).map(|hotel| TaggedHotel {
        hotel: hotel.clone(),
        county: city.county.clone(),
        city_id: city.city_id,
    })
}
