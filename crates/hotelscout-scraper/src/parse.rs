//! Search-results page parsing.
//!
//! A results page is a flat run of hotel cards, each introduced by a
//! `data-offline-hotelId="<id>"` attribute. Cards are cut at the next marker
//! and fed to [`parse_hotel_card`], which pulls fields out with targeted
//! regexes. Extraction is best-effort: a field that cannot be found is
//! `None`, and no card can fail the page.

use std::sync::LazyLock;

use hotelscout_core::HotelRecord;
use regex::Regex;

use crate::parse_helpers::{clean_text, effective_price, floor_char_boundary, format_price, twd_amounts};

/// Byte window for the last card on a page, which has no following marker.
pub(crate) const LAST_CARD_WINDOW: usize = 120_000;

static CARD_MARKER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)data-offline-hotelId="(\d+)""#).expect("valid card marker regex")
});
static NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)class="hotelName"[^>]*>(.*?)</span>"#).expect("valid name regex")
});
static SCORE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)class="score"[^>]*>\s*([0-9]+(?:\.[0-9]+)?)\s*</span>"#)
        .expect("valid score regex")
});
static ROOM_PRICE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)class="room-price"[^>]*>(.*?)</div>\s*</div>\s*</div>"#)
        .expect("valid room price regex")
});
static ADDRESS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)class="position-desc"[^>]*>(.*?)</span>"#).expect("valid address regex")
});

/// Parses up to `limit` hotels from a search-results page, in page order.
///
/// A page without card markers yields an empty `Vec`.
#[must_use]
pub fn parse_list_page(html: &str, limit: usize) -> Vec<HotelRecord> {
    let markers: Vec<(usize, u64)> = CARD_MARKER_RE
        .captures_iter(html)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let hotel_id = caps.get(1)?.as_str().parse::<u64>().ok()?;
            Some((whole.start(), hotel_id))
        })
        .collect();

    markers
        .iter()
        .enumerate()
        .take(limit)
        .map(|(i, &(start, hotel_id))| {
            let end = markers.get(i + 1).map_or_else(
                || floor_char_boundary(html, start.saturating_add(LAST_CARD_WINDOW)),
                |&(next_start, _)| next_start,
            );
            parse_hotel_card(hotel_id, &html[start..end])
        })
        .collect()
}

/// Extracts one hotel from a single card fragment.
#[must_use]
pub fn parse_hotel_card(hotel_id: u64, card: &str) -> HotelRecord {
    let name = first_capture(&NAME_RE, card).and_then(clean_text);
    let rating = first_capture(&SCORE_RE, card).and_then(|s| s.parse::<f64>().ok());
    let address = first_capture(&ADDRESS_RE, card).and_then(clean_text);

    let price_scope = first_capture(&ROOM_PRICE_RE, card).unwrap_or(card);
    let price_twd = effective_price(&twd_amounts(price_scope));
    let price_text = price_twd.map(format_price);

    HotelRecord {
        hotel_id,
        name,
        price_twd,
        price_text,
        rating,
        address,
    }
}

fn first_capture<'h>(re: &Regex, haystack: &'h str) -> Option<&'h str> {
    re.captures(haystack)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

#[cfg(test)]
#[path = "parse_test.rs"]
mod tests;
