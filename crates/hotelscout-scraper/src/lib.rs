pub mod city;
pub mod client;
pub mod detail;
pub mod error;
pub mod fleet;
pub mod parse;
mod parse_helpers;
mod rate_limit;

pub use city::scrape_city;
pub use client::TripClient;
pub use detail::extract_street_address;
pub use error::{error_chain, ScraperError};
pub use fleet::{run_fleet, FleetOptions, REASON_CITY_ID_NOT_CONFIGURED};
pub use parse::{parse_hotel_card, parse_list_page};
