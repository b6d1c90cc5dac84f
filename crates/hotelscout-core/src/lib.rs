pub mod app_config;
pub mod artifact;
pub mod catalog;
pub mod config;
pub mod destinations;
pub mod error;
pub mod hotels;
pub mod selection;

pub use app_config::AppConfig;
pub use artifact::{read_json, write_json_atomic};
pub use catalog::{flatten_catalog, hotels_for_county, load_catalog};
pub use config::{load_app_config, load_app_config_from_env};
pub use destinations::{
    build_targets, default_city_ids, default_targets, load_destinations, normalize_county_name,
    search_keyword, DestinationEntry, DestinationsFile, TAIWAN_COUNTIES,
};
pub use error::{ArtifactError, ConfigError};
pub use hotels::{
    CityScrapeResult, DestinationTarget, FleetReport, HotelRecord, SkippedDestination, TaggedHotel,
};
pub use selection::{select_exact_total, SelectionResult};
