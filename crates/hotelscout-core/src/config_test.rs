use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn build_app_config_uses_defaults_when_env_is_empty() {
    let map: HashMap<&str, &str> = HashMap::new();
    let config = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(config, AppConfig::default());
    assert_eq!(config.base_url, "https://tw.trip.com");
    assert_eq!(config.list_timeout_secs, 30);
    assert_eq!(config.detail_timeout_secs, 25);
    assert_eq!(config.max_retries, 0);
}

#[test]
fn build_app_config_reads_overrides() {
    let mut map = HashMap::new();
    map.insert("HOTELSCOUT_BASE_URL", "http://127.0.0.1:8080/");
    map.insert("HOTELSCOUT_USER_AGENT", "hotelscout-test/0.1");
    map.insert("HOTELSCOUT_LIST_TIMEOUT_SECS", "5");
    map.insert("HOTELSCOUT_DETAIL_TIMEOUT_SECS", "3");
    map.insert("HOTELSCOUT_MAX_RETRIES", "2");
    map.insert("HOTELSCOUT_RETRY_BACKOFF_BASE_MS", "10");

    let config = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(config.base_url, "http://127.0.0.1:8080");
    assert_eq!(config.user_agent, "hotelscout-test/0.1");
    assert_eq!(config.list_timeout_secs, 5);
    assert_eq!(config.detail_timeout_secs, 3);
    assert_eq!(config.max_retries, 2);
    assert_eq!(config.retry_backoff_base_ms, 10);
}

#[test]
fn build_app_config_rejects_non_numeric_retries() {
    let mut map = HashMap::new();
    map.insert("HOTELSCOUT_MAX_RETRIES", "lots");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "HOTELSCOUT_MAX_RETRIES"),
        "expected InvalidEnvVar(HOTELSCOUT_MAX_RETRIES), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_zero_timeout() {
    let mut map = HashMap::new();
    map.insert("HOTELSCOUT_DETAIL_TIMEOUT_SECS", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "HOTELSCOUT_DETAIL_TIMEOUT_SECS"),
        "expected InvalidEnvVar(HOTELSCOUT_DETAIL_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_base_url_without_scheme() {
    let mut map = HashMap::new();
    map.insert("HOTELSCOUT_BASE_URL", "tw.trip.com");
    let result = build_app_config(lookup_from_map(&map));
    assert!(matches!(
        result,
        Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "HOTELSCOUT_BASE_URL"
    ));
}

#[test]
fn validate_base_url_rejects_bare_scheme() {
    assert!(validate_base_url("https://").is_err());
    assert_eq!(
        validate_base_url("https://tw.trip.com//").unwrap(),
        "https://tw.trip.com"
    );
}
