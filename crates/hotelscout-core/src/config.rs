use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build configuration from an arbitrary env-var lookup so the parsing rules
/// can be tested against a plain `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let defaults = AppConfig::default();

    let or_default =
        |var: &str, default: &str| -> String { lookup(var).unwrap_or_else(|_| default.to_string()) };

    let parse_u32 = |var: &str, default: u32| -> Result<u32, ConfigError> {
        match lookup(var) {
            Ok(raw) => raw.trim().parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            }),
            Err(_) => Ok(default),
        }
    };

    let parse_u64 = |var: &str, default: u64| -> Result<u64, ConfigError> {
        match lookup(var) {
            Ok(raw) => raw.trim().parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            }),
            Err(_) => Ok(default),
        }
    };

    let base_url = or_default("HOTELSCOUT_BASE_URL", &defaults.base_url);
    let base_url = validate_base_url(&base_url)?;
    let user_agent = or_default("HOTELSCOUT_USER_AGENT", &defaults.user_agent);

    let list_timeout_secs = parse_u64("HOTELSCOUT_LIST_TIMEOUT_SECS", defaults.list_timeout_secs)?;
    let detail_timeout_secs =
        parse_u64("HOTELSCOUT_DETAIL_TIMEOUT_SECS", defaults.detail_timeout_secs)?;
    let max_retries = parse_u32("HOTELSCOUT_MAX_RETRIES", defaults.max_retries)?;
    let retry_backoff_base_ms = parse_u64(
        "HOTELSCOUT_RETRY_BACKOFF_BASE_MS",
        defaults.retry_backoff_base_ms,
    )?;

    if list_timeout_secs == 0 || detail_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: if list_timeout_secs == 0 {
                "HOTELSCOUT_LIST_TIMEOUT_SECS".to_string()
            } else {
                "HOTELSCOUT_DETAIL_TIMEOUT_SECS".to_string()
            },
            reason: "timeout must be at least 1 second".to_string(),
        });
    }

    Ok(AppConfig {
        base_url,
        user_agent,
        list_timeout_secs,
        detail_timeout_secs,
        max_retries,
        retry_backoff_base_ms,
    })
}

/// Accepts `http(s)://host[...]` and strips any trailing slash.
fn validate_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let host = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"));
    match host {
        Some(h) if !h.is_empty() => Ok(trimmed.to_string()),
        _ => Err(ConfigError::InvalidEnvVar {
            var: "HOTELSCOUT_BASE_URL".to_string(),
            reason: format!("\"{raw}\" is not an http(s) URL"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
