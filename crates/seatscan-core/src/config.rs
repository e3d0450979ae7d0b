use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a numeric env var cannot be parsed.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process, without touching `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a numeric env var cannot be parsed.
pub fn load_config_from_env() -> Result<AppConfig, ConfigError> {
    build_config(|key| std::env::var(key))
}

/// Build the configuration using the provided env-var lookup function.
///
/// The parsing logic is decoupled from the actual environment so it can be
/// tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
fn build_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    Ok(AppConfig {
        list_url: or_default("SEATSCAN_LIST_URL", "https://api.affluences.com/app/v3/sites"),
        site_url_base: or_default(
            "SEATSCAN_SITE_URL",
            "https://api.affluences.com/app/v3/sites",
        ),
        site_page_base: or_default("SEATSCAN_SITE_PAGE_URL", "https://affluences.com/site"),
        origin: or_default("SEATSCAN_ORIGIN", "https://affluences.com"),
        referer: or_default("SEATSCAN_REFERER", "https://affluences.com/"),
        user_agent: or_default("SEATSCAN_USER_AGENT", "seatscan/0.1 (library-seat-harvester)"),
        accept: or_default("SEATSCAN_ACCEPT", "application/json, text/plain, */*"),
        category_id: parse_u32("SEATSCAN_CATEGORY_ID", "1")?,
        request_timeout_secs: parse_u64("SEATSCAN_REQUEST_TIMEOUT_SECS", "20")?,
        inter_request_delay_ms: parse_u64("SEATSCAN_INTER_REQUEST_DELAY_MS", "120")?,
        max_retries: parse_u32("SEATSCAN_MAX_RETRIES", "0")?,
        retry_backoff_base_secs: parse_u64("SEATSCAN_RETRY_BACKOFF_BASE_SECS", "1")?,
        log_level: or_default("SEATSCAN_LOG_LEVEL", "info"),
    })
}
