use thiserror::Error;

use crate::app_config::AppConfig;

/// Maximum page size accepted by the Places text search endpoint.
const MAX_SEARCH_PAGE_SIZE: u32 = 20;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

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

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let places_api_key = require("GOOGLE_PLACES_API_KEY")?;

    let search_page_size =
        parse_u32("LEADSCOUT_SEARCH_PAGE_SIZE", "20")?.min(MAX_SEARCH_PAGE_SIZE);
    let request_delay_ms = parse_u64("LEADSCOUT_REQUEST_DELAY_MS", "1500")?;
    let api_timeout_secs = parse_u64("LEADSCOUT_API_TIMEOUT_SECS", "10")?;
    let site_timeout_secs = parse_u64("LEADSCOUT_SITE_TIMEOUT_SECS", "6")?;
    let user_agent = or_default(
        "LEADSCOUT_USER_AGENT",
        "LeadScoutBot/1.0 (lead-prospecting)",
    );
    let max_concurrent_candidates = parse_usize("LEADSCOUT_MAX_CONCURRENT_CANDIDATES", "1")?;

    Ok(AppConfig {
        places_api_key,
        search_page_size,
        request_delay_ms,
        api_timeout_secs,
        site_timeout_secs,
        user_agent,
        max_concurrent_candidates,
    })
}
