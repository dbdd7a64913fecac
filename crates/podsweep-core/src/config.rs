use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

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

    let parse_bool = |var: &str, default: &str| -> Result<bool, ConfigError> {
        let raw = or_default(var, default);
        match raw.as_str() {
            "true" | "1" => Ok(true),
            "false" | "0" => Ok(false),
            other => Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: format!("expected true/false, got \"{other}\""),
            }),
        }
    };

    let api_token = require("PODSWEEP_API_TOKEN")?;
    let env = parse_environment(&or_default("PODSWEEP_ENV", "development"))?;
    let log_level = or_default("PODSWEEP_LOG_LEVEL", "info");
    let api_base_url = or_default("PODSWEEP_API_BASE_URL", "https://api.printify.com/v1");

    let request_timeout_secs = parse_u64("PODSWEEP_REQUEST_TIMEOUT_SECS", "15")?;
    let page_size = parse_u32("PODSWEEP_PAGE_SIZE", "50")?;
    if page_size == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "PODSWEEP_PAGE_SIZE".to_string(),
            reason: "page size must be at least 1".to_string(),
        });
    }
    let inter_page_delay_ms = parse_u64("PODSWEEP_INTER_PAGE_DELAY_MS", "1000")?;
    let inter_item_delay_ms = parse_u64("PODSWEEP_INTER_ITEM_DELAY_MS", "700")?;
    let max_pages = parse_usize("PODSWEEP_MAX_PAGES", "1000")?;
    let max_retries = parse_u32("PODSWEEP_MAX_RETRIES", "3")?;
    let retry_backoff_base_secs = parse_u64("PODSWEEP_RETRY_BACKOFF_BASE_SECS", "5")?;
    let lenient_fetch = parse_bool("PODSWEEP_LENIENT_FETCH", "false")?;

    Ok(AppConfig {
        env,
        log_level,
        api_token,
        api_base_url,
        request_timeout_secs,
        page_size,
        inter_page_delay_ms,
        inter_item_delay_ms,
        max_pages,
        max_retries,
        retry_backoff_base_secs,
        lenient_fetch,
    })
}

fn parse_environment(raw: &str) -> Result<Environment, ConfigError> {
    match raw {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "PODSWEEP_ENV".to_string(),
            reason: format!("unknown environment \"{other}\""),
        }),
    }
}
