use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if values are malformed.
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
/// Returns `ConfigError` if values are malformed.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
pub(crate) fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let or_default =
        |var: &str, default: &str| -> String { lookup(var).unwrap_or_else(|_| default.to_string()) };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
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

    let env = parse_environment(&or_default("CV7_ENV", "development"));

    let bind_addr = parse_addr("CV7_BIND_ADDR", "0.0.0.0:8000")?;
    let log_level = or_default("CV7_LOG_LEVEL", "info");

    // The key is deliberately not required at startup: a missing key turns
    // into an Unauthorized failure on first use, matching the provider docs.
    let news_api_key = lookup("NEWS_API_KEY").ok().filter(|k| !k.trim().is_empty());
    let news_api_base_url = or_default("NEWS_API_BASE_URL", "https://newsapi.org/v2");
    let sentiment_model_url = lookup("CV7_SENTIMENT_MODEL_URL").ok();

    let news_request_timeout_secs = parse_u64("CV7_NEWS_REQUEST_TIMEOUT_SECS", "10")?;
    let news_user_agent = or_default("CV7_NEWS_USER_AGENT", "cryptov7/0.1 (news-enrichment)");

    let rate_limit_max_requests = parse_usize("CV7_RATE_LIMIT_MAX_REQUESTS", "60")?;
    let rate_limit_window_secs = parse_u64("CV7_RATE_LIMIT_WINDOW_SECS", "60")?;

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        news_api_key,
        news_api_base_url,
        sentiment_model_url,
        news_request_timeout_secs,
        news_user_agent,
        rate_limit_max_requests,
        rate_limit_window_secs,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
pub(crate) fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}
