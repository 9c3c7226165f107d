use std::collections::HashMap;
use std::env::VarError;

use crate::app_config::Environment;
use crate::config::{build_app_config, parse_environment};
use crate::ConfigError;

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
fn parse_environment_production() {
    assert_eq!(parse_environment("production"), Environment::Production);
}

#[test]
fn parse_environment_unknown_defaults_to_development() {
    assert_eq!(parse_environment("staging"), Environment::Development);
}

#[test]
fn empty_env_yields_defaults() {
    let map: HashMap<&str, &str> = HashMap::new();
    let config = build_app_config(lookup_from_map(&map)).expect("defaults should parse");

    assert_eq!(config.env, Environment::Development);
    assert_eq!(config.bind_addr.port(), 8000);
    assert_eq!(config.log_level, "info");
    assert_eq!(config.news_api_base_url, "https://newsapi.org/v2");
    assert_eq!(config.news_request_timeout_secs, 10);
    assert!(config.news_api_key.is_none(), "no key configured by default");
    assert!(config.sentiment_model_url.is_none());
}

#[test]
fn blank_api_key_is_treated_as_missing() {
    let mut map: HashMap<&str, &str> = HashMap::new();
    map.insert("NEWS_API_KEY", "   ");
    let config = build_app_config(lookup_from_map(&map)).expect("config");
    assert!(config.news_api_key.is_none());
}

#[test]
fn api_key_is_picked_up_when_set() {
    let mut map: HashMap<&str, &str> = HashMap::new();
    map.insert("NEWS_API_KEY", "abc123");
    let config = build_app_config(lookup_from_map(&map)).expect("config");
    assert_eq!(config.news_api_key.as_deref(), Some("abc123"));
}

#[test]
fn invalid_bind_addr_is_rejected_with_var_name() {
    let mut map: HashMap<&str, &str> = HashMap::new();
    map.insert("CV7_BIND_ADDR", "not-an-addr");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "CV7_BIND_ADDR"),
        "expected InvalidEnvVar(CV7_BIND_ADDR), got: {result:?}"
    );
}

#[test]
fn invalid_timeout_is_rejected_with_var_name() {
    let mut map: HashMap<&str, &str> = HashMap::new();
    map.insert("CV7_NEWS_REQUEST_TIMEOUT_SECS", "ten");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(
            result,
            Err(ConfigError::InvalidEnvVar { ref var, .. })
                if var == "CV7_NEWS_REQUEST_TIMEOUT_SECS"
        ),
        "expected InvalidEnvVar(CV7_NEWS_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn debug_output_redacts_the_api_key() {
    let mut map: HashMap<&str, &str> = HashMap::new();
    map.insert("NEWS_API_KEY", "super-secret");
    let config = build_app_config(lookup_from_map(&map)).expect("config");
    let debug = format!("{config:?}");
    assert!(!debug.contains("super-secret"), "key leaked: {debug}");
    assert!(debug.contains("[redacted]"));
}
