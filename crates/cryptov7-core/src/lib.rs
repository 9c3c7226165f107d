//! Shared configuration and domain primitives for the CryptoV7 news service.

mod app_config;
mod config;
pub mod query;

#[cfg(test)]
mod config_test;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use query::{NewsQuery, QueryKey, QueryKind};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
