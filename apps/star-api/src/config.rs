//! Application configuration loaded from environment variables.

use std::env;
use std::str::FromStr;

use star_infra::{FixtureConfig, LatencyWindow};

const DEFAULT_API_URL: &str = "http://localhost:3001";

/// Which post backend to wire in. Fixed for the lifetime of the process.
#[derive(Debug, Clone)]
pub enum BackendConfig {
    /// In-memory fixture data.
    Fixture(FixtureConfig),
    /// Remote REST API at `base_url`.
    Remote { base_url: String },
}

impl BackendConfig {
    pub fn name(&self) -> &'static str {
        match self {
            BackendConfig::Fixture(_) => "fixture",
            BackendConfig::Remote { .. } => "remote",
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub backend: BackendConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Load configuration from any key lookup.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let use_mocks = var("USE_MOCKS")
            .map(|v| v.trim().eq_ignore_ascii_case("true") || v.trim() == "1")
            .unwrap_or(false);

        let backend = if use_mocks {
            BackendConfig::Fixture(FixtureConfig {
                latency: LatencyWindow::from_millis(
                    parse_var(&var, "MOCK_MIN_DELAY_MS").unwrap_or(500),
                    parse_var(&var, "MOCK_MAX_DELAY_MS").unwrap_or(1000),
                ),
                failure_rate: parse_var(&var, "MOCK_ERROR_RATE").unwrap_or(0.0),
            })
        } else {
            BackendConfig::Remote {
                base_url: var("API_URL")
                    .filter(|url| !url.trim().is_empty())
                    .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            }
        };

        Self {
            host: var("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: parse_var(&var, "PORT").unwrap_or(8080),
            backend,
        }
    }
}

fn parse_var<T: FromStr>(var: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    var(key).and_then(|s| s.trim().parse().ok())
}
