//! Engine configuration from environment variables.

use std::str::FromStr;

use crate::infrastructure::pokeapi::{DEFAULT_POKEAPI_BASE_URL, DEFAULT_TIMEOUT_SECS};
use crate::infrastructure::resilient_fetch::RetryConfig;
use crate::use_cases::battle::BattleConfig;

/// Everything `main` needs to wire the server.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub server_host: String,
    pub server_port: u16,
    pub pokeapi_base_url: String,
    pub upstream_timeout_secs: u64,
    pub retry: RetryConfig,
    pub battle: BattleConfig,
    /// `*` or a comma-separated origin list; `None` disables CORS.
    pub cors_allowed_origins: Option<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            server_host: "0.0.0.0".into(),
            server_port: 3000,
            pokeapi_base_url: DEFAULT_POKEAPI_BASE_URL.into(),
            upstream_timeout_secs: DEFAULT_TIMEOUT_SECS,
            retry: RetryConfig::default(),
            battle: BattleConfig::default(),
            cors_allowed_origins: None,
        }
    }
}

impl EngineConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary lookup (tests pass a map).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let value = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let server_port = value("SERVER_PORT")
            .map(|raw| ("SERVER_PORT", raw))
            .or_else(|| value("PORT").map(|raw| ("PORT", raw)))
            .map(|(key, raw)| parse_or(key, &raw, defaults.server_port))
            .unwrap_or(defaults.server_port);

        let numeric = |key: &str, default: u64| {
            value(key)
                .map(|raw| parse_or(key, &raw, default))
                .unwrap_or(default)
        };

        Self {
            server_host: value("SERVER_HOST").unwrap_or(defaults.server_host),
            server_port,
            pokeapi_base_url: value("POKEAPI_BASE_URL").unwrap_or(defaults.pokeapi_base_url),
            upstream_timeout_secs: numeric("UPSTREAM_TIMEOUT_SECS", defaults.upstream_timeout_secs),
            retry: RetryConfig {
                max_attempts: value("FETCH_MAX_ATTEMPTS")
                    .map(|raw| parse_or("FETCH_MAX_ATTEMPTS", &raw, defaults.retry.max_attempts))
                    .unwrap_or(defaults.retry.max_attempts),
                base_delay_ms: numeric("FETCH_BASE_DELAY_MS", defaults.retry.base_delay_ms),
                max_delay_ms: numeric("FETCH_MAX_DELAY_MS", defaults.retry.max_delay_ms),
                jitter_factor: defaults.retry.jitter_factor,
            },
            battle: BattleConfig {
                max_rounds: value("BATTLE_MAX_ROUNDS")
                    .map(|raw| parse_or("BATTLE_MAX_ROUNDS", &raw, defaults.battle.max_rounds))
                    .unwrap_or(defaults.battle.max_rounds),
            },
            cors_allowed_origins: value("CORS_ALLOWED_ORIGINS"),
        }
    }
}

fn parse_or<T: FromStr + Copy + std::fmt::Display>(key: &str, raw: &str, default: T) -> T {
    raw.parse().unwrap_or_else(|_| {
        tracing::warn!(key, value = raw, default = %default, "Invalid configuration value, using default");
        default
    })
}
