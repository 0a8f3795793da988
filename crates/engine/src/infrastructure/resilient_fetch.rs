//! Resilient upstream fetcher with exponential backoff retry
//!
//! PokeAPI intermittently answers with gateway errors, so every failed
//! request is retried until the attempt budget is spent. The last failure is
//! returned so callers can surface its status code.

use async_trait::async_trait;
use rand::Rng;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

use crate::infrastructure::ports::{FetchError, UpstreamPort};

/// Configuration for retry behavior
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Total number of attempts, including the first one (minimum 1)
    pub max_attempts: u32,
    /// Base delay in milliseconds before the first retry
    pub base_delay_ms: u64,
    /// Maximum delay in milliseconds (caps exponential growth)
    pub max_delay_ms: u64,
    /// Jitter factor (0.0-1.0) for randomizing delays to prevent thundering herd
    pub jitter_factor: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay_ms: 100,
            max_delay_ms: 2000,
            jitter_factor: 0.2,
        }
    }
}

/// Wrapper that adds retry logic to any upstream client
pub struct ResilientFetcher {
    inner: Arc<dyn UpstreamPort>,
    config: RetryConfig,
}

impl ResilientFetcher {
    pub fn new(inner: Arc<dyn UpstreamPort>, config: RetryConfig) -> Self {
        Self { inner, config }
    }

    /// Calculate delay for a given retry number using exponential backoff with jitter
    fn calculate_delay(&self, retry: u32) -> u64 {
        let base = self.config.base_delay_ms;
        // Exponential: base * 2^(retry-1)
        let exponential = base.saturating_mul(2u64.saturating_pow(retry.saturating_sub(1)));
        let capped = exponential.min(self.config.max_delay_ms);

        // Add jitter: ±jitter_factor around the delay
        let jitter_range = (capped as f64 * self.config.jitter_factor) as i64;
        if jitter_range > 0 {
            let jitter = rand::thread_rng().gen_range(-jitter_range..=jitter_range);
            (capped as i64 + jitter).max(0) as u64
        } else {
            capped
        }
    }
}

#[async_trait]
impl UpstreamPort for ResilientFetcher {
    async fn get_json(&self, url: &str) -> Result<Value, FetchError> {
        let max_attempts = self.config.max_attempts.max(1);
        let mut attempt = 1;

        loop {
            match self.inner.get_json(url).await {
                Ok(body) => {
                    if attempt > 1 {
                        tracing::info!(attempt, url, "Upstream request succeeded after retry");
                    }
                    return Ok(body);
                }
                Err(e) if attempt < max_attempts => {
                    let delay = self.calculate_delay(attempt);
                    tracing::warn!(
                        attempt,
                        max_attempts,
                        delay_ms = delay,
                        error = %e,
                        url,
                        "Upstream request failed, retrying..."
                    );
                    tokio::time::sleep(Duration::from_millis(delay)).await;
                    attempt += 1;
                }
                Err(e) => {
                    tracing::error!(
                        attempts = attempt,
                        error = %e,
                        url,
                        "Upstream request failed after all retry attempts"
                    );
                    return Err(e);
                }
            }
        }
    }
}
