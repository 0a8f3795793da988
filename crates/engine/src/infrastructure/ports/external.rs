//! External service port traits (PokeAPI and the read-through gateway in front of it).

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use super::error::{FetchError, GatewayError};

// =============================================================================
// Upstream
// =============================================================================

/// A single JSON GET against the upstream API.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UpstreamPort: Send + Sync {
    async fn get_json(&self, url: &str) -> Result<Value, FetchError>;
}

// =============================================================================
// Read-through gateway
// =============================================================================

/// Upstream resource families the gateway serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Pokemon,
    Move,
}

impl ResourceKind {
    /// Prefix of single-resource cache keys (`"move-33"`).
    pub fn key_prefix(&self) -> &'static str {
        match self {
            Self::Pokemon => "pokemon",
            Self::Move => "move",
        }
    }

    /// Cache key of the kind's full listing.
    pub fn index_key(&self) -> &'static str {
        match self {
            Self::Pokemon => "pokemons",
            Self::Move => "moves",
        }
    }

    /// Path segment of the kind on the upstream API.
    pub fn upstream_path(&self) -> &'static str {
        match self {
            Self::Pokemon => "pokemon",
            Self::Move => "move",
        }
    }

    pub fn cache_key(&self, identifier: &str) -> String {
        format!("{}-{}", self.key_prefix(), identifier)
    }
}

/// Read-through access to upstream resources.
///
/// Hits never touch the network; misses are fetched (with retries), stored,
/// and returned. Entries never expire and are never evicted.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ResourceGateway: Send + Sync {
    async fn fetch(&self, kind: ResourceKind, identifier: &str) -> Result<Arc<Value>, GatewayError>;

    async fn fetch_index(&self, kind: ResourceKind) -> Result<Arc<Value>, GatewayError>;

    /// Identifiers of the single resources of `kind` cached right now.
    ///
    /// A point-in-time view: concurrent requests may add keys at any moment.
    fn cached_identifiers(&self, kind: ResourceKind) -> HashSet<String>;
}
