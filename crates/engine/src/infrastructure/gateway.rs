//! Read-through gateway in front of PokeAPI.

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::infrastructure::cache::ResponseCache;
use crate::infrastructure::ports::{GatewayError, ResourceGateway, ResourceKind, UpstreamPort};

/// Listing size requested for index endpoints; covers every resource PokeAPI serves.
pub const INDEX_LIMIT: u32 = 2000;

/// Shared cache of raw upstream documents.
pub type SharedResponseCache = Arc<ResponseCache<Arc<Value>>>;

/// Serves upstream documents from the shared cache, fetching and storing misses.
pub struct CachedApiGateway {
    cache: SharedResponseCache,
    upstream: Arc<dyn UpstreamPort>,
    base_url: String,
}

impl CachedApiGateway {
    pub fn new(cache: SharedResponseCache, upstream: Arc<dyn UpstreamPort>, base_url: &str) -> Self {
        Self {
            cache,
            upstream,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn resource_url(&self, kind: ResourceKind, identifier: &str) -> String {
        format!("{}/{}/{}/", self.base_url, kind.upstream_path(), identifier)
    }

    pub fn index_url(&self, kind: ResourceKind) -> String {
        format!("{}/{}/?limit={}", self.base_url, kind.upstream_path(), INDEX_LIMIT)
    }

    async fn read_through(&self, key: String, url: String) -> Result<Arc<Value>, GatewayError> {
        if let Some(cached) = self.cache.get(&key) {
            tracing::debug!(key = %key, "Cache hit");
            return Ok(cached);
        }

        tracing::debug!(key = %key, "Cache miss");
        let body = self
            .upstream
            .get_json(&url)
            .await
            .map_err(|e| GatewayError::upstream_exhausted(key.clone(), e))?;

        let body = Arc::new(body);
        self.cache.insert(key, Arc::clone(&body));
        Ok(body)
    }
}

#[async_trait]
impl ResourceGateway for CachedApiGateway {
    async fn fetch(&self, kind: ResourceKind, identifier: &str) -> Result<Arc<Value>, GatewayError> {
        validate_identifier(identifier)?;
        self.read_through(kind.cache_key(identifier), self.resource_url(kind, identifier))
            .await
    }

    async fn fetch_index(&self, kind: ResourceKind) -> Result<Arc<Value>, GatewayError> {
        self.read_through(kind.index_key().to_string(), self.index_url(kind))
            .await
    }

    fn cached_identifiers(&self, kind: ResourceKind) -> HashSet<String> {
        self.cache
            .keys_with_prefix(&format!("{}-", kind.key_prefix()))
    }
}

/// Identifiers become one path segment of the upstream URL, so anything that
/// would end the segment, start a query, or walk up the path is refused.
fn validate_identifier(identifier: &str) -> Result<(), GatewayError> {
    let forbidden = identifier.is_empty()
        || identifier == "."
        || identifier == ".."
        || identifier.contains(['/', '?', '#', '\\']);
    if forbidden {
        return Err(GatewayError::InvalidIdentifier(identifier.to_string()));
    }
    Ok(())
}
