//! Catalog use cases.
//!
//! Plain lookups served straight from the read-through gateway: single
//! Pokémon and move documents are passed through unchanged, the indexes are
//! reduced to `{ id, name }` rows sorted by name.

use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;

use pokebattle_domain::{summarize_index, DomainError, IndexEntry, MoveId, ResourceListPayload};

use crate::infrastructure::ports::{GatewayError, ResourceGateway, ResourceKind};

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Upstream error: {0}")]
    Gateway(#[from] GatewayError),
    #[error("Invalid listing: {0}")]
    Domain(#[from] DomainError),
    #[error("Unexpected listing payload: {0}")]
    Payload(String),
}

pub struct Catalog {
    gateway: Arc<dyn ResourceGateway>,
}

impl Catalog {
    pub fn new(gateway: Arc<dyn ResourceGateway>) -> Self {
        Self { gateway }
    }

    /// Full upstream document for a Pokémon, by name or id.
    pub async fn pokemon(&self, identifier: &str) -> Result<Arc<Value>, CatalogError> {
        Ok(self.gateway.fetch(ResourceKind::Pokemon, identifier).await?)
    }

    /// Full upstream document for a move.
    pub async fn attack(&self, id: MoveId) -> Result<Arc<Value>, CatalogError> {
        Ok(self
            .gateway
            .fetch(ResourceKind::Move, &id.to_string())
            .await?)
    }

    pub async fn list_pokemon(&self) -> Result<Vec<IndexEntry>, CatalogError> {
        self.index(ResourceKind::Pokemon).await
    }

    pub async fn list_attacks(&self) -> Result<Vec<IndexEntry>, CatalogError> {
        self.index(ResourceKind::Move).await
    }

    async fn index(&self, kind: ResourceKind) -> Result<Vec<IndexEntry>, CatalogError> {
        let raw = self.gateway.fetch_index(kind).await?;
        let listing = ResourceListPayload::deserialize(&*raw)
            .map_err(|e| CatalogError::Payload(e.to_string()))?;
        Ok(summarize_index(&listing)?)
    }
}
