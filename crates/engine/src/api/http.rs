//! HTTP routes.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::Value;
use std::sync::Arc;

use pokebattle_domain::{BattleReport, IndexEntry, MoveId};

use crate::app::App;
use crate::infrastructure::ports::GatewayError;
use crate::use_cases::{CatalogError, RunBattleError};

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/", get(health))
        .route("/api/health", get(health))
        .route("/api/v1/pokemon", get(list_pokemon))
        .route("/api/v1/pokemon/{identifier}", get(get_pokemon))
        .route("/api/v1/attack", get(list_attacks))
        .route("/api/v1/attack/{attack_id}", get(get_attack))
        .route("/api/v1/battle/{identifier1}/{identifier2}", get(battle))
        .fallback(not_found)
}

async fn health() -> &'static str {
    "OK"
}

async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}

// =============================================================================
// Catalog
// =============================================================================

async fn list_pokemon(State(app): State<Arc<App>>) -> Result<Json<Vec<IndexEntry>>, ApiError> {
    let entries = app.use_cases.catalog.list_pokemon().await?;
    Ok(Json(entries))
}

async fn get_pokemon(
    State(app): State<Arc<App>>,
    Path(identifier): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let doc = app.use_cases.catalog.pokemon(&identifier).await?;
    Ok(Json(Value::clone(&doc)))
}

async fn list_attacks(State(app): State<Arc<App>>) -> Result<Json<Vec<IndexEntry>>, ApiError> {
    let entries = app.use_cases.catalog.list_attacks().await?;
    Ok(Json(entries))
}

async fn get_attack(
    State(app): State<Arc<App>>,
    Path(attack_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_move_id(&attack_id)?;
    let doc = app.use_cases.catalog.attack(id).await?;
    Ok(Json(Value::clone(&doc)))
}

fn parse_move_id(value: &str) -> Result<MoveId, ApiError> {
    value
        .trim()
        .parse()
        .map_err(|_| ApiError::BadRequest("Attack id must be a positive integer".to_string()))
}

// =============================================================================
// Battle
// =============================================================================

async fn battle(
    State(app): State<Arc<App>>,
    Path((identifier1, identifier2)): Path<(String, String)>,
) -> Result<Json<BattleReport>, ApiError> {
    let report = app
        .use_cases
        .battle
        .execute(&identifier1, &identifier2)
        .await?;
    Ok(Json(report))
}

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug)]
pub enum ApiError {
    NotFound,
    BadRequest(String),
    /// Upstream gave up on us; its last status is passed on with an empty body.
    Upstream(StatusCode),
    Internal(String),
}

impl axum::response::IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND.into_response(),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            ApiError::Upstream(status) => status.into_response(),
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Request failed");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

impl From<CatalogError> for ApiError {
    fn from(e: CatalogError) -> Self {
        let message = e.to_string();
        tracing::warn!(error = %message, "Catalog request failed");
        match e {
            CatalogError::Gateway(GatewayError::InvalidIdentifier(_)) => ApiError::BadRequest(message),
            CatalogError::Gateway(e) => match e.status_code() {
                Some(404) => ApiError::NotFound,
                Some(status) => ApiError::Upstream(
                    StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
                ),
                None => ApiError::Upstream(StatusCode::BAD_GATEWAY),
            },
            CatalogError::Domain(_) | CatalogError::Payload(_) => ApiError::Internal(message),
        }
    }
}

/// A battle fails as a whole, whatever the cause.
impl From<RunBattleError> for ApiError {
    fn from(e: RunBattleError) -> Self {
        ApiError::Internal(e.to_string())
    }
}
