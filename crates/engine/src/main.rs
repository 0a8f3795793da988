//! Pokebattle Engine - Main entry point.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::{HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokebattle_engine::api;
use pokebattle_engine::infrastructure::{
    cache::ResponseCache,
    config::EngineConfig,
    gateway::{CachedApiGateway, SharedResponseCache},
    pokeapi::PokeApiClient,
    ports::{RandomPort, ResourceGateway},
    random::SystemRandom,
    resilient_fetch::ResilientFetcher,
};
use pokebattle_engine::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from repo root (the engine may be run from `crates/engine`).
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokebattle_engine=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Pokebattle Engine");

    // Load configuration
    let config = EngineConfig::from_env();

    // Create infrastructure clients
    let pokeapi = Arc::new(PokeApiClient::with_timeout(config.upstream_timeout_secs));
    tracing::info!(
        "PokeAPI client configured for {} with retry: max_attempts={}, base_delay_ms={}",
        config.pokeapi_base_url,
        config.retry.max_attempts,
        config.retry.base_delay_ms
    );
    let upstream = Arc::new(ResilientFetcher::new(pokeapi, config.retry.clone()));

    let cache: SharedResponseCache = Arc::new(ResponseCache::new());
    let gateway: Arc<dyn ResourceGateway> =
        Arc::new(CachedApiGateway::new(cache, upstream, &config.pokeapi_base_url));
    let random: Arc<dyn RandomPort> = Arc::new(SystemRandom::new());

    // Create application
    let app = Arc::new(App::new(gateway, random, config.battle.clone()));

    let mut router = api::http::routes()
        .with_state(app)
        .layer(TraceLayer::new_for_http());

    if let Some(cors) = build_cors_layer(config.cors_allowed_origins.as_deref()) {
        router = router.layer(cors);
    }

    // Start server
    let addr: SocketAddr = format!("{}:{}", config.server_host, config.server_port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}

fn build_cors_layer(allowed_origins: Option<&str>) -> Option<CorsLayer> {
    let allowed_origins = allowed_origins?;

    // Every route is a read.
    let cors = CorsLayer::new().allow_methods([Method::GET, Method::OPTIONS]);

    if allowed_origins == "*" {
        return Some(cors.allow_origin(Any));
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .filter_map(|s| HeaderValue::from_str(s).ok())
        .collect();

    if origins.is_empty() {
        tracing::warn!("CORS_ALLOWED_ORIGINS set but no valid origins found; CORS disabled");
        return None;
    }

    Some(cors.allow_origin(origins))
}
