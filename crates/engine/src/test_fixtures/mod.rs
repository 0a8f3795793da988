//! Test fixtures: a scripted PokeAPI and payload builders.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::test_fixtures::{move_payload, pokemon_payload, FakePokeApi};
//!
//! let api = FakePokeApi::new()
//!     .with_pokemon(pokemon_payload(25, "pikachu", 35.0, &[(84, "thunder-shock")]))
//!     .with_move(move_payload(84, "thunder-shock", Some(40.0)));
//! ```

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::infrastructure::ports::{FetchError, UpstreamPort};

/// Base URL the fake upstream answers under.
pub const TEST_BASE_URL: &str = "http://pokeapi.test/api/v2";

// =============================================================================
// Fake upstream
// =============================================================================

/// In-memory PokeAPI that counts every request it receives.
///
/// Unregistered URLs answer `404`. Failures registered with [`FakePokeApi::failing`]
/// take precedence over registered bodies.
#[derive(Default)]
pub struct FakePokeApi {
    responses: HashMap<String, Value>,
    failures: HashMap<String, FetchError>,
    calls: Mutex<HashMap<String, usize>>,
}

impl FakePokeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_response(mut self, url: &str, body: Value) -> Self {
        self.responses.insert(url.to_string(), body);
        self
    }

    /// Register a Pokémon under both its name and its numeric id.
    pub fn with_pokemon(self, payload: Value) -> Self {
        let id = payload["id"].clone();
        let name = payload["name"].as_str().unwrap_or_default().to_string();
        self.with_response(&format!("{TEST_BASE_URL}/pokemon/{name}/"), payload.clone())
            .with_response(&format!("{TEST_BASE_URL}/pokemon/{id}/"), payload)
    }

    pub fn with_move(self, payload: Value) -> Self {
        let id = payload["id"].clone();
        self.with_response(&format!("{TEST_BASE_URL}/move/{id}/"), payload)
    }

    pub fn failing(mut self, url: &str, error: FetchError) -> Self {
        self.failures.insert(url.to_string(), error);
        self
    }

    /// Number of requests received for `url`.
    pub fn calls(&self, url: &str) -> usize {
        self.calls.lock().unwrap().get(url).copied().unwrap_or(0)
    }
}

#[async_trait]
impl UpstreamPort for FakePokeApi {
    async fn get_json(&self, url: &str) -> Result<Value, FetchError> {
        *self.calls.lock().unwrap().entry(url.to_string()).or_default() += 1;

        if let Some(error) = self.failures.get(url) {
            return Err(error.clone());
        }
        self.responses
            .get(url)
            .cloned()
            .ok_or(FetchError::Status(404))
    }
}

// =============================================================================
// Payload builders
// =============================================================================

/// Reference URL for a move, in PokeAPI's canonical form.
pub fn move_url(id: u32) -> String {
    format!("https://pokeapi.co/api/v2/move/{id}/")
}

/// A Pokémon payload trimmed to the fields the engine reads, plus a few it ignores.
pub fn pokemon_payload(id: u32, name: &str, hp: f64, moves: &[(u32, &str)]) -> Value {
    let moves: Vec<Value> = moves
        .iter()
        .map(|(move_id, move_name)| {
            json!({
                "move": { "name": move_name, "url": move_url(*move_id) },
                "version_group_details": []
            })
        })
        .collect();

    json!({
        "id": id,
        "name": name,
        "base_experience": 64,
        "stats": [
            { "base_stat": hp, "effort": 0, "stat": { "name": "hp", "url": "https://pokeapi.co/api/v2/stat/1/" } },
            { "base_stat": 49, "effort": 0, "stat": { "name": "attack", "url": "https://pokeapi.co/api/v2/stat/2/" } }
        ],
        "moves": moves
    })
}

pub fn move_payload(id: u32, name: &str, power: Option<f64>) -> Value {
    json!({
        "id": id,
        "name": name,
        "power": power,
        "accuracy": 100,
        "pp": 35
    })
}

/// A resource listing as served by `/<kind>/?limit=...`.
pub fn listing_payload(kind: &str, entries: &[(u32, &str)]) -> Value {
    let results: Vec<Value> = entries
        .iter()
        .map(|(id, name)| {
            json!({ "name": name, "url": format!("https://pokeapi.co/api/v2/{kind}/{id}/") })
        })
        .collect();

    json!({ "count": entries.len(), "next": null, "previous": null, "results": results })
}
