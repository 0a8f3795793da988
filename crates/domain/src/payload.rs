//! PokeAPI payload shapes.
//!
//! Only the fields the battle rules read are modelled; everything else in the
//! upstream documents is ignored during deserialization.

use serde::{Deserialize, Serialize};

use crate::ids::PokemonId;

/// `{ name, url }` pair PokeAPI uses to reference other resources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedApiResource {
    pub name: String,
    pub url: String,
}

/// `GET /pokemon/{id or name}/`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonPayload {
    pub id: PokemonId,
    pub name: String,
    #[serde(default)]
    pub stats: Vec<StatEntry>,
    #[serde(default)]
    pub moves: Vec<MoveEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatEntry {
    pub base_stat: f64,
    pub stat: NamedApiResource,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveEntry {
    #[serde(rename = "move")]
    pub move_ref: NamedApiResource,
}

/// `GET /pokemon/?limit=N` and `GET /move/?limit=N`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceListPayload {
    #[serde(default)]
    pub results: Vec<NamedApiResource>,
}
