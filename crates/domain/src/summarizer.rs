//! Reduces upstream payloads to the shapes the battle and index endpoints use.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::entities::{Combatant, MoveRef};
use crate::error::DomainError;
use crate::payload::{PokemonPayload, ResourceListPayload};

/// Name of the stat that seeds a combatant's hit points.
pub const HP_STAT: &str = "hp";

/// Extract the numeric id PokeAPI embeds in a resource URL.
///
/// The URL is split on `/` and the second-to-last component is parsed, so
/// `https://pokeapi.co/api/v2/move/33/` yields `33`. Without the trailing
/// slash the component is the resource kind and the URL is rejected.
pub fn resource_id_from_url<T: FromStr>(url: &str) -> Result<T, DomainError> {
    let components: Vec<&str> = url.split('/').collect();
    components
        .len()
        .checked_sub(2)
        .and_then(|index| components[index].parse().ok())
        .ok_or_else(|| DomainError::malformed_reference(url))
}

/// Reduce a full Pokémon payload to a combatant.
pub fn summarize(payload: &PokemonPayload) -> Result<Combatant, DomainError> {
    let hp = payload
        .stats
        .iter()
        .find(|entry| entry.stat.name == HP_STAT)
        .map(|entry| entry.base_stat)
        .ok_or_else(|| DomainError::missing_stat(&payload.name, HP_STAT))?;

    let moves = payload
        .moves
        .iter()
        .map(|entry| {
            resource_id_from_url(&entry.move_ref.url)
                .map(|id| MoveRef::new(id, entry.move_ref.name.clone()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Combatant::new(payload.id, payload.name.clone(), hp, moves))
}

/// One row of a resource index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEntry {
    pub id: u32,
    pub name: String,
}

/// Turn a resource listing into `{ id, name }` rows sorted by name.
pub fn summarize_index(listing: &ResourceListPayload) -> Result<Vec<IndexEntry>, DomainError> {
    let mut entries = listing
        .results
        .iter()
        .map(|resource| {
            resource_id_from_url(&resource.url).map(|id| IndexEntry {
                id,
                name: resource.name.clone(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}
