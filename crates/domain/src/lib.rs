//! Pokebattle domain - pure battle rules over PokeAPI data.
//!
//! Nothing in this crate performs I/O or draws random numbers: payloads are
//! handed in already fetched and move selection is injected by the caller.

pub mod combat;
pub mod entities;
pub mod error;
pub mod ids;
pub mod payload;
pub mod prefetch;
pub mod summarizer;

pub use entities::{
    AttackSummary, BattleHistory, BattleReport, BattleRound, Combatant, CombatantRoundView,
    CombatantSnapshot, MoveDetail, MoveRef, PreBattleData, Winner,
};
pub use error::DomainError;
pub use ids::{MoveId, PokemonId};
pub use payload::{NamedApiResource, PokemonPayload, ResourceListPayload};
pub use summarizer::{resource_id_from_url, summarize, summarize_index, IndexEntry};
