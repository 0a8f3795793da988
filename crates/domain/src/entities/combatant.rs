//! Combatant entity - a Pokémon reduced to what a battle needs.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::ids::{MoveId, PokemonId};

/// A move a combatant knows. Its power is unknown until the move is fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRef {
    pub id: MoveId,
    pub name: String,
}

impl MoveRef {
    pub fn new(id: MoveId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// A battle participant.
///
/// Hit points are the only mutable state and change once per round.
#[derive(Debug, Clone, PartialEq)]
pub struct Combatant {
    id: PokemonId,
    name: String,
    hp: f64,
    moves: Vec<MoveRef>,
}

impl Combatant {
    pub fn new(id: PokemonId, name: impl Into<String>, hp: f64, moves: Vec<MoveRef>) -> Self {
        Self {
            id,
            name: name.into(),
            hp,
            moves,
        }
    }

    pub fn id(&self) -> PokemonId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hp(&self) -> f64 {
        self.hp
    }

    pub fn moves(&self) -> &[MoveRef] {
        &self.moves
    }

    /// Move ids in the order the Pokémon lists them.
    pub fn move_ids(&self) -> impl Iterator<Item = MoveId> + '_ {
        self.moves.iter().map(|m| m.id)
    }

    pub fn is_standing(&self) -> bool {
        self.hp > 0.0
    }

    pub fn set_hp(&mut self, hp: f64) {
        self.hp = hp;
    }

    /// Pick one of the combatant's moves.
    ///
    /// `pick` receives the number of known moves and returns an index in
    /// `0..len`; out-of-range indices are clamped to the last move.
    pub fn choose_move(&self, pick: impl FnOnce(usize) -> usize) -> Result<&MoveRef, DomainError> {
        let last = self
            .moves
            .len()
            .checked_sub(1)
            .ok_or_else(|| DomainError::empty_move_list(&self.name))?;
        let index = pick(self.moves.len()).min(last);
        Ok(&self.moves[index])
    }

    pub fn snapshot(&self) -> CombatantSnapshot {
        CombatantSnapshot {
            id: self.id,
            name: self.name.clone(),
            hp: self.hp,
        }
    }
}

/// Identity and hit points of a combatant at one point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatantSnapshot {
    pub id: PokemonId,
    pub name: String,
    pub hp: f64,
}
