//! Unified error types for the domain layer
//!
//! Every variant describes upstream data the battle rules cannot work with.
//! None of them has a fallback: the request that produced the data fails.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required base stat is missing from a Pokémon payload
    #[error("Pokemon {pokemon} has no '{stat}' stat")]
    MissingStat { pokemon: String, stat: &'static str },

    /// A resource reference URL does not end in a numeric id
    #[error("Malformed resource reference: {0}")]
    MalformedReference(String),

    /// A combatant was asked for a random move but knows none
    #[error("Pokemon {pokemon} has no moves to choose from")]
    EmptyMoveList { pokemon: String },
}

impl DomainError {
    /// Create a missing stat error
    pub fn missing_stat(pokemon: impl Into<String>, stat: &'static str) -> Self {
        Self::MissingStat {
            pokemon: pokemon.into(),
            stat,
        }
    }

    /// Create a malformed reference error
    pub fn malformed_reference(url: impl Into<String>) -> Self {
        Self::MalformedReference(url.into())
    }

    /// Create an empty move list error
    pub fn empty_move_list(pokemon: impl Into<String>) -> Self {
        Self::EmptyMoveList {
            pokemon: pokemon.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_stat_error() {
        let err = DomainError::missing_stat("bulbasaur", "hp");
        assert!(matches!(err, DomainError::MissingStat { .. }));
        assert_eq!(err.to_string(), "Pokemon bulbasaur has no 'hp' stat");
    }

    #[test]
    fn test_malformed_reference_error() {
        let err = DomainError::malformed_reference("https://pokeapi.co/api/v2/move/tackle/");
        assert!(err.to_string().contains("move/tackle"));
    }

    #[test]
    fn test_empty_move_list_error() {
        let err = DomainError::empty_move_list("ditto");
        assert_eq!(err.to_string(), "Pokemon ditto has no moves to choose from");
    }
}
