//! Attack prefetch planning.
//!
//! Each round fetches two moves. When exactly one of them is already cached,
//! only one upstream request is really made, so a third move that is likely
//! to be picked later can be fetched alongside it. The candidate order is
//! deterministic: Pokémon 1's moves in listed order, then Pokémon 2's,
//! skipping ids already seen.

use std::collections::HashSet;

use crate::entities::Combatant;
use crate::ids::MoveId;

/// True when exactly one of the two moves is cached.
pub fn is_partially_cached(move1: MoveId, move2: MoveId, cached: &HashSet<MoveId>) -> bool {
    cached.contains(&move1) != cached.contains(&move2)
}

/// First move known to either combatant that is not cached yet.
pub fn pick_prefetch_candidate(
    cached: &HashSet<MoveId>,
    pokemon1: &Combatant,
    pokemon2: &Combatant,
) -> Option<MoveId> {
    let mut seen = HashSet::new();
    pokemon1
        .move_ids()
        .chain(pokemon2.move_ids())
        .filter(|id| seen.insert(*id))
        .find(|id| !cached.contains(id))
}

/// Move to fetch in addition to this round's two moves, if any.
///
/// The round's own moves are never proposed.
pub fn plan_prefetch(
    move1: MoveId,
    move2: MoveId,
    cached: &HashSet<MoveId>,
    pokemon1: &Combatant,
    pokemon2: &Combatant,
) -> Option<MoveId> {
    if !is_partially_cached(move1, move2, cached) {
        return None;
    }
    let mut in_flight = cached.clone();
    in_flight.insert(move1);
    in_flight.insert(move2);
    pick_prefetch_candidate(&in_flight, pokemon1, pokemon2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::MoveRef;
    use crate::ids::PokemonId;

    fn ids(values: &[u32]) -> HashSet<MoveId> {
        values.iter().copied().map(MoveId::new).collect()
    }

    fn knowing(id: u32, moves: &[u32]) -> Combatant {
        Combatant::new(
            PokemonId::new(id),
            format!("pokemon-{id}"),
            50.0,
            moves
                .iter()
                .map(|m| MoveRef::new(MoveId::new(*m), format!("move-{m}")))
                .collect(),
        )
    }

    #[test]
    fn neither_cached_is_not_partial() {
        assert!(!is_partially_cached(MoveId::new(1), MoveId::new(2), &ids(&[])));
    }

    #[test]
    fn only_first_cached_is_partial() {
        assert!(is_partially_cached(MoveId::new(1), MoveId::new(2), &ids(&[1])));
    }

    #[test]
    fn only_second_cached_is_partial() {
        assert!(is_partially_cached(MoveId::new(1), MoveId::new(2), &ids(&[2])));
    }

    #[test]
    fn both_cached_is_not_partial() {
        assert!(!is_partially_cached(MoveId::new(1), MoveId::new(2), &ids(&[1, 2])));
    }

    #[test]
    fn candidate_is_first_uncached_move() {
        let a = knowing(1, &[1, 3]);
        let b = knowing(2, &[2, 3]);
        assert_eq!(pick_prefetch_candidate(&ids(&[1, 2]), &a, &b), Some(MoveId::new(3)));
    }

    #[test]
    fn no_candidate_when_everything_is_cached() {
        let a = knowing(1, &[1, 3]);
        let b = knowing(2, &[2, 3]);
        assert_eq!(pick_prefetch_candidate(&ids(&[1, 2, 3]), &a, &b), None);
    }

    #[test]
    fn candidate_order_prefers_pokemon1_moves() {
        let a = knowing(1, &[5, 9, 4]);
        let b = knowing(2, &[7, 4, 8]);
        assert_eq!(pick_prefetch_candidate(&ids(&[5]), &a, &b), Some(MoveId::new(9)));
        assert_eq!(pick_prefetch_candidate(&ids(&[5, 9, 4]), &a, &b), Some(MoveId::new(7)));
        assert_eq!(pick_prefetch_candidate(&ids(&[5, 9, 4, 7]), &a, &b), Some(MoveId::new(8)));
    }

    #[test]
    fn plan_skips_the_rounds_own_moves() {
        let a = knowing(1, &[1, 2, 3]);
        let b = knowing(2, &[2, 4]);
        // Move 2 is being fetched this round, so it is not proposed again.
        let planned = plan_prefetch(MoveId::new(2), MoveId::new(1), &ids(&[1]), &a, &b);
        assert_eq!(planned, Some(MoveId::new(3)));
    }

    #[test]
    fn plan_does_not_mutate_the_callers_set() {
        let a = knowing(1, &[1, 2, 3]);
        let b = knowing(2, &[2]);
        let cached = ids(&[1]);
        plan_prefetch(MoveId::new(1), MoveId::new(2), &cached, &a, &b);
        assert_eq!(cached, ids(&[1]));
    }

    #[test]
    fn plan_is_empty_unless_partially_cached() {
        let a = knowing(1, &[1, 3]);
        let b = knowing(2, &[2, 3]);
        assert_eq!(plan_prefetch(MoveId::new(1), MoveId::new(2), &ids(&[]), &a, &b), None);
        assert_eq!(plan_prefetch(MoveId::new(1), MoveId::new(2), &ids(&[1, 2]), &a, &b), None);
    }

    #[test]
    fn coinciding_moves_are_never_partially_cached() {
        let a = knowing(1, &[1, 3]);
        let b = knowing(2, &[1, 4]);
        assert_eq!(plan_prefetch(MoveId::new(1), MoveId::new(1), &ids(&[]), &a, &b), None);
        assert_eq!(plan_prefetch(MoveId::new(1), MoveId::new(1), &ids(&[1]), &a, &b), None);
    }
}
