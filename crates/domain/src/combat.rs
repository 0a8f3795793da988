//! Combat resolution rules.
//!
//! Pure functions: no I/O and no randomness. Pokémon 1 always strikes first;
//! Pokémon 2 strikes back only while it still has hit points above zero.

use crate::entities::{Combatant, Winner};

/// Fraction of a move's power dealt as damage.
pub const DAMAGE_RATIO: f64 = 0.1;

/// Damage dealt by a move of the given power. Not rounded.
pub fn damage_from_power(power: f64) -> f64 {
    power * DAMAGE_RATIO
}

/// Status moves report no power; they deal no damage.
pub fn normalize_power(power: Option<f64>) -> f64 {
    power.unwrap_or(0.0)
}

/// Hit points left after taking a hit of the given power.
pub fn attack(power: f64, hp: f64) -> f64 {
    hp - damage_from_power(power)
}

/// Resolve one round and return the new `(hp1, hp2)`.
pub fn apply_round(hp1: f64, power1: f64, hp2: f64, power2: f64) -> (f64, f64) {
    let new_hp2 = attack(power1, hp2);
    let new_hp1 = if new_hp2 > 0.0 {
        attack(power2, hp1)
    } else {
        hp1
    };
    (new_hp1, new_hp2)
}

/// The combatant with strictly more hit points; ties go to `pokemon2`.
pub fn determine_winner<'a>(pokemon1: &'a Combatant, pokemon2: &'a Combatant) -> &'a Combatant {
    if pokemon1.hp() > pokemon2.hp() {
        pokemon1
    } else {
        pokemon2
    }
}

pub fn build_winner(pokemon1: &Combatant, pokemon2: &Combatant, total_rounds: u32) -> Winner {
    let winner = determine_winner(pokemon1, pokemon2);
    Winner {
        id: winner.id(),
        name: winner.name().to_string(),
        total_rounds,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::PokemonId;

    fn with_hp(id: u32, hp: f64) -> Combatant {
        Combatant::new(PokemonId::new(id), format!("pokemon-{id}"), hp, vec![])
    }

    #[test]
    fn damage_is_ten_percent_of_whole_power() {
        assert_eq!(damage_from_power(100.0), 100.0 * 0.1);
    }

    #[test]
    fn damage_is_ten_percent_of_fractional_power() {
        assert_eq!(damage_from_power(5.5), 5.5 * 0.1);
    }

    #[test]
    fn attack_subtracts_damage() {
        assert_eq!(attack(10.0, 10.0), 10.0 - damage_from_power(10.0));
    }

    #[test]
    fn knocked_out_defender_does_not_strike_back() {
        let (hp1, hp2) = apply_round(10.0, 100.0, 5.0, 100.0);
        assert_eq!(hp1, 10.0);
        assert_eq!(hp2, 5.0 - damage_from_power(100.0));
    }

    #[test]
    fn defender_at_exactly_zero_does_not_strike_back() {
        let (hp1, hp2) = apply_round(10.0, 50.0, 5.0, 100.0);
        assert_eq!(hp2, 0.0);
        assert_eq!(hp1, 10.0);
    }

    #[test]
    fn both_take_damage_when_defender_survives() {
        let (hp1, hp2) = apply_round(50.0, 90.0, 40.0, 100.0);
        assert_eq!(hp1, 50.0 - damage_from_power(100.0));
        assert_eq!(hp2, 40.0 - damage_from_power(90.0));
    }

    #[test]
    fn null_power_normalizes_to_zero() {
        assert_eq!(normalize_power(None), 0.0);
        assert_eq!(normalize_power(Some(5.0)), 5.0);
    }

    #[test]
    fn winner_is_pokemon1_with_more_hp() {
        let a = with_hp(1, 10.0);
        let b = with_hp(2, 5.0);
        assert_eq!(determine_winner(&a, &b).id(), a.id());
    }

    #[test]
    fn winner_is_pokemon2_with_more_hp() {
        let a = with_hp(1, 5.0);
        let b = with_hp(2, 10.0);
        assert_eq!(determine_winner(&a, &b).id(), b.id());
    }

    #[test]
    fn tie_goes_to_pokemon2() {
        let a = with_hp(1, 10.0);
        let b = with_hp(2, 10.0);
        assert_eq!(determine_winner(&a, &b).id(), b.id());
    }

    #[test]
    fn build_winner_reports_total_rounds() {
        let a = with_hp(1, -2.0);
        let b = with_hp(2, 3.5);
        let winner = build_winner(&a, &b, 7);
        assert_eq!(winner.id, PokemonId::new(2));
        assert_eq!(winner.name, "pokemon-2");
        assert_eq!(winner.total_rounds, 7);
    }
}
