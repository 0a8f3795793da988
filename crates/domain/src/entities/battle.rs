//! Battle history - the record a finished battle hands back to the caller.
//!
//! Field names follow the public JSON contract of the battle endpoint
//! (`preBattleData`, `rounds`, `winner`, `tenPercentPower`, ...).

use serde::{Deserialize, Serialize};

use crate::combat::damage_from_power;
use crate::entities::{Combatant, CombatantSnapshot, MoveRef};
use crate::ids::{MoveId, PokemonId};

/// Both combatants as they entered the battle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreBattleData {
    pub pokemon1: CombatantSnapshot,
    pub pokemon2: CombatantSnapshot,
}

impl PreBattleData {
    pub fn new(pokemon1: &Combatant, pokemon2: &Combatant) -> Self {
        Self {
            pokemon1: pokemon1.snapshot(),
            pokemon2: pokemon2.snapshot(),
        }
    }
}

/// The move a combatant used in a round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttackSummary {
    pub id: MoveId,
    pub name: String,
    pub power: f64,
    /// Damage the move deals (10% of power).
    pub ten_percent_power: f64,
}

impl AttackSummary {
    pub fn new(attack: &MoveRef, power: f64) -> Self {
        Self {
            id: attack.id,
            name: attack.name.clone(),
            power,
            ten_percent_power: damage_from_power(power),
        }
    }
}

/// One combatant's side of a round, with post-attack hit points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatantRoundView {
    pub id: PokemonId,
    pub name: String,
    pub hp: f64,
    pub attack: AttackSummary,
}

impl CombatantRoundView {
    pub fn new(combatant: &Combatant, attack: &MoveRef, power: f64) -> Self {
        Self {
            id: combatant.id(),
            name: combatant.name().to_string(),
            hp: combatant.hp(),
            attack: AttackSummary::new(attack, power),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleRound {
    pub round: u32,
    pub pokemon1: CombatantRoundView,
    pub pokemon2: CombatantRoundView,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Winner {
    pub id: PokemonId,
    pub name: String,
    pub total_rounds: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattleReport {
    pub pre_battle_data: PreBattleData,
    pub rounds: Vec<BattleRound>,
    pub winner: Winner,
}

/// Append-only round log.
///
/// Round numbers are assigned here: the first recorded round is 1 and each
/// further round is numbered one higher than the previous.
#[derive(Debug, Clone, Default)]
pub struct BattleHistory {
    rounds: Vec<BattleRound>,
}

impl BattleHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a round using the combatants' post-attack hit points.
    pub fn record(
        &mut self,
        pokemon1: &Combatant,
        attack1: &MoveRef,
        power1: f64,
        pokemon2: &Combatant,
        attack2: &MoveRef,
        power2: f64,
    ) -> &BattleRound {
        let round = BattleRound {
            round: self.next_round_number(),
            pokemon1: CombatantRoundView::new(pokemon1, attack1, power1),
            pokemon2: CombatantRoundView::new(pokemon2, attack2, power2),
        };
        self.rounds.push(round);
        &self.rounds[self.rounds.len() - 1]
    }

    pub fn next_round_number(&self) -> u32 {
        self.len() + 1
    }

    pub fn len(&self) -> u32 {
        u32::try_from(self.rounds.len()).unwrap_or(u32::MAX)
    }

    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    pub fn rounds(&self) -> &[BattleRound] {
        &self.rounds
    }

    pub fn into_rounds(self) -> Vec<BattleRound> {
        self.rounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn combatant(id: u32, name: &str, hp: f64) -> Combatant {
        Combatant::new(
            PokemonId::new(id),
            name,
            hp,
            vec![MoveRef::new(MoveId::new(33), "tackle")],
        )
    }

    #[test]
    fn rounds_are_numbered_from_one_without_gaps() {
        let a = combatant(1, "bulbasaur", 45.0);
        let b = combatant(4, "charmander", 39.0);
        let tackle = MoveRef::new(MoveId::new(33), "tackle");

        let mut history = BattleHistory::new();
        for _ in 0..3 {
            history.record(&a, &tackle, 40.0, &b, &tackle, 40.0);
        }

        let numbers: Vec<u32> = history.rounds().iter().map(|r| r.round).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert_eq!(history.next_round_number(), 4);
    }

    #[test]
    fn round_view_carries_damage_of_the_move() {
        let a = combatant(1, "bulbasaur", 41.0);
        let b = combatant(4, "charmander", 35.0);
        let vine_whip = MoveRef::new(MoveId::new(22), "vine-whip");
        let scratch = MoveRef::new(MoveId::new(10), "scratch");

        let mut history = BattleHistory::new();
        let round = history.record(&a, &vine_whip, 45.0, &b, &scratch, 40.0).clone();

        assert_eq!(round.pokemon1.hp, 41.0);
        assert_eq!(round.pokemon1.attack.name, "vine-whip");
        assert_eq!(round.pokemon1.attack.ten_percent_power, 45.0 * 0.1);
        assert_eq!(round.pokemon2.attack.ten_percent_power, 40.0 * 0.1);
    }

    #[test]
    fn report_serializes_with_public_field_names() {
        let a = combatant(1, "bulbasaur", 45.0);
        let b = combatant(4, "charmander", 39.0);
        let tackle = MoveRef::new(MoveId::new(33), "tackle");
        let mut history = BattleHistory::new();
        history.record(&a, &tackle, 40.0, &b, &tackle, 40.0);

        let report = BattleReport {
            pre_battle_data: PreBattleData::new(&a, &b),
            rounds: history.into_rounds(),
            winner: Winner {
                id: a.id(),
                name: a.name().to_string(),
                total_rounds: 1,
            },
        };

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["preBattleData"]["pokemon2"]["name"], "charmander");
        assert_eq!(json["rounds"][0]["round"], 1);
        assert_eq!(json["rounds"][0]["pokemon1"]["attack"]["id"], 33);
        assert!(json["rounds"][0]["pokemon1"]["attack"]["tenPercentPower"].is_number());
        assert_eq!(json["winner"]["totalRounds"], 1);
    }
}
