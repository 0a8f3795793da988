//! Domain entities - Core battle objects

mod battle;
mod combatant;
mod move_detail;

pub use battle::{AttackSummary, BattleHistory, BattleReport, BattleRound, CombatantRoundView, PreBattleData, Winner};
pub use combatant::{Combatant, CombatantSnapshot, MoveRef};
pub use move_detail::MoveDetail;
