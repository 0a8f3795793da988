//! Battle use cases.
//!
//! Simulates a battle between two Pokémon, round by round, fetching each
//! chosen move through the shared read-through gateway.

mod error;
mod run_battle;

pub use error::RunBattleError;
pub use run_battle::{BattleConfig, RunBattle};
