//! Use cases - User story orchestration.
//!
//! Each module contains use cases for a specific area of the API.

pub mod battle;
pub mod catalog;

pub use battle::{BattleConfig, RunBattle, RunBattleError};
pub use catalog::{Catalog, CatalogError};
