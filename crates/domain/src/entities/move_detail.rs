//! Move detail entity - a fetched move and its power.

use serde::{Deserialize, Serialize};

use crate::combat::normalize_power;
use crate::ids::MoveId;

/// A move as returned by the move endpoint.
///
/// Status moves have no power (`null` upstream). Unknown payload fields are
/// ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveDetail {
    pub id: MoveId,
    pub name: String,
    #[serde(default)]
    pub power: Option<f64>,
}

impl MoveDetail {
    /// Power usable in damage arithmetic: absent power counts as zero.
    pub fn effective_power(&self) -> f64 {
        normalize_power(self.power)
    }
}
