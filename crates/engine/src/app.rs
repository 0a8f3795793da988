//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::ports::{RandomPort, ResourceGateway};
use crate::use_cases::{BattleConfig, Catalog, RunBattle};

/// Main application state.
///
/// Holds the use cases, which share one read-through gateway.
/// Passed to HTTP handlers via Axum state.
pub struct App {
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub battle: Arc<RunBattle>,
    pub catalog: Arc<Catalog>,
}

impl App {
    /// Create a new App with all dependencies wired.
    pub fn new(
        gateway: Arc<dyn ResourceGateway>,
        random: Arc<dyn RandomPort>,
        battle_config: BattleConfig,
    ) -> Self {
        let battle = Arc::new(RunBattle::new(gateway.clone(), random, battle_config));
        let catalog = Arc::new(Catalog::new(gateway));

        Self {
            use_cases: UseCases { battle, catalog },
        }
    }
}
