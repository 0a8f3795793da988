//! Pokebattle Engine library.
//!
//! A caching façade over PokeAPI that also simulates battles between two Pokémon.
//!
//! ## Structure
//!
//! - `use_cases/` - Battle orchestration and catalog lookups
//! - `infrastructure/` - External dependency implementations (ports + adapters)
//! - `api/` - HTTP entry points
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod infrastructure;
pub mod use_cases;

/// Test fixtures: fake upstream and payload builders.
#[cfg(test)]
pub mod test_fixtures;

pub use app::App;
