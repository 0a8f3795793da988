//! Port traits for infrastructure boundaries.
//!
//! Ports exist for:
//! - The upstream PokeAPI (swapped for fakes in tests)
//! - The read-through gateway the battle engine fetches through
//! - Randomness (for deterministic battles in tests)

mod error;
mod external;
mod testing;

pub use error::{FetchError, GatewayError};
pub use external::{ResourceGateway, ResourceKind, UpstreamPort};
pub use testing::RandomPort;

#[cfg(test)]
pub use external::{MockResourceGateway, MockUpstreamPort};
