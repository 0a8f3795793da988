//! Infrastructure implementations.
//!
//! Contains port trait implementations for external dependencies.

pub mod cache;
pub mod config;
pub mod gateway;
pub mod pokeapi;
pub mod ports;
pub mod random;
pub mod resilient_fetch;
