//! Testability port for injecting randomness.

use uuid::Uuid;

pub trait RandomPort: Send + Sync {
    /// Uniform integer in `min..=max`.
    fn gen_range(&self, min: usize, max: usize) -> usize;
    fn gen_uuid(&self) -> Uuid;
}
