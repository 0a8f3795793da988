//! Random implementations.

use crate::infrastructure::ports::RandomPort;
use uuid::Uuid;

/// System random - uses real randomness.
pub struct SystemRandom;

impl SystemRandom {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomPort for SystemRandom {
    fn gen_range(&self, min: usize, max: usize) -> usize {
        use rand::Rng;
        rand::thread_rng().gen_range(min..=max)
    }

    fn gen_uuid(&self) -> Uuid {
        Uuid::new_v4()
    }
}

/// Scripted random for testing.
///
/// Returns the queued values in order (clamped into the requested range),
/// then `min` once the script runs out.
#[cfg(test)]
pub struct SequenceRandom(std::sync::Mutex<std::collections::VecDeque<usize>>);

#[cfg(test)]
impl SequenceRandom {
    pub fn new(values: impl IntoIterator<Item = usize>) -> Self {
        Self(std::sync::Mutex::new(values.into_iter().collect()))
    }
}

#[cfg(test)]
impl RandomPort for SequenceRandom {
    fn gen_range(&self, min: usize, max: usize) -> usize {
        let next = self.0.lock().unwrap().pop_front().unwrap_or(min);
        next.clamp(min, max)
    }

    fn gen_uuid(&self) -> Uuid {
        Uuid::nil()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_random_stays_in_inclusive_range() {
        let random = SystemRandom::new();
        for _ in 0..100 {
            let value = random.gen_range(0, 3);
            assert!(value <= 3);
        }
        assert_eq!(random.gen_range(5, 5), 5);
    }

    #[test]
    fn sequence_random_replays_script_then_falls_back_to_min() {
        let random = SequenceRandom::new([2, 9]);
        assert_eq!(random.gen_range(0, 3), 2);
        assert_eq!(random.gen_range(0, 3), 3);
        assert_eq!(random.gen_range(1, 3), 1);
    }
}
