//! Process-wide pseudorandom source for reviewer selection.

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Mutex;

use super::BaseRandomSource;

/// `StdRng` behind a mutex so concurrent handlers can share one generator.
///
/// The lock is only held for the duration of a single draw and never across
/// an `.await`.
pub struct StdRandomSource {
    rng: Mutex<StdRng>,
}

impl StdRandomSource {
    /// Seed from OS entropy (process start).
    pub fn from_entropy() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Deterministic generator for tests and reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl BaseRandomSource for StdRandomSource {
    fn sample_indices(&self, len: usize, amount: usize) -> Vec<usize> {
        let amount = amount.min(len);
        // A poisoned lock only means another draw panicked; the generator state is still valid.
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        rand::seq::index::sample(&mut *rng, len, amount).into_vec()
    }
}
