// Test doubles for kernel infrastructure traits
//
// Provides deterministic implementations that can be injected into ServerDeps for tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use super::BaseRandomSource;

// =============================================================================
// Predictable Random Source
// =============================================================================

/// Always picks the first `amount` indices, in order.
///
/// Makes selection outcomes fully predictable when candidate lists are sorted.
#[derive(Debug, Default)]
pub struct FirstIndicesRandom {
    draws: AtomicUsize,
}

impl FirstIndicesRandom {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of draws made so far
    pub fn draw_count(&self) -> usize {
        self.draws.load(Ordering::SeqCst)
    }
}

impl BaseRandomSource for FirstIndicesRandom {
    fn sample_indices(&self, len: usize, amount: usize) -> Vec<usize> {
        self.draws.fetch_add(1, Ordering::SeqCst);
        (0..amount.min(len)).collect()
    }
}

/// Always picks the last `amount` indices, highest first.
#[derive(Debug, Default)]
pub struct LastIndicesRandom;

impl BaseRandomSource for LastIndicesRandom {
    fn sample_indices(&self, len: usize, amount: usize) -> Vec<usize> {
        (0..len).rev().take(amount).collect()
    }
}
