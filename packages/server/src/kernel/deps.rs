//! Server dependencies for activities (using traits for testability)
//!
//! This module provides the central dependency container used by all domain activities.

use sqlx::PgPool;
use std::sync::Arc;

use super::{BaseRandomSource, StdRandomSource};

// =============================================================================
// ServerDeps
// =============================================================================

/// Server dependencies accessible to activities
#[derive(Clone)]
pub struct ServerDeps {
    pub db_pool: PgPool,
    /// Random source used by the candidate selector
    pub random: Arc<dyn BaseRandomSource>,
}

impl ServerDeps {
    /// Create new ServerDeps with the given dependencies
    pub fn new(db_pool: PgPool, random: Arc<dyn BaseRandomSource>) -> Self {
        Self { db_pool, random }
    }

    /// Dependencies with an entropy-seeded generator, or a fixed one when `seed` is given.
    pub fn with_seed(db_pool: PgPool, seed: Option<u64>) -> Self {
        let random: Arc<dyn BaseRandomSource> = match seed {
            Some(seed) => Arc::new(StdRandomSource::seeded(seed)),
            None => Arc::new(StdRandomSource::from_entropy()),
        };
        Self::new(db_pool, random)
    }
}
