// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Business logic (like "pick two reviewers") lives in domain functions that use these traits.
//
// Naming convention: Base* for trait names (e.g., BaseRandomSource)

// =============================================================================
// Random Source Trait (Infrastructure - reviewer selection)
// =============================================================================

/// Source of uniformly random index samples.
///
/// Implementations must be safe for concurrent draws from many request
/// handlers. Not cryptographically secure; only used to spread review load.
pub trait BaseRandomSource: Send + Sync {
    /// Return `amount` distinct indices in `0..len`, chosen uniformly at random.
    ///
    /// Callers guarantee `amount <= len`.
    fn sample_indices(&self, len: usize, amount: usize) -> Vec<usize>;
}
