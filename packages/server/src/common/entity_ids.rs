//! Typed key definitions for all domain entities.
//!
//! ```rust
//! use reviewer_core::common::{PullRequestId, UserId};
//!
//! let author: UserId = UserId::new("alice");
//! let pr: PullRequestId = PullRequestId::new("PR-1");
//!
//! // This would be a compile error:
//! // let wrong: PullRequestId = author;
//! # let _ = (author, pr);
//! ```

pub use super::id::Id;

// ============================================================================
// Entity marker types
// ============================================================================

/// Marker type for Team entities. A team is identified by its name.
pub struct Team;

/// Marker type for User entities (team members and reviewers).
pub struct User;

/// Marker type for PullRequest entities.
pub struct PullRequest;

// ============================================================================
// Type aliases - the primary API
// ============================================================================

/// Typed key for Team entities.
pub type TeamName = Id<Team>;

/// Typed key for User entities.
pub type UserId = Id<User>;

/// Typed key for PullRequest entities.
pub type PullRequestId = Id<PullRequest>;
