pub mod pull_request;
pub mod review_assignment;

pub use pull_request::{PullRequest, PullRequestStatus};
pub use review_assignment::ReviewAssignment;
