//! Pull request domain activities - business logic functions

pub mod candidates;
mod create_pull_request;
mod get_reviewers;
mod merge_pull_request;
mod reassign_reviewer;

use crate::common::UserId;
use crate::domains::pull_request::models::PullRequest;

pub use candidates::{pick_random, select_candidates, MAX_REVIEWERS};
pub use create_pull_request::{create_pull_request, CreatePullRequestInput, CreatedPullRequest};
pub use get_reviewers::get_pull_request_reviewers;
pub use merge_pull_request::merge_pull_request;
pub use reassign_reviewer::{reassign_reviewer, ReassignReviewerInput, ReassignedReviewer};

/// A pull request with its current reviewer ids
#[derive(Debug, Clone)]
pub struct PullRequestWithReviewers {
    pub pull_request: PullRequest,
    pub reviewer_ids: Vec<UserId>,
}
