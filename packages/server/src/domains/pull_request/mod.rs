//! Pull request domain - lifecycle (open -> merged) and reviewer assignment

pub mod activities;
pub mod data;
pub mod models;

pub use data::{PullRequestData, PullRequestShortData};
pub use models::{PullRequest, PullRequestStatus, ReviewAssignment};
