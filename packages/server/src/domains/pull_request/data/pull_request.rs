use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::{PullRequestId, UserId};
use crate::domains::pull_request::activities::{CreatedPullRequest, PullRequestWithReviewers};
use crate::domains::pull_request::models::{PullRequest, PullRequestStatus};

/// Pull request with its assigned reviewers, as exposed by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PullRequestData {
    pub pull_request_id: PullRequestId,
    pub pull_request_name: String,
    pub author_id: UserId,
    pub status: PullRequestStatus,
    pub assigned_reviewers: Vec<UserId>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "mergedAt", default, skip_serializing_if = "Option::is_none")]
    pub merged_at: Option<DateTime<Utc>>,
}

impl PullRequestData {
    pub fn new(pull_request: PullRequest, assigned_reviewers: Vec<UserId>) -> Self {
        Self {
            pull_request_id: pull_request.pull_request_id,
            pull_request_name: pull_request.pull_request_name,
            author_id: pull_request.author_id,
            status: pull_request.status,
            assigned_reviewers,
            created_at: pull_request.created_at,
            merged_at: pull_request.merged_at,
        }
    }
}

impl From<PullRequestWithReviewers> for PullRequestData {
    fn from(value: PullRequestWithReviewers) -> Self {
        Self::new(value.pull_request, value.reviewer_ids)
    }
}

impl From<CreatedPullRequest> for PullRequestData {
    fn from(value: CreatedPullRequest) -> Self {
        let reviewers = value.reviewers.into_iter().map(|u| u.user_id).collect();
        Self::new(value.pull_request, reviewers)
    }
}

/// Pull request summary used in review listings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PullRequestShortData {
    pub pull_request_id: PullRequestId,
    pub pull_request_name: String,
    pub author_id: UserId,
    pub status: PullRequestStatus,
}

impl From<PullRequest> for PullRequestShortData {
    fn from(pull_request: PullRequest) -> Self {
        Self {
            pull_request_id: pull_request.pull_request_id,
            pull_request_name: pull_request.pull_request_name,
            author_id: pull_request.author_id,
            status: pull_request.status,
        }
    }
}
