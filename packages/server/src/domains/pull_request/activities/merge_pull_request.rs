//! Merge pull request activity

use chrono::Utc;
use tracing::{debug, info};

use crate::common::{PullRequestId, ReviewError};
use crate::domains::pull_request::models::{PullRequest, ReviewAssignment};
use crate::kernel::ServerDeps;

use super::PullRequestWithReviewers;

/// Mark a pull request as merged.
///
/// Idempotent: merging an already merged pull request returns the stored
/// record unchanged, including the first `merged_at`. Concurrent merges
/// race on a conditional update and the loser returns the winner's record.
pub async fn merge_pull_request(
    pull_request_id: &PullRequestId,
    deps: &ServerDeps,
) -> Result<PullRequestWithReviewers, ReviewError> {
    let mut tx = deps.db_pool.begin().await?;

    let existing = PullRequest::find_by_id(pull_request_id, &mut *tx)
        .await?
        .ok_or_else(|| ReviewError::not_found("pull request", pull_request_id.as_str()))?;

    let pull_request = if existing.is_merged() {
        debug!(pull_request_id = %pull_request_id, "Pull request already merged");
        existing
    } else {
        match PullRequest::mark_merged_if_open(pull_request_id, Utc::now(), &mut *tx).await? {
            Some(merged) => {
                info!(pull_request_id = %pull_request_id, "Pull request merged");
                merged
            }
            None => {
                debug!(pull_request_id = %pull_request_id, "Lost merge race, re-reading");
                PullRequest::find_by_id(pull_request_id, &mut *tx)
                    .await?
                    .ok_or_else(|| {
                        ReviewError::not_found("pull request", pull_request_id.as_str())
                    })?
            }
        }
    };

    let reviewer_ids = ReviewAssignment::find_by_pull_request(pull_request_id, &mut *tx)
        .await?
        .into_iter()
        .map(|a| a.reviewer_id)
        .collect();

    tx.commit().await?;

    Ok(PullRequestWithReviewers {
        pull_request,
        reviewer_ids,
    })
}
