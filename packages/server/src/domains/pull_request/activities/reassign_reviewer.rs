//! Reassign reviewer activity

use tracing::{info, warn};

use crate::common::{PullRequestId, ReviewError, UserId};
use crate::domains::pull_request::models::{PullRequest, ReviewAssignment};
use crate::domains::user::models::User;
use crate::kernel::ServerDeps;

use super::candidates::{pick_random, select_candidates};
use super::PullRequestWithReviewers;

#[derive(Debug, Clone)]
pub struct ReassignReviewerInput {
    pub pull_request_id: PullRequestId,
    pub old_reviewer_id: UserId,
}

#[derive(Debug, Clone)]
pub struct ReassignedReviewer {
    pub pull_request: PullRequestWithReviewers,
    pub replaced_by: UserId,
}

/// Replace one reviewer of an open pull request with a random active member
/// of the replaced reviewer's team.
///
/// The replacement is never the replaced reviewer, another current reviewer
/// or the author. The pull request row is locked for the duration so that
/// concurrent reassignments and merges serialize.
pub async fn reassign_reviewer(
    input: ReassignReviewerInput,
    deps: &ServerDeps,
) -> Result<ReassignedReviewer, ReviewError> {
    let ReassignReviewerInput {
        pull_request_id,
        old_reviewer_id,
    } = input;

    let mut tx = deps.db_pool.begin().await?;

    let pull_request = PullRequest::find_by_id_for_update(&pull_request_id, &mut *tx)
        .await?
        .ok_or_else(|| ReviewError::not_found("pull request", pull_request_id.as_str()))?;

    if pull_request.is_merged() {
        warn!(pull_request_id = %pull_request_id, "Reassign attempted on merged pull request");
        return Err(ReviewError::PrMerged(pull_request_id.into_inner()));
    }

    let current: Vec<UserId> = ReviewAssignment::find_by_pull_request(&pull_request_id, &mut *tx)
        .await?
        .into_iter()
        .map(|a| a.reviewer_id)
        .collect();

    if !current.contains(&old_reviewer_id) {
        return Err(ReviewError::not_assigned(
            pull_request_id.as_str(),
            old_reviewer_id.as_str(),
        ));
    }

    let old_reviewer = User::find_by_id(&old_reviewer_id, &mut *tx)
        .await?
        .ok_or_else(|| ReviewError::not_found("reviewer", old_reviewer_id.as_str()))?;

    let mut excluded = current;
    excluded.push(pull_request.author_id.clone());

    let candidates = select_candidates(&old_reviewer.team_name, &excluded, &mut *tx).await?;
    let Some(new_reviewer) = pick_random(deps.random.as_ref(), &candidates, 1)
        .into_iter()
        .next()
    else {
        warn!(
            pull_request_id = %pull_request_id,
            team_name = %old_reviewer.team_name,
            "No replacement candidate"
        );
        return Err(ReviewError::NoCandidate(old_reviewer.team_name.into_inner()));
    };

    let replaced = ReviewAssignment::replace(
        &pull_request_id,
        &old_reviewer_id,
        &new_reviewer.user_id,
        &mut *tx,
    )
    .await?;
    if !replaced {
        return Err(ReviewError::not_assigned(
            pull_request_id.as_str(),
            old_reviewer_id.as_str(),
        ));
    }

    let reviewer_ids = ReviewAssignment::find_by_pull_request(&pull_request_id, &mut *tx)
        .await?
        .into_iter()
        .map(|a| a.reviewer_id)
        .collect();

    tx.commit().await?;

    info!(
        pull_request_id = %pull_request_id,
        old_reviewer_id = %old_reviewer_id,
        new_reviewer_id = %new_reviewer.user_id,
        "Reviewer reassigned"
    );

    Ok(ReassignedReviewer {
        pull_request: PullRequestWithReviewers {
            pull_request,
            reviewer_ids,
        },
        replaced_by: new_reviewer.user_id,
    })
}
