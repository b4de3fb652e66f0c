//! Create pull request activity

use std::slice;

use tracing::{info, warn};

use crate::common::{PullRequestId, ReviewError, UserId};
use crate::domains::pull_request::models::{PullRequest, ReviewAssignment};
use crate::domains::user::models::User;
use crate::kernel::ServerDeps;

use super::candidates::{pick_random, select_candidates, MAX_REVIEWERS};

#[derive(Debug, Clone)]
pub struct CreatePullRequestInput {
    pub pull_request_id: PullRequestId,
    pub pull_request_name: String,
    pub author_id: UserId,
}

/// A freshly opened pull request and the reviewers drawn for it
#[derive(Debug, Clone)]
pub struct CreatedPullRequest {
    pub pull_request: PullRequest,
    pub reviewers: Vec<User>,
}

/// Open a pull request and assign up to two reviewers from the author's team.
///
/// Reviewers are drawn from active team members other than the author. Zero or
/// one reviewer is a valid outcome for small teams. The record and its
/// assignments are committed together or not at all.
pub async fn create_pull_request(
    input: CreatePullRequestInput,
    deps: &ServerDeps,
) -> Result<CreatedPullRequest, ReviewError> {
    let mut tx = deps.db_pool.begin().await?;

    if PullRequest::find_by_id(&input.pull_request_id, &mut *tx)
        .await?
        .is_some()
    {
        warn!(pull_request_id = %input.pull_request_id, "Pull request already exists");
        return Err(ReviewError::PrExists(input.pull_request_id.into_inner()));
    }

    let author = User::find_by_id(&input.author_id, &mut *tx)
        .await?
        .ok_or_else(|| ReviewError::not_found("author", input.author_id.as_str()))?;

    let candidates = select_candidates(
        &author.team_name,
        slice::from_ref(&author.user_id),
        &mut *tx,
    )
    .await?;
    let reviewers = pick_random(deps.random.as_ref(), &candidates, MAX_REVIEWERS);

    // A concurrent create with the same id may have committed since the check above.
    let Some(pull_request) = PullRequest::insert(
        &input.pull_request_id,
        &input.pull_request_name,
        &author.user_id,
        &mut *tx,
    )
    .await?
    else {
        warn!(pull_request_id = %input.pull_request_id, "Pull request created concurrently");
        return Err(ReviewError::PrExists(input.pull_request_id.into_inner()));
    };

    let reviewer_ids: Vec<UserId> = reviewers.iter().map(|u| u.user_id.clone()).collect();
    ReviewAssignment::insert_many(&pull_request.pull_request_id, &reviewer_ids, &mut *tx).await?;

    tx.commit().await?;

    info!(
        pull_request_id = %pull_request.pull_request_id,
        author_id = %pull_request.author_id,
        team_name = %author.team_name,
        candidates = candidates.len(),
        reviewers = ?reviewer_ids,
        "Pull request created"
    );

    Ok(CreatedPullRequest {
        pull_request,
        reviewers,
    })
}
