use crate::common::{PullRequestId, ReviewError, UserId};
use crate::domains::pull_request::models::{PullRequest, ReviewAssignment};
use crate::kernel::ServerDeps;

/// Current reviewers of a pull request, in assignment order.
pub async fn get_pull_request_reviewers(
    pull_request_id: &PullRequestId,
    deps: &ServerDeps,
) -> Result<Vec<UserId>, ReviewError> {
    if PullRequest::find_by_id(pull_request_id, &deps.db_pool)
        .await?
        .is_none()
    {
        return Err(ReviewError::not_found("pull request", pull_request_id.as_str()));
    }

    let assignments = ReviewAssignment::find_by_pull_request(pull_request_id, &deps.db_pool).await?;
    Ok(assignments.into_iter().map(|a| a.reviewer_id).collect())
}
