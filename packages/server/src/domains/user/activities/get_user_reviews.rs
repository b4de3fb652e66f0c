use crate::common::{ReviewError, UserId};
use crate::domains::pull_request::models::PullRequest;
use crate::kernel::ServerDeps;

/// Pull requests the user is currently assigned to review, newest first.
///
/// An unknown user simply has no reviews.
pub async fn get_user_reviews(
    user_id: &UserId,
    deps: &ServerDeps,
) -> Result<Vec<PullRequest>, ReviewError> {
    Ok(PullRequest::find_by_reviewer(user_id, &deps.db_pool).await?)
}
