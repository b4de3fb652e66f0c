use crate::common::ReviewError;
use crate::domains::stats::models::{PullRequestReviewStats, UserReviewStats};
use crate::kernel::ServerDeps;

/// Review load per user and per pull request
#[derive(Debug, Clone)]
pub struct ReviewStats {
    pub by_user: Vec<UserReviewStats>,
    pub by_pull_request: Vec<PullRequestReviewStats>,
}

/// Aggregate review counts from the current assignments.
///
/// Both views are read from one snapshot so their totals agree.
pub async fn get_stats(deps: &ServerDeps) -> Result<ReviewStats, ReviewError> {
    let mut tx = deps.db_pool.begin().await?;

    sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY")
        .execute(&mut *tx)
        .await?;

    let by_user = UserReviewStats::load(&mut *tx).await?;
    let by_pull_request = PullRequestReviewStats::load(&mut *tx).await?;

    tx.commit().await?;

    Ok(ReviewStats {
        by_user,
        by_pull_request,
    })
}
