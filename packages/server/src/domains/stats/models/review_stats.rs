use anyhow::Result;
use sqlx::PgExecutor;

use crate::common::{PullRequestId, TeamName, UserId};

/// How many pull requests a user is assigned to review
///
/// Users without assignments have no row.
#[derive(sqlx::FromRow, Debug, Clone, PartialEq, Eq)]
pub struct UserReviewStats {
    pub user_id: UserId,
    pub username: String,
    pub team_name: TeamName,
    pub review_count: i64,
}

impl UserReviewStats {
    /// Busiest reviewers first
    pub async fn load<'e, E>(executor: E) -> Result<Vec<Self>>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as::<_, Self>(
            "SELECT u.user_id, u.username, u.team_name, COUNT(*) AS review_count
             FROM pr_reviewers r
             JOIN users u ON u.user_id = r.reviewer_id
             GROUP BY u.user_id, u.username, u.team_name
             ORDER BY review_count DESC, u.user_id",
        )
        .fetch_all(executor)
        .await
        .map_err(Into::into)
    }
}

/// How many reviewers a pull request has
///
/// Pull requests without reviewers have no row.
#[derive(sqlx::FromRow, Debug, Clone, PartialEq, Eq)]
pub struct PullRequestReviewStats {
    pub pull_request_id: PullRequestId,
    pub reviewer_count: i64,
}

impl PullRequestReviewStats {
    pub async fn load<'e, E>(executor: E) -> Result<Vec<Self>>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as::<_, Self>(
            "SELECT pull_request_id, COUNT(*) AS reviewer_count
             FROM pr_reviewers
             GROUP BY pull_request_id
             ORDER BY pull_request_id",
        )
        .fetch_all(executor)
        .await
        .map_err(Into::into)
    }
}
