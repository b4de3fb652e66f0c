use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::{PgConnection, PgExecutor};

use crate::common::{PullRequestId, UserId};

/// Review assignment - one reviewer on one pull request
///
/// Identity is the (pull_request_id, reviewer_id) pair.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct ReviewAssignment {
    pub pull_request_id: PullRequestId,
    pub reviewer_id: UserId,
    pub assigned_at: DateTime<Utc>,
}

impl ReviewAssignment {
    /// Find assignments for a pull request, in assignment order
    pub async fn find_by_pull_request<'e, E>(
        pull_request_id: &PullRequestId,
        executor: E,
    ) -> Result<Vec<Self>>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as::<_, Self>(
            "SELECT *
             FROM pr_reviewers
             WHERE pull_request_id = $1
             ORDER BY assigned_at, reviewer_id",
        )
        .bind(pull_request_id)
        .fetch_all(executor)
        .await
        .map_err(Into::into)
    }

    /// Assign several reviewers at once
    pub async fn insert_many<'e, E>(
        pull_request_id: &PullRequestId,
        reviewer_ids: &[UserId],
        executor: E,
    ) -> Result<Vec<Self>>
    where
        E: PgExecutor<'e>,
    {
        if reviewer_ids.is_empty() {
            return Ok(Vec::new());
        }

        sqlx::query_as::<_, Self>(
            "INSERT INTO pr_reviewers (pull_request_id, reviewer_id)
             SELECT $1, reviewer_id
             FROM UNNEST($2::text[]) AS t(reviewer_id)
             RETURNING *",
        )
        .bind(pull_request_id)
        .bind(reviewer_ids)
        .fetch_all(executor)
        .await
        .map_err(Into::into)
    }

    /// Swap one reviewer for another
    ///
    /// Returns Ok(false) without inserting anything if the old assignment was
    /// already gone. Must run inside a transaction so the delete and insert
    /// commit together.
    pub async fn replace(
        pull_request_id: &PullRequestId,
        old_reviewer_id: &UserId,
        new_reviewer_id: &UserId,
        conn: &mut PgConnection,
    ) -> Result<bool> {
        let deleted = sqlx::query(
            "DELETE FROM pr_reviewers
             WHERE pull_request_id = $1 AND reviewer_id = $2",
        )
        .bind(pull_request_id)
        .bind(old_reviewer_id)
        .execute(&mut *conn)
        .await?
        .rows_affected();

        if deleted == 0 {
            return Ok(false);
        }

        sqlx::query("INSERT INTO pr_reviewers (pull_request_id, reviewer_id) VALUES ($1, $2)")
            .bind(pull_request_id)
            .bind(new_reviewer_id)
            .execute(&mut *conn)
            .await?;

        Ok(true)
    }
}
