use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgExecutor;

use crate::common::{PullRequestId, UserId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, Default)]
#[sqlx(type_name = "pull_request_status", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PullRequestStatus {
    #[default]
    Open,
    /// Terminal. Reviewer assignments are frozen once merged.
    Merged,
}

impl PullRequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PullRequestStatus::Open => "OPEN",
            PullRequestStatus::Merged => "MERGED",
        }
    }
}

/// Pull request model - SQL persistence layer
///
/// `merged_at` is set exactly when `status` is `Merged` (enforced by a CHECK
/// constraint in the schema).
#[derive(sqlx::FromRow, Debug, Clone, PartialEq)]
pub struct PullRequest {
    pub pull_request_id: PullRequestId,
    pub pull_request_name: String,
    pub author_id: UserId,
    pub status: PullRequestStatus,
    pub created_at: DateTime<Utc>,
    pub merged_at: Option<DateTime<Utc>>,
}

impl PullRequest {
    pub fn is_merged(&self) -> bool {
        self.status == PullRequestStatus::Merged
    }

    /// Find pull request by ID
    pub async fn find_by_id<'e, E>(id: &PullRequestId, executor: E) -> Result<Option<Self>>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as::<_, Self>("SELECT * FROM pull_requests WHERE pull_request_id = $1")
            .bind(id)
            .fetch_optional(executor)
            .await
            .map_err(Into::into)
    }

    /// Find pull request by ID and lock its row until the transaction ends
    ///
    /// Serialises reassignments and merges of the same pull request.
    pub async fn find_by_id_for_update<'e, E>(
        id: &PullRequestId,
        executor: E,
    ) -> Result<Option<Self>>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM pull_requests WHERE pull_request_id = $1 FOR UPDATE",
        )
        .bind(id)
        .fetch_optional(executor)
        .await
        .map_err(Into::into)
    }

    /// Insert a new open pull request
    ///
    /// Returns None if the ID is already taken. The primary key is the
    /// authority here; any earlier existence check is advisory.
    pub async fn insert<'e, E>(
        id: &PullRequestId,
        name: &str,
        author_id: &UserId,
        executor: E,
    ) -> Result<Option<Self>>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as::<_, Self>(
            "INSERT INTO pull_requests (pull_request_id, pull_request_name, author_id, status)
             VALUES ($1, $2, $3, 'OPEN')
             ON CONFLICT (pull_request_id) DO NOTHING
             RETURNING *",
        )
        .bind(id)
        .bind(name)
        .bind(author_id)
        .fetch_optional(executor)
        .await
        .map_err(Into::into)
    }

    /// Mark pull request merged, but only if it is still open
    ///
    /// Compare-and-set on the status column: returns None when another writer
    /// merged it first (or the ID does not exist).
    pub async fn mark_merged_if_open<'e, E>(
        id: &PullRequestId,
        merged_at: DateTime<Utc>,
        executor: E,
    ) -> Result<Option<Self>>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as::<_, Self>(
            "UPDATE pull_requests
             SET status = 'MERGED', merged_at = $2
             WHERE pull_request_id = $1
               AND status = 'OPEN'
             RETURNING *",
        )
        .bind(id)
        .bind(merged_at)
        .fetch_optional(executor)
        .await
        .map_err(Into::into)
    }

    /// Find pull requests a user is assigned to review, newest first
    pub async fn find_by_reviewer<'e, E>(reviewer_id: &UserId, executor: E) -> Result<Vec<Self>>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as::<_, Self>(
            "SELECT pr.*
             FROM pull_requests pr
             JOIN pr_reviewers r ON r.pull_request_id = pr.pull_request_id
             WHERE r.reviewer_id = $1
             ORDER BY pr.created_at DESC, pr.pull_request_id",
        )
        .bind(reviewer_id)
        .fetch_all(executor)
        .await
        .map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_pull_request() -> PullRequest {
        PullRequest {
            pull_request_id: PullRequestId::new("PR-1"),
            pull_request_name: "Add search".to_string(),
            author_id: UserId::new("alice"),
            status: PullRequestStatus::Open,
            created_at: Utc::now(),
            merged_at: None,
        }
    }

    #[test]
    fn test_status_defaults_to_open() {
        assert_eq!(PullRequestStatus::default(), PullRequestStatus::Open);
    }

    #[test]
    fn test_status_serializes_uppercase() {
        assert_eq!(
            serde_json::to_string(&PullRequestStatus::Merged).unwrap(),
            "\"MERGED\""
        );
        assert_eq!(PullRequestStatus::Open.as_str(), "OPEN");
    }

    #[test]
    fn test_is_merged() {
        let mut pr = open_pull_request();
        assert!(!pr.is_merged());

        pr.status = PullRequestStatus::Merged;
        pr.merged_at = Some(Utc::now());
        assert!(pr.is_merged());
    }
}
