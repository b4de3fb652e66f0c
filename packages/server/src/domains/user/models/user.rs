use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgExecutor;

use crate::common::{TeamName, UserId};

/// User model - SQL persistence layer
///
/// Users belong to exactly one team and are never hard-deleted; `is_active`
/// decides whether they can be picked as reviewers.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct User {
    pub user_id: UserId,
    pub username: String,
    pub team_name: TeamName,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Find user by ID
    pub async fn find_by_id<'e, E>(id: &UserId, executor: E) -> Result<Option<Self>>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as::<_, Self>("SELECT * FROM users WHERE user_id = $1")
            .bind(id)
            .fetch_optional(executor)
            .await
            .map_err(Into::into)
    }

    /// Find all members of a team, active or not
    pub async fn find_by_team<'e, E>(team_name: &TeamName, executor: E) -> Result<Vec<Self>>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as::<_, Self>("SELECT * FROM users WHERE team_name = $1 ORDER BY user_id")
            .bind(team_name)
            .fetch_all(executor)
            .await
            .map_err(Into::into)
    }

    /// Find active members of a team, leaving out the given users
    ///
    /// Ordered by user id so that selection over the result is reproducible
    /// under a seeded random source.
    pub async fn find_active_in_team_except<'e, E>(
        team_name: &TeamName,
        excluded: &[UserId],
        executor: E,
    ) -> Result<Vec<Self>>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as::<_, Self>(
            "SELECT *
             FROM users
             WHERE team_name = $1
               AND is_active = TRUE
               AND user_id <> ALL($2)
             ORDER BY user_id",
        )
        .bind(team_name)
        .bind(excluded)
        .fetch_all(executor)
        .await
        .map_err(Into::into)
    }

    /// Insert a user, or overwrite name, team and active flag of an existing one
    pub async fn upsert<'e, E>(
        id: &UserId,
        username: &str,
        team_name: &TeamName,
        is_active: bool,
        executor: E,
    ) -> Result<Self>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as::<_, Self>(
            "INSERT INTO users (user_id, username, team_name, is_active)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT (user_id) DO UPDATE
             SET username = EXCLUDED.username,
                 team_name = EXCLUDED.team_name,
                 is_active = EXCLUDED.is_active,
                 updated_at = NOW()
             RETURNING *",
        )
        .bind(id)
        .bind(username)
        .bind(team_name)
        .bind(is_active)
        .fetch_one(executor)
        .await
        .map_err(Into::into)
    }

    /// Update user active flag
    ///
    /// Returns None if the user does not exist.
    pub async fn set_active<'e, E>(id: &UserId, is_active: bool, executor: E) -> Result<Option<Self>>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as::<_, Self>(
            "UPDATE users
             SET is_active = $2, updated_at = NOW()
             WHERE user_id = $1
             RETURNING *",
        )
        .bind(id)
        .bind(is_active)
        .fetch_optional(executor)
        .await
        .map_err(Into::into)
    }
}
