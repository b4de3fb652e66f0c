use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgExecutor;

use crate::common::TeamName;

/// Team model - SQL persistence layer
///
/// A team is identified by its name; there is no surrogate key.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct Team {
    pub team_name: TeamName,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Team {
    /// Find team by name
    pub async fn find_by_name<'e, E>(name: &TeamName, executor: E) -> Result<Option<Self>>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as::<_, Self>("SELECT * FROM teams WHERE team_name = $1")
            .bind(name)
            .fetch_optional(executor)
            .await
            .map_err(Into::into)
    }

    /// Insert a new team
    ///
    /// Returns None if a team with this name already exists. The primary key
    /// decides the race between concurrent inserts of the same name.
    pub async fn insert<'e, E>(name: &TeamName, executor: E) -> Result<Option<Self>>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as::<_, Self>(
            "INSERT INTO teams (team_name)
             VALUES ($1)
             ON CONFLICT (team_name) DO NOTHING
             RETURNING *",
        )
        .bind(name)
        .fetch_optional(executor)
        .await
        .map_err(Into::into)
    }
}

/// A team together with its stored members
#[derive(Debug, Clone)]
pub struct TeamWithMembers {
    pub team: Team,
    pub members: Vec<crate::domains::user::models::User>,
}
