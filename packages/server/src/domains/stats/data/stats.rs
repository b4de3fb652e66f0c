use serde::{Deserialize, Serialize};

use crate::common::{PullRequestId, TeamName, UserId};
use crate::domains::stats::activities::ReviewStats;
use crate::domains::stats::models::{PullRequestReviewStats, UserReviewStats};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserStatsData {
    pub user_id: UserId,
    pub username: String,
    pub team_name: TeamName,
    pub review_count: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PullRequestStatsData {
    pub pull_request_id: PullRequestId,
    pub reviewer_count: i64,
}

/// `/stats` response body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsData {
    pub by_user: Vec<UserStatsData>,
    pub by_pr: Vec<PullRequestStatsData>,
}

impl From<UserReviewStats> for UserStatsData {
    fn from(row: UserReviewStats) -> Self {
        Self {
            user_id: row.user_id,
            username: row.username,
            team_name: row.team_name,
            review_count: row.review_count,
        }
    }
}

impl From<PullRequestReviewStats> for PullRequestStatsData {
    fn from(row: PullRequestReviewStats) -> Self {
        Self {
            pull_request_id: row.pull_request_id,
            reviewer_count: row.reviewer_count,
        }
    }
}

impl From<ReviewStats> for StatsData {
    fn from(stats: ReviewStats) -> Self {
        Self {
            by_user: stats.by_user.into_iter().map(Into::into).collect(),
            by_pr: stats.by_pull_request.into_iter().map(Into::into).collect(),
        }
    }
}
