//! Test fixtures for creating test data.
//!
//! Every test builds a `Fixture`, which suffixes all ids with a random tag so
//! tests sharing the database never collide. Within one fixture, ids keep the
//! alphabetical order of their names.

use anyhow::Result;
use reviewer_core::common::{PullRequestId, TeamName, UserId};
use reviewer_core::domains::pull_request::activities::{
    create_pull_request, CreatePullRequestInput, CreatedPullRequest,
};
use reviewer_core::domains::team::activities::{create_team, CreateTeamInput, TeamMemberInput};
use reviewer_core::domains::team::TeamWithMembers;
use reviewer_core::kernel::ServerDeps;
use uuid::Uuid;

pub struct Fixture {
    pub tag: String,
}

impl Fixture {
    pub fn new() -> Self {
        let mut tag = Uuid::new_v4().simple().to_string();
        tag.truncate(12);
        Self { tag }
    }

    pub fn user(&self, name: &str) -> UserId {
        UserId::new(format!("{}-{}", name, self.tag))
    }

    pub fn team(&self, name: &str) -> TeamName {
        TeamName::new(format!("{}-{}", name, self.tag))
    }

    pub fn pr(&self, name: &str) -> PullRequestId {
        PullRequestId::new(format!("{}-{}", name, self.tag))
    }

    /// Create team `name` with `(member, is_active)` pairs.
    pub async fn seed_team(
        &self,
        deps: &ServerDeps,
        name: &str,
        members: &[(&str, bool)],
    ) -> Result<TeamWithMembers> {
        let input = CreateTeamInput {
            team_name: self.team(name),
            members: members
                .iter()
                .map(|(member, is_active)| TeamMemberInput {
                    user_id: self.user(member),
                    username: member.to_string(),
                    is_active: *is_active,
                })
                .collect(),
        };

        Ok(create_team(input, deps).await?)
    }

    /// Open pull request `name` authored by `author`.
    pub async fn open_pr(
        &self,
        deps: &ServerDeps,
        name: &str,
        author: &str,
    ) -> Result<CreatedPullRequest> {
        let input = CreatePullRequestInput {
            pull_request_id: self.pr(name),
            pull_request_name: format!("{} title", name),
            author_id: self.user(author),
        };

        Ok(create_pull_request(input, deps).await?)
    }
}

/// Reviewer ids of a created pull request.
pub fn reviewer_ids(created: &CreatedPullRequest) -> Vec<UserId> {
    created.reviewers.iter().map(|u| u.user_id.clone()).collect()
}
