//! Create team activity

use tracing::{info, warn};

use crate::common::{ReviewError, TeamName, UserId};
use crate::domains::team::models::{Team, TeamWithMembers};
use crate::domains::user::models::User;
use crate::kernel::ServerDeps;

#[derive(Debug, Clone)]
pub struct TeamMemberInput {
    pub user_id: UserId,
    pub username: String,
    pub is_active: bool,
}

#[derive(Debug, Clone)]
pub struct CreateTeamInput {
    pub team_name: TeamName,
    pub members: Vec<TeamMemberInput>,
}

/// Create a team and upsert its members in one transaction.
///
/// Members that already exist elsewhere are moved into this team with the
/// supplied name and active flag. Fails with `TeamExists` if the name is taken.
pub async fn create_team(
    input: CreateTeamInput,
    deps: &ServerDeps,
) -> Result<TeamWithMembers, ReviewError> {
    let mut tx = deps.db_pool.begin().await?;

    let Some(team) = Team::insert(&input.team_name, &mut *tx).await? else {
        warn!(team_name = %input.team_name, "Team already exists");
        return Err(ReviewError::TeamExists(input.team_name.into_inner()));
    };

    for member in &input.members {
        User::upsert(
            &member.user_id,
            &member.username,
            &team.team_name,
            member.is_active,
            &mut *tx,
        )
        .await?;
    }

    let members = User::find_by_team(&team.team_name, &mut *tx).await?;

    tx.commit().await?;

    info!(
        team_name = %team.team_name,
        member_count = members.len(),
        "Team created"
    );

    Ok(TeamWithMembers { team, members })
}
