use crate::common::{ReviewError, TeamName};
use crate::domains::team::models::{Team, TeamWithMembers};
use crate::domains::user::models::User;
use crate::kernel::ServerDeps;

/// Load a team and all of its members, active or not.
pub async fn get_team(
    team_name: &TeamName,
    deps: &ServerDeps,
) -> Result<TeamWithMembers, ReviewError> {
    let team = Team::find_by_name(team_name, &deps.db_pool)
        .await?
        .ok_or_else(|| ReviewError::not_found("team", team_name.as_str()))?;

    let members = User::find_by_team(&team.team_name, &deps.db_pool).await?;

    Ok(TeamWithMembers { team, members })
}
