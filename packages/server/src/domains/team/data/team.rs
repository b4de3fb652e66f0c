use serde::{Deserialize, Serialize};

use crate::common::{TeamName, UserId};
use crate::domains::team::activities::{CreateTeamInput, TeamMemberInput};
use crate::domains::team::models::TeamWithMembers;
use crate::domains::user::models::User;

/// Team member as exposed by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMemberData {
    pub user_id: UserId,
    pub username: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

/// Team with its members
///
/// Used both as the `/team/add` request body and as the team response shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamData {
    pub team_name: TeamName,
    #[serde(default)]
    pub members: Vec<TeamMemberData>,
}

impl From<User> for TeamMemberData {
    fn from(user: User) -> Self {
        Self {
            user_id: user.user_id,
            username: user.username,
            is_active: user.is_active,
        }
    }
}

impl From<TeamWithMembers> for TeamData {
    fn from(team: TeamWithMembers) -> Self {
        Self {
            team_name: team.team.team_name,
            members: team.members.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<TeamData> for CreateTeamInput {
    fn from(data: TeamData) -> Self {
        Self {
            team_name: data.team_name,
            members: data
                .members
                .into_iter()
                .map(|m| TeamMemberInput {
                    user_id: m.user_id,
                    username: m.username,
                    is_active: m.is_active,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_defaults_to_active() {
        let data: TeamData = serde_json::from_str(
            r#"{"team_name":"backend","members":[{"user_id":"u1","username":"Alice"}]}"#,
        )
        .unwrap();
        assert!(data.members[0].is_active);

        let input = CreateTeamInput::from(data);
        assert_eq!(input.team_name, "backend");
        assert_eq!(input.members[0].user_id, "u1");
    }

    #[test]
    fn test_missing_members_is_empty_team() {
        let data: TeamData = serde_json::from_str(r#"{"team_name":"ops"}"#).unwrap();
        assert!(data.members.is_empty());
    }
}
