use serde::{Deserialize, Serialize};

use crate::common::{TeamName, UserId};
use crate::domains::user::models::User;

/// User as exposed by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserData {
    pub user_id: UserId,
    pub username: String,
    pub team_name: TeamName,
    pub is_active: bool,
}

impl From<User> for UserData {
    fn from(user: User) -> Self {
        Self {
            user_id: user.user_id,
            username: user.username,
            team_name: user.team_name,
            is_active: user.is_active,
        }
    }
}
