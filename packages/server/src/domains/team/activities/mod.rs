//! Team domain activities - business logic functions

mod create_team;
mod get_team;

pub use create_team::{create_team, CreateTeamInput, TeamMemberInput};
pub use get_team::get_team;
