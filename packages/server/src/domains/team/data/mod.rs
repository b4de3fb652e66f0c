pub mod team;

pub use team::{TeamData, TeamMemberData};
