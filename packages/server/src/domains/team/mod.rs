//! Team domain - teams and their membership

pub mod activities;
pub mod data;
pub mod models;

pub use data::TeamData;
pub use models::{Team, TeamWithMembers};
