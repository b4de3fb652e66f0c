//! User domain - team members and their availability for review

pub mod activities;
pub mod data;
pub mod models;

pub use data::UserData;
pub use models::User;
