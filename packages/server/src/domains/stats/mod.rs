//! Stats domain - review load reporting

pub mod activities;
pub mod data;
pub mod models;

pub use data::StatsData;
