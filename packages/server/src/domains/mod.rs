// Business domains
pub mod pull_request;
pub mod stats;
pub mod team;
pub mod user;
