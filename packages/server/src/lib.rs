// Reviewer Assignment - core library
//
// Teams register their members, pull requests get reviewers drawn from the
// author's team, reviewers can be swapped while a pull request is open, and
// review load is reported per user and per pull request.
//
// Business logic lives in domains/*/activities; SQL in domains/*/models.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
