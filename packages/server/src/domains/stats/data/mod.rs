pub mod stats;

pub use stats::{PullRequestStatsData, StatsData, UserStatsData};
