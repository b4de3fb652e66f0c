pub mod review_stats;

pub use review_stats::{PullRequestReviewStats, UserReviewStats};
