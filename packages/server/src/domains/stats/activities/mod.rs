//! Statistics activities - read-only reporting

mod get_stats;

pub use get_stats::{get_stats, ReviewStats};
