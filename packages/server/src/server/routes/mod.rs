// HTTP routes
pub mod health;
pub mod pull_requests;
pub mod stats;
pub mod teams;
pub mod users;

pub use health::*;
pub use pull_requests::*;
pub use stats::*;
pub use teams::*;
pub use users::*;
