//! Kernel module - server infrastructure and dependencies.

pub mod deps;
pub mod random;
pub mod test_dependencies;
pub mod traits;

pub use deps::ServerDeps;
pub use random::StdRandomSource;
pub use test_dependencies::{FirstIndicesRandom, LastIndicesRandom};
pub use traits::*;
