//! User domain activities - business logic functions

mod get_user_reviews;
mod set_user_active;

pub use get_user_reviews::get_user_reviews;
pub use set_user_active::set_user_active;
